/*
 *  config.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Layered configuration: defaults, then YAML, then command line
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

use crate::constants::*;
use crate::layout::{OverflowPolicy, DEFAULT_ELLIPSIS, DEFAULT_MAX_COLUMNS};
use crate::source::DisplayZone;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration. Every group has defaults, so a YAML file
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// e.g. "info" | "debug"
    pub log_level: Option<String>,
    pub canvas: CanvasConfig,
    pub tasks: TasksConfig,
    pub calendar: CalendarConfig,
    pub todoist: TodoistConfig,
    /// Render from this YAML snapshot instead of the network sources
    pub snapshot: Option<PathBuf>,
    pub output: OutputConfig,
}

/// Panel geometry shared by the timeline and the task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width of each panel; the image is twice as wide
    pub panel_width: u32,
    pub height: u32,
    /// Hour rows on the timeline
    pub hours: u32,
    /// Hour rows shown before the current hour
    pub lead_hours: u32,
    pub margin: f32,
    pub inner_margin: f32,
    pub corner_radius: u32,
    /// Side-by-side columns for overlapping events
    pub max_columns: usize,
    pub overflow: OverflowPolicy,
    pub ellipsis: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            panel_width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
            hours: GRID_HOURS,
            lead_hours: LEAD_HOURS,
            margin: OUTSIDE_MARGIN,
            inner_margin: INSIDE_MARGIN,
            corner_radius: CORNER_RADIUS,
            max_columns: DEFAULT_MAX_COLUMNS,
            overflow: OverflowPolicy::Clip,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    pub max_rows: usize,
    pub content_fraction: f32,
    /// Todoist filter query
    pub filter: String,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            max_rows: MAX_TASK_ROWS,
            content_fraction: TASK_CONTENT_FRACTION,
            filter: "(today | overdue)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Attendee address whose "declined" responses hide an event
    pub email: Option<String>,
    /// JSON file holding an OAuth access token
    pub token_file: Option<PathBuf>,
    pub calendar_id: String,
    pub lookback_hours: i64,
    pub lookahead_hours: i64,
    /// IANA zone events are shown in, e.g. "Europe/London"; host zone when unset
    pub time_zone: Option<String>,
}

impl CalendarConfig {
    /// Resolve `time_zone` to the zone the timeline is drawn in.
    pub fn display_zone(&self) -> Result<DisplayZone, ConfigError> {
        match self.time_zone.as_deref() {
            None => Ok(DisplayZone::Local),
            Some(name) => name
                .parse::<chrono_tz::Tz>()
                .map(DisplayZone::Named)
                .map_err(|_| ConfigError::Validation(format!("unknown time zone '{}'", name))),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            email: None,
            token_file: None,
            calendar_id: "primary".to_string(),
            lookback_hours: 6,
            lookahead_hours: 9,
            time_zone: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TodoistConfig {
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the PNG is written
    pub path: PathBuf,
    /// Re-render every N minutes; a single pass when unset
    pub interval_mins: Option<u64>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("dash.png"), interval_mins: None }
    }
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone, Default)]
#[command(name = "inkdash", version, about = "Calendar and task dashboard for e-ink panels")]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    /// Enable debug log level
    #[arg(short = 'v', long, alias = "verbose", action = ArgAction::SetTrue)]
    pub debug: bool,
    #[arg(long)]
    pub log_level: Option<String>,
    /// Render from a YAML snapshot of events and tasks
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub snapshot: Option<PathBuf>,
    /// PNG output path
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    #[arg(long)]
    pub panel_width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    #[arg(long)]
    pub hours: Option<u32>,
    #[arg(long)]
    pub max_rows: Option<usize>,
    #[arg(long)]
    pub max_columns: Option<usize>,
    /// Re-render every N minutes until interrupted
    #[arg(long)]
    pub interval_mins: Option<u64>,
    /// Todoist API token
    #[arg(long, env = "TODOIST_TOKEN", hide_env_values = true)]
    pub todoist_token: Option<String>,
    #[arg(long)]
    pub todoist_filter: Option<String>,
    /// Google Calendar email address
    #[arg(long)]
    pub gcal_email: Option<String>,
    /// Google Calendar access token file
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub gcal_token_file: Option<PathBuf>,
    /// Show events in this IANA time zone instead of the host's
    #[arg(long)]
    pub time_zone: Option<String>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: read YAML, merge CLI, validate.
pub fn load(cli: &Cli) -> Result<Config, ConfigError> {
    // 1) defaults come from serde(default) on every group
    // 2) YAML file (explicit path or search)
    let mut cfg = if let Some(p) = cli.config.as_ref() {
        if !p.exists() {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
        read_yaml(p)?
    } else if let Some(p) = find_config_file() {
        read_yaml(&p)?
    } else {
        Config::default()
    };

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, cli);

    // 4) Validate
    validate(&cfg)?;
    Ok(cfg)
}

/// Pretty YAML of the effective config (nice for debugging)
pub fn dump(cfg: &Config) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(cfg)?)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/inkdash/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/inkdash/config.yaml");
        if p.exists() {
            return Some(p);
        }
        let p = home.join(".config/inkdash.yaml");
        if p.exists() {
            return Some(p);
        }
    }
    // project local
    for candidate in &["inkdash.yaml", "config.yaml", "config/inkdash.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() {
            return Some(p);
        }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.debug {
        cfg.log_level = Some("debug".into());
    }
    if cli.log_level.is_some() {
        cfg.log_level = cli.log_level.clone();
    }
    if cli.snapshot.is_some() {
        cfg.snapshot = cli.snapshot.clone();
    }
    if let Some(p) = &cli.output {
        cfg.output.path = p.clone();
    }
    if cli.interval_mins.is_some() {
        cfg.output.interval_mins = cli.interval_mins;
    }
    if let Some(w) = cli.panel_width {
        cfg.canvas.panel_width = w;
    }
    if let Some(h) = cli.height {
        cfg.canvas.height = h;
    }
    if let Some(h) = cli.hours {
        cfg.canvas.hours = h;
    }
    if let Some(c) = cli.max_columns {
        cfg.canvas.max_columns = c;
    }
    if let Some(r) = cli.max_rows {
        cfg.tasks.max_rows = r;
    }
    if let Some(f) = &cli.todoist_filter {
        cfg.tasks.filter = f.clone();
    }
    if cli.todoist_token.is_some() {
        cfg.todoist.token = cli.todoist_token.clone();
    }
    if cli.gcal_email.is_some() {
        cfg.calendar.email = cli.gcal_email.clone();
    }
    if cli.gcal_token_file.is_some() {
        cfg.calendar.token_file = cli.gcal_token_file.clone();
    }
    if cli.time_zone.is_some() {
        cfg.calendar.time_zone = cli.time_zone.clone();
    }
}

/// Put any invariants here (required fields, ranges, etc.)
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    let canvas = &cfg.canvas;
    if canvas.panel_width == 0 || canvas.height == 0 {
        return Err(ConfigError::Validation("canvas panel_width/height must be > 0".into()));
    }
    if canvas.hours == 0 || canvas.hours > 24 {
        return Err(ConfigError::Validation("canvas hours must be 1..=24".into()));
    }
    if canvas.lead_hours >= canvas.hours {
        return Err(ConfigError::Validation("canvas lead_hours must be below hours".into()));
    }
    if canvas.max_columns == 0 {
        return Err(ConfigError::Validation("canvas max_columns must be > 0".into()));
    }
    if canvas.margin < 0.0 || canvas.inner_margin < 0.0 {
        return Err(ConfigError::Validation("canvas margins must not be negative".into()));
    }
    if cfg.tasks.max_rows == 0 {
        return Err(ConfigError::Validation("tasks max_rows must be > 0".into()));
    }
    let f = cfg.tasks.content_fraction;
    if !(f > 0.0 && f < 1.0) {
        return Err(ConfigError::Validation("tasks content_fraction must be in (0, 1)".into()));
    }
    if cfg.calendar.lookback_hours < 0 || cfg.calendar.lookahead_hours < 0 {
        return Err(ConfigError::Validation(
            "calendar lookback/lookahead must not be negative".into(),
        ));
    }
    cfg.calendar.display_zone()?;
    if cfg.output.interval_mins == Some(0) {
        return Err(ConfigError::Validation("output interval_mins must be > 0".into()));
    }
    Ok(())
}
