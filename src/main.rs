/*
 *  main.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Fetch tasks and events, render the dashboard PNG, repeat on request
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

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use std::path::Path;
use std::time::Duration;
use tokio::signal::unix::{signal, SignalKind};

use inkdash::config::{self, Cli, OutputConfig};
use inkdash::dashboard::DashboardRenderer;
use inkdash::source::{
    DisplayZone, EventSource, GoogleCalendar, SnapshotSource, TaskSource, Todoist,
};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Waits for SIGINT, SIGTERM or SIGHUP and logs which one arrived.
async fn signal_handler() -> std::io::Result<()> {
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sighup = signal(SignalKind::hangup())?;

    tokio::select! {
        _ = sigint.recv() => {
            info!("SIGINT received. Initiating graceful shutdown.");
        }
        _ = sigterm.recv() => {
            info!("SIGTERM received. Initiating graceful shutdown.");
        }
        _ = sighup.recv() => {
            info!("SIGHUP received. Initiating graceful shutdown.");
        }
    }
    Ok(())
}

/// Write through a sibling temp file so readers never see half a PNG.
async fn write_png(path: &Path, png: &[u8]) -> std::io::Result<()> {
    let tmp = path.with_extension("png.tmp");
    tokio::fs::write(&tmp, png).await?;
    tokio::fs::rename(&tmp, path).await
}

async fn render_once<E: EventSource, T: TaskSource>(
    renderer: &DashboardRenderer,
    zone: DisplayZone,
    events: &E,
    tasks: &T,
    output: &Path,
) -> anyhow::Result<()> {
    let now = Local::now();
    let wall_clock = zone.wall_clock(now);
    let tasks = tasks.tasks(now).await.context("error getting tasks")?;
    let events = events.events(now).await.context("error getting calendar events")?;
    info!("{} tasks, {} events at {}", tasks.len(), events.len(), wall_clock.format("%H:%M"));

    let png = renderer
        .render_png(&events, &tasks, wall_clock)
        .context("error rendering dashboard")?;
    write_png(output, &png)
        .await
        .with_context(|| format!("error writing {}", output.display()))?;
    info!("dashboard written to {} ({} bytes)", output.display(), png.len());
    Ok(())
}

async fn run<E: EventSource, T: TaskSource>(
    renderer: &DashboardRenderer,
    zone: DisplayZone,
    events: &E,
    tasks: &T,
    output: &OutputConfig,
) -> anyhow::Result<()> {
    let Some(mins) = output.interval_mins else {
        return render_once(renderer, zone, events, tasks, &output.path).await;
    };

    info!("refreshing every {} minutes", mins);
    let mut ticker = tokio::time::interval(Duration::from_secs(mins * 60));
    tokio::select! {
        res = signal_handler() => {
            res.context("error installing signal handlers")?;
        }
        _ = async {
            loop {
                ticker.tick().await;
                // a failed pass keeps the previous image; try again next tick
                if let Err(e) = render_once(renderer, zone, events, tasks, &output.path).await {
                    error!("{:#}", e);
                }
            }
        } => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load(&cli).context("error loading configuration")?;

    if cli.dump_config {
        print!("{}", config::dump(&config)?);
        return Ok(());
    }

    let level = config.log_level.clone().unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();

    info!("{} - the day at a glance", env!("CARGO_PKG_NAME"));
    info!("v.{} built {}", env!("CARGO_PKG_VERSION"), BUILD_DATE);

    let renderer = DashboardRenderer::from_config(&config);
    let zone = config.calendar.display_zone()?;

    if let Some(path) = &config.snapshot {
        info!("using snapshot {}", path.display());
        let source = SnapshotSource::from_file(path, &config.calendar, zone)
            .context("error loading snapshot")?;
        run(&renderer, zone, &source, &source, &config.output).await
    } else {
        let calendar =
            GoogleCalendar::new(&config.calendar, zone).context("error setting up calendar")?;
        let todoist = Todoist::from_config(&config).context("error setting up todoist")?;
        run(&renderer, zone, &calendar, &todoist, &config.output).await
    }
}
