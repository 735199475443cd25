/*
 *  source/snapshot.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Offline source - events and tasks from a YAML file
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

//! A snapshot holds calendar items in the calendar API's own shape, so
//! they go through the same filtering as live data, plus already
//! resolved tasks:
//!
//! ```yaml
//! events:
//!   - summary: Standup
//!     start: { dateTime: "2025-03-01T09:00:00+00:00" }
//!     end: { dateTime: "2025-03-01T09:15:00+00:00" }
//! tasks:
//!   - id: "1"
//!     project: Home
//!     content: Renew passport
//!     due: 2025-03-01T00:00:00
//! ```

use chrono::{DateTime, Local};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::CalendarConfig;
use crate::model::{Interval, Task};
use crate::source::calendar::{CalendarItem, DisplayZone};
use crate::source::{EventSource, SourceError, TaskSource};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub events: Vec<CalendarItem>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Snapshot,
    email: Option<String>,
    lookback_hours: i64,
    lookahead_hours: i64,
    zone: DisplayZone,
}

impl SnapshotSource {
    pub fn new(snapshot: Snapshot, calendar: &CalendarConfig, zone: DisplayZone) -> Self {
        Self {
            snapshot,
            email: calendar.email.clone(),
            lookback_hours: calendar.lookback_hours,
            lookahead_hours: calendar.lookahead_hours,
            zone,
        }
    }

    pub fn from_file(
        path: &Path,
        calendar: &CalendarConfig,
        zone: DisplayZone,
    ) -> Result<Self, SourceError> {
        let raw = std::fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_yaml::from_str(&raw)?;
        info!(
            "snapshot {}: {} calendar items, {} tasks",
            path.display(),
            snapshot.events.len(),
            snapshot.tasks.len()
        );
        Ok(Self::new(snapshot, calendar, zone))
    }
}

impl EventSource for SnapshotSource {
    async fn events(&self, now: DateTime<Local>) -> Result<Vec<Interval>, SourceError> {
        self.zone.intervals(
            &self.snapshot.events,
            self.email.as_deref(),
            now,
            self.lookback_hours,
            self.lookahead_hours,
        )
    }
}

impl TaskSource for SnapshotSource {
    async fn tasks(&self, _now: DateTime<Local>) -> Result<Vec<Task>, SourceError> {
        let mut tasks = self.snapshot.tasks.clone();
        tasks.sort_by(|a, b| a.due.cmp(&b.due));
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, SecondsFormat};
    use std::io::Write;

    fn rfc(dt: DateTime<Local>) -> String {
        dt.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    #[tokio::test]
    async fn test_snapshot_from_yaml() {
        let now = Local::now();
        let yaml = format!(
            r#"
events:
  - summary: Review
    start: {{ dateTime: "{}" }}
    end: {{ dateTime: "{}" }}
  - summary: Last week
    start: {{ dateTime: "{}" }}
    end: {{ dateTime: "{}" }}
tasks:
  - id: "b"
    project: Work
    content: Second
    due: 2025-03-02T00:00:00
  - id: "a"
    project: Home
    section: Garden
    content: First
    due: 2025-03-01T00:00:00
"#,
            rfc(now + Duration::hours(1)),
            rfc(now + Duration::hours(2)),
            rfc(now - Duration::days(7)),
            rfc(now - Duration::days(7) + Duration::hours(1)),
        );
        let name = format!("inkdash-snapshot-{}.yaml", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::File::create(&path).unwrap().write_all(yaml.as_bytes()).unwrap();

        let calendar = CalendarConfig::default();
        let source = SnapshotSource::from_file(&path, &calendar, DisplayZone::Local).unwrap();
        let events = source.events(now).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].label, "Review");
        assert_eq!(events[0].duration_minutes(), 60);

        let tasks = source.tasks(now).await.unwrap();
        assert_eq!(tasks[0].id, "a");
        assert_eq!(tasks[0].section, "Garden");
        assert_eq!(tasks[1].section, "");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = SnapshotSource::from_file(
            Path::new("/nonexistent/inkdash.yaml"),
            &CalendarConfig::default(),
            DisplayZone::Local,
        );
        assert!(matches!(err, Err(SourceError::Io(_))));
    }
}
