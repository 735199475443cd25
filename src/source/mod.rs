/*
 *  source/mod.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Where events and tasks come from
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

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::model::{Interval, Task};

pub mod calendar;
pub mod snapshot;
pub mod todoist;

pub use calendar::{CalendarItem, DisplayZone, EventWindow, GoogleCalendar};
pub use snapshot::{Snapshot, SnapshotSource};
pub use todoist::Todoist;

/// Failures fetching or decoding source data. Retries, if any, are the
/// caller's business.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad timestamp '{value}': {source}")]
    Time {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("missing credential: {0}")]
    MissingCredential(String),
}

/// Calendar events for the window around `now`, sorted by start, with
/// declined, all-day and working-location items already removed.
#[allow(async_fn_in_trait)]
pub trait EventSource {
    async fn events(&self, now: DateTime<Local>) -> Result<Vec<Interval>, SourceError>;
}

/// Tasks with project and section names resolved, sorted by due date.
#[allow(async_fn_in_trait)]
pub trait TaskSource {
    async fn tasks(&self, now: DateTime<Local>) -> Result<Vec<Task>, SourceError>;
}
