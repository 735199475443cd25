/*
 *  source/calendar.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Calendar items: filtering into intervals, and the Google Calendar client
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

use chrono::{DateTime, Duration, Local, NaiveDateTime, SecondsFormat, TimeZone};
use chrono_tz::Tz;
use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::CalendarConfig;
use crate::model::{sort_intervals, Interval};
use crate::source::{EventSource, SourceError};

const CALENDAR_API: &str = "https://www.googleapis.com/calendar/v3";
const DECLINED: &str = "declined";
const WORKING_LOCATION: &str = "workingLocation";

/// Start or end of a calendar item. All-day items carry only `date`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub response_status: Option<String>,
}

/// A calendar entry as the calendar API returns it (the fields we use).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarItem {
    #[serde(default)]
    pub summary: String,
    pub start: EventTime,
    pub end: EventTime,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

impl CalendarItem {
    fn declined_by(&self, email: &str) -> bool {
        self.attendees
            .iter()
            .any(|a| a.email == email && a.response_status.as_deref() == Some(DECLINED))
    }
}

/// Time range fetched around "now".
#[derive(Debug, Clone)]
pub struct EventWindow<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> EventWindow<Tz> {
    pub fn around(now: DateTime<Tz>, lookback_hours: i64, lookahead_hours: i64) -> Self {
        Self {
            start: now.clone() - Duration::hours(lookback_hours),
            end: now + Duration::hours(lookahead_hours),
        }
    }
}

fn parse_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Result<DateTime<Tz>, SourceError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(tz))
        .map_err(|source| SourceError::Time { value: value.to_string(), source })
}

/// Turn raw calendar items into start-ordered intervals in `tz` wall time.
///
/// Drops items declined by `email`, working-location markers, all-day
/// items (no `dateTime`) and anything outside `window`.
pub fn items_to_intervals<Tz: TimeZone>(
    items: &[CalendarItem],
    email: Option<&str>,
    window: &EventWindow<Tz>,
    tz: &Tz,
) -> Result<Vec<Interval>, SourceError> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if email.is_some_and(|e| item.declined_by(e)) {
            debug!("skipping declined '{}'", item.summary);
            continue;
        }
        if item.event_type.as_deref() == Some(WORKING_LOCATION) {
            continue;
        }
        let (Some(start), Some(end)) =
            (item.start.date_time.as_deref(), item.end.date_time.as_deref())
        else {
            debug!("skipping all-day '{}'", item.summary);
            continue;
        };
        let start = parse_in(start, tz)?;
        let end = parse_in(end, tz)?;
        if end <= window.start || start >= window.end {
            continue;
        }
        out.push(Interval::new(start.naive_local(), end.naive_local(), item.summary.clone()));
    }
    sort_intervals(&mut out);
    Ok(out)
}

/// Zone whose wall clock the timeline shows: the host's, or a named one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Named(Tz),
}

impl DisplayZone {
    /// Wall-clock reading of `instant` in this zone.
    pub fn wall_clock(&self, instant: DateTime<Local>) -> NaiveDateTime {
        match self {
            DisplayZone::Local => instant.naive_local(),
            DisplayZone::Named(tz) => instant.with_timezone(tz).naive_local(),
        }
    }

    /// [`items_to_intervals`] over the window around `now`, in this zone.
    pub fn intervals(
        &self,
        items: &[CalendarItem],
        email: Option<&str>,
        now: DateTime<Local>,
        lookback_hours: i64,
        lookahead_hours: i64,
    ) -> Result<Vec<Interval>, SourceError> {
        match self {
            DisplayZone::Local => {
                let window = EventWindow::around(now, lookback_hours, lookahead_hours);
                items_to_intervals(items, email, &window, &Local)
            }
            DisplayZone::Named(tz) => {
                let now = now.with_timezone(tz);
                let window = EventWindow::around(now, lookback_hours, lookahead_hours);
                items_to_intervals(items, email, &window, tz)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct StoredToken {
    access_token: String,
}

/// Read the access token from a saved OAuth token JSON file.
pub fn read_access_token(path: &Path) -> Result<String, SourceError> {
    let raw = std::fs::read_to_string(path)?;
    let token: StoredToken = serde_json::from_str(&raw)?;
    if token.access_token.is_empty() {
        return Err(SourceError::MissingCredential(format!(
            "no access_token in {}",
            path.display()
        )));
    }
    Ok(token.access_token)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventsPage {
    #[serde(default)]
    items: Vec<CalendarItem>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// Google Calendar events via the REST API, authorized with a stored
/// access token. Obtaining and refreshing that token happens elsewhere.
#[derive(Debug, Clone)]
pub struct GoogleCalendar {
    client: Client,
    base_url: String,
    token_file: PathBuf,
    calendar_id: String,
    email: Option<String>,
    lookback_hours: i64,
    lookahead_hours: i64,
    zone: DisplayZone,
}

impl GoogleCalendar {
    pub fn new(config: &CalendarConfig, zone: DisplayZone) -> Result<Self, SourceError> {
        let token_file = config
            .token_file
            .clone()
            .ok_or_else(|| {
                SourceError::MissingCredential("calendar token_file not configured".into())
            })?;
        Ok(Self {
            client: Client::builder().timeout(std::time::Duration::from_secs(30)).build()?,
            base_url: CALENDAR_API.to_string(),
            token_file,
            calendar_id: config.calendar_id.clone(),
            email: config.email.clone(),
            lookback_hours: config.lookback_hours,
            lookahead_hours: config.lookahead_hours,
            zone,
        })
    }

    async fn fetch_items(
        &self,
        window: &EventWindow<Local>,
    ) -> Result<Vec<CalendarItem>, SourceError> {
        let token = read_access_token(&self.token_file)?;
        let url = format!("{}/calendars/{}/events", self.base_url, self.calendar_id);
        let time_min = window.start.to_rfc3339_opts(SecondsFormat::Secs, false);
        let time_max = window.end.to_rfc3339_opts(SecondsFormat::Secs, false);

        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut query = vec![
                ("timeMin", time_min.clone()),
                ("timeMax", time_max.clone()),
                ("showDeleted", "false".to_string()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ];
            if let Some(t) = page_token.take() {
                query.push(("pageToken", t));
            }
            let page: EventsPage = self
                .client
                .get(&url)
                .bearer_auth(&token)
                .query(&query)
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            items.extend(page.items);
            match page.next_page_token {
                Some(t) if !t.is_empty() => page_token = Some(t),
                _ => break,
            }
        }
        Ok(items)
    }
}

impl EventSource for GoogleCalendar {
    async fn events(&self, now: DateTime<Local>) -> Result<Vec<Interval>, SourceError> {
        let window = EventWindow::around(now, self.lookback_hours, self.lookahead_hours);
        let items = self.fetch_items(&window).await?;
        let events = self.zone.intervals(
            &items,
            self.email.as_deref(),
            now,
            self.lookback_hours,
            self.lookahead_hours,
        )?;
        info!("events retrieved: {} of {} calendar items", events.len(), items.len());
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, Utc};

    fn timed(summary: &str, start: &str, end: &str) -> CalendarItem {
        CalendarItem {
            summary: summary.into(),
            start: EventTime { date_time: Some(start.into()), date: None },
            end: EventTime { date_time: Some(end.into()), date: None },
            event_type: None,
            attendees: vec![],
        }
    }

    fn declining(email: &str) -> Attendee {
        Attendee { email: email.into(), response_status: Some("declined".into()) }
    }

    fn window() -> EventWindow<Utc> {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        EventWindow::around(now, 6, 9)
    }

    fn naive(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_filters_and_orders() {
        let mut declined = timed("Declined", "2025-03-01T11:00:00Z", "2025-03-01T12:00:00Z");
        declined.attendees.push(declining("me@example.com"));
        let mut declined_by_other =
            timed("Declined by other", "2025-03-01T11:00:00Z", "2025-03-01T11:30:00Z");
        declined_by_other.attendees.push(declining("you@example.com"));
        let mut office = timed("Office", "2025-03-01T08:00:00Z", "2025-03-01T17:00:00Z");
        office.event_type = Some("workingLocation".into());
        let all_day = CalendarItem {
            summary: "Holiday".into(),
            start: EventTime { date_time: None, date: Some("2025-03-01".into()) },
            end: EventTime { date_time: None, date: Some("2025-03-02".into()) },
            event_type: None,
            attendees: vec![],
        };
        let items = vec![
            timed("Late", "2025-03-01T13:00:00Z", "2025-03-01T14:00:00Z"),
            declined,
            declined_by_other,
            office,
            all_day,
            // offset is converted into the target zone
            timed("Early", "2025-03-01T10:00:00+01:00", "2025-03-01T10:30:00+01:00"),
            timed("Too late", "2025-03-02T02:00:00Z", "2025-03-02T03:00:00Z"),
        ];
        let out = items_to_intervals(&items, Some("me@example.com"), &window(), &Utc).unwrap();
        let labels: Vec<&str> = out.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Early", "Declined by other", "Late"]);
        assert_eq!(out[0].start, naive(9, 0));
        assert_eq!(out[0].end, naive(9, 30));
    }

    #[test]
    fn test_event_straddling_window_start_is_kept() {
        let items = vec![timed("Overnight", "2025-03-01T03:00:00Z", "2025-03-01T05:00:00Z")];
        let out = items_to_intervals(&items, None, &window(), &Utc).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_bad_timestamp_is_an_error() {
        let items = vec![timed("Broken", "tomorrow-ish", "2025-03-01T05:00:00Z")];
        assert!(matches!(
            items_to_intervals(&items, None, &window(), &Utc),
            Err(SourceError::Time { .. })
        ));
    }

    #[test]
    fn test_named_zone_sets_wall_clock_hour() {
        let zone = DisplayZone::Named(chrono_tz::America::New_York);
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 14, 0, 0).unwrap().with_timezone(&Local);
        // New York is on EST (UTC-5) until 9 March 2025
        assert_eq!(zone.wall_clock(now), naive(9, 0));

        let items = vec![timed("Sync", "2025-03-01T15:00:00Z", "2025-03-01T15:45:00Z")];
        let out = zone.intervals(&items, None, now, 6, 9).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].start, naive(10, 0));
        assert_eq!(out[0].end, naive(10, 45));
    }

    #[test]
    fn test_events_page_decodes_api_json() {
        let json = r#"{
            "items": [{
                "summary": "Standup",
                "eventType": "default",
                "start": {"dateTime": "2025-03-01T09:00:00Z"},
                "end": {"dateTime": "2025-03-01T09:15:00Z"},
                "attendees": [{"email": "me@example.com", "responseStatus": "accepted"}]
            }],
            "nextPageToken": "abc"
        }"#;
        let page: EventsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].attendees[0].response_status.as_deref(), Some("accepted"));
        assert_eq!(page.next_page_token.as_deref(), Some("abc"));
    }
}
