/*
 *  model.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Render-pass data: calendar intervals and tasks
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

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A labelled calendar event in local wall-clock time.
///
/// `start <= end` is the caller's job; the layout engine does not check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub label: String,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, label: impl Into<String>) -> Self {
        Self { start, end, label: label.into() }
    }

    /// Duration in whole minutes, never negative.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes().max(0)
    }

    /// Half-open overlap test, touching intervals do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A to-do item with project and section names already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub project: String,
    #[serde(default)]
    pub section: String,
    pub content: String,
    pub due: NaiveDateTime,
}

/// Sort by due date (stable, so equal dates keep source order) and drop
/// everything past `max_rows`.
pub fn prepare_tasks(mut tasks: Vec<Task>, max_rows: usize) -> Vec<Task> {
    tasks.sort_by(|a, b| a.due.cmp(&b.due));
    if tasks.len() > max_rows {
        log::warn!("dropping {} tasks past the {} row limit", tasks.len() - max_rows, max_rows);
        tasks.truncate(max_rows);
    }
    tasks
}

/// Sort events ascending by start, the ordering the overlap grouper expects.
pub fn sort_intervals(intervals: &mut [Interval]) {
    intervals.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn task(id: usize, due: NaiveDateTime) -> Task {
        Task {
            id: id.to_string(),
            project: "Inbox".into(),
            section: String::new(),
            content: format!("task {id}"),
            due,
        }
    }

    #[test]
    fn test_duration_and_overlap() {
        let a = Interval::new(at(1, 9, 0), at(1, 10, 0), "a");
        let b = Interval::new(at(1, 10, 0), at(1, 11, 0), "b");
        let c = Interval::new(at(1, 9, 30), at(1, 10, 30), "c");
        assert_eq!(a.duration_minutes(), 60);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn test_reversed_interval_has_no_duration() {
        let bad = Interval::new(at(1, 10, 0), at(1, 9, 0), "bad");
        assert_eq!(bad.duration_minutes(), 0);
    }

    #[test]
    fn test_prepare_tasks_sorts_and_caps() {
        let tasks: Vec<Task> = (0..20).rev().map(|i| task(i, at(1 + i as u32, 0, 0))).collect();
        let out = prepare_tasks(tasks, 15);
        assert_eq!(out.len(), 15);
        assert_eq!(out[0].id, "0");
        assert_eq!(out[14].id, "14");
        assert!(out.windows(2).all(|w| w[0].due <= w[1].due));
    }

    #[test]
    fn test_prepare_tasks_keeps_source_order_on_ties() {
        let due = at(2, 0, 0);
        let out = prepare_tasks(vec![task(7, due), task(3, due)], 15);
        assert_eq!(out[0].id, "7");
        assert_eq!(out[1].id, "3");
    }
}
