/*
 *  layout/timeline.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Hour grid, event boxes and the "now" marker for the calendar panel
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
use log::debug;
use serde::{Deserialize, Serialize};

use crate::layout::error::LayoutError;
use crate::layout::fitter::{TextFitter, TextMeasure};
use crate::layout::geometry::{Grid, LayoutBox, LineSegment};
use crate::layout::grouping::{group_overlaps, DEFAULT_MAX_COLUMNS};
use crate::model::Interval;

/// What to do with event boxes that run off the bottom of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Cut boxes at the canvas edge, drop boxes entirely outside it
    #[default]
    Clip,
    /// Keep the raw geometry; the backend draws past the last row
    Overflow,
}

/// Timeline panel geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineConfig {
    /// Panel width in pixels
    pub width: f32,

    /// Panel height in pixels
    pub height: f32,

    /// Number of hour rows in the grid
    pub hours: u32,

    /// Rows shown before the current hour
    pub lead_hours: u32,

    /// Horizontal inset of the grid and event columns
    pub margin: f32,

    /// Side-by-side columns before overlapping events start sharing
    pub max_columns: usize,

    pub overflow: OverflowPolicy,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 825.0,
            hours: 8,
            lead_hours: 1,
            margin: 2.0,
            max_columns: DEFAULT_MAX_COLUMNS,
            overflow: OverflowPolicy::Clip,
        }
    }
}

impl TimelineConfig {
    pub fn grid(&self, now: NaiveDateTime) -> Grid {
        Grid::anchored(self.width, self.height, self.hours, now, self.lead_hours)
    }

    /// Width available to event columns.
    pub fn usable_width(&self) -> f32 {
        (self.width - 2.0 * self.margin).max(0.0)
    }
}

/// One hour row of the background grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HourRow {
    pub frame: LayoutBox,
    pub label: String,
}

/// A placed, labelled event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBlock {
    pub frame: LayoutBox,
    pub label: String,
    pub column: usize,
    pub columns: usize,
}

/// Everything the backend needs to draw the calendar panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub grid: Grid,
    pub hour_rows: Vec<HourRow>,
    pub now_marker: Option<LineSegment>,
    pub events: Vec<EventBlock>,
}

/// Raw box for an event in `column` of a `columns`-wide group.
///
/// Width and x-step both divide the usable width by the capped column
/// count, so columns tile the grid exactly.
pub fn event_box(
    grid: &Grid,
    margin: f32,
    interval: &Interval,
    column: usize,
    columns: usize,
) -> LayoutBox {
    let columns = columns.max(1);
    let usable = (grid.width - 2.0 * margin).max(0.0);
    let width = usable / columns as f32;
    LayoutBox::new(
        margin + column as f32 * width,
        grid.time_to_y(interval.start),
        width,
        grid.minutes_to_height(interval.duration_minutes()),
    )
}

/// Full-width marker at the current time.
pub fn now_marker(grid: &Grid, now: NaiveDateTime) -> LineSegment {
    let y = grid.time_to_y(now);
    LineSegment::new(0.0, y, grid.width, y)
}

/// Lay out the calendar panel. `events` must be sorted by start.
pub fn layout_timeline<M: TextMeasure>(
    events: &[Interval],
    now: NaiveDateTime,
    config: &TimelineConfig,
    fitter: &TextFitter<M>,
) -> Result<TimelineLayout, LayoutError> {
    let grid = config.grid(now);
    let bounds = grid.bounds();

    let hour_rows = grid
        .rows()
        .map(|(hour, y)| HourRow {
            frame: LayoutBox::new(config.margin, y, config.usable_width(), grid.hour_height()),
            label: format!("{}:00", hour),
        })
        .collect();

    let marker = now_marker(&grid, now);
    let now_marker = match config.overflow {
        OverflowPolicy::Clip if marker.y1 > grid.height => None,
        _ => Some(marker),
    };

    let groups = group_overlaps(events.iter().cloned(), config.max_columns);
    debug!("{} events in {} overlap groups", events.len(), groups.len());

    let mut blocks = Vec::with_capacity(events.len());
    for group in &groups {
        let columns = group.column_count();
        for (column, interval) in group.columns() {
            let raw = event_box(&grid, config.margin, interval, column, columns);
            let frame = match config.overflow {
                OverflowPolicy::Overflow => raw,
                OverflowPolicy::Clip => match raw.clip_to(&bounds) {
                    Some(clipped) => clipped,
                    None => {
                        debug!("'{}' falls outside the grid, skipped", interval.label);
                        continue;
                    }
                },
            };
            let label = fitter.fit(&interval.label, frame.width)?;
            blocks.push(EventBlock { frame, label, column, columns });
        }
    }

    Ok(TimelineLayout { grid, hour_rows, now_marker, events: blocks })
}
