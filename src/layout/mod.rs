/*
 *  layout/mod.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Layout engine - decides where things go, never draws
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

pub mod error;
pub mod fitter;
pub mod geometry;
pub mod grouping;
pub mod tasks;
pub mod timeline;

// Re-exports for convenience
pub use error::LayoutError;
pub use fitter::{FixedAdvance, TextFitter, TextMeasure, DEFAULT_ELLIPSIS};
pub use geometry::{Grid, LayoutBox, LineSegment};
pub use grouping::{group_overlaps, GroupAccumulator, OverlapGroup, DEFAULT_MAX_COLUMNS};
pub use tasks::{layout_tasks, project_text, TaskListConfig, TaskListLayout, TaskRow};
pub use timeline::{
    event_box, layout_timeline, now_marker, EventBlock, HourRow, OverflowPolicy, TimelineConfig,
    TimelineLayout,
};
