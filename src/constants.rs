/*
 *  constants.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Panel sizes, strokes and shades for the default 1200x825 panel
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

use embedded_graphics::mono_font::{ascii, MonoFont};

/// Width of each of the two panels; the composed image is twice this.
pub const PANEL_WIDTH: u32 = 600;
/// Height shared by both panels and the composed image.
pub const PANEL_HEIGHT: u32 = 825;

/// Hour rows on the timeline.
pub const GRID_HOURS: u32 = 8;
/// Hour rows shown before the current one.
pub const LEAD_HOURS: u32 = 1;

/// Task rows; extra tasks are dropped.
pub const MAX_TASK_ROWS: usize = 15;
/// Share of the task row text width used for the task content.
pub const TASK_CONTENT_FRACTION: f32 = 0.70;

/// Inset of row frames and event columns from the panel edge.
pub const OUTSIDE_MARGIN: f32 = 2.0;
/// Padding between a row frame and its text.
pub const INSIDE_MARGIN: f32 = 3.0;
/// Corner radius of row frames and event boxes.
pub const CORNER_RADIUS: u32 = 5;

/// Stroke of row frames and the task divider.
pub const LINE_WIDTH: u32 = 2;
/// Stroke of event box borders.
pub const EVENT_LINE_WIDTH: u32 = 1;
/// Stroke of the "now" marker.
pub const NOW_LINE_WIDTH: u32 = 3;
/// Dash pattern of the "now" marker, on then off.
pub const NOW_DASH: (u32, u32) = (10, 7);

/// Event box background, a light grey that survives e-ink dithering.
pub const EVENT_FILL_LUMA: u8 = 196;

/// Event and task labels.
pub const LABEL_FONT: MonoFont<'static> = ascii::FONT_10X20;
/// Hour labels on the grid.
pub const HOUR_FONT: MonoFont<'static> = ascii::FONT_9X18_BOLD;
