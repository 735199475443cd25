/*
 *  layout/error.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Error type for the layout engine
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

use thiserror::Error;

/// Failures that abort a layout pass.
///
/// Capacity overflow (too many tasks, too many overlapping events) is not an
/// error; it is truncated or approximated by the layouts themselves.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The text measurement capability could not size a string
    #[error("text measurement failed: {0}")]
    Measure(String),
}
