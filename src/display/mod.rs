/*
 *  display/mod.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Drawing backend - turns layouts into pixels and pixels into PNG
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

pub mod compose;
pub mod error;
pub mod measure;
pub mod panels;
pub mod theme;

// Re-exports for convenience
pub use compose::{compose_horizontal, encode_png};
pub use error::RenderError;
pub use measure::MonoMeasurer;
pub use panels::{draw_task_list, draw_timeline};
pub use theme::Theme;
