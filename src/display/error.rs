/*
 *  display/error.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Error type for rendering, composing and encoding the dashboard
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

use std::convert::Infallible;
use thiserror::Error;

use crate::layout::LayoutError;

/// Anything that stops a render pass. No partial image is produced.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Layout failed, usually text measurement
    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),

    /// Panels handed to the composer disagree on height
    #[error("panel height mismatch: left {left}px, right {right}px")]
    HeightMismatch { left: u32, right: u32 },

    /// Zero-sized canvas cannot be encoded
    #[error("cannot encode an empty {width}x{height} image")]
    EmptyCanvas { width: u32, height: u32 },

    /// PNG encoder failure
    #[error("image encoding failed: {0}")]
    Encode(String),
}

// the in-memory framebuffer never fails to draw
impl From<Infallible> for RenderError {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}
