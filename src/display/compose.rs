/*
 *  display/compose.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Join the two panels side by side and encode the result as PNG
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

use embedded_graphics::pixelcolor::{Gray8, GrayColor};
use embedded_graphics::prelude::Point;

use crate::display::error::RenderError;
use crate::vframebuf::VarFrameBuf;

/// Place `left` at the origin and `right` immediately after it, both
/// top-aligned. No scaling, no gap.
pub fn compose_horizontal(
    left: &VarFrameBuf<Gray8>,
    right: &VarFrameBuf<Gray8>,
) -> Result<VarFrameBuf<Gray8>, RenderError> {
    if left.height() != right.height() {
        return Err(RenderError::HeightMismatch {
            left: left.height() as u32,
            right: right.height() as u32,
        });
    }
    let width = (left.width() + right.width()) as u32;
    let mut out = VarFrameBuf::new(width, left.height() as u32, Gray8::WHITE);
    out.blit(left, Point::zero());
    out.blit(right, Point::new(left.width() as i32, 0));
    Ok(out)
}

/// Encode a grayscale framebuffer as an opaque PNG.
pub fn encode_png(image: &VarFrameBuf<Gray8>) -> Result<Vec<u8>, RenderError> {
    let (width, height) = (image.width() as u32, image.height() as u32);
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(RenderError::EmptyCanvas { width, height })?;

    for (rgba, px) in pixmap.data_mut().chunks_exact_mut(4).zip(image.as_slice()) {
        let l = px.luma();
        rgba.copy_from_slice(&[l, l, l, 0xff]);
    }

    pixmap.encode_png().map_err(|e| RenderError::Encode(e.to_string()))
}
