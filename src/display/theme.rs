/*
 *  display/theme.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Fonts, strokes and shades used by the panel renderers
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

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::{Gray8, GrayColor};

use crate::constants::*;

/// Visual parameters shared by both panels.
#[derive(Clone)]
pub struct Theme {
    pub label_font: MonoFont<'static>,
    pub hour_font: MonoFont<'static>,
    pub background: Gray8,
    pub ink: Gray8,
    pub event_fill: Gray8,
    pub corner_radius: u32,
    pub line_width: u32,
    pub event_line_width: u32,
    pub now_line_width: u32,
    pub now_dash: (u32, u32),
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            label_font: LABEL_FONT,
            hour_font: HOUR_FONT,
            background: Gray8::WHITE,
            ink: Gray8::BLACK,
            event_fill: Gray8::new(EVENT_FILL_LUMA),
            corner_radius: CORNER_RADIUS,
            line_width: LINE_WIDTH,
            event_line_width: EVENT_LINE_WIDTH,
            now_line_width: NOW_LINE_WIDTH,
            now_dash: NOW_DASH,
        }
    }
}
