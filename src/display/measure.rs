/*
 *  display/measure.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Text measurement backed by embedded-graphics mono fonts
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

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::{Gray8, GrayColor},
    prelude::*,
    text::{renderer::TextRenderer, Baseline},
};

use crate::layout::{LayoutError, TextMeasure};

/// Measures strings the way the renderer will draw them.
#[derive(Debug, Clone, Copy)]
pub struct MonoMeasurer<'a> {
    style: MonoTextStyle<'a, Gray8>,
}

impl<'a> MonoMeasurer<'a> {
    pub fn new(font: &'a MonoFont<'a>) -> Self {
        Self { style: MonoTextStyle::new(font, Gray8::BLACK) }
    }
}

impl TextMeasure for MonoMeasurer<'_> {
    fn measure(&self, text: &str) -> Result<f32, LayoutError> {
        if self.style.font.character_size.width == 0 {
            return Err(LayoutError::Measure("font has no glyph metrics".into()));
        }
        let metrics = self.style.measure_string(text, Point::zero(), Baseline::Top);
        Ok(metrics.bounding_box.size.width as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_10X20;

    #[test]
    fn test_mono_width() {
        let m = MonoMeasurer::new(&FONT_10X20);
        assert_eq!(m.measure("").unwrap(), 0.0);
        assert_eq!(m.measure("Standup").unwrap(), 70.0);
    }
}
