/*
 *  draw.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Drawing primitives shared by the panel renderers
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
    prelude::*,
    primitives::{Line, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

pub fn draw_line<D, C>(
    target: &mut D,
    start: Point,
    end: Point,
    color: C,
    width: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    Line::new(start, end)
        .into_styled(PrimitiveStyleBuilder::new().stroke_width(width).stroke_color(color).build())
        .draw(target)
}

/// Dashed straight line; `dash` pixels on, `gap` pixels off, starting with
/// a dash at `start`.
pub fn draw_dashed_line<D, C>(
    target: &mut D,
    start: Point,
    end: Point,
    dash: u32,
    gap: u32,
    color: C,
    width: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    let delta = end - start;
    let length = ((delta.x * delta.x + delta.y * delta.y) as f32).sqrt();
    if length == 0.0 || dash == 0 {
        return draw_line(target, start, end, color, width);
    }
    let (ux, uy) = (delta.x as f32 / length, delta.y as f32 / length);
    let at = |d: f32| {
        Point::new(start.x + (ux * d).round() as i32, start.y + (uy * d).round() as i32)
    };

    let period = (dash + gap) as f32;
    let mut d = 0.0;
    while d < length {
        let stop = (d + dash as f32).min(length);
        draw_line(target, at(d), at(stop), color, width)?;
        d += period;
    }
    Ok(())
}

/// Rounded rectangle with an optional fill and an optional border. The
/// border is drawn inside `rect`.
pub fn draw_rounded_rect<D, C>(
    target: &mut D,
    rect: Rectangle,
    radius: u32,
    fill: Option<C>,
    border: Option<(C, u32)>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    let mut style = PrimitiveStyleBuilder::new().stroke_alignment(StrokeAlignment::Inside);
    if let Some(fill) = fill {
        style = style.fill_color(fill);
    }
    if let Some((color, width)) = border {
        style = style.stroke_color(color).stroke_width(width);
    }
    RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
        .into_styled(style.build())
        .draw(target)?;
    Ok(())
}

/// Single line of text positioned by an anchor point.
pub fn draw_text_anchored<D, C>(
    target: &mut D,
    text: &str,
    anchor: Point,
    font: &MonoFont,
    color: C,
    align: Alignment,
    baseline: Baseline,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    if text.is_empty() {
        return Ok(());
    }
    let character_style = MonoTextStyle::new(font, color);
    let text_style = TextStyleBuilder::new().alignment(align).baseline(baseline).build();
    Text::with_text_style(text, anchor, character_style, text_style).draw(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vframebuf::VarFrameBuf;
    use embedded_graphics::pixelcolor::{Gray8, GrayColor};

    #[test]
    fn test_dashed_line_leaves_gaps() {
        let mut fb = VarFrameBuf::new(40, 3, Gray8::WHITE);
        let (start, end) = (Point::new(0, 1), Point::new(39, 1));
        draw_dashed_line(&mut fb, start, end, 10, 7, Gray8::BLACK, 1).unwrap();
        assert_eq!(fb.pixel(Point::new(0, 1)), Some(Gray8::BLACK));
        assert_eq!(fb.pixel(Point::new(9, 1)), Some(Gray8::BLACK));
        assert_eq!(fb.pixel(Point::new(13, 1)), Some(Gray8::WHITE));
        assert_eq!(fb.pixel(Point::new(18, 1)), Some(Gray8::BLACK));
    }

    #[test]
    fn test_rounded_rect_fill_and_border() {
        let mut fb = VarFrameBuf::new(20, 20, Gray8::WHITE);
        let rect = Rectangle::new(Point::new(0, 0), Size::new(20, 20));
        let border = Some((Gray8::BLACK, 1));
        draw_rounded_rect(&mut fb, rect, 3, Some(Gray8::new(200)), border).unwrap();
        assert_eq!(fb.pixel(Point::new(10, 10)), Some(Gray8::new(200)));
        assert_eq!(fb.pixel(Point::new(10, 0)), Some(Gray8::BLACK));
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let mut fb = VarFrameBuf::new(20, 20, Gray8::WHITE);
        draw_text_anchored(
            &mut fb,
            "",
            Point::new(10, 10),
            &embedded_graphics::mono_font::ascii::FONT_6X10,
            Gray8::BLACK,
            Alignment::Center,
            Baseline::Middle,
        )
        .unwrap();
        assert!(fb.as_slice().iter().all(|&p| p == Gray8::WHITE));
    }
}
