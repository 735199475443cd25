/*
 *  layout/geometry.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Boxes, line segments and the hour grid time-to-pixel mapping
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

use chrono::{NaiveDateTime, Timelike};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Pixel rectangle handed to the drawing backend.
///
/// Kept in fractional pixels so the layout math stays exact; rounding
/// happens once, in [`LayoutBox::to_rectangle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains(&self, other: &LayoutBox) -> bool {
        const EPS: f32 = 1e-3;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.bottom() <= self.bottom() + EPS
    }

    /// Intersect with `bounds`. Returns `None` when nothing of the box is
    /// left; a zero-height box on a visible row is kept.
    pub fn clip_to(&self, bounds: &LayoutBox) -> Option<LayoutBox> {
        let x0 = self.x.max(bounds.x);
        let y0 = self.y.max(bounds.y);
        let x1 = self.right().min(bounds.right());
        let y1 = self.bottom().min(bounds.bottom());
        if x1 < x0 || y1 < y0 || y0 >= bounds.bottom() {
            return None;
        }
        Some(LayoutBox::new(x0, y0, x1 - x0, y1 - y0))
    }

    /// Snap to whole pixels. Both edges are rounded, so adjacent boxes
    /// still share an edge after snapping.
    pub fn to_rectangle(&self) -> Rectangle {
        let x0 = self.x.round() as i32;
        let y0 = self.y.round() as i32;
        let x1 = self.right().round() as i32;
        let y1 = self.bottom().round() as i32;
        Rectangle::new(
            Point::new(x0, y0),
            Size::new((x1 - x0).max(0) as u32, (y1 - y0).max(0) as u32),
        )
    }
}

/// Straight line between two points, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LineSegment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1.round() as i32, self.y1.round() as i32)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2.round() as i32, self.y2.round() as i32)
    }
}

/// The timeline canvas split into `hours` equal rows, the first of which
/// is `start_hour`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub width: f32,
    pub height: f32,
    pub hours: u32,
    pub start_hour: u32,
}

impl Grid {
    pub fn new(width: f32, height: f32, hours: u32, start_hour: u32) -> Self {
        Self { width, height, hours: hours.max(1), start_hour: start_hour % 24 }
    }

    /// Grid whose first row is `lead_hours` before the hour of `now`.
    pub fn anchored(
        width: f32,
        height: f32,
        hours: u32,
        now: NaiveDateTime,
        lead_hours: u32,
    ) -> Self {
        let start_hour = (now.hour() + 24 - lead_hours % 24) % 24;
        Self::new(width, height, hours, start_hour)
    }

    pub fn hour_height(&self) -> f32 {
        self.height / self.hours as f32
    }

    pub fn bounds(&self) -> LayoutBox {
        LayoutBox::new(0.0, 0.0, self.width, self.height)
    }

    /// Rows from the grid start, wrapping past midnight.
    pub fn hour_offset(&self, hour: u32) -> u32 {
        (hour + 24 - self.start_hour) % 24
    }

    /// Vertical pixel position of a wall-clock time. Events and the "now"
    /// marker both go through here.
    pub fn time_to_y(&self, t: NaiveDateTime) -> f32 {
        let hh = self.hour_height();
        self.hour_offset(t.hour()) as f32 * hh + t.minute() as f32 / 60.0 * hh
    }

    /// Pixel height of a span of minutes.
    pub fn minutes_to_height(&self, minutes: i64) -> f32 {
        minutes.max(0) as f32 / 60.0 * self.hour_height()
    }

    /// `(hour of day, top y)` for every grid row.
    pub fn rows(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        let hh = self.hour_height();
        (0..self.hours).map(move |i| ((self.start_hour + i) % 24, i as f32 * hh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_time_to_y() {
        let grid = Grid::new(600.0, 800.0, 8, 9);
        assert_eq!(grid.hour_height(), 100.0);
        assert_eq!(grid.time_to_y(at(9, 0)), 0.0);
        assert_eq!(grid.time_to_y(at(10, 30)), 150.0);
    }

    #[test]
    fn test_grid_wraps_past_midnight() {
        let grid = Grid::anchored(600.0, 800.0, 8, at(0, 20), 1);
        assert_eq!(grid.start_hour, 23);
        assert_eq!(grid.time_to_y(at(0, 0)), 100.0);
        let hours: Vec<u32> = grid.rows().map(|(h, _)| h).collect();
        assert_eq!(hours, vec![23, 0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_clip() {
        let bounds = LayoutBox::new(0.0, 0.0, 100.0, 100.0);
        let tall = LayoutBox::new(10.0, 80.0, 20.0, 50.0);
        assert_eq!(tall.clip_to(&bounds), Some(LayoutBox::new(10.0, 80.0, 20.0, 20.0)));
        let below = LayoutBox::new(10.0, 150.0, 20.0, 50.0);
        assert_eq!(below.clip_to(&bounds), None);
    }

    #[test]
    fn test_snapped_rectangles_share_edges() {
        let third = 596.0 / 3.0;
        let a = LayoutBox::new(2.0, 0.0, third, 10.0).to_rectangle();
        let b = LayoutBox::new(2.0 + third, 0.0, third, 10.0).to_rectangle();
        assert_eq!(a.top_left.x + a.size.width as i32, b.top_left.x);
    }
}
