/*
 *  display/panels.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Draw laid-out timeline and task list panels into framebuffers
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
    pixelcolor::Gray8,
    prelude::*,
    text::{Alignment, Baseline},
};

use crate::display::theme::Theme;
use crate::draw::{draw_dashed_line, draw_line, draw_rounded_rect, draw_text_anchored};
use crate::layout::{LayoutBox, TaskListLayout, TimelineLayout};

fn point(x: f32, y: f32) -> Point {
    Point::new(x.round() as i32, y.round() as i32)
}

/// Calendar panel: hour rows with labels, event boxes, then the dashed
/// "now" marker on top.
pub fn draw_timeline<D>(
    target: &mut D,
    layout: &TimelineLayout,
    theme: &Theme,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray8>,
{
    target.clear(theme.background)?;

    for row in &layout.hour_rows {
        draw_rounded_rect(
            target,
            row.frame.to_rectangle(),
            theme.corner_radius,
            None,
            Some((theme.ink, theme.line_width)),
        )?;
        // label hangs from the top-left corner of its row
        draw_text_anchored(
            target,
            &row.label,
            point(0.0, row.frame.y),
            &theme.hour_font,
            theme.ink,
            Alignment::Left,
            Baseline::Top,
        )?;
    }

    for block in &layout.events {
        draw_rounded_rect(
            target,
            block.frame.to_rectangle(),
            theme.corner_radius,
            Some(theme.event_fill),
            Some((theme.ink, theme.event_line_width)),
        )?;
        let (cx, cy) = block.frame.center();
        draw_text_anchored(
            target,
            &block.label,
            point(cx, cy),
            &theme.label_font,
            theme.ink,
            Alignment::Center,
            Baseline::Middle,
        )?;
    }

    if let Some(marker) = layout.now_marker {
        let (dash, gap) = theme.now_dash;
        draw_dashed_line(
            target,
            marker.start(),
            marker.end(),
            dash,
            gap,
            theme.ink,
            theme.now_line_width,
        )?;
    }

    Ok(())
}

/// Task panel: one framed row per task, content left of the divider and
/// project/date right of it.
pub fn draw_task_list<D>(
    target: &mut D,
    layout: &TaskListLayout,
    theme: &Theme,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray8>,
{
    target.clear(theme.background)?;

    for row in &layout.rows {
        draw_rounded_rect(
            target,
            row.frame.to_rectangle(),
            theme.corner_radius,
            None,
            Some((theme.ink, theme.line_width)),
        )?;
        draw_left_middle(target, &row.content_label, &row.content_box, theme)?;
        draw_line(target, row.divider.start(), row.divider.end(), theme.ink, theme.line_width)?;
        draw_left_middle(target, &row.project_label, &row.project_box, theme)?;
    }

    Ok(())
}

fn draw_left_middle<D>(
    target: &mut D,
    text: &str,
    region: &LayoutBox,
    theme: &Theme,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Gray8>,
{
    draw_text_anchored(
        target,
        text,
        point(region.x, region.y + region.height / 2.0),
        &theme.label_font,
        theme.ink,
        Alignment::Left,
        Baseline::Middle,
    )
}
