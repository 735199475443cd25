/*
 *  dashboard.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  One render pass: layout, draw, compose
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

use chrono::NaiveDateTime;
use embedded_graphics::pixelcolor::Gray8;
use log::{debug, info};

use crate::config::Config;
use crate::display::{
    compose_horizontal, draw_task_list, draw_timeline, encode_png, MonoMeasurer, RenderError, Theme,
};
use crate::layout::{
    layout_tasks, layout_timeline, TaskListConfig, TextFitter, TimelineConfig, DEFAULT_ELLIPSIS,
};
use crate::model::{prepare_tasks, Interval, Task};
use crate::vframebuf::VarFrameBuf;

/// Renders the task panel (left) and the calendar panel (right).
///
/// Holds configuration only. Every call builds its own grouping and
/// layout state, so one renderer can serve overlapping requests.
#[derive(Clone)]
pub struct DashboardRenderer {
    pub timeline: TimelineConfig,
    pub tasks: TaskListConfig,
    pub theme: Theme,
    pub ellipsis: String,
}

impl Default for DashboardRenderer {
    fn default() -> Self {
        Self {
            timeline: TimelineConfig::default(),
            tasks: TaskListConfig::default(),
            theme: Theme::default(),
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

impl DashboardRenderer {
    pub fn from_config(config: &Config) -> Self {
        let canvas = &config.canvas;
        let theme = Theme { corner_radius: canvas.corner_radius, ..Theme::default() };
        Self {
            timeline: TimelineConfig {
                width: canvas.panel_width as f32,
                height: canvas.height as f32,
                hours: canvas.hours,
                lead_hours: canvas.lead_hours,
                margin: canvas.margin,
                max_columns: canvas.max_columns,
                overflow: canvas.overflow,
            },
            tasks: TaskListConfig {
                width: canvas.panel_width as f32,
                height: canvas.height as f32,
                max_rows: config.tasks.max_rows,
                content_fraction: config.tasks.content_fraction,
                margin: canvas.margin,
                inner_margin: canvas.inner_margin,
            },
            theme,
            ellipsis: canvas.ellipsis.clone(),
        }
    }

    fn fitter(&self) -> TextFitter<MonoMeasurer<'_>> {
        TextFitter::with_ellipsis(MonoMeasurer::new(&self.theme.label_font), self.ellipsis.as_str())
    }

    /// Calendar panel. `events` must be sorted by start.
    pub fn render_timeline(
        &self,
        events: &[Interval],
        now: NaiveDateTime,
    ) -> Result<VarFrameBuf<Gray8>, RenderError> {
        let layout = layout_timeline(events, now, &self.timeline, &self.fitter())?;
        debug!(
            "timeline: {} boxes, now marker {:?}",
            layout.events.len(),
            layout.now_marker.map(|m| m.y1)
        );
        let mut panel = self.blank(self.timeline.width, self.timeline.height);
        draw_timeline(&mut panel, &layout, &self.theme)?;
        Ok(panel)
    }

    /// Task panel. Tasks are sorted by due date and capped here.
    pub fn render_tasks(&self, tasks: &[Task]) -> Result<VarFrameBuf<Gray8>, RenderError> {
        let tasks = prepare_tasks(tasks.to_vec(), self.tasks.max_rows);
        let layout = layout_tasks(&tasks, &self.tasks, &self.fitter())?;
        let mut panel = self.blank(self.tasks.width, self.tasks.height);
        draw_task_list(&mut panel, &layout, &self.theme)?;
        Ok(panel)
    }

    /// Full dashboard image.
    pub fn render(
        &self,
        events: &[Interval],
        tasks: &[Task],
        now: NaiveDateTime,
    ) -> Result<VarFrameBuf<Gray8>, RenderError> {
        let task_panel = self.render_tasks(tasks)?;
        info!("tasks image generated");
        let calendar_panel = self.render_timeline(events, now)?;
        info!("events image generated");
        let merged = compose_horizontal(&task_panel, &calendar_panel)?;
        info!("images merged ({}x{})", merged.width(), merged.height());
        Ok(merged)
    }

    pub fn render_png(
        &self,
        events: &[Interval],
        tasks: &[Task],
        now: NaiveDateTime,
    ) -> Result<Vec<u8>, RenderError> {
        encode_png(&self.render(events, tasks, now)?)
    }

    fn blank(&self, width: f32, height: f32) -> VarFrameBuf<Gray8> {
        VarFrameBuf::new(width as u32, height as u32, self.theme.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use embedded_graphics::pixelcolor::GrayColor;
    use embedded_graphics::prelude::Point;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_dashboard_size() {
        let r = DashboardRenderer::default();
        let img = r.render(&[], &[], at(9, 0)).unwrap();
        assert_eq!((img.width(), img.height()), (1200, 825));
    }

    #[test]
    fn test_event_box_is_filled() {
        let r = DashboardRenderer::default();
        let events = vec![Interval::new(at(10, 0), at(11, 0), "Review")];
        let img = r.render(&events, &[], at(9, 0)).unwrap();
        // grid starts at 8:00, 103.125px per hour; box spans y 206..309 in the right panel
        let inside = img.pixel(Point::new(600 + 30, 290)).unwrap();
        assert_eq!(inside, r.theme.event_fill);
        let empty_left = img.pixel(Point::new(300, 400)).unwrap();
        assert_eq!(empty_left, Gray8::WHITE);
    }
}
