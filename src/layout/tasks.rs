/*
 *  layout/tasks.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Fixed-height task rows split into content and project columns
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

use crate::layout::error::LayoutError;
use crate::layout::fitter::{TextFitter, TextMeasure};
use crate::layout::geometry::{LayoutBox, LineSegment};
use crate::model::Task;

/// Task panel geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskListConfig {
    /// Panel width in pixels
    pub width: f32,

    /// Panel height in pixels
    pub height: f32,

    /// Row count; the panel height is split evenly between them
    pub max_rows: usize,

    /// Share of the text width given to the task content
    pub content_fraction: f32,

    /// Inset of the row frames from the panel edge
    pub margin: f32,

    /// Padding between a row frame and its text
    pub inner_margin: f32,
}

impl Default for TaskListConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 825.0,
            max_rows: 15,
            content_fraction: 0.70,
            margin: 2.0,
            inner_margin: 3.0,
        }
    }
}

impl TaskListConfig {
    pub fn row_height(&self) -> f32 {
        self.height / self.max_rows.max(1) as f32
    }
}

/// One placed task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub task_id: String,
    pub frame: LayoutBox,
    pub content_box: LayoutBox,
    pub project_box: LayoutBox,
    pub divider: LineSegment,
    pub content_label: String,
    pub project_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskListLayout {
    pub row_height: f32,
    pub rows: Vec<TaskRow>,
}

/// `"<project> - <Mon D>"`, e.g. `"Home - Mar 7"`.
pub fn project_text(task: &Task) -> String {
    format!("{} - {}", task.project, task.due.format("%b %-d"))
}

/// Lay out up to `max_rows` tasks, in the order given.
pub fn layout_tasks<M: TextMeasure>(
    tasks: &[Task],
    config: &TaskListConfig,
    fitter: &TextFitter<M>,
) -> Result<TaskListLayout, LayoutError> {
    let row_height = config.row_height();
    let row_width = (config.width - 2.0 * config.margin).max(0.0);
    let text_width = (row_width - 2.0 * config.inner_margin).max(0.0);
    let content_width = text_width * config.content_fraction;
    let project_width = text_width - content_width;

    let content_x = config.margin + config.inner_margin;
    let divider_x = content_x + content_width;
    let project_x = divider_x + config.inner_margin;

    let mut rows = Vec::with_capacity(tasks.len().min(config.max_rows));
    for (i, task) in tasks.iter().take(config.max_rows).enumerate() {
        let y = i as f32 * row_height;
        rows.push(TaskRow {
            task_id: task.id.clone(),
            frame: LayoutBox::new(config.margin, y, row_width, row_height),
            content_box: LayoutBox::new(content_x, y, content_width, row_height),
            project_box: LayoutBox::new(project_x, y, project_width, row_height),
            divider: LineSegment::new(divider_x, y, divider_x, y + row_height),
            content_label: fitter.fit(&task.content, content_width)?,
            project_label: fitter.fit(&project_text(task), project_width)?,
        });
    }

    Ok(TaskListLayout { row_height, rows })
}
