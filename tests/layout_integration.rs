/*
 *  tests/layout_integration.rs
 *
 *  Integration tests for the layout engine and renderer
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 */

use chrono::{NaiveDate, NaiveDateTime};
use inkdash::layout::{
    group_overlaps, layout_tasks, layout_timeline, FixedAdvance, OverflowPolicy, TaskListConfig,
    TextFitter, TimelineConfig,
};
use inkdash::{DashboardRenderer, Interval, Task};

fn at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(h, m, 0).unwrap()
}

fn iv(h1: u32, m1: u32, h2: u32, m2: u32, label: &str) -> Interval {
    Interval::new(at(h1, m1), at(h2, m2), label)
}

fn timeline_800() -> TimelineConfig {
    TimelineConfig { width: 600.0, height: 800.0, ..TimelineConfig::default() }
}

fn fitter() -> TextFitter<FixedAdvance> {
    TextFitter::new(FixedAdvance::new(10.0))
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_three_way_overlap_splits_columns() {
    let events = vec![iv(9, 0, 10, 0, "A"), iv(9, 30, 10, 30, "B"), iv(9, 45, 11, 0, "C")];
    let layout = layout_timeline(&events, at(9, 0), &timeline_800(), &fitter()).unwrap();

    // grid starts at 8:00, 100px per hour, usable width 596 in three columns
    assert_eq!(layout.grid.start_hour, 8);
    assert_eq!(layout.events.len(), 3);
    let xs: Vec<f32> = layout.events.iter().map(|b| b.frame.x).collect();
    assert!(close(xs[0], 2.0));
    assert!(close(xs[1], 2.0 + 596.0 / 3.0));
    assert!(close(xs[2], 2.0 + 2.0 * 596.0 / 3.0));
    assert!(close(layout.events[0].frame.y, 100.0));
    assert!(close(layout.events[0].frame.height, 100.0));
    assert!(close(layout.events[1].frame.y, 150.0));
    assert!(close(layout.events[2].frame.height, 125.0));
}

#[test]
fn test_back_to_back_events_stay_full_width() {
    let events = vec![iv(9, 0, 10, 0, "A"), iv(10, 0, 11, 0, "B")];
    let groups = group_overlaps(events.iter().cloned(), 3);
    assert_eq!(groups.len(), 2);

    let layout = layout_timeline(&events, at(9, 0), &timeline_800(), &fitter()).unwrap();
    for block in &layout.events {
        assert_eq!(block.columns, 1);
        assert!(close(block.frame.width, 596.0));
    }
}

#[test]
fn test_fifth_event_wraps_to_first_column() {
    let events = vec![
        iv(9, 0, 13, 0, "A"),
        iv(9, 10, 13, 0, "B"),
        iv(9, 20, 13, 0, "C"),
        iv(9, 30, 13, 0, "D"),
        iv(9, 40, 13, 0, "E"),
    ];
    let layout = layout_timeline(&events, at(9, 0), &timeline_800(), &fitter()).unwrap();
    let cols: Vec<usize> = layout.events.iter().map(|b| b.column).collect();
    assert_eq!(cols, vec![0, 1, 2, 0, 1]);
    assert!(layout.events.iter().all(|b| b.columns == 3));
}

#[test]
fn test_clip_keeps_boxes_inside_panel() {
    let events = vec![iv(14, 0, 18, 0, "Long afternoon"), iv(20, 0, 21, 0, "Evening")];
    let config = timeline_800();
    let layout = layout_timeline(&events, at(9, 0), &config, &fitter()).unwrap();
    assert_eq!(layout.events.len(), 1);
    assert!(layout.events[0].frame.bottom() <= 800.0 + 1e-3);

    let loose = TimelineConfig { overflow: OverflowPolicy::Overflow, ..config };
    let layout = layout_timeline(&events, at(9, 0), &loose, &fitter()).unwrap();
    assert_eq!(layout.events.len(), 2);
    assert!(layout.events[0].frame.bottom() > 800.0);
}

#[test]
fn test_labels_fit_their_boxes() {
    let events = vec![
        iv(9, 0, 10, 0, "Quarterly planning with the whole department"),
        iv(9, 30, 10, 30, "B"),
    ];
    let layout = layout_timeline(&events, at(9, 0), &timeline_800(), &fitter()).unwrap();
    let block = &layout.events[0];
    assert!(close(block.frame.width, 298.0));
    assert!(block.label.len() as f32 * 10.0 <= block.frame.width);
    assert!(block.label.ends_with("..."));
}

#[test]
fn test_task_rows_stack_by_index() {
    let tasks: Vec<Task> = (0..4)
        .map(|i| Task {
            id: i.to_string(),
            project: "Home".into(),
            section: String::new(),
            content: format!("Task {}", i),
            due: at(8, 0),
        })
        .collect();
    let config = TaskListConfig { height: 750.0, ..TaskListConfig::default() };
    let layout = layout_tasks(&tasks, &config, &fitter()).unwrap();
    assert!(close(layout.row_height, 50.0));
    for (i, row) in layout.rows.iter().enumerate() {
        assert!(close(row.frame.y, 50.0 * i as f32));
        assert!(row.divider.x1 > row.content_box.x && row.divider.x1 < row.project_box.x);
    }
    assert_eq!(layout.rows[2].project_label, "Home - Mar 1");
}

#[test]
fn test_dashboard_png() {
    let renderer = DashboardRenderer::default();
    let events = vec![iv(9, 0, 10, 0, "Standup"), iv(9, 30, 10, 30, "Review")];
    let tasks = vec![Task {
        id: "1".into(),
        project: "Work".into(),
        section: String::new(),
        content: "Write report".into(),
        due: at(0, 0),
    }];
    let png = renderer.render_png(&events, &tasks, at(9, 15)).unwrap();
    let pixmap = tiny_skia::Pixmap::decode_png(&png).unwrap();
    assert_eq!((pixmap.width(), pixmap.height()), (1200, 825));
}
