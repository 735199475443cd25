/*
 *  layout/grouping.rs
 *
 *  InkDash - the day at a glance
 *  (c) 2020-26 Stuart Hunter
 *
 *  Cluster overlapping calendar events into side-by-side column groups
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
use log::debug;

use crate::model::Interval;

/// Default number of side-by-side columns a group may use.
pub const DEFAULT_MAX_COLUMNS: usize = 3;

/// A run of events chained together by overlap, drawn as one block of
/// columns.
///
/// Members are kept in start order. Member `m` is drawn in column
/// `m % max_columns`, so groups larger than the cap share columns.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapGroup {
    members: Vec<Interval>,
    tail: NaiveDateTime,
    max_columns: usize,
}

impl OverlapGroup {
    fn open(first: Interval, max_columns: usize) -> Self {
        let tail = first.end;
        Self { members: vec![first], tail, max_columns }
    }

    fn push(&mut self, interval: Interval) {
        self.tail = self.tail.max(interval.end);
        self.members.push(interval);
    }

    pub fn members(&self) -> &[Interval] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Latest end time among the members.
    pub fn tail(&self) -> NaiveDateTime {
        self.tail
    }

    /// Columns the group is drawn with: member count, capped.
    pub fn column_count(&self) -> usize {
        self.members.len().min(self.max_columns)
    }

    pub fn column_of(&self, member: usize) -> usize {
        member % self.max_columns
    }

    /// `(column, interval)` for each member, in start order.
    pub fn columns(&self) -> impl Iterator<Item = (usize, &Interval)> + '_ {
        self.members.iter().enumerate().map(move |(m, iv)| (self.column_of(m), iv))
    }
}

/// Running state of one grouping pass.
///
/// The open group's tail is the running maximum of its members' end
/// times. Input arrives sorted by start, so once an event starts at or
/// after that tail no later event can reach back into the group. At most
/// one group is therefore open; everything before it is final.
#[derive(Debug)]
pub struct GroupAccumulator {
    closed: Vec<OverlapGroup>,
    open: Option<OverlapGroup>,
    max_columns: usize,
}

impl GroupAccumulator {
    pub fn new(max_columns: usize) -> Self {
        Self { closed: Vec::new(), open: None, max_columns: max_columns.max(1) }
    }

    /// Add the next event in start order.
    pub fn push(&mut self, interval: Interval) {
        match self.open.as_mut() {
            // touching (tail == start) does not count as overlap
            Some(group) if group.tail > interval.start => group.push(interval),
            _ => {
                let fresh = OverlapGroup::open(interval, self.max_columns);
                if let Some(done) = self.open.replace(fresh) {
                    debug!("closing overlap group of {} at {}", done.len(), done.tail);
                    self.closed.push(done);
                }
            }
        }
    }

    pub fn finish(mut self) -> Vec<OverlapGroup> {
        if let Some(done) = self.open.take() {
            self.closed.push(done);
        }
        self.closed
    }
}

/// Group a start-ordered event list. Unsorted input gives an unspecified
/// (but still total) grouping.
pub fn group_overlaps<I>(intervals: I, max_columns: usize) -> Vec<OverlapGroup>
where
    I: IntoIterator<Item = Interval>,
{
    let mut acc = GroupAccumulator::new(max_columns);
    for interval in intervals {
        acc.push(interval);
    }
    acc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn iv(h1: u32, m1: u32, h2: u32, m2: u32) -> Interval {
        let d = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        Interval::new(
            d.and_hms_opt(h1, m1, 0).unwrap(),
            d.and_hms_opt(h2, m2, 0).unwrap(),
            format!("{h1}:{m1:02}"),
        )
    }

    #[test]
    fn test_three_overlapping_share_one_group() {
        let groups = group_overlaps(vec![iv(9, 0, 10, 0), iv(9, 30, 10, 30), iv(9, 45, 11, 0)], 3);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].column_count(), 3);
        let cols: Vec<usize> = groups[0].columns().map(|(c, _)| c).collect();
        assert_eq!(cols, vec![0, 1, 2]);
    }

    #[test]
    fn test_back_to_back_events_are_separate() {
        let groups = group_overlaps(vec![iv(9, 0, 10, 0), iv(10, 0, 11, 0)], 3);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.column_count() == 1));
    }

    #[test]
    fn test_tail_tracks_latest_end() {
        // the long first event keeps the group open past the short second one
        let groups = group_overlaps(vec![iv(9, 0, 12, 0), iv(9, 15, 9, 30), iv(11, 0, 11, 30)], 3);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[0].tail(), iv(12, 0, 12, 0).start);
    }

    #[test]
    fn test_columns_wrap_past_cap() {
        let events: Vec<Interval> = (0..5).map(|i| iv(9, i * 5, 11, 0)).collect();
        let groups = group_overlaps(events, 3);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].column_count(), 3);
        let cols: Vec<usize> = groups[0].columns().map(|(c, _)| c).collect();
        assert_eq!(cols, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_zero_duration_events() {
        let groups = group_overlaps(vec![iv(9, 0, 9, 0), iv(9, 0, 10, 0), iv(10, 0, 10, 0)], 3);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), 3);
    }

    #[test]
    fn test_every_event_lands_in_exactly_one_group() {
        let events = vec![
            iv(6, 0, 7, 0),
            iv(6, 30, 8, 0),
            iv(8, 0, 8, 30),
            iv(9, 0, 9, 45),
            iv(9, 15, 9, 30),
            iv(9, 20, 10, 0),
            iv(9, 25, 9, 50),
            iv(13, 0, 14, 0),
        ];
        let groups = group_overlaps(events.clone(), 3);
        let flat: Vec<Interval> = groups.iter().flat_map(|g| g.members().to_vec()).collect();
        assert_eq!(flat, events);
        for g in &groups {
            assert_eq!(g.column_count(), g.len().min(3));
        }
        assert_eq!(group_overlaps(events, 3), groups);
    }

    #[test]
    fn test_zero_cap_behaves_as_one_column() {
        let groups = group_overlaps(vec![iv(9, 0, 10, 0), iv(9, 30, 10, 30)], 0);
        assert_eq!(groups[0].column_count(), 1);
        assert_eq!(groups[0].column_of(1), 0);
    }
}
