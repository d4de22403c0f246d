// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Decides which activities in a polled batch are new.
//!
//! The tracker holds a single cursor: the highest activity ID already
//! handled. Strava assigns IDs in creation order, so anything at or below
//! the cursor has been seen. The cursor lives only in memory.

use crate::models::{Activity, ActivityType};

/// What the poll loop should do with one batch.
#[derive(Debug, Clone, PartialEq)]
pub enum TickPlan {
    /// Nothing was returned.
    Idle,
    /// First batch: the cursor was set to this ID and nothing is processed.
    Primed(u64),
    /// New activities of the tracked type, oldest first.
    Process(Vec<Activity>),
}

/// Cursor over activity IDs. `None` until the first batch primes it.
#[derive(Debug, Clone)]
pub struct ActivityTracker {
    activity_type: ActivityType,
    cursor: Option<u64>,
}

impl ActivityTracker {
    /// Create a tracker. With `start` set the priming batch is skipped and
    /// anything newer than `start` is processed right away.
    pub fn new(activity_type: ActivityType, start: Option<u64>) -> Self {
        Self {
            activity_type,
            cursor: start,
        }
    }

    pub fn cursor(&self) -> Option<u64> {
        self.cursor
    }

    pub fn is_primed(&self) -> bool {
        self.cursor.is_some()
    }

    /// Plan a batch. Strava's ordering is not trusted; the batch is sorted
    /// by start time first.
    pub fn plan(&mut self, mut batch: Vec<Activity>) -> TickPlan {
        if batch.is_empty() {
            return TickPlan::Idle;
        }

        batch.sort_by_key(|a| a.start_date);

        let Some(cursor) = self.cursor else {
            // Non-empty, so there is a last element.
            let latest = batch[batch.len() - 1].id;
            self.cursor = Some(latest);
            return TickPlan::Primed(latest);
        };

        let candidates = batch
            .into_iter()
            .filter(|a| {
                if a.activity_type != self.activity_type {
                    tracing::debug!(
                        activity_id = a.id,
                        activity_type = %a.activity_type,
                        "Skipping activity of another type"
                    );
                    return false;
                }
                if a.id <= cursor {
                    tracing::debug!(activity_id = a.id, cursor, "Skipping already seen activity");
                    return false;
                }
                true
            })
            .collect();

        TickPlan::Process(candidates)
    }

    /// Record that an activity has been handled. The cursor never moves back.
    pub fn advance(&mut self, activity_id: u64) {
        self.cursor = Some(self.cursor.map_or(activity_id, |c| c.max(activity_id)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn activity(id: u64, activity_type: ActivityType, hours_ago: i64) -> Activity {
        Activity {
            id,
            name: format!("Activity {}", id),
            activity_type,
            start_date: Utc.with_ymd_and_hms(2024, 5, 2, 18, 0, 0).unwrap()
                - Duration::hours(hours_ago),
            distance: 5000.0,
        }
    }

    fn ids(plan: &TickPlan) -> Vec<u64> {
        match plan {
            TickPlan::Process(activities) => activities.iter().map(|a| a.id).collect(),
            other => panic!("expected Process, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_batch_is_idle() {
        let mut tracker = ActivityTracker::new(ActivityType::Run, None);
        assert_eq!(tracker.plan(vec![]), TickPlan::Idle);
        assert!(!tracker.is_primed());
    }

    #[test]
    fn test_priming_uses_most_recent_activity() {
        let mut tracker = ActivityTracker::new(ActivityType::Run, None);
        // Server order is newest first; most recent is 100.
        let batch = vec![
            activity(100, ActivityType::Run, 1),
            activity(97, ActivityType::Ride, 30),
            activity(99, ActivityType::Run, 5),
        ];

        assert_eq!(tracker.plan(batch), TickPlan::Primed(100));
        assert_eq!(tracker.cursor(), Some(100));
    }

    #[test]
    fn test_processes_only_new_ids_in_order() {
        let mut tracker = ActivityTracker::new(ActivityType::Run, None);
        tracker.plan(vec![activity(100, ActivityType::Run, 10)]);

        let batch = vec![
            activity(102, ActivityType::Run, 1),
            activity(95, ActivityType::Run, 20),
            activity(101, ActivityType::Run, 3),
        ];
        let plan = tracker.plan(batch);
        assert_eq!(ids(&plan), vec![101, 102]);

        for id in ids(&plan) {
            tracker.advance(id);
        }
        assert_eq!(tracker.cursor(), Some(102));
    }

    #[test]
    fn test_skips_other_activity_types() {
        let mut tracker = ActivityTracker::new(ActivityType::Run, Some(100));
        let batch = vec![
            activity(101, ActivityType::Ride, 3),
            activity(102, ActivityType::Run, 1),
        ];
        assert_eq!(ids(&tracker.plan(batch)), vec![102]);
    }

    #[test]
    fn test_start_id_skips_priming() {
        let mut tracker = ActivityTracker::new(ActivityType::Run, Some(50));
        assert!(tracker.is_primed());

        let batch = vec![activity(51, ActivityType::Run, 2), activity(49, ActivityType::Run, 4)];
        assert_eq!(ids(&tracker.plan(batch)), vec![51]);
    }

    #[test]
    fn test_cursor_never_decreases() {
        let mut tracker = ActivityTracker::new(ActivityType::Run, Some(100));
        tracker.advance(90);
        assert_eq!(tracker.cursor(), Some(100));
        tracker.advance(120);
        assert_eq!(tracker.cursor(), Some(120));
    }

    #[test]
    fn test_seen_batch_yields_nothing() {
        let mut tracker = ActivityTracker::new(ActivityType::Run, Some(100));
        let batch = vec![activity(100, ActivityType::Run, 1), activity(98, ActivityType::Run, 2)];
        assert_eq!(ids(&tracker.plan(batch)), Vec::<u64>::new());
    }
}
