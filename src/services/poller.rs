// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity update loop.
//!
//! Handles the core workflow on every tick:
//! 1. Fetch the most recent activities from Strava
//! 2. Let the tracker pick the ones not seen yet
//! 3. Fetch laps for each new activity
//! 4. Write the lap summary as the activity description
//! 5. Advance the cursor
//!
//! Activities are handled one at a time. Any error stops the loop.

use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityType};
use crate::services::summary::{build_summary, SummaryStyle};
use crate::services::ticker::Ticker;
use crate::services::tracker::{ActivityTracker, TickPlan};
use crate::services::StravaClient;
use crate::time_utils::format_utc_rfc3339;
use std::time::Duration;

/// A summary needs at least this many laps to be worth writing.
const MIN_LAPS: usize = 2;

/// Poll loop settings.
#[derive(Debug, Clone)]
pub struct PollSettings {
    pub interval: Duration,
    /// Page size for the activity list
    pub per_page: u32,
    pub activity_type: ActivityType,
    pub style: SummaryStyle,
    /// Resume after this activity instead of priming
    pub start_activity_id: Option<u64>,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(15 * 60),
            per_page: 10,
            activity_type: ActivityType::Run,
            style: SummaryStyle::Effort,
            start_activity_id: None,
        }
    }
}

/// Result of handling one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    TooFewLaps,
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollReport {
    /// Set when this tick primed the cursor
    pub primed: Option<u64>,
    /// Activities whose description was written, in order
    pub updated: Vec<u64>,
    /// New activities skipped for having too few laps
    pub skipped: Vec<u64>,
}

/// Drives the tracker, the Strava client and the formatter.
pub struct Poller {
    client: StravaClient,
    tracker: ActivityTracker,
    per_page: u32,
    style: SummaryStyle,
}

impl Poller {
    pub fn new(client: StravaClient, settings: &PollSettings) -> Self {
        Self {
            client,
            tracker: ActivityTracker::new(settings.activity_type, settings.start_activity_id),
            per_page: settings.per_page,
            style: settings.style,
        }
    }

    pub fn tracker(&self) -> &ActivityTracker {
        &self.tracker
    }

    /// Poll on every tick until the ticker ends or a tick fails.
    pub async fn run(&mut self, mut ticker: Ticker) -> Result<()> {
        while let Some(at) = ticker.tick().await {
            tracing::info!(tick = %format_utc_rfc3339(at), "Getting activity list");
            self.poll_once().await?;
        }
        Ok(())
    }

    /// Run a single tick.
    pub async fn poll_once(&mut self) -> Result<PollReport> {
        let activities = self
            .client
            .list_recent_activities(self.per_page)
            .await
            .map_err(AppError::strava("list activities"))?;

        tracing::info!(count = activities.len(), "Fetched recent activities");

        let mut report = PollReport::default();

        match self.tracker.plan(activities) {
            TickPlan::Idle => {
                tracing::info!("There are no activities");
            }
            TickPlan::Primed(activity_id) => {
                tracing::info!(activity_id, "Marked as last activity, nothing to update");
                report.primed = Some(activity_id);
            }
            TickPlan::Process(candidates) => {
                for activity in &candidates {
                    tracing::info!(activity_id = activity.id, name = %activity.name, "Trying to update");
                    match self.update_activity(activity).await? {
                        UpdateOutcome::Updated => report.updated.push(activity.id),
                        UpdateOutcome::TooFewLaps => report.skipped.push(activity.id),
                    }
                    self.tracker.advance(activity.id);
                }
            }
        }

        Ok(report)
    }

    /// Fetch laps, build the summary and write it.
    async fn update_activity(&mut self, activity: &Activity) -> Result<UpdateOutcome> {
        let laps = self
            .client
            .list_laps(activity.id)
            .await
            .map_err(AppError::strava("list laps"))?;

        if laps.len() < MIN_LAPS {
            tracing::info!(
                activity_id = activity.id,
                laps = laps.len(),
                "Only one lap, nothing to update"
            );
            return Ok(UpdateOutcome::TooFewLaps);
        }

        let summary = build_summary(&laps, self.style);
        self.client
            .update_description(activity.id, &summary)
            .await
            .map_err(AppError::strava("update activity description"))?;

        tracing::info!(activity_id = activity.id, laps = laps.len(), "Description updated");
        Ok(UpdateOutcome::Updated)
    }
}
