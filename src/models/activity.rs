// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava summary activity, as returned by the athlete activity feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Summary activity from `GET /athlete/activities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Strava activity ID (assigned in creation order)
    pub id: u64,
    /// Activity name/title
    #[serde(default)]
    pub name: String,
    /// Legacy activity type (Run, Ride, ...)
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Start date/time (UTC)
    pub start_date: DateTime<Utc>,
    /// Distance in meters
    #[serde(default)]
    pub distance: f64,
}

/// Activity type. Anything we don't care about collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    Run,
    Ride,
    Walk,
    Hike,
    Swim,
    #[serde(other)]
    Other,
}

impl ActivityType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Run => "Run",
            ActivityType::Ride => "Ride",
            ActivityType::Walk => "Walk",
            ActivityType::Hike => "Hike",
            ActivityType::Swim => "Swim",
            ActivityType::Other => "Other",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "run" => Ok(ActivityType::Run),
            "ride" => Ok(ActivityType::Ride),
            "walk" => Ok(ActivityType::Walk),
            "hike" => Ok(ActivityType::Hike),
            "swim" => Ok(ActivityType::Swim),
            other => Err(format!("unsupported activity type: {}", other)),
        }
    }
}
