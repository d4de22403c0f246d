// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Lap record from `GET /activities/{id}/laps`.

use serde::{Deserialize, Serialize};

/// One lap of an activity. Laps are kept in the order Strava returns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lap {
    #[serde(default)]
    pub id: u64,
    /// 1-based position within the activity
    #[serde(default)]
    pub lap_index: u32,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: u32,
    /// Elapsed time in seconds
    #[serde(default)]
    pub elapsed_time: u32,
    /// Distance in meters
    #[serde(default)]
    pub distance: f64,
    /// Average speed in m/s
    #[serde(default)]
    pub average_speed: f64,
    /// Absent when the activity was recorded without a heart rate sensor
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    #[serde(default)]
    pub max_heartrate: Option<f64>,
}
