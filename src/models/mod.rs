// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the Strava API responses we consume.

pub mod activity;
pub mod lap;

pub use activity::{Activity, ActivityType};
pub use lap::Lap;
