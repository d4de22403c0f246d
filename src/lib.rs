// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Laps: lap summaries for new Strava runs
//!
//! This crate polls the Strava API for newly completed runs, fetches the
//! laps of each one and writes a per-lap summary back as the activity
//! description.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
