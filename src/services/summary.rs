// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lap summary formatting.
//!
//! Pure functions that turn raw lap telemetry (meters, seconds, m/s) into
//! the text written to an activity description, e.g.
//!
//! ```text
//! 🟨 1) 1km / 04:55 / 04:55 / 152
//! 🟧 2) 1.01km / 04:30 / 04:29 / 160
//! ```

use crate::models::Lap;
use std::str::FromStr;

/// Placeholder used when a lap has no usable average speed.
const MISSING_PACE: &str = "--:--";

/// Placeholder used when a lap has no heart rate data.
const MISSING_HEARTRATE: &str = "-";

/// Format a distance in meters, rounded to the nearest 10 m.
///
/// Below one kilometer the result is whole meters (`"800m"`). Above it the
/// result is kilometers with only as many decimals as the rounded value
/// needs: `"3km"`, `"10.1km"`, `"1.15km"`.
pub fn format_distance(meters: f64) -> String {
    let rounded = (meters / 10.0).round() * 10.0;

    if rounded < 1000.0 {
        return format!("{:.0}m", rounded);
    }

    let whole = rounded as i64;
    let km = rounded / 1000.0;

    if whole % 1000 == 0 {
        format!("{:.0}km", km)
    } else if whole % 100 == 0 {
        format!("{:.1}km", km)
    } else {
        format!("{:.2}km", km)
    }
}

/// Format seconds as `MM:SS`, or `HH:MM:SS` from one hour up.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = seconds % 3600 / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Convert a speed in m/s to a pace in whole seconds per kilometer.
///
/// Returns `None` when the speed is zero, negative or not finite.
pub fn speed_to_pace(speed_mps: f64) -> Option<u32> {
    if !speed_mps.is_finite() || speed_mps <= 0.0 {
        return None;
    }
    Some((1000.0 / speed_mps).round() as u32)
}

/// Convert a pace in seconds per kilometer back to a speed in m/s.
pub fn pace_to_speed(pace_secs: f64) -> f64 {
    1000.0 / pace_secs
}

/// Coarse effort classification by average speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffortTier {
    Recovery,
    Easy,
    Steady,
    Tempo,
    Threshold,
    Sprint,
}

/// Inclusive upper bound in km/h for each tier, slowest first.
const EFFORT_TIERS: [(f64, EffortTier); 6] = [
    (10.59, EffortTier::Recovery),
    (11.96, EffortTier::Easy),
    (13.00, EffortTier::Steady),
    (14.81, EffortTier::Tempo),
    (16.36, EffortTier::Threshold),
    (30.00, EffortTier::Sprint),
];

/// Absorbs the float error of the m/s to km/h conversion at a ceiling.
const TIER_EPSILON: f64 = 1e-9;

impl EffortTier {
    /// Classify a speed in m/s.
    pub fn from_speed(speed_mps: f64) -> Self {
        Self::from_kmh(speed_mps * 3.6)
    }

    /// Classify a speed in km/h. Anything past the last ceiling is the
    /// fastest tier.
    pub fn from_kmh(kmh: f64) -> Self {
        EFFORT_TIERS
            .iter()
            .find(|(ceiling, _)| kmh <= *ceiling + TIER_EPSILON)
            .map(|(_, tier)| *tier)
            .unwrap_or(EffortTier::Sprint)
    }

    pub fn emoji(self) -> &'static str {
        match self {
            EffortTier::Recovery => "🟦",
            EffortTier::Easy => "🟩",
            EffortTier::Steady => "🟨",
            EffortTier::Tempo => "🟧",
            EffortTier::Threshold => "🟥",
            EffortTier::Sprint => "🟪",
        }
    }
}

/// Whether summary lines carry the effort tier emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryStyle {
    Plain,
    #[default]
    Effort,
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(SummaryStyle::Plain),
            "effort" | "emoji" => Ok(SummaryStyle::Effort),
            other => Err(format!("unknown summary style: {}", other)),
        }
    }
}

/// Build the description text: one newline-terminated line per lap.
pub fn build_summary(laps: &[Lap], style: SummaryStyle) -> String {
    let mut summary = String::new();

    for (i, lap) in laps.iter().enumerate() {
        let line = format_lap(i + 1, lap);
        match style {
            SummaryStyle::Plain => summary.push_str(&line),
            SummaryStyle::Effort => {
                let tier = EffortTier::from_speed(lap.average_speed);
                summary.push_str(tier.emoji());
                summary.push(' ');
                summary.push_str(&line);
            }
        }
        summary.push('\n');
    }

    summary
}

/// `<index>) <distance> / <moving time> / <pace> / <avg hr>`
fn format_lap(index: usize, lap: &Lap) -> String {
    let pace = speed_to_pace(lap.average_speed)
        .map(format_duration)
        .unwrap_or_else(|| MISSING_PACE.to_string());
    let heartrate = lap
        .average_heartrate
        .map(|hr| format!("{:.0}", hr.round()))
        .unwrap_or_else(|| MISSING_HEARTRATE.to_string());

    format!(
        "{}) {} / {} / {} / {}",
        index,
        format_distance(lap.distance),
        format_duration(lap.moving_time),
        pace,
        heartrate
    )
}
