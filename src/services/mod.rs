// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - polling, formatting and the Strava client.

pub mod poller;
pub mod strava;
pub mod summary;
pub mod ticker;
pub mod tracker;

pub use poller::{PollReport, PollSettings, Poller, UpdateOutcome};
pub use strava::{ClientOptions, Credentials, Socks5Proxy, StravaClient, TokenResponse};
pub use summary::{build_summary, EffortTier, SummaryStyle};
pub use ticker::Ticker;
pub use tracker::{ActivityTracker, TickPlan};
