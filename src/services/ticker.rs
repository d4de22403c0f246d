// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Poll tick source.
//!
//! Delivers one tick immediately, then one per period. At most one tick is
//! ever pending: a tick that fires while the previous one is still unread
//! is dropped, so a slow poll never leaves a backlog behind it.

use chrono::{DateTime, Utc};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};

/// Infinite, coalescing sequence of poll ticks.
pub struct Ticker {
    rx: mpsc::Receiver<DateTime<Utc>>,
    timer: JoinHandle<()>,
}

impl Ticker {
    /// Start ticking. Must be called from within a tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);

        // Fresh channel with capacity 1, so the immediate tick always fits.
        let _ = tx.try_send(Utc::now());

        let timer = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                match tx.try_send(Utc::now()) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Previous tick still pending, dropping this one");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            }
        });

        Self { rx, timer }
    }

    /// Wait for the next tick.
    pub async fn tick(&mut self) -> Option<DateTime<Utc>> {
        self.rx.recv().await
    }

    /// Take a pending tick without waiting.
    pub fn try_tick(&mut self) -> Option<DateTime<Utc>> {
        self.rx.try_recv().ok()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.timer.abort();
    }
}
