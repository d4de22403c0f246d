// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the Strava client and the poll loop.

use reqwest::StatusCode;

/// Errors returned by [`crate::services::StravaClient`].
#[derive(Debug, thiserror::Error)]
pub enum StravaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unauthorized request received again, check refresh token")]
    Unauthorized,

    #[error("access token rejected and no refresh token is configured")]
    NoRefreshToken,

    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("JSON parse error: {source} (body: {body})")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl StravaError {
    /// True for failures that a new refresh token would fix.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, StravaError::Unauthorized | StravaError::NoRefreshToken)
    }
}

/// Poll loop error. Every failure is fatal.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{operation} failed: {source}")]
    Strava {
        operation: &'static str,
        #[source]
        source: StravaError,
    },
}

impl AppError {
    /// Wrap a client error with the name of the operation that failed.
    pub fn strava(operation: &'static str) -> impl FnOnce(StravaError) -> AppError {
        move |source| AppError::Strava { operation, source }
    }
}

/// Result type alias for the poll loop.
pub type Result<T> = std::result::Result<T, AppError>;
