// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use reqwest::StatusCode;
use strava_laps::config::ConfigError;
use strava_laps::error::{AppError, StravaError};

#[test]
fn test_is_auth_failure_matches() {
    assert!(StravaError::Unauthorized.is_auth_failure());
    assert!(StravaError::NoRefreshToken.is_auth_failure());
}

#[test]
fn test_is_auth_failure_no_match() {
    let err = StravaError::Status {
        status: StatusCode::TOO_MANY_REQUESTS,
        body: "Rate Limit Exceeded".to_string(),
    };
    assert!(!err.is_auth_failure());

    let err = StravaError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: String::new(),
    };
    assert!(!err.is_auth_failure());
}

#[test]
fn test_app_error_names_operation() {
    let err = AppError::strava("list laps")(StravaError::Status {
        status: StatusCode::NOT_FOUND,
        body: "Record Not Found".to_string(),
    });
    assert_eq!(
        err.to_string(),
        "list laps failed: HTTP 404 Not Found: Record Not Found"
    );
}

#[test]
fn test_config_error_messages() {
    assert_eq!(
        ConfigError::Missing("client-id").to_string(),
        "Missing required setting: client-id"
    );
    assert_eq!(
        ConfigError::Invalid("interval-secs must be positive".to_string()).to_string(),
        "Invalid setting: interval-secs must be positive"
    );
}
