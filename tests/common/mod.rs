// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde_json::{json, Value};
use strava_laps::services::{ClientOptions, Credentials, StravaClient};
use wiremock::MockServer;

/// Create a client pointed at the mock server.
#[allow(dead_code)]
pub fn test_client(
    server: &MockServer,
    access_token: Option<&str>,
    refresh_token: Option<&str>,
) -> StravaClient {
    test_client_with_options(server, access_token, refresh_token, &ClientOptions::default())
}

/// Like [`test_client`] with explicit transport options.
#[allow(dead_code)]
pub fn test_client_with_options(
    server: &MockServer,
    access_token: Option<&str>,
    refresh_token: Option<&str>,
    options: &ClientOptions,
) -> StravaClient {
    let credentials = Credentials {
        client_id: "test_client_id".to_string(),
        client_secret: "test_secret".to_string(),
        refresh_token: refresh_token.map(str::to_string),
        access_token: access_token.map(str::to_string),
    };

    StravaClient::new(credentials, options)
        .expect("Failed to build client")
        .with_endpoints(
            format!("{}/api/v3", server.uri()),
            format!("{}/oauth/token", server.uri()),
        )
}

/// Token endpoint response body.
#[allow(dead_code)]
pub fn token_body(access_token: &str, refresh_token: &str) -> Value {
    json!({
        "token_type": "Bearer",
        "access_token": access_token,
        "refresh_token": refresh_token,
        "expires_at": 1_714_653_000,
        "expires_in": 21600
    })
}

/// Summary activity as returned by `GET /athlete/activities`.
#[allow(dead_code)]
pub fn activity_json(id: u64, activity_type: &str, start_date: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Activity {}", id),
        "type": activity_type,
        "sport_type": activity_type,
        "start_date": start_date,
        "distance": 5012.4
    })
}

/// Lap as returned by `GET /activities/{id}/laps`.
#[allow(dead_code)]
pub fn lap_json(lap_index: u32, distance: f64, moving_time: u32, speed: f64, hr: f64) -> Value {
    json!({
        "id": 1000 + lap_index,
        "lap_index": lap_index,
        "elapsed_time": moving_time + 3,
        "moving_time": moving_time,
        "distance": distance,
        "average_speed": speed,
        "average_heartrate": hr,
        "max_heartrate": hr + 10.0
    })
}

/// Decode the `description` field from a form-encoded body.
#[allow(dead_code)]
pub fn form_description(body: &[u8]) -> String {
    let body = String::from_utf8_lossy(body);
    let raw = body
        .split('&')
        .find_map(|pair| pair.strip_prefix("description="))
        .expect("description field missing")
        .replace('+', " ");
    urlencoding::decode(&raw)
        .expect("description is not valid UTF-8")
        .into_owned()
}
