// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Laps
//!
//! Polls Strava for new runs and writes a per-lap summary into each
//! activity's description.

use anyhow::Context;
use clap::Parser;
use strava_laps::{
    config::{Cli, Config, Mode},
    services::{Poller, StravaClient, Ticker},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file if present

    let cli = Cli::parse();
    init_logging(cli.debug, cli.log_json);

    let config = Config::from_cli(cli).context("Failed to load configuration")?;
    tracing::info!(
        interval_secs = config.poll.interval.as_secs(),
        activity_type = %config.poll.activity_type,
        "Starting Strava-Laps"
    );

    let client = StravaClient::new(config.credentials.clone(), &config.client)
        .context("Failed to build Strava client")?;

    match config.mode {
        Mode::Authorize => authorize(&client).await,
        Mode::Poll { once } => {
            let mut poller = Poller::new(client, &config.poll);
            let result = if once {
                poller.poll_once().await.map(|_| ())
            } else {
                poller.run(Ticker::start(config.poll.interval)).await
            };

            if let Err(e) = &result {
                tracing::error!(error = %e, cursor = ?poller.tracker().cursor(), "Stopping");
            }
            Ok(result?)
        }
    }
}

/// One-shot OAuth flow: print the authorization URL, read the code the
/// user copies from the redirect and print the resulting refresh token.
async fn authorize(client: &StravaClient) -> anyhow::Result<()> {
    println!("Open this URL in a browser and approve access:");
    println!("{}", client.authorize_url());
    println!("Then paste the `code` parameter from the redirect URL:");

    let mut code = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut code)
        .await
        .context("Failed to read authorization code")?;

    let code = code.trim();
    if code.is_empty() {
        anyhow::bail!("No authorization code entered");
    }

    let token = client
        .exchange_code(code)
        .await
        .context("Authorization code exchange failed")?;

    println!("Refresh token: {}", token.refresh_token);
    Ok(())
}

/// Initialize logging: human-readable by default, flattened JSON on request.
fn init_logging(debug: bool, json: bool) {
    let crate_level = if debug { "strava_laps=debug" } else { "strava_laps=info" };
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(crate_level.parse().expect("valid log directive"))
        .add_directive("info".parse().expect("valid log directive"));

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(false)
            .with_current_span(true)
            .flatten_event(true)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
