//! Application configuration from command-line flags and environment
//! variables.
//!
//! Every credential flag can also come from the environment (or a `.env`
//! file loaded by the binary), so secrets need not appear on the command
//! line.

use crate::models::ActivityType;
use crate::services::{ClientOptions, Credentials, PollSettings, Socks5Proxy, SummaryStyle};
use clap::Parser;
use std::time::Duration;

/// Largest page Strava allows for the activity list.
const MAX_PER_PAGE: u32 = 200;

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(
    name = "strava-laps",
    about = "Writes a per-lap summary into the description of new Strava runs"
)]
pub struct Cli {
    /// Strava API client ID
    #[arg(long, env = "STRAVA_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Strava API client secret
    #[arg(long, env = "STRAVA_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Strava API refresh token
    #[arg(long, env = "STRAVA_REFRESH_TOKEN", hide_env_values = true)]
    pub refresh_token: Option<String>,

    /// Static access token, used instead of (or before) a refresh token
    #[arg(long, env = "STRAVA_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// SOCKS5 proxy address (host:port)
    #[arg(long, env = "SOCKS5_ADDR")]
    pub socks5_addr: Option<String>,

    /// SOCKS5 proxy user
    #[arg(long, env = "SOCKS5_USER")]
    pub socks5_user: Option<String>,

    /// SOCKS5 proxy password
    #[arg(long, env = "SOCKS5_PASS", hide_env_values = true)]
    pub socks5_pass: Option<String>,

    /// Log full requests and responses
    #[arg(long)]
    pub debug: bool,

    /// Treat this activity ID as already processed instead of priming
    #[arg(long)]
    pub last_activity_id: Option<u64>,

    /// Seconds between polls
    #[arg(long, default_value_t = 15 * 60)]
    pub interval_secs: u64,

    /// Number of recent activities fetched per poll
    #[arg(long, default_value_t = 10)]
    pub per_page: u32,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout_secs: u64,

    /// Activity type to summarize (Run, Ride, Walk, Hike, Swim)
    #[arg(long, default_value = "Run")]
    pub activity_type: String,

    /// Summary style: "effort" (tier emoji per lap) or "plain"
    #[arg(long, default_value = "effort")]
    pub summary_style: String,

    /// Print the authorization URL, read the code from stdin and print a
    /// refresh token
    #[arg(long)]
    pub authorize: bool,

    /// Poll once and exit
    #[arg(long)]
    pub once: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Interactive OAuth flow that prints a refresh token
    Authorize,
    /// Poll loop; `once` stops after the first tick
    Poll { once: bool },
}

/// Validated configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub credentials: Credentials,
    pub client: ClientOptions,
    pub poll: PollSettings,
}

impl Config {
    /// Validate parsed flags.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let mode = if cli.authorize {
            Mode::Authorize
        } else {
            Mode::Poll { once: cli.once }
        };

        let refresh_token = non_empty(cli.refresh_token);
        let access_token = non_empty(cli.access_token);
        let client_id = non_empty(cli.client_id);
        let client_secret = non_empty(cli.client_secret);

        // Client credentials are needed for anything that talks to the
        // token endpoint.
        let needs_client = mode == Mode::Authorize || refresh_token.is_some();
        if needs_client {
            if client_id.is_none() {
                return Err(ConfigError::Missing("client-id"));
            }
            if client_secret.is_none() {
                return Err(ConfigError::Missing("client-secret"));
            }
        }
        if mode != Mode::Authorize && refresh_token.is_none() && access_token.is_none() {
            return Err(ConfigError::Missing("refresh-token or access-token"));
        }

        let proxy = match non_empty(cli.socks5_addr) {
            Some(addr) => Some(Socks5Proxy {
                addr,
                user: non_empty(cli.socks5_user),
                pass: non_empty(cli.socks5_pass),
            }),
            None if cli.socks5_user.is_some() || cli.socks5_pass.is_some() => {
                return Err(ConfigError::Invalid(
                    "socks5-user/socks5-pass given without socks5-addr".to_string(),
                ));
            }
            None => None,
        };

        if cli.interval_secs == 0 {
            return Err(ConfigError::Invalid("interval-secs must be greater than 0".to_string()));
        }
        if cli.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout-secs must be greater than 0".to_string()));
        }
        if cli.per_page == 0 || cli.per_page > MAX_PER_PAGE {
            return Err(ConfigError::Invalid(format!(
                "per-page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }

        let activity_type = cli
            .activity_type
            .parse::<ActivityType>()
            .map_err(ConfigError::Invalid)?;
        let style = cli
            .summary_style
            .parse::<SummaryStyle>()
            .map_err(ConfigError::Invalid)?;

        Ok(Self {
            mode,
            credentials: Credentials {
                client_id: client_id.unwrap_or_default(),
                client_secret: client_secret.unwrap_or_default(),
                refresh_token,
                access_token,
            },
            client: ClientOptions {
                timeout: Duration::from_secs(cli.timeout_secs),
                proxy,
                debug: cli.debug,
            },
            poll: PollSettings {
                interval: Duration::from_secs(cli.interval_secs),
                per_page: cli.per_page,
                activity_type,
                style,
                start_activity_id: cli.last_activity_id,
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}
