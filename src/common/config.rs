// src/common/config.rs
//! Runtime configuration loaded from the environment and CLI flags

use chrono::{Local, NaiveDate};
use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:8081,http://localhost:19006";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_bodies: bool,
    /// Calendar date used for age checks instead of the local date
    pub pinned_today: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_origins: split_origins(DEFAULT_CORS_ORIGINS),
            log_bodies: false,
            pinned_today: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = split_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        let log_bodies = env::var("LOG_BODIES")
            .unwrap_or_else(|_| "false".to_string())
            .to_lowercase()
            == "true";

        let pinned_today = env::var("VALIDATION_TODAY")
            .ok()
            .and_then(|raw| parse_pinned_date(&raw));

        Self {
            port,
            cors_origins,
            log_bodies,
            pinned_today,
        }
    }

    /// Date that age checks are evaluated against
    pub fn today(&self) -> NaiveDate {
        self.pinned_today
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Print configuration status on startup
pub fn print_config_status(config: &AppConfig) {
    match config.pinned_today {
        Some(date) => {
            println!("📅 Validation date pinned to {}", date);
            println!("   Age checks ignore the system clock");
        }
        None => println!("📅 Validation date follows the system clock"),
    }
    if config.log_bodies {
        println!("📝 Request/response body logging enabled (debug level)");
    }
}

/// Applies `--today=YYYY-MM-DD` and `--log-bodies` from the given arguments
pub fn apply_cli_overrides<I>(mut config: AppConfig, args: I) -> AppConfig
where
    I: IntoIterator<Item = String>,
{
    for arg in args {
        if let Some(raw) = arg.strip_prefix("--today=") {
            match parse_pinned_date(raw) {
                Some(date) => {
                    println!("🔧 CLI override: VALIDATION_TODAY = {}", date);
                    config.pinned_today = Some(date);
                }
                None => eprintln!("⚠️  Ignoring malformed --today value: {}", raw),
            }
        } else if arg == "--log-bodies" {
            config.log_bodies = true;
        }
    }

    config
}

fn parse_pinned_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
