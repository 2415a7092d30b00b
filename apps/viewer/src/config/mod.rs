//! Environment-driven viewer configuration.

use std::env;

use crate::domain::{Seat, Viewpoint};
use crate::error::AppError;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Base URL of the game server, without trailing slash.
    pub server_url: String,
    pub view_as: Option<Seat>,
    /// Emit logs as JSON lines instead of plain text.
    pub log_json: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            view_as: None,
            log_json: false,
        }
    }
}

impl ViewerConfig {
    /// Reads `CREW_SERVER_URL`, `CREW_VIEW_AS` and `CREW_LOG_JSON`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ViewerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let server_url = server_url(lookup("CREW_SERVER_URL"))?;
        let view_as = lookup("CREW_VIEW_AS")
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| parse_seat("CREW_VIEW_AS", &raw))
            .transpose()?;
        let log_json = lookup("CREW_LOG_JSON")
            .map(|raw| parse_bool("CREW_LOG_JSON", &raw))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            server_url,
            view_as,
            log_json,
        })
    }

    pub fn viewpoint(&self) -> Viewpoint {
        Viewpoint::from(self.view_as)
    }
}

fn server_url(raw: Option<String>) -> Result<String, AppError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_SERVER_URL.to_string());
    };
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::config(format!(
            "CREW_SERVER_URL must be an http(s) URL, got '{raw}'"
        )));
    }
    Ok(url.to_string())
}

/// Parses a seat number for the variable or flag `name`.
pub fn parse_seat(name: &str, raw: &str) -> Result<Seat, AppError> {
    raw.trim()
        .parse::<Seat>()
        .map_err(|_| AppError::config(format!("{name} must be a seat number, got '{raw}'")))
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(AppError::config(format!(
            "{name} must be a boolean, got '{raw}'"
        ))),
    }
}
