//! Push-channel envelopes.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::protocol::wire::AppStateWire;

/// Messages pushed by the game server.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ServerMsg {
    /// Full snapshot; replaces whatever the viewer held before.
    #[serde(rename = "appstate")]
    AppState(Box<AppStateWire>),
    #[serde(rename = "pong")]
    Pong,
}

/// Messages the viewer may push to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event")]
pub enum ClientMsg {
    #[serde(rename = "ping")]
    Ping,
}

impl ServerMsg {
    pub fn parse(text: &str) -> Result<Self, AppError> {
        serde_json::from_str(text)
            .map_err(|e| AppError::decode(format!("unrecognised server message: {e}")))
    }
}
