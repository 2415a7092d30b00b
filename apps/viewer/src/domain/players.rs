use serde::{Deserialize, Serialize};

/// Stable 0-based seat index. Player identity within a round.
pub type Seat = u8;

/// Marker appended to the commander's display name.
pub const COMMANDER_MARKER: &str = "🧑‍🚀";

/// Placeholder shown when a player is unknown or unassigned.
pub const UNKNOWN_PLAYER: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(rename = "num")]
    pub seat: Seat,
    pub name: String,
    pub is_commander: bool,
}

impl Player {
    pub fn new(seat: Seat, name: impl Into<String>, is_commander: bool) -> Self {
        Self {
            seat,
            name: name.into(),
            is_commander,
        }
    }

    pub fn display_name(&self) -> String {
        if self.is_commander {
            format!("{}{COMMANDER_MARKER}", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Render an optional player the way player pickers and turn headers do.
pub fn display_player(player: Option<&Player>) -> String {
    player
        .map(Player::display_name)
        .unwrap_or_else(|| UNKNOWN_PLAYER.to_string())
}
