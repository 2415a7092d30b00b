//! Objectives ("tasks") and their ordering kinds.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::cards_types::Card;
use super::players::Player;
use crate::errors::domain::{DomainError, ValidationKind};

/// Opaque objective identifier assigned by the game server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Largest objective order a round can carry. Orders above it are malformed.
pub const MAX_ORDER: u32 = 64;

/// How an objective is ordered relative to the others.
///
/// `Absolute` and `Relative` carry the allocated order; an order of 0 marks
/// an order the snapshot failed to supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Absolute(u32),
    Relative(u32),
    Anytime,
    Last,
}

/// Order-less discriminant of [`TaskKind`], used for "add objective" actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKindTag {
    Absolute,
    Relative,
    Anytime,
    Last,
}

impl TaskKindTag {
    pub const ALL: [TaskKindTag; 4] = [
        TaskKindTag::Anytime,
        TaskKindTag::Absolute,
        TaskKindTag::Relative,
        TaskKindTag::Last,
    ];

    pub const fn type_name(self) -> &'static str {
        match self {
            TaskKindTag::Absolute => "absolute",
            TaskKindTag::Relative => "relative",
            TaskKindTag::Anytime => "anytime",
            TaskKindTag::Last => "last",
        }
    }

    pub fn from_type_name(name: &str) -> Result<Self, DomainError> {
        match name {
            "absolute" => Ok(TaskKindTag::Absolute),
            "relative" => Ok(TaskKindTag::Relative),
            "anytime" => Ok(TaskKindTag::Anytime),
            "last" => Ok(TaskKindTag::Last),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidTaskType,
                format!("Invalid task type: {name}"),
            )),
        }
    }

    /// Attach an order. Anytime and last ignore it and hold 0.
    pub const fn with_order(self, order: u32) -> TaskKind {
        match self {
            TaskKindTag::Absolute => TaskKind::Absolute(order),
            TaskKindTag::Relative => TaskKind::Relative(order),
            TaskKindTag::Anytime => TaskKind::Anytime,
            TaskKindTag::Last => TaskKind::Last,
        }
    }
}

impl TaskKind {
    pub const fn tag(&self) -> TaskKindTag {
        match self {
            TaskKind::Absolute(_) => TaskKindTag::Absolute,
            TaskKind::Relative(_) => TaskKindTag::Relative,
            TaskKind::Anytime => TaskKindTag::Anytime,
            TaskKind::Last => TaskKindTag::Last,
        }
    }

    pub const fn type_name(&self) -> &'static str {
        self.tag().type_name()
    }

    /// Wire order: the allocated order, or 0 for anytime/last.
    pub const fn order(&self) -> u32 {
        match self {
            TaskKind::Absolute(order) | TaskKind::Relative(order) => *order,
            TaskKind::Anytime | TaskKind::Last => 0,
        }
    }
}

impl Serialize for TaskKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("TaskKind", 2)?;
        state.serialize_field("type", self.type_name())?;
        state.serialize_field("order", &self.order())?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(flatten)]
    pub kind: TaskKind,
    pub card: Option<Card>,
    pub player: Option<Player>,
}

impl Task {
    pub fn new(id: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            id: TaskId::new(id),
            kind,
            card: None,
            player: None,
        }
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }
}
