//! Outbound mutations and the HTTP routes they map to.
//!
//! The viewer never applies these locally; the server broadcasts a fresh
//! snapshot once it has processed one.

use serde_json::{json, Value};

use crate::domain::{Card, ObjectiveNumbering, Seat, TaskId, TaskKind, TaskKindTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Put,
    Post,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Put => "PUT",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// How a repeated delivery of the same request behaves on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idempotency {
    /// Addressed by objective id.
    ById,
    /// Overwrites a slot; the last write wins.
    LastWriteWins,
    /// Whole-round actions with no key to deduplicate on.
    Unkeyed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationRequest {
    SetHand { seat: Seat, cards: Vec<Card> },
    SetTrickCard { trick: usize, turn: usize, card: Option<Card> },
    AddObjective { kind: TaskKind },
    RemoveObjective { id: TaskId },
    SetObjectiveCard { id: TaskId, card: Option<Card> },
    SetObjectivePlayer { id: TaskId, seat: Option<Seat> },
    SetPlayerName { seat: Seat, name: String },
    ResetRound,
    RequestSolve,
}

impl MutationRequest {
    /// "Add objective" request for one of the four add buttons, or `None`
    /// while that button is disabled.
    pub fn add_objective(numbering: &ObjectiveNumbering, tag: TaskKindTag) -> Option<Self> {
        numbering.can_add(tag).then(|| MutationRequest::AddObjective {
            kind: numbering.next_kind(tag),
        })
    }

    pub fn method(&self) -> Method {
        match self {
            MutationRequest::SetHand { .. }
            | MutationRequest::SetTrickCard { .. }
            | MutationRequest::SetObjectiveCard { .. }
            | MutationRequest::SetObjectivePlayer { .. }
            | MutationRequest::SetPlayerName { .. } => Method::Put,
            MutationRequest::AddObjective { .. }
            | MutationRequest::ResetRound
            | MutationRequest::RequestSolve => Method::Post,
            MutationRequest::RemoveObjective { .. } => Method::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            MutationRequest::SetHand { seat, .. } => format!("/api/player/{seat}/hand"),
            MutationRequest::SetTrickCard { trick, turn, .. } => {
                format!("/api/trick/{trick}/{turn}/card")
            }
            MutationRequest::AddObjective { .. } => "/api/objective/add".to_string(),
            MutationRequest::RemoveObjective { id } => format!("/api/objective/{id}"),
            MutationRequest::SetObjectiveCard { id, .. } => format!("/api/objective/{id}/card"),
            MutationRequest::SetObjectivePlayer { id, .. } => {
                format!("/api/objective/{id}/player")
            }
            MutationRequest::SetPlayerName { seat, .. } => format!("/api/player/{seat}/name"),
            MutationRequest::ResetRound => "/api/reset".to_string(),
            MutationRequest::RequestSolve => "/api/solve".to_string(),
        }
    }

    /// JSON body; body-less routes send an empty object.
    pub fn body(&self) -> Value {
        match self {
            MutationRequest::SetHand { cards, .. } => json!({ "cards": cards }),
            MutationRequest::SetTrickCard { card, .. }
            | MutationRequest::SetObjectiveCard { card, .. } => json!({ "card": card }),
            MutationRequest::AddObjective { kind } => json!(kind),
            MutationRequest::SetObjectivePlayer { seat, .. } => json!({ "playerNum": seat }),
            MutationRequest::SetPlayerName { name, .. } => json!({ "name": name }),
            MutationRequest::RemoveObjective { .. }
            | MutationRequest::ResetRound
            | MutationRequest::RequestSolve => json!({}),
        }
    }

    pub fn idempotency(&self) -> Idempotency {
        match self {
            MutationRequest::AddObjective { .. }
            | MutationRequest::RemoveObjective { .. }
            | MutationRequest::SetObjectiveCard { .. }
            | MutationRequest::SetObjectivePlayer { .. } => Idempotency::ById,
            MutationRequest::SetHand { .. }
            | MutationRequest::SetTrickCard { .. }
            | MutationRequest::SetPlayerName { .. } => Idempotency::LastWriteWins,
            MutationRequest::ResetRound | MutationRequest::RequestSolve => Idempotency::Unkeyed,
        }
    }
}
