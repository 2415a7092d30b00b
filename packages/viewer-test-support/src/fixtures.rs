//! Builders for the JSON the game server pushes.
//!
//! Values are raw `serde_json::Value`s so tests can also build payloads the
//! typed model would reject.

use serde_json::{json, Value};

pub fn card(suit: &str, value: i64) -> Value {
    json!({ "suit": suit, "value": value })
}

pub fn player(num: i64, name: &str, is_commander: bool) -> Value {
    json!({ "num": num, "name": name, "isCommander": is_commander })
}

pub fn task(id: i64, kind: &str, order: i64) -> Value {
    json!({ "id": id, "type": kind, "order": order, "card": null, "player": null })
}

pub fn turn(player: Value, card: Option<Value>) -> Value {
    json!({
        "player": player,
        "card": card,
        "isLeader": false,
        "isWinner": false,
        "isNextToPlay": false,
    })
}

/// Accumulates an `appstate` payload page by page.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    hands: Vec<Value>,
    players: Vec<Value>,
    tasks: Vec<Value>,
    tricks: Vec<Value>,
    solves: Vec<Value>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the next seat's hand.
    pub fn hand(mut self, cards: Vec<Value>) -> Self {
        self.hands.push(Value::Array(cards));
        self
    }

    pub fn player(mut self, player: Value) -> Self {
        self.players.push(player);
        self
    }

    pub fn task(mut self, task: Value) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn trick(mut self, turns: Vec<Value>) -> Self {
        self.tricks.push(json!({ "turns": turns }));
        self
    }

    pub fn solve(mut self, id: u64, success: bool, result: bool, duration: f64) -> Self {
        self.solves.push(json!({
            "id": id,
            "success": success,
            "result": result,
            "duration": duration,
        }));
        self
    }

    /// The bare app-state payload.
    pub fn build(self) -> Value {
        json!({
            "handPage": { "heldCards": self.hands },
            "objectivePage": { "tasks": self.tasks, "players": self.players },
            "tricksPage": { "tricks": self.tricks },
            "solverPage": { "solves": self.solves },
        })
    }

    /// One push-channel line carrying the payload.
    pub fn message(self) -> String {
        json!({ "event": "appstate", "data": self.build() }).to_string()
    }
}

/// A four-seat round mid-way through its first trick.
///
/// Seat 1 (Bo) holds R4 and is commander. Bo led Y2, Cy has not played yet.
pub fn sample_app_state() -> SnapshotBuilder {
    let ada = player(0, "Ada", false);
    let bo = player(1, "Bo", true);
    let cy = player(2, "Cy", false);
    let di = player(3, "Di", false);

    SnapshotBuilder::new()
        .hand(vec![card("B", 1), card("B", 2)])
        .hand(vec![card("R", 4), card("Y", 7)])
        .hand(vec![card("G", 5), card("M", 3)])
        .hand(vec![card("Y", 9)])
        .player(ada.clone())
        .player(bo.clone())
        .player(cy.clone())
        .player(di.clone())
        .task(task(1, "absolute", 1))
        .task(task(2, "relative", 2))
        .task(task(3, "anytime", 0))
        .trick(vec![
            turn(bo, Some(card("Y", 2))),
            turn(cy, None),
            turn(di, None),
            turn(ada, None),
        ])
        .solve(1, true, true, 42.0)
        .solve(2, false, false, 3.0)
}
