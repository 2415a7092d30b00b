//! Lenient mirror of the server's app-state payload.
//!
//! Every field is wrapped in [`Field`] so a bad value degrades to "absent"
//! instead of failing the whole snapshot. Turning these into domain values
//! happens in [`crate::protocol::decode`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// A field that may be missing, null, or malformed without failing its parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Valid(T),
    Missing,
    Invalid(String),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Missing
    }
}

impl<T> Field<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            Field::Valid(v) => Some(v),
            Field::Missing | Field::Invalid(_) => None,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Valid(v) => Field::Valid(v),
            Field::Missing => Field::Missing,
            Field::Invalid(e) => Field::Invalid(e.clone()),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Field::Missing);
        }
        Ok(match serde_json::from_value::<T>(value) {
            Ok(v) => Field::Valid(v),
            Err(e) => Field::Invalid(e.to_string()),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppStateWire {
    pub hand_page: Field<HandPageWire>,
    pub objective_page: Field<ObjectivePageWire>,
    pub tricks_page: Field<TricksPageWire>,
    pub solver_page: Field<SolverPageWire>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HandPageWire {
    pub held_cards: Field<Vec<Field<Vec<Field<CardWire>>>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectivePageWire {
    pub tasks: Field<Vec<Field<TaskWire>>>,
    pub players: Field<Vec<Field<PlayerWire>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TricksPageWire {
    pub tricks: Field<Vec<Field<TrickWire>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolverPageWire {
    pub solves: Field<Vec<Field<SolveWire>>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardWire {
    pub suit: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerWire {
    pub num: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_commander: bool,
}

/// Task ids arrive as strings or integers depending on the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TaskIdWire {
    Text(String),
    Number(Number),
}

impl TaskIdWire {
    pub fn into_string(self) -> String {
        match self {
            TaskIdWire::Text(s) => s,
            TaskIdWire::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskWire {
    pub id: Field<TaskIdWire>,
    #[serde(rename = "type")]
    pub kind: Field<String>,
    pub order: Field<Number>,
    pub card: Field<CardWire>,
    pub player: Field<PlayerWire>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TurnWire {
    pub player: Field<PlayerWire>,
    pub card: Field<CardWire>,
    pub is_winner: Field<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrickWire {
    pub turns: Field<Vec<Field<TurnWire>>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SolveWire {
    pub id: u64,
    pub success: bool,
    pub result: bool,
    pub duration: f64,
}
