//! Serialization and deserialization for card types.
//!
//! Suits travel as their single letter; cards as `{"suit":"B","value":3}`.
//! These impls are strict: lenient snapshot decoding lives in
//! `crate::protocol::wire`.

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Suit};

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = [0u8; 4];
        serializer.serialize_str(self.letter().encode_utf8(&mut buf))
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Suit::from_letter(letter).map_err(D::Error::custom),
            _ => Err(D::Error::custom(format!("Invalid suit: {s}"))),
        }
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Card", 2)?;
        state.serialize_field("suit", &self.suit())?;
        state.serialize_field("value", &self.value())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct CardRepr {
    suit: Suit,
    value: u8,
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = CardRepr::deserialize(deserializer)?;
        Card::new(repr.suit, repr.value).map_err(D::Error::custom)
    }
}
