//! Card parsing from compact tokens (e.g., "B3", "R4")

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use super::cards_types::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_ch = chars.next().ok_or_else(|| {
            DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
        })?;
        let value_str = chars.as_str();
        if value_str.len() != 1 {
            return Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Parse card: {s}"),
            ));
        }
        let value = value_str.parse::<u8>().map_err(|_| {
            DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
        })?;
        let suit = Suit::from_letter(suit_ch)?;
        Card::new(suit, value)
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.letter())
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.suit().letter(), self.value())
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
/// Returns Err on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
