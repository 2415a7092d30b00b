//! Core card-related types: Card, Suit

use crate::errors::domain::{DomainError, ValidationKind};

/// Value range upper bound for the four coloured suits.
pub const COLOUR_MAX_VALUE: u8 = 9;
/// Value range upper bound for rockets.
pub const ROCKET_MAX_VALUE: u8 = 4;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Blue,
    Yellow,
    Magenta,
    Green,
    Rocket,
}

impl Suit {
    pub const ALL: [Suit; 5] = [
        Suit::Blue,
        Suit::Yellow,
        Suit::Magenta,
        Suit::Green,
        Suit::Rocket,
    ];

    /// Highest legal value in this suit (values start at 1).
    pub const fn max_value(self) -> u8 {
        match self {
            Suit::Rocket => ROCKET_MAX_VALUE,
            _ => COLOUR_MAX_VALUE,
        }
    }

    /// Single-letter wire form.
    pub const fn letter(self) -> char {
        match self {
            Suit::Blue => 'B',
            Suit::Yellow => 'Y',
            Suit::Magenta => 'M',
            Suit::Green => 'G',
            Suit::Rocket => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Result<Self, DomainError> {
        match letter {
            'B' => Ok(Suit::Blue),
            'Y' => Ok(Suit::Yellow),
            'M' => Ok(Suit::Magenta),
            'G' => Ok(Suit::Green),
            'R' => Ok(Suit::Rocket),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidSuit,
                format!("Invalid suit: {letter}"),
            )),
        }
    }

    /// Long display name.
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Blue => "Blue",
            Suit::Yellow => "Yellow",
            Suit::Magenta => "Magenta",
            Suit::Green => "Green",
            Suit::Rocket => "Rocket",
        }
    }
}

/// An immutable card. Equality is structural; there is no card identity.
///
/// Fields are private so every `Card` in the program has a value inside
/// its suit's range.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    suit: Suit,
    value: u8,
}

impl Card {
    pub fn new(suit: Suit, value: u8) -> Result<Self, DomainError> {
        if value == 0 || value > suit.max_value() {
            return Err(DomainError::validation(
                ValidationKind::InvalidCardValue,
                format!(
                    "Card value {value} out of range 1..={} for {}",
                    suit.max_value(),
                    suit.name()
                ),
            ));
        }
        Ok(Card { suit, value })
    }

    pub const fn suit(&self) -> Suit {
        self.suit
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    /// The rocket 4 marks the commander.
    pub fn is_commander_card(&self) -> bool {
        self.suit == Suit::Rocket && self.value == ROCKET_MAX_VALUE
    }
}

// Note: Ord on Card is for stable display sorting only: suit order B<Y<M<G<R then value.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.value.cmp(&other.value),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Every card in the deck, suit by suit in ascending value.
pub fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (1..=suit.max_value()).map(move |value| Card { suit, value }))
        .collect()
}

/// Cards of one suit, in ascending value. Used to lay out picker rows.
pub fn suit_row(suit: Suit) -> Vec<Card> {
    (1..=suit.max_value())
        .map(|value| Card { suit, value })
        .collect()
}
