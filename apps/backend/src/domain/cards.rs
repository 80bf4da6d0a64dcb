//! Core card types: Suit, FaceValue, Card.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// The four suits, in deck-generation order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    /// First letter of the suit name, used in card display codes.
    pub fn initial(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// Face values in ascending order. Discriminants double as the numeric
/// value used for hand scoring and for the Two..Ten display codes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum FaceValue {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl FaceValue {
    pub const ALL: [FaceValue; 13] = [
        FaceValue::Two,
        FaceValue::Three,
        FaceValue::Four,
        FaceValue::Five,
        FaceValue::Six,
        FaceValue::Seven,
        FaceValue::Eight,
        FaceValue::Nine,
        FaceValue::Ten,
        FaceValue::Jack,
        FaceValue::Queen,
        FaceValue::King,
        FaceValue::Ace,
    ];

    /// Numeric value for hand scoring (Two=2 .. Ten=10, Jack=11, Queen=12,
    /// King=13, Ace=14).
    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            FaceValue::Two => "Two",
            FaceValue::Three => "Three",
            FaceValue::Four => "Four",
            FaceValue::Five => "Five",
            FaceValue::Six => "Six",
            FaceValue::Seven => "Seven",
            FaceValue::Eight => "Eight",
            FaceValue::Nine => "Nine",
            FaceValue::Ten => "Ten",
            FaceValue::Jack => "Jack",
            FaceValue::Queen => "Queen",
            FaceValue::King => "King",
            FaceValue::Ace => "Ace",
        }
    }

    fn is_numeric(self) -> bool {
        self <= FaceValue::Ten
    }
}

impl Display for FaceValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl Serialize for FaceValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// A single playing card. Value-equal and immutable after construction.
// Ord on Card is only for stable sorting in tests and reports: suit
// declaration order, then face value. It carries no game meaning.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Card {
    pub suit: Suit,
    pub face_value: FaceValue,
}

impl Card {
    pub fn new(suit: Suit, face_value: FaceValue) -> Self {
        Self { suit, face_value }
    }

    /// Short display code: suit initial + number for Two..Ten ("H2", "S10"),
    /// suit initial + face initial for Jack..Ace ("CQ", "HA").
    pub fn code(&self) -> String {
        if self.face_value.is_numeric() {
            format!("{}{}", self.suit.initial(), self.face_value.value())
        } else {
            // name() never returns an empty string
            let face_initial = self.face_value.name().chars().next().unwrap_or('?');
            format!("{}{}", self.suit.initial(), face_initial)
        }
    }

    /// Numeric value for hand scoring.
    pub fn value(&self) -> u32 {
        self.face_value.value()
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} of {}", self.face_value, self.suit)
    }
}

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Card", 3)?;
        state.serialize_field("suit", &self.suit)?;
        state.serialize_field("face_value", &self.face_value)?;
        state.serialize_field("code", &self.code())?;
        state.end()
    }
}
