//! Unit tests for card display codes and numeric values.

use crate::domain::{Card, FaceValue, Suit};

#[test]
fn numeric_face_values_render_as_suit_initial_plus_number() {
    assert_eq!(Card::new(Suit::Hearts, FaceValue::Two).code(), "H2");
    assert_eq!(Card::new(Suit::Diamonds, FaceValue::Seven).code(), "D7");
    assert_eq!(Card::new(Suit::Spades, FaceValue::Ten).code(), "S10");
}

#[test]
fn court_cards_and_aces_render_as_two_initials() {
    assert_eq!(Card::new(Suit::Hearts, FaceValue::Ace).code(), "HA");
    assert_eq!(Card::new(Suit::Clubs, FaceValue::Jack).code(), "CJ");
    assert_eq!(Card::new(Suit::Clubs, FaceValue::Queen).code(), "CQ");
    assert_eq!(Card::new(Suit::Spades, FaceValue::King).code(), "SK");
}

#[test]
fn display_renders_face_of_suit() {
    let card = Card::new(Suit::Diamonds, FaceValue::Queen);
    assert_eq!(card.to_string(), "Queen of Diamonds");
}

#[test]
fn face_values_ascend_from_two_to_ace() {
    assert_eq!(FaceValue::Two.value(), 2);
    assert_eq!(FaceValue::Ten.value(), 10);
    assert_eq!(FaceValue::Jack.value(), 11);
    assert_eq!(FaceValue::Queen.value(), 12);
    assert_eq!(FaceValue::King.value(), 13);
    assert_eq!(FaceValue::Ace.value(), 14);

    let mut previous = 0;
    for face_value in FaceValue::ALL {
        assert!(face_value.value() > previous);
        previous = face_value.value();
    }
}

#[test]
fn cards_are_value_equal() {
    let a = Card::new(Suit::Hearts, FaceValue::Five);
    let b = Card::new(Suit::Hearts, FaceValue::Five);
    let c = Card::new(Suit::Spades, FaceValue::Five);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn card_serializes_with_code() {
    let card = Card::new(Suit::Hearts, FaceValue::Ace);
    let json = serde_json::to_value(card).unwrap();
    assert_eq!(json["suit"], "Hearts");
    assert_eq!(json["face_value"], "Ace");
    assert_eq!(json["code"], "HA");
}
