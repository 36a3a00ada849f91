//! Tests for the card model.

use super::*;

#[test]
fn test_type_line_is_lowercased() {
    let card = Card::new("Island", "Basic Land — Island", None);
    assert_eq!(card.type_line(), "basic land — island");
}

#[test]
fn test_is_land_basic() {
    let card = Card::new("Island", "Basic Land — Island", None);
    assert!(card.is_land());
}

#[test]
fn test_is_land_false_for_creature() {
    let card = Card::new("Grizzly Bears", "Creature — Bear", None);
    assert!(!card.is_land());
}

#[test]
fn test_is_land_matches_substring_fragment() {
    // "Landfall" style fragments match too; the check is substring based
    let card = Card::new("Oddity", "Creature — Landwalker", None);
    assert!(card.is_land());
}

#[test]
fn test_is_land_artifact_land() {
    let card = Card::new("Seat of the Synod", "Artifact Land", None);
    assert!(card.is_land());
}

#[test]
fn test_fallback_card() {
    let card = Card::fallback("Nonexistent Card");
    assert_eq!(card.name(), "Nonexistent Card");
    assert_eq!(card.type_line(), UNKNOWN_TYPE_LINE);
    assert!(card.image_url().is_none());
    assert!(!card.is_land());
}

#[test]
fn test_display_is_name() {
    let card = Card::new(
        "Lightning Bolt",
        "Instant",
        Some("https://example.com/bolt.jpg".to_string()),
    );
    assert_eq!(card.to_string(), "Lightning Bolt");
    assert_eq!(card.image_url(), Some("https://example.com/bolt.jpg"));
}
