use crate::models::{Card, DecklistRow};
use crate::session::HandSummary;
use std::fmt::Write;

/// Format a drawn hand as a numbered list followed by the land summary
pub fn format_hand(hand: &[Card], summary: &HandSummary) -> String {
    let mut output = String::new();

    if hand.is_empty() {
        output.push_str("(empty hand)\n");
    }
    for (i, card) in hand.iter().enumerate() {
        let _ = writeln!(output, "{:>2}. {:<32} {}", i + 1, card.name(), card.type_line());
    }

    let _ = writeln!(output, "\n{}", summary.label);
    output
}

/// Format the full decklist in decklist file format plus a total line
pub fn format_decklist(rows: &[DecklistRow]) -> String {
    let mut output = String::new();
    for row in rows {
        let _ = writeln!(output, "{} {}", row.count, row.name);
    }
    let total: u32 = rows.iter().map(|r| r.count).sum();
    let _ = writeln!(output, "\nTotal cards: {}", total);
    output
}
