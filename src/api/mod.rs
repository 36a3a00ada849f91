//! Card data providers (Scryfall)

pub mod scryfall;

pub use scryfall::{ScryfallCard, ScryfallClient};

use crate::models::Card;

/// Type line used when the provider returned no type line
pub const DEFAULT_TYPE_LINE: &str = "Unknown";

/// Metadata resolved for a card name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub name: String,
    pub type_line: Option<String>,
    pub image_url: Option<String>,
}

/// Outcome of resolving one card name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardLookup {
    Found(CardData),
    /// Lookup failed; carries a human readable reason for the log
    Failed(String),
}

impl CardLookup {
    /// Turn the lookup into a card. A failed lookup gives the fallback card
    /// named after `requested_name`.
    pub fn into_card(self, requested_name: &str) -> Card {
        match self {
            CardLookup::Found(data) => Card::new(
                data.name,
                data.type_line.as_deref().unwrap_or(DEFAULT_TYPE_LINE),
                data.image_url,
            ),
            CardLookup::Failed(_) => Card::fallback(requested_name),
        }
    }
}

/// Resolves card names to card metadata
pub trait CardProvider {
    fn lookup(&self, name: &str) -> CardLookup;
}

impl<P: CardProvider + ?Sized> CardProvider for &P {
    fn lookup(&self, name: &str) -> CardLookup {
        (**self).lookup(name)
    }
}
