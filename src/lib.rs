//! MTG opening hand simulator
//!
//! Builds a deck from a text decklist, resolves every card against Scryfall
//! and simulates drawing opening hands with a shuffle-back mulligan.

pub mod api;
pub mod config;
pub mod deck;
pub mod decklist;
pub mod error;
pub mod formatters;
pub mod images;
pub mod models;
pub mod session;

// Re-export commonly used items
pub use api::{CardData, CardLookup, CardProvider, ScryfallCard, ScryfallClient};
pub use config::SimulatorConfig;
pub use deck::{Deck, LookupStrategy, DEFAULT_HAND_SIZE};
pub use decklist::{parse_decklist, read_decklist};
pub use error::{ApiError, ApiResult, DeckError, DeckResult};
pub use formatters::{format_decklist, format_hand};
pub use images::{load_card_image, save_hand_images, ImageCache};
pub use models::{Card, DecklistEntry, DecklistRow};
pub use session::{HandSummary, Simulator};
