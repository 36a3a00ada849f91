//! Deck construction, shuffling and drawing

use crate::api::{CardLookup, CardProvider};
use crate::decklist::{parse_lines, total_count};
use crate::error::DeckResult;
use crate::models::{Card, DecklistEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of cards in an opening hand
pub const DEFAULT_HAND_SIZE: usize = 7;

/// How card names are resolved while building a deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStrategy {
    /// One lookup per distinct name, reused for every copy within one build
    #[default]
    PerName,
    /// One lookup for every physical copy
    PerCopy,
}

#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
    original_deck: Vec<Card>,
}

impl Deck {
    /// Build a deck from raw `<count> <name>` lines.
    ///
    /// Every line is parsed before any lookup happens, so a malformed line
    /// aborts the build without partial results.
    pub fn build<S: AsRef<str>, P: CardProvider>(
        decklist: &[S],
        provider: &P,
    ) -> DeckResult<Self> {
        let entries = parse_lines(decklist)?;
        Ok(Self::from_entries(&entries, provider, LookupStrategy::default()))
    }

    /// Build a deck from parsed entries, resolving each card through `provider`
    pub fn from_entries<P: CardProvider>(
        entries: &[DecklistEntry],
        provider: &P,
        strategy: LookupStrategy,
    ) -> Self {
        let mut cards = Vec::with_capacity(total_count(entries));
        let mut resolved: HashMap<&str, Card> = HashMap::new();

        for entry in entries {
            for _ in 0..entry.count {
                let card = match strategy {
                    LookupStrategy::PerCopy => resolve(provider, &entry.name),
                    LookupStrategy::PerName => resolved
                        .entry(entry.name.as_str())
                        .or_insert_with(|| resolve(provider, &entry.name))
                        .clone(),
                };
                cards.push(card);
            }
        }

        log::info!(
            "Built deck with {} cards from {} entries",
            cards.len(),
            entries.len()
        );
        Self::from_cards(cards)
    }

    /// Deck from already resolved cards
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            original_deck: cards.clone(),
            cards,
        }
    }

    /// Shuffle in place with the thread RNG
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffle in place with a uniform permutation drawn from `rng`
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return up to `hand_size` cards from the top, in order.
    /// Returns whatever is left when fewer remain.
    pub fn draw_hand(&mut self, hand_size: usize) -> Vec<Card> {
        let n = hand_size.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Put cards back at the bottom of the deck
    pub fn return_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards as they were right after the deck was built
    pub fn original_deck(&self) -> &[Card] {
        &self.original_deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn resolve<P: CardProvider>(provider: &P, name: &str) -> Card {
    let lookup = provider.lookup(name);
    if let CardLookup::Failed(ref reason) = lookup {
        log::warn!("Could not fetch {}, using default type: {}", name, reason);
    }
    lookup.into_card(name)
}

#[cfg(test)]
#[path = "deck_tests.rs"]
mod tests;
