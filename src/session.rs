//! Simulator session: the current deck, the last hand and mulligan flow

use crate::api::CardProvider;
use crate::config::SimulatorConfig;
use crate::deck::Deck;
use crate::decklist::{parse_lines, read_decklist};
use crate::error::DeckResult;
use crate::models::{Card, DecklistEntry, DecklistRow};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Land count of a hand plus the label shown for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSummary {
    pub land_count: usize,
    pub label: String,
}

impl HandSummary {
    pub fn for_hand(hand: &[Card]) -> Self {
        let land_count = hand.iter().filter(|c| c.is_land()).count();
        let label = if land_count == 0 {
            "No Lander hander!".to_string()
        } else {
            format!("Lands in Hand: {land_count}")
        };
        Self { land_count, label }
    }
}

/// Application state for one simulator run
pub struct Simulator<P> {
    provider: P,
    config: SimulatorConfig,
    rng: StdRng,
    deck: Option<Deck>,
    previous_hand: Vec<Card>,
}

impl<P: CardProvider> Simulator<P> {
    pub fn new(provider: P, config: SimulatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            provider,
            config,
            rng,
            deck: None,
            previous_hand: Vec::new(),
        }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Load a decklist file and draw the first hand
    pub fn load_file<Q: AsRef<Path>>(&mut self, path: Q) -> DeckResult<&[Card]> {
        let entries = read_decklist(path)?;
        Ok(self.load_entries(&entries))
    }

    /// Load decklist lines and draw the first hand.
    /// A malformed line leaves the current deck untouched.
    pub fn load_decklist<S: AsRef<str>>(&mut self, lines: &[S]) -> DeckResult<&[Card]> {
        let entries = parse_lines(lines)?;
        Ok(self.load_entries(&entries))
    }

    /// Replace the deck with one built from `entries`, shuffle and draw
    pub fn load_entries(&mut self, entries: &[DecklistEntry]) -> &[Card] {
        let mut deck = Deck::from_entries(entries, &self.provider, self.config.lookup_strategy);
        deck.shuffle_with(&mut self.rng);
        self.deck = Some(deck);
        self.previous_hand.clear();
        self.draw().unwrap_or_default()
    }

    /// Shuffle the previous hand back in and draw a new one.
    /// Does nothing and returns `None` when no deck is loaded or there are
    /// no cards in either the deck or the previous hand.
    pub fn draw(&mut self) -> Option<&[Card]> {
        let deck = self.deck.as_mut()?;
        if deck.is_empty() && self.previous_hand.is_empty() {
            return None;
        }

        if !self.previous_hand.is_empty() {
            deck.return_cards(self.previous_hand.drain(..));
        }
        deck.shuffle_with(&mut self.rng);
        self.previous_hand = deck.draw_hand(self.config.hand_size);

        log::debug!(
            "Drew {} cards, {} left in deck",
            self.previous_hand.len(),
            deck.len()
        );
        Some(self.previous_hand.as_slice())
    }

    pub fn is_loaded(&self) -> bool {
        self.deck.is_some()
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    /// The most recently drawn hand
    pub fn hand(&self) -> &[Card] {
        &self.previous_hand
    }

    pub fn land_count(&self) -> usize {
        self.hand_summary().land_count
    }

    pub fn hand_summary(&self) -> HandSummary {
        HandSummary::for_hand(&self.previous_hand)
    }

    /// Copy count per name over the deck and the hand held out of it.
    ///
    /// Rows follow first appearance in the deck, then names only found in
    /// the hand. Empty when no deck is loaded or the deck has no cards left.
    pub fn full_decklist(&self) -> Vec<DecklistRow> {
        match &self.deck {
            Some(deck) if !deck.is_empty() => self.aggregate(deck),
            _ => Vec::new(),
        }
    }

    fn aggregate(&self, deck: &Deck) -> Vec<DecklistRow> {
        let mut rows: Vec<DecklistRow> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for card in deck.cards().iter().chain(self.previous_hand.iter()) {
            match index.get(card.name()) {
                Some(&i) => rows[i].count += 1,
                None => {
                    index.insert(card.name(), rows.len());
                    rows.push(DecklistRow {
                        name: card.name().to_string(),
                        count: 1,
                        card: card.clone(),
                    });
                }
            }
        }
        rows
    }

    /// Name to copy count map over the deck and the held hand.
    /// Unlike `full_decklist`, still counts when the deck itself is empty.
    pub fn counts(&self) -> BTreeMap<String, u32> {
        let Some(deck) = &self.deck else {
            return BTreeMap::new();
        };
        self.aggregate(deck)
            .into_iter()
            .map(|row| (row.name, row.count))
            .collect()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
