use std::fmt;

/// Type line given to cards whose lookup failed
pub const UNKNOWN_TYPE_LINE: &str = "unknown";

/// One physical card in a deck or hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    name: String,
    type_line: String,
    image_url: Option<String>,
}

impl Card {
    /// Create a card. The type line is stored lowercased for matching.
    pub fn new(
        name: impl Into<String>,
        type_line: impl AsRef<str>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_line: type_line.as_ref().to_lowercase(),
            image_url,
        }
    }

    /// Degraded card used when the lookup for `name` failed
    pub fn fallback(name: impl Into<String>) -> Self {
        Self::new(name, UNKNOWN_TYPE_LINE, None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercased type line, e.g. "basic land — island"
    pub fn type_line(&self) -> &str {
        &self.type_line
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Returns true if "land" occurs anywhere in the type line.
    ///
    /// This is a plain substring test, so any type line containing the
    /// fragment matches.
    pub fn is_land(&self) -> bool {
        self.type_line.contains("land")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One `<count> <name>` line of a decklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecklistEntry {
    pub count: u32,
    pub name: String,
    /// 1-based line number in the source text
    pub line: usize,
}

/// One row of the full decklist view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecklistRow {
    pub name: String,
    pub count: u32,
    /// A card with this name, used for its image
    pub card: Card,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
