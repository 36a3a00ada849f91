use super::{CardData, CardLookup, CardProvider};
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";
pub const USER_AGENT: &str = "Deck-Sim/1.0";

/// Scryfall card response (only the fields the simulator uses)
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScryfallCard {
    pub name: String,
    #[serde(default)]
    pub type_line: Option<String>,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    /// For double-faced cards, images are in card_faces
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CardFace {
    pub name: String,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub type_line: Option<String>,
}

impl ScryfallCard {
    /// Get the primary image URL (normal size)
    pub fn image_url(&self) -> Option<&str> {
        // Try direct image_uris first
        if let Some(ref uris) = self.image_uris {
            return uris.normal.as_deref();
        }
        // For double-faced cards, get front face image
        self.card_faces
            .as_ref()
            .and_then(|faces| faces.first())
            .and_then(|face| face.image_uris.as_ref())
            .and_then(|uris| uris.normal.as_deref())
    }
}

impl From<ScryfallCard> for CardData {
    fn from(card: ScryfallCard) -> Self {
        let image_url = card.image_url().map(str::to_string);
        CardData {
            name: card.name,
            type_line: card.type_line,
            image_url,
        }
    }
}

/// Scryfall API error response
#[derive(Debug, Deserialize)]
pub struct ScryfallError {
    pub status: u16,
    pub code: String,
    pub details: String,
}

/// Blocking Scryfall client for exact name lookups
#[derive(Debug, Clone)]
pub struct ScryfallClient {
    base_url: String,
    user_agent: String,
    http: reqwest::blocking::Client,
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ScryfallClient {
    pub fn new() -> Self {
        Self::with_base_url(SCRYFALL_API_URL)
    }

    /// Client against another host, e.g. a mock server
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_agent: USER_AGENT.to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a card by its exact name
    pub fn fetch_card_named(&self, name: &str) -> ApiResult<ScryfallCard> {
        let url = format!(
            "{}/cards/named?exact={}",
            self.base_url,
            urlencoding::encode(name)
        );

        log::info!("Fetching card from Scryfall: {}", name);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if status.is_success() {
            return Ok(serde_json::from_str::<ScryfallCard>(&body)?);
        }

        match serde_json::from_str::<ScryfallError>(&body) {
            Ok(error) => Err(ApiError::ApiResponse {
                code: error.code,
                details: error.details,
            }),
            Err(_) => Err(ApiError::HttpStatus(status)),
        }
    }

    /// Fetch image bytes through this client
    pub fn fetch_image(&self, url: &str) -> ApiResult<Vec<u8>> {
        log::debug!("Fetching image: {}", url);

        let response = self
            .http
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()?;

        if response.status().is_success() {
            Ok(response.bytes()?.to_vec())
        } else {
            Err(ApiError::HttpStatus(response.status()))
        }
    }
}

impl CardProvider for ScryfallClient {
    fn lookup(&self, name: &str) -> CardLookup {
        match self.fetch_card_named(name) {
            Ok(card) => CardLookup::Found(card.into()),
            Err(e) => {
                log::debug!("Scryfall lookup for {} failed: {:?}", name, e);
                CardLookup::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
