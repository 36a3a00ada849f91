//! Card image retrieval, decoding and resizing

use crate::api::ScryfallClient;
use crate::error::ApiResult;
use crate::models::Card;
use image::imageops::FilterType;
use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Display size of a card image in pixels
pub const CARD_IMAGE_WIDTH: u32 = 200;
pub const CARD_IMAGE_HEIGHT: u32 = 280;

/// Something that can download image bytes
pub trait ImageSource {
    fn fetch_image(&self, url: &str) -> ApiResult<Vec<u8>>;
}

impl ImageSource for ScryfallClient {
    fn fetch_image(&self, url: &str) -> ApiResult<Vec<u8>> {
        ScryfallClient::fetch_image(self, url)
    }
}

/// In-memory image cache for one session, keyed by image URL
#[derive(Debug, Default)]
pub struct ImageCache {
    images: HashMap<String, Vec<u8>>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<&[u8]> {
        self.images.get(url).map(Vec::as_slice)
    }

    pub fn insert(&mut self, url: &str, bytes: Vec<u8>) {
        self.images.insert(url.to_string(), bytes);
    }

    pub fn contains(&self, url: &str) -> bool {
        self.images.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Fetch an image, checking the cache first
pub fn fetch_image_cached<'a, S: ImageSource>(
    cache: &'a mut ImageCache,
    source: &S,
    url: &str,
) -> ApiResult<&'a [u8]> {
    if !cache.contains(url) {
        log::debug!("Image cache miss for {}", url);
        let bytes = source.fetch_image(url)?;
        cache.insert(url, bytes);
    }
    Ok(cache.get(url).unwrap_or_default())
}

/// Decode image bytes and resize them to the card display size
pub fn decode_card_image(bytes: &[u8]) -> ApiResult<RgbaImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(img
        .resize_exact(CARD_IMAGE_WIDTH, CARD_IMAGE_HEIGHT, FilterType::Triangle)
        .to_rgba8())
}

/// Load the display image of a card.
///
/// Returns `None` when the card has no image or the image could not be
/// fetched or decoded; the card is then shown without one.
pub fn load_card_image<S: ImageSource>(
    cache: &mut ImageCache,
    source: &S,
    card: &Card,
) -> Option<RgbaImage> {
    let url = card.image_url()?;
    let result = fetch_image_cached(cache, source, url).and_then(decode_card_image);
    match result {
        Ok(img) => Some(img),
        Err(e) => {
            log::warn!("Error loading image for {}: {}", card.name(), e);
            None
        }
    }
}

/// File name for the card image at `index` in a hand
fn image_filename(index: usize, name: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}_{}.png", index + 1, safe)
}

/// Write the resized images of a hand into `dir` as PNG files.
///
/// Cards without a usable image are skipped. Returns the written paths.
pub fn save_hand_images<S: ImageSource>(
    cache: &mut ImageCache,
    source: &S,
    hand: &[Card],
    dir: &Path,
) -> ApiResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for (i, card) in hand.iter().enumerate() {
        let Some(img) = load_card_image(cache, source, card) else {
            continue;
        };
        let path = dir.join(image_filename(i, card.name()));
        match img.save(&path) {
            Ok(()) => {
                log::debug!("Saved image for {} to {}", card.name(), path.display());
                written.push(path);
            }
            Err(e) => log::warn!("Failed to save image for {}: {}", card.name(), e),
        }
    }

    log::info!("Saved {} of {} hand images", written.len(), hand.len());
    Ok(written)
}

#[cfg(test)]
#[path = "images_tests.rs"]
mod tests;
