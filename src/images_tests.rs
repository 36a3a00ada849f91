//! Tests for card image loading.

use super::*;
use crate::error::ApiError;
use image::{ImageFormat, Rgba};
use std::cell::Cell;
use std::io::Cursor;
use tempfile::TempDir;

/// Serves a generated PNG for every URL except ones containing "missing"
struct StubSource {
    png: Vec<u8>,
    calls: Cell<usize>,
}

impl StubSource {
    fn new() -> Self {
        let img = RgbaImage::from_pixel(488, 680, Rgba([10, 20, 30, 255]));
        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        Self {
            png,
            calls: Cell::new(0),
        }
    }
}

impl ImageSource for StubSource {
    fn fetch_image(&self, url: &str) -> ApiResult<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        if url.contains("missing") {
            Err(ApiError::HttpStatus(reqwest::StatusCode::NOT_FOUND))
        } else if url.contains("garbage") {
            Ok(vec![1, 2, 3, 4])
        } else {
            Ok(self.png.clone())
        }
    }
}

fn card_with_image(name: &str, url: &str) -> Card {
    Card::new(name, "Instant", Some(url.to_string()))
}

#[test]
fn test_decode_resizes_to_card_size() {
    let source = StubSource::new();
    let img = decode_card_image(&source.png).unwrap();
    assert_eq!(img.dimensions(), (CARD_IMAGE_WIDTH, CARD_IMAGE_HEIGHT));
}

#[test]
fn test_decode_garbage_is_image_error() {
    assert!(matches!(
        decode_card_image(&[0, 1, 2, 3]),
        Err(ApiError::Image(_))
    ));
}

#[test]
fn test_fetch_image_cached_fetches_once() {
    let source = StubSource::new();
    let mut cache = ImageCache::new();

    fetch_image_cached(&mut cache, &source, "https://example.com/a.png").unwrap();
    fetch_image_cached(&mut cache, &source, "https://example.com/a.png").unwrap();

    assert_eq!(source.calls.get(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_fetch_failure_not_cached() {
    let source = StubSource::new();
    let mut cache = ImageCache::new();

    assert!(fetch_image_cached(&mut cache, &source, "https://example.com/missing.png").is_err());
    assert!(cache.is_empty());
}

#[test]
fn test_load_card_image_without_url() {
    let source = StubSource::new();
    let mut cache = ImageCache::new();
    let card = Card::fallback("Unknown");

    assert!(load_card_image(&mut cache, &source, &card).is_none());
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn test_load_card_image_failures_yield_none() {
    let source = StubSource::new();
    let mut cache = ImageCache::new();

    let missing = card_with_image("Missing", "https://example.com/missing.png");
    let garbage = card_with_image("Garbage", "https://example.com/garbage.png");

    assert!(load_card_image(&mut cache, &source, &missing).is_none());
    assert!(load_card_image(&mut cache, &source, &garbage).is_none());
}

#[test]
fn test_image_filename_sanitized() {
    assert_eq!(image_filename(0, "Jace, the Mind Sculptor"), "1_Jace__the_Mind_Sculptor.png");
    assert_eq!(image_filename(6, "Island"), "7_Island.png");
}

#[test]
fn test_save_hand_images_skips_cards_without_image() {
    let source = StubSource::new();
    let mut cache = ImageCache::new();
    let dir = TempDir::new().unwrap();

    let hand = vec![
        card_with_image("Island", "https://example.com/island.png"),
        Card::fallback("No Image"),
        card_with_image("Broken", "https://example.com/missing.png"),
        card_with_image("Island", "https://example.com/island.png"),
    ];

    let written = save_hand_images(&mut cache, &source, &hand, dir.path()).unwrap();
    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|p| p.exists()));
    assert!(written[0].ends_with("1_Island.png"));
    assert!(written[1].ends_with("4_Island.png"));

    let saved = image::open(&written[0]).unwrap();
    assert_eq!(saved.width(), CARD_IMAGE_WIDTH);
    assert_eq!(saved.height(), CARD_IMAGE_HEIGHT);
    // island.png fetched once, missing.png attempted once
    assert_eq!(source.calls.get(), 2);
}
