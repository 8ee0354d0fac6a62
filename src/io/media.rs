// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media poster loading.
//!
//! Cards that reference a directly playable video file are previewed through
//! a poster frame image. This module resolves a media URL to the poster image
//! next to it and decodes the poster into RGBA pixels for display in egui.
//! Remote transports are never fetched; the presenter only reacts to the
//! resulting success or failure signal.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Image extensions accepted as poster frames, probed in order.
const POSTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp"];

/// Decoded poster image ready for texture upload.
pub struct LoadedPoster {
    pub width: u32,
    pub height: u32,
    /// RGBA, row-major, unmultiplied.
    pub pixels: Vec<u8>,
}

/// Map a media URL to the local poster image that previews it.
///
/// A URL that already names an image is used directly; a video file is
/// previewed through a sibling image with the same stem. Remote URLs are a
/// load failure here, not a fetch.
pub fn resolve_poster(media_url: &str) -> Result<PathBuf> {
    if media_url.starts_with("http://") || media_url.starts_with("https://") {
        bail!("remote media is not fetched: {}", media_url);
    }

    let path = Path::new(media_url);
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if POSTER_EXTENSIONS.contains(&extension.as_str()) {
        return Ok(path.to_path_buf());
    }

    for candidate_ext in POSTER_EXTENSIONS {
        let candidate = path.with_extension(candidate_ext);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    bail!("no poster image found for {}", media_url)
}

/// Decode a poster image from disk.
pub fn load_poster(path: &Path) -> Result<LoadedPoster> {
    let img = image::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedPoster {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Resolve and decode in one step; the background loader calls this.
pub fn load_poster_for(media_url: &str) -> Result<LoadedPoster> {
    let path = resolve_poster(media_url)?;
    let poster = load_poster(&path)?;
    log::info!(
        "Loaded poster {} ({}x{})",
        path.display(),
        poster.width,
        poster.height
    );
    Ok(poster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_remote_urls_are_rejected() {
        assert!(resolve_poster("https://example.com/video.mp4").is_err());
        assert!(resolve_poster("http://example.com/poster.png").is_err());
    }

    #[test]
    fn test_image_urls_resolve_to_themselves() {
        let resolved = resolve_poster("media/poster.PNG").unwrap();
        assert_eq!(resolved, PathBuf::from("media/poster.PNG"));
    }

    #[test]
    fn test_video_without_sibling_poster_fails() {
        let missing = env::temp_dir().join("folio_no_such_clip.mp4");
        assert!(resolve_poster(missing.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_video_resolves_to_sibling_poster() {
        let dir = env::temp_dir();
        let poster_path = dir.join("folio_sibling_test.png");
        let img = image::RgbaImage::from_pixel(4, 3, image::Rgba([10, 20, 30, 255]));
        img.save(&poster_path).unwrap();

        let video_path = dir.join("folio_sibling_test.mp4");
        let resolved = resolve_poster(video_path.to_str().unwrap()).unwrap();
        assert_eq!(resolved, poster_path);

        let _ = std::fs::remove_file(&poster_path);
    }

    #[test]
    fn test_load_poster_round_trip() {
        let poster_path = env::temp_dir().join("folio_load_test.png");
        let img = image::RgbaImage::from_pixel(8, 5, image::Rgba([200, 100, 50, 255]));
        img.save(&poster_path).unwrap();

        let poster = load_poster(&poster_path).unwrap();
        assert_eq!((poster.width, poster.height), (8, 5));
        assert_eq!(poster.pixels.len(), 8 * 5 * 4);
        assert_eq!(&poster.pixels[0..4], &[200, 100, 50, 255]);

        let _ = std::fs::remove_file(&poster_path);
    }

    #[test]
    fn test_load_poster_missing_file_fails() {
        let missing = env::temp_dir().join("folio_missing_poster.png");
        assert!(load_poster(&missing).is_err());
    }
}
