// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media presentation state and variant selection.
//!
//! Each card instance tracks a two-state load lifecycle for its media and
//! picks one of four presentation variants from it. Degradation is one-way:
//! a card that fails never attempts to reload its source.

use super::project::Project;

/// Hosts whose video URLs are shown as stream previews instead of being
/// loaded as local media.
const STREAMING_HOSTS: &[&str] = &["youtube.com", "youtu.be"];

/// Load lifecycle of one card's media.
///
/// There is deliberately no "loaded" state; a card is either still eligible
/// to show its media or it has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaLoadState {
    #[default]
    Loading,
    Failed,
}

impl MediaLoadState {
    /// Latch the failed state. Transitions happen at most once and never back.
    pub fn mark_failed(&mut self) {
        *self = MediaLoadState::Failed;
    }

    pub fn has_failed(self) -> bool {
        matches!(self, MediaLoadState::Failed)
    }
}

/// How a card's media area is presented for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaVariant<'a> {
    /// Embedded third-party page, shown in a framed preview. No fallback.
    EmbeddedPage(&'a str),
    /// Video on a known streaming host, shown as a framed preview with an
    /// outbound watch link. No fallback.
    StreamEmbed(&'a str),
    /// Directly playable video file, previewed through its poster frame.
    NativeVideo(&'a str),
    /// No media at all, or the media failed to load.
    Unavailable,
}

/// Whether a video URL points at a known streaming host.
pub fn is_streaming_host(url: &str) -> bool {
    STREAMING_HOSTS.iter().any(|host| url.contains(host))
}

/// Select the presentation variant for a card.
///
/// Evaluated strictly in order:
/// 1. embeddable-page URL wins over everything else;
/// 2. stream-hosted video URLs become stream previews;
/// 3. other video URLs play natively while the load state allows it;
/// 4. everything else is the unavailable placeholder.
pub fn select_variant<'a>(project: &'a Project, state: MediaLoadState) -> MediaVariant<'a> {
    if let Some(url) = project.iframe_url.as_deref() {
        return MediaVariant::EmbeddedPage(url);
    }

    if let Some(url) = project.video_url.as_deref() {
        if is_streaming_host(url) {
            return MediaVariant::StreamEmbed(url);
        }
        if !state.has_failed() {
            return MediaVariant::NativeVideo(url);
        }
    }

    MediaVariant::Unavailable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(video_url: Option<&str>, iframe_url: Option<&str>) -> Project {
        Project {
            id: 1,
            title: "Test".to_string(),
            description: String::new(),
            video_url: video_url.map(str::to_string),
            iframe_url: iframe_url.map(str::to_string),
            code_url: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_iframe_wins_over_video() {
        let p = project(Some("https://www.youtube.com/embed/abc"), Some("https://example.com/game"));
        assert_eq!(
            select_variant(&p, MediaLoadState::Loading),
            MediaVariant::EmbeddedPage("https://example.com/game")
        );
        // Even after a failure elsewhere, the embedded page has no fallback path.
        assert_eq!(
            select_variant(&p, MediaLoadState::Failed),
            MediaVariant::EmbeddedPage("https://example.com/game")
        );
    }

    #[test]
    fn test_streaming_host_becomes_stream_embed() {
        let p = project(Some("https://www.youtube.com/embed/abc"), None);
        assert_eq!(
            select_variant(&p, MediaLoadState::Loading),
            MediaVariant::StreamEmbed("https://www.youtube.com/embed/abc")
        );
        // Stream previews ignore the load state.
        assert_eq!(
            select_variant(&p, MediaLoadState::Failed),
            MediaVariant::StreamEmbed("https://www.youtube.com/embed/abc")
        );

        let short = project(Some("https://youtu.be/abc"), None);
        assert!(matches!(
            select_variant(&short, MediaLoadState::Loading),
            MediaVariant::StreamEmbed(_)
        ));
    }

    #[test]
    fn test_native_video_while_loading_then_placeholder_after_failure() {
        let p = project(Some("media/demo.mp4"), None);
        assert_eq!(
            select_variant(&p, MediaLoadState::Loading),
            MediaVariant::NativeVideo("media/demo.mp4")
        );
        assert_eq!(select_variant(&p, MediaLoadState::Failed), MediaVariant::Unavailable);
    }

    #[test]
    fn test_no_media_is_unavailable_immediately() {
        let p = project(None, None);
        assert_eq!(select_variant(&p, MediaLoadState::Loading), MediaVariant::Unavailable);
    }

    #[test]
    fn test_failed_state_latches() {
        let mut state = MediaLoadState::default();
        assert!(!state.has_failed());
        state.mark_failed();
        assert!(state.has_failed());
        // A second failure report changes nothing; there is no way back.
        state.mark_failed();
        assert!(state.has_failed());
    }
}
