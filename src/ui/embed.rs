// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Embedded page preview and keyboard forwarding bridge.
//!
//! Embeddable-page media is shown as a framed, focusable preview with an
//! outbound link. While a preview holds focus, left/right arrow presses on
//! the host window are consumed and redispatched into the preview's
//! navigation cursor, so keyboard-driven content keeps working. The bridge
//! is a scoped resource: attached when a preview gains focus, detached when
//! that preview leaves the display.

use crate::theme::{self, DisplayMode};
use egui::{Align2, Color32, FontId, RichText};

/// Navigation key redispatched into an embedded preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedKey {
    Left,
    Right,
}

/// One-directional key forwarding bridge, active for at most one card.
#[derive(Debug, Default)]
pub struct EmbedKeyBridge {
    active: Option<usize>,
}

impl EmbedKeyBridge {
    /// Attach the bridge to a card's preview. Re-attaching to the same card
    /// is a no-op.
    pub fn attach(&mut self, card_index: usize) {
        if self.active != Some(card_index) {
            log::debug!("Key bridge attached to card {}", card_index);
            self.active = Some(card_index);
        }
    }

    /// Release the bridge. Safe to call when already detached.
    pub fn detach(&mut self) {
        if let Some(card_index) = self.active.take() {
            log::debug!("Key bridge detached from card {}", card_index);
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Consume left/right arrows from host input and hand them to the
    /// active preview. A detached bridge forwards nothing.
    pub fn forward(&self, ctx: &egui::Context) -> Vec<EmbedKey> {
        if self.active.is_none() {
            return Vec::new();
        }

        let mut keys = Vec::new();
        ctx.input_mut(|input| {
            if input.consume_key(egui::Modifiers::NONE, egui::Key::ArrowLeft) {
                keys.push(EmbedKey::Left);
            }
            if input.consume_key(egui::Modifiers::NONE, egui::Key::ArrowRight) {
                keys.push(EmbedKey::Right);
            }
        });
        keys
    }
}

/// Display state of one embedded preview, scoped to the card instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbedCursor {
    page: usize,
}

impl EmbedCursor {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn apply(&mut self, key: EmbedKey) {
        match key {
            EmbedKey::Left => self.page = self.page.saturating_sub(1),
            EmbedKey::Right => self.page += 1,
        }
    }
}

/// Display a framed preview for an embedded page.
///
/// Returns the preview response; the caller uses focus/click to drive the
/// key bridge.
pub fn show_preview(
    ui: &mut egui::Ui,
    url: &str,
    cursor: EmbedCursor,
    height: f32,
    mode: DisplayMode,
) -> egui::Response {
    let desired = egui::vec2(ui.available_width(), height);
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, theme::media_fill(mode));

    let border = if response.has_focus() {
        egui::Stroke::new(2.0, theme::accent(mode))
    } else {
        egui::Stroke::new(1.0, theme::card_stroke(mode))
    };
    painter.rect_stroke(rect, 6.0, border, egui::StrokeKind::Inside);

    let host = host_of(url);
    painter.text(
        rect.center() - egui::vec2(0.0, 16.0),
        Align2::CENTER_CENTER,
        format!("🌐 {}", host),
        FontId::proportional(16.0),
        Color32::WHITE,
    );
    painter.text(
        rect.center() + egui::vec2(0.0, 8.0),
        Align2::CENTER_CENTER,
        format!("page {}", cursor.page() + 1),
        FontId::proportional(13.0),
        Color32::from_gray(200),
    );
    let hint = if response.has_focus() {
        "←/→ to navigate"
    } else {
        "click to focus"
    };
    painter.text(
        rect.center() + egui::vec2(0.0, 28.0),
        Align2::CENTER_CENTER,
        hint,
        FontId::proportional(11.0),
        Color32::from_gray(160),
    );

    if response.clicked() {
        response.request_focus();
    }

    response
}

/// Link row shown under an embedded preview.
pub fn show_open_link(ui: &mut egui::Ui, url: &str, mode: DisplayMode) {
    ui.horizontal(|ui| {
        ui.hyperlink_to(
            RichText::new("Open page ↗").color(theme::accent(mode)),
            url,
        );
    });
}

/// Host part of a URL, for display only.
fn host_of(url: &str) -> &str {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    without_scheme.split('/').next().unwrap_or(without_scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrow_event(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_detached_bridge_forwards_nothing() {
        let ctx = egui::Context::default();
        let mut input = egui::RawInput::default();
        input.events.push(arrow_event(egui::Key::ArrowRight));
        ctx.begin_pass(input);

        let bridge = EmbedKeyBridge::default();
        assert!(bridge.forward(&ctx).is_empty());
        let _ = ctx.end_pass();
    }

    #[test]
    fn test_attached_bridge_forwards_arrow_keys() {
        let ctx = egui::Context::default();
        let mut input = egui::RawInput::default();
        input.events.push(arrow_event(egui::Key::ArrowRight));
        input.events.push(arrow_event(egui::Key::ArrowLeft));
        ctx.begin_pass(input);

        let mut bridge = EmbedKeyBridge::default();
        bridge.attach(3);
        let keys = bridge.forward(&ctx);
        assert!(keys.contains(&EmbedKey::Left));
        assert!(keys.contains(&EmbedKey::Right));
        let _ = ctx.end_pass();
    }

    #[test]
    fn test_attach_detach_are_idempotent() {
        let mut bridge = EmbedKeyBridge::default();
        bridge.attach(1);
        bridge.attach(1);
        assert_eq!(bridge.active(), Some(1));
        bridge.attach(2);
        assert_eq!(bridge.active(), Some(2));
        bridge.detach();
        bridge.detach();
        assert_eq!(bridge.active(), None);
    }

    #[test]
    fn test_cursor_navigation_saturates_at_zero() {
        let mut cursor = EmbedCursor::default();
        cursor.apply(EmbedKey::Left);
        assert_eq!(cursor.page(), 0);
        cursor.apply(EmbedKey::Right);
        cursor.apply(EmbedKey::Right);
        assert_eq!(cursor.page(), 2);
        cursor.apply(EmbedKey::Left);
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("https://nickmski.github.io/intAniFinal/x.html"), "nickmski.github.io");
        assert_eq!(host_of("http://example.com"), "example.com");
        assert_eq!(host_of("example.com/page"), "example.com");
    }
}
