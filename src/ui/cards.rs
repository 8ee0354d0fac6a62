// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project card rendering.
//!
//! Each card shows a media preview area, title, description, tag chips, and
//! an optional code link. The media area is chosen by the variant selection
//! policy in `models::media` and degrades to a labeled placeholder when the
//! media failed to load.

use crate::app::CardState;
use crate::models::media::{select_variant, MediaVariant};
use crate::models::project::Project;
use crate::theme::{self, DisplayMode};
use crate::ui::embed;
use egui::{Align2, Color32, FontId, RichText};

/// Height of the media preview area inside a card.
pub const MEDIA_HEIGHT: f32 = 220.0;

/// What the card reported back to the page.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardResponse {
    /// An embedded-page preview was rendered this frame.
    pub embed_shown: bool,
    /// That preview currently holds keyboard focus.
    pub embed_focused: bool,
}

/// Display one project card.
pub fn show_project_card(
    ui: &mut egui::Ui,
    project: &Project,
    card: &mut CardState,
    mode: DisplayMode,
) -> CardResponse {
    let mut response = CardResponse::default();

    egui::Frame::default()
        .fill(theme::card_fill(mode))
        .stroke(egui::Stroke::new(1.0, theme::card_stroke(mode)))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            if project.has_media() {
                response = show_media_area(ui, project, card, mode);
                ui.add_space(10.0);
            }

            ui.label(
                RichText::new(&project.title)
                    .size(20.0)
                    .strong()
                    .color(theme::heading_text(mode)),
            );
            ui.add_space(6.0);
            ui.label(RichText::new(&project.description).color(theme::body_text(mode)));

            if !project.tags.is_empty() {
                ui.add_space(10.0);
                show_tags(ui, &project.tags, mode);
            }

            if let Some(url) = project.code_link() {
                ui.add_space(10.0);
                ui.hyperlink_to(RichText::new("View Code").color(theme::accent(mode)), url);
            }
        });

    response
}

/// Render the media preview area for the card's selected variant.
fn show_media_area(
    ui: &mut egui::Ui,
    project: &Project,
    card: &mut CardState,
    mode: DisplayMode,
) -> CardResponse {
    let mut response = CardResponse::default();

    match select_variant(project, card.media) {
        MediaVariant::EmbeddedPage(url) => {
            let preview = embed::show_preview(ui, url, card.embed, MEDIA_HEIGHT, mode);
            response.embed_shown = true;
            response.embed_focused = preview.has_focus();
            embed::show_open_link(ui, url, mode);
        }
        MediaVariant::StreamEmbed(url) => {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), MEDIA_HEIGHT),
                egui::Sense::hover(),
            );
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 6.0, theme::media_fill(mode));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "▶",
                FontId::proportional(48.0),
                Color32::WHITE,
            );
            ui.hyperlink_to(RichText::new("Watch video ↗").color(theme::accent(mode)), url);
        }
        MediaVariant::NativeVideo(_) => {
            if let Some(texture) = &card.poster {
                show_poster(ui, texture);
            } else {
                // Load still in flight; the app polls the loader channel.
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), MEDIA_HEIGHT),
                    egui::Sense::hover(),
                );
                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 6.0, theme::media_fill(mode));
                ui.put(rect, egui::Spinner::new());
            }
        }
        MediaVariant::Unavailable => {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), MEDIA_HEIGHT),
                egui::Sense::hover(),
            );
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 6.0, theme::media_fill(mode));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "Media unavailable",
                FontId::proportional(15.0),
                Color32::from_gray(220),
            );
        }
    }

    response
}

/// Draw a poster texture aspect-fit inside the media area.
fn show_poster(ui: &mut egui::Ui, texture: &egui::TextureHandle) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), MEDIA_HEIGHT),
        egui::Sense::hover(),
    );

    let tex_size = texture.size_vec2();
    let img_aspect = tex_size.x / tex_size.y;
    let area_aspect = rect.width() / rect.height();

    let (display_width, display_height) = if img_aspect > area_aspect {
        // Poster is wider - fit to width
        (rect.width(), rect.width() / img_aspect)
    } else {
        // Poster is taller - fit to height
        (rect.height() * img_aspect, rect.height())
    };

    let image_rect = egui::Rect::from_center_size(
        rect.center(),
        egui::vec2(display_width, display_height),
    );

    ui.painter_at(rect).image(
        texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        Color32::WHITE,
    );
}

/// Tag chips, wrapped across lines.
fn show_tags(ui: &mut egui::Ui, tags: &[String], mode: DisplayMode) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);
        for tag in tags {
            egui::Frame::NONE
                .fill(theme::tag_fill(mode))
                .corner_radius(10.0)
                .inner_margin(egui::Margin::symmetric(10, 3))
                .show(ui, |ui| {
                    ui.label(RichText::new(tag).size(12.0).color(theme::tag_text(mode)));
                });
        }
    });
}
