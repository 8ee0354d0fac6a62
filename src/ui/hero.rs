// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hero banner.
//!
//! Full-width banner with the hero media poster behind the owner's name and
//! tagline. When the hero media failed to load (or there is none), a plain
//! dark fill is used instead; text and navigation are unaffected.

use crate::app::CardState;
use crate::models::project::Catalog;
use egui::{Align2, Color32, FontId};

/// Banner height in points.
const HERO_HEIGHT: f32 = 420.0;

/// Navigation requested from the hero buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    ViewWork,
    Contact,
}

/// Display the hero banner. Returns a navigation action if a button was
/// clicked.
pub fn show(ui: &mut egui::Ui, catalog: &Catalog, hero: &CardState) -> Option<HeroAction> {
    let mut action = None;

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), HERO_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);

    if let Some(texture) = &hero.poster {
        // Cover-fit: fill the banner, cropping the poster via UV.
        let tex_size = texture.size_vec2();
        let img_aspect = tex_size.x / tex_size.y;
        let area_aspect = rect.width() / rect.height();

        let uv = if img_aspect > area_aspect {
            let visible = area_aspect / img_aspect;
            let margin = (1.0 - visible) / 2.0;
            egui::Rect::from_min_max(egui::pos2(margin, 0.0), egui::pos2(1.0 - margin, 1.0))
        } else {
            let visible = img_aspect / area_aspect;
            let margin = (1.0 - visible) / 2.0;
            egui::Rect::from_min_max(egui::pos2(0.0, margin), egui::pos2(1.0, 1.0 - margin))
        };

        painter.image(texture.id(), rect, uv, Color32::WHITE);
        // Darken so the text stays readable over bright footage.
        painter.rect_filled(rect, 0.0, Color32::from_black_alpha(110));
    } else {
        // Hero media missing or failed: flat fill.
        painter.rect_filled(rect, 0.0, Color32::from_rgb(17, 24, 39));
    }

    let text_origin = egui::pos2(rect.left() + 40.0, rect.center().y - 60.0);
    painter.text(
        text_origin,
        Align2::LEFT_CENTER,
        &catalog.owner,
        FontId::proportional(52.0),
        Color32::WHITE,
    );
    painter.text(
        text_origin + egui::vec2(0.0, 56.0),
        Align2::LEFT_CENTER,
        &catalog.tagline,
        FontId::proportional(24.0),
        Color32::from_gray(220),
    );

    // Navigation buttons, placed over the banner.
    let button_origin = egui::pos2(rect.left() + 40.0, rect.center().y + 50.0);
    let work_rect = egui::Rect::from_min_size(button_origin, egui::vec2(140.0, 36.0));
    let contact_rect =
        egui::Rect::from_min_size(button_origin + egui::vec2(152.0, 0.0), egui::vec2(140.0, 36.0));

    if ui.put(work_rect, egui::Button::new("View My Work")).clicked() {
        action = Some(HeroAction::ViewWork);
    }
    if ui.put(contact_rect, egui::Button::new("Contact Me")).clicked() {
        action = Some(HeroAction::Contact);
    }

    action
}
