// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact card.
//!
//! Static mail-to and profile links; no request handling of any kind.

use crate::models::project::Catalog;
use crate::theme::{self, DisplayMode};
use egui::RichText;

/// Display the "Get In Touch" card.
pub fn show(ui: &mut egui::Ui, catalog: &Catalog, mode: DisplayMode) {
    egui::Frame::default()
        .fill(theme::card_fill(mode))
        .stroke(egui::Stroke::new(1.0, theme::card_stroke(mode)))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(
                    RichText::new("Get In Touch")
                        .size(24.0)
                        .strong()
                        .color(theme::heading_text(mode)),
                );
                ui.add_space(12.0);
                ui.label(
                    RichText::new("Let's collab - it'll be fun!")
                        .size(16.0)
                        .color(theme::body_text(mode)),
                );
                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    // Center the two links as a pair.
                    let spacing = (ui.available_width() - 260.0).max(0.0) / 2.0;
                    ui.add_space(spacing);
                    ui.hyperlink_to(
                        RichText::new("✉ Email Me").color(theme::accent(mode)),
                        format!("mailto:{}", catalog.email),
                    );
                    ui.add_space(24.0);
                    ui.hyperlink_to(
                        RichText::new("LinkedIn Profile").color(theme::accent(mode)),
                        &catalog.linkedin_url,
                    );
                });
                ui.add_space(24.0);
            });
        });
}
