// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Header bar.
//!
//! Catalog load/export controls on the left, the theme toggle on the right.
//! The toggle button is labeled with the mode it switches to.

use crate::theme::DisplayMode;
use std::path::PathBuf;

/// Result of user interaction with the header.
pub enum HeaderAction {
    /// User clicked the theme toggle.
    ToggleTheme,
    /// User picked a catalog file to load.
    LoadCatalog(PathBuf),
    /// User picked a destination to export the catalog to.
    ExportCatalog(PathBuf),
}

/// Display the header bar. Returns the user's action, if any.
pub fn show(ui: &mut egui::Ui, mode: DisplayMode) -> Option<HeaderAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("📁 Load Catalog...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Catalogs", &["yaml", "yml", "json"])
                .pick_file()
            {
                action = Some(HeaderAction::LoadCatalog(path));
            }
        }

        if ui.button("💾 Export Catalog...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("YAML", &["yaml", "yml"])
                .add_filter("JSON", &["json"])
                .set_file_name("portfolio.yaml")
                .save_file()
            {
                action = Some(HeaderAction::ExportCatalog(path));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = match mode {
                DisplayMode::Dark => "☀ Light",
                DisplayMode::Light => "🌙 Dark",
            };
            if ui.button(label).clicked() {
                action = Some(HeaderAction::ToggleTheme);
            }
        });
    });

    action
}
