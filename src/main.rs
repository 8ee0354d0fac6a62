// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! FOLIO - Portfolio Showcase
//!
//! A cross-platform desktop application that presents a personal project
//! portfolio: a hero banner, a grid of project cards with media previews,
//! tag chips, and code links, plus a contact section. The light/dark
//! display mode persists across sessions.

mod app;
mod io;
mod models;
mod theme;
mod ui;

use anyhow::Result;
use app::FolioApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("FOLIO - Portfolio Showcase"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "FOLIO",
        options,
        Box::new(|cc| Ok(Box::new(FolioApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
