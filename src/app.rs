// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait, owning the display mode, the catalog, and the
//! per-card presentation state, and coordinating between the UI
//! components and background poster loading.

use crate::io;
use crate::models::media::{select_variant, MediaLoadState, MediaVariant};
use crate::models::project::Catalog;
use crate::theme::{self, DisplayMode};
use crate::ui::{
    cards,
    contact,
    embed::{EmbedCursor, EmbedKeyBridge},
    header,
    hero,
};
use egui::RichText;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Which card a background poster load belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    Hero,
    Project(usize),
}

/// Per-card presentation state, scoped to one card instance's display.
///
/// Replacing the catalog discards these and starts fresh instances.
#[derive(Default)]
pub struct CardState {
    /// Two-state media load lifecycle; latches on failure.
    pub media: MediaLoadState,
    /// Uploaded poster texture, once a load succeeded.
    pub poster: Option<egui::TextureHandle>,
    /// A load attempt was issued. One attempt per card instance.
    pub load_started: bool,
    /// Navigation cursor for an embedded-page preview.
    pub embed: EmbedCursor,
}

/// Page sections reachable from hero navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Projects,
    Contact,
}

type PosterResult = (CardSlot, Result<io::media::LoadedPoster, String>);

/// Main application state.
pub struct FolioApp {
    /// Active display mode; single writer (the toggle), many readers
    mode: DisplayMode,
    /// False until the ambient signal has been consulted on the first frame
    mode_resolved: bool,
    /// A toggle happened and the preference has not been written back yet
    mode_dirty: bool,

    /// The catalog being displayed
    catalog: Catalog,
    /// Presentation state per project card, parallel to `catalog.projects`
    cards: Vec<CardState>,
    /// Presentation state for the hero banner media
    hero: CardState,

    /// Channel for background poster loading
    poster_tx: Sender<PosterResult>,
    poster_rx: Receiver<PosterResult>,

    /// Keyboard forwarding bridge for embedded previews
    bridge: EmbedKeyBridge,
    /// Pending scroll target from hero navigation
    scroll_to: Option<Section>,
}

impl FolioApp {
    /// Create the application, reading the stored theme preference if any.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let stored = theme::load_stored(cc.storage);
        let catalog = Catalog::builtin();
        let cards = (0..catalog.projects.len()).map(|_| CardState::default()).collect();
        let (poster_tx, poster_rx) = channel();

        Self {
            mode: stored.unwrap_or_default(),
            mode_resolved: stored.is_some(),
            mode_dirty: false,
            catalog,
            cards,
            hero: CardState::default(),
            poster_tx,
            poster_rx,
            bridge: EmbedKeyBridge::default(),
            scroll_to: None,
        }
    }

    /// Discard all per-card state; used when the catalog is replaced.
    fn reset_cards(&mut self) {
        self.cards = (0..self.catalog.projects.len())
            .map(|_| CardState::default())
            .collect();
        self.hero = CardState::default();
        self.bridge.detach();
    }

    /// Load a catalog file, replacing the current one on success.
    fn load_catalog(&mut self, path: PathBuf) {
        let extension = path.extension().and_then(|s| s.to_str());
        let result = match extension {
            Some("yaml") | Some("yml") => io::serialization::import_yaml(&path),
            Some("json") => io::serialization::import_json(&path),
            _ => {
                log::error!("Unsupported file extension: {:?}", extension);
                return;
            }
        };

        match result {
            Ok(catalog) => {
                log::info!(
                    "Loaded catalog with {} projects from {}",
                    catalog.projects.len(),
                    path.display()
                );
                self.catalog = catalog;
                self.reset_cards();
            }
            // A bad file leaves the current page untouched.
            Err(e) => log::error!("Failed to load catalog: {}", e),
        }
    }

    /// Export the catalog to a file.
    fn export_catalog(&self, path: PathBuf) {
        let extension = path.extension().and_then(|s| s.to_str());
        let result = match extension {
            Some("yaml") | Some("yml") => io::serialization::export_yaml(&self.catalog, &path),
            Some("json") => io::serialization::export_json(&self.catalog, &path),
            _ => {
                log::error!("Unsupported file extension: {:?}", extension);
                return;
            }
        };

        match result {
            Ok(_) => log::info!("Exported catalog to {}", path.display()),
            Err(e) => log::error!("Failed to export catalog: {}", e),
        }
    }

    fn slot_state_mut(&mut self, slot: CardSlot) -> Option<&mut CardState> {
        match slot {
            CardSlot::Hero => Some(&mut self.hero),
            CardSlot::Project(index) => self.cards.get_mut(index),
        }
    }

    /// Issue one background load attempt for a slot's media.
    fn spawn_poster_load(&self, slot: CardSlot, url: String) {
        let sender = self.poster_tx.clone();
        std::thread::spawn(move || {
            let result = io::media::load_poster_for(&url).map_err(|e| e.to_string());
            let _ = sender.send((slot, result));
        });
    }

    /// Kick off loads for cards that want native media and have not tried yet.
    fn start_pending_loads(&mut self) {
        if let Some(url) = self.catalog.hero_media.clone() {
            if !self.hero.load_started && !self.hero.media.has_failed() {
                self.hero.load_started = true;
                self.spawn_poster_load(CardSlot::Hero, url);
            }
        }

        for index in 0..self.catalog.projects.len() {
            let wants_load = matches!(
                select_variant(&self.catalog.projects[index], self.cards[index].media),
                MediaVariant::NativeVideo(_)
            );
            if wants_load && !self.cards[index].load_started {
                let url = self.catalog.projects[index]
                    .video_url
                    .clone()
                    .unwrap_or_default();
                self.cards[index].load_started = true;
                self.spawn_poster_load(CardSlot::Project(index), url);
            }
        }
    }

    /// Collect finished background loads: upload textures or latch failures.
    fn drain_poster_results(&mut self, ctx: &egui::Context) {
        while let Ok((slot, result)) = self.poster_rx.try_recv() {
            match result {
                Ok(poster) => {
                    let size = [poster.width as usize, poster.height as usize];
                    let color_image =
                        egui::ColorImage::from_rgba_unmultiplied(size, &poster.pixels);
                    let texture = ctx.load_texture(
                        format!("poster_{:?}", slot),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    if let Some(state) = self.slot_state_mut(slot) {
                        state.poster = Some(texture);
                    }
                }
                Err(e) => {
                    // Failure is isolated to this card; nothing else reacts.
                    log::error!("Media load error for {:?}: {}", slot, e);
                    if let Some(state) = self.slot_state_mut(slot) {
                        state.media.mark_failed();
                    }
                }
            }
        }
    }

    /// Whether any issued load has neither delivered a poster nor failed yet.
    fn loads_in_flight(&self) -> bool {
        let pending = |state: &CardState| {
            state.load_started && state.poster.is_none() && !state.media.has_failed()
        };
        pending(&self.hero) || self.cards.iter().any(pending)
    }

    fn handle_header_action(&mut self, action: header::HeaderAction) {
        match action {
            header::HeaderAction::ToggleTheme => {
                self.mode = self.mode.toggle();
                self.mode_dirty = true;
                log::info!("Display mode toggled to {}", self.mode.as_str());
            }
            header::HeaderAction::LoadCatalog(path) => self.load_catalog(path),
            header::HeaderAction::ExportCatalog(path) => self.export_catalog(path),
        }
    }
}

impl eframe::App for FolioApp {
    /// Called on shutdown and periodically; keeps the stored preference
    /// equal to the in-memory mode.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        theme::persist(storage, self.mode);
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Startup resolution: no stored preference, so consult the ambient
        // system signal once; absence of both means dark.
        if !self.mode_resolved {
            self.mode = theme::resolve_initial(None, theme::ambient_mode(ctx));
            self.mode_resolved = true;
        }

        theme::apply(ctx, self.mode);

        self.drain_poster_results(ctx);
        self.start_pending_loads();

        // Keep repainting while posters are loading (to update spinners)
        if self.loads_in_flight() {
            ctx.request_repaint();
        }

        // Redispatch arrow keys into the active embedded preview.
        let forwarded = self.bridge.forward(ctx);
        if let Some(index) = self.bridge.active() {
            if let Some(card) = self.cards.get_mut(index) {
                for key in forwarded {
                    card.embed.apply(key);
                }
            } else {
                self.bridge.detach();
            }
        }

        // Header bar
        let header_action = egui::TopBottomPanel::top("header")
            .show(ctx, |ui| header::show(ui, self.mode))
            .inner;
        if let Some(action) = header_action {
            self.handle_header_action(action);
        }

        // Write the preference back right after a toggle. Best-effort: a
        // missing store is a silent no-op.
        if self.mode_dirty {
            if let Some(storage) = frame.storage_mut() {
                theme::persist(storage, self.mode);
            }
            self.mode_dirty = false;
        }

        // Page body
        let page_frame = egui::Frame::default().fill(theme::page_fill(self.mode));
        let mut embed_shown: Option<usize> = None;

        egui::CentralPanel::default().frame(page_frame).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| {
                    if let Some(action) = hero::show(ui, &self.catalog, &self.hero) {
                        self.scroll_to = Some(match action {
                            hero::HeroAction::ViewWork => Section::Projects,
                            hero::HeroAction::Contact => Section::Contact,
                        });
                    }

                    ui.add_space(32.0);

                    let projects_heading = ui.label(
                        RichText::new("Featured Projects")
                            .size(30.0)
                            .strong()
                            .color(theme::heading_text(self.mode)),
                    );
                    if self.scroll_to == Some(Section::Projects) {
                        projects_heading.scroll_to_me(Some(egui::Align::Min));
                        self.scroll_to = None;
                    }
                    ui.add_space(16.0);

                    // Two-column card grid
                    let mode = self.mode;
                    let catalog = &self.catalog;
                    let card_states = &mut self.cards;
                    ui.columns(2, |columns| {
                        for (index, project) in catalog.projects.iter().enumerate() {
                            let column = &mut columns[index % 2];
                            let response = cards::show_project_card(
                                column,
                                project,
                                &mut card_states[index],
                                mode,
                            );
                            if response.embed_shown && embed_shown.is_none() {
                                embed_shown = Some(index);
                            }
                            column.add_space(16.0);
                        }
                    });

                    ui.add_space(24.0);
                    let contact_heading = ui.label(
                        RichText::new("Get In Touch")
                            .size(30.0)
                            .strong()
                            .color(theme::heading_text(self.mode)),
                    );
                    if self.scroll_to == Some(Section::Contact) {
                        contact_heading.scroll_to_me(Some(egui::Align::Min));
                        self.scroll_to = None;
                    }
                    ui.add_space(16.0);
                    contact::show(ui, &self.catalog, self.mode);

                    // Footer
                    ui.add_space(32.0);
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("© 2025 {}", self.catalog.owner))
                                .color(theme::dim_text(self.mode)),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.hyperlink_to(
                                    RichText::new("LinkedIn")
                                        .color(theme::dim_text(self.mode)),
                                    &self.catalog.linkedin_url,
                                );
                                ui.hyperlink_to(
                                    RichText::new("GitHub")
                                        .color(theme::dim_text(self.mode)),
                                    &self.catalog.github_url,
                                );
                            },
                        );
                    });
                    ui.add_space(16.0);
                });
        });

        // The bridge lives exactly as long as an embedded preview is on
        // screen: attach to the first one shown, release when none remain.
        match embed_shown {
            Some(index) => self.bridge.attach(index),
            None => self.bridge.detach(),
        }
    }
}
