// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Display mode (light/dark) state, resolution, and persistence.
//!
//! The display mode is owned by the application, mutated only by the toggle
//! control, and read by every display component. It is resolved once at
//! startup from the stored preference, then the ambient system theme, then
//! a dark default, and written back to storage on every change.

use egui::Color32;

/// Storage key for the persisted preference.
pub const THEME_KEY: &str = "theme_preference";

/// The active visual theme. Always exactly one of two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Dark,
    Light,
}

impl DisplayMode {
    /// The opposite mode. Pure; persisting is the caller's job.
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::Dark => DisplayMode::Light,
            DisplayMode::Light => DisplayMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, DisplayMode::Dark)
    }

    /// Stable string form used in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Dark => "dark",
            DisplayMode::Light => "light",
        }
    }

    /// Parse the stored string form. Unknown values are treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(DisplayMode::Dark),
            "light" => Some(DisplayMode::Light),
            _ => None,
        }
    }
}

/// Resolve the initial display mode.
///
/// A stored preference always wins over the ambient signal; absence of both
/// resolves to dark. Total, no error conditions.
pub fn resolve_initial(stored: Option<DisplayMode>, ambient: Option<DisplayMode>) -> DisplayMode {
    stored.or(ambient).unwrap_or_default()
}

/// Read the stored preference, if any.
pub fn load_stored(storage: Option<&dyn eframe::Storage>) -> Option<DisplayMode> {
    storage
        .and_then(|s| s.get_string(THEME_KEY))
        .and_then(|value| DisplayMode::parse(&value))
}

/// Overwrite the stored preference unconditionally.
pub fn persist(storage: &mut dyn eframe::Storage, mode: DisplayMode) {
    storage.set_string(THEME_KEY, mode.as_str().to_string());
    storage.flush();
}

/// The ambient system color-scheme signal, when the platform reports one.
pub fn ambient_mode(ctx: &egui::Context) -> Option<DisplayMode> {
    ctx.input(|i| i.raw.system_theme).map(|theme| match theme {
        egui::Theme::Dark => DisplayMode::Dark,
        egui::Theme::Light => DisplayMode::Light,
    })
}

/// Apply the mode to the egui context.
///
/// All widget styling flows from here so that theming is never partial.
pub fn apply(ctx: &egui::Context, mode: DisplayMode) {
    let mut visuals = if mode.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = page_fill(mode);
    visuals.hyperlink_color = accent(mode);
    ctx.set_visuals(visuals);
}

// Color roles derived from the display mode. Single source of truth for
// the page, cards, and tag chips.

pub fn page_fill(mode: DisplayMode) -> Color32 {
    match mode {
        DisplayMode::Dark => Color32::from_rgb(8, 8, 8),
        DisplayMode::Light => Color32::from_rgb(249, 250, 251),
    }
}

pub fn card_fill(mode: DisplayMode) -> Color32 {
    match mode {
        DisplayMode::Dark => Color32::from_rgb(17, 24, 39),
        DisplayMode::Light => Color32::WHITE,
    }
}

pub fn card_stroke(mode: DisplayMode) -> Color32 {
    match mode {
        DisplayMode::Dark => Color32::from_rgb(31, 41, 55),
        DisplayMode::Light => Color32::from_rgb(229, 231, 235),
    }
}

pub fn heading_text(mode: DisplayMode) -> Color32 {
    match mode {
        DisplayMode::Dark => Color32::WHITE,
        DisplayMode::Light => Color32::from_rgb(17, 24, 39),
    }
}

pub fn body_text(mode: DisplayMode) -> Color32 {
    match mode {
        DisplayMode::Dark => Color32::from_rgb(209, 213, 219),
        DisplayMode::Light => Color32::from_rgb(75, 85, 99),
    }
}

pub fn dim_text(mode: DisplayMode) -> Color32 {
    match mode {
        DisplayMode::Dark => Color32::from_rgb(156, 163, 175),
        DisplayMode::Light => Color32::from_rgb(107, 114, 128),
    }
}

pub fn tag_fill(mode: DisplayMode) -> Color32 {
    match mode {
        DisplayMode::Dark => Color32::from_rgb(30, 58, 138),
        DisplayMode::Light => Color32::from_rgb(219, 234, 254),
    }
}

pub fn tag_text(mode: DisplayMode) -> Color32 {
    match mode {
        DisplayMode::Dark => Color32::from_rgb(219, 234, 254),
        DisplayMode::Light => Color32::from_rgb(30, 64, 175),
    }
}

pub fn accent(mode: DisplayMode) -> Color32 {
    match mode {
        DisplayMode::Dark => Color32::from_rgb(96, 165, 250),
        DisplayMode::Light => Color32::from_rgb(37, 99, 235),
    }
}

/// Fill used behind media placeholders and the hero fallback.
pub fn media_fill(mode: DisplayMode) -> Color32 {
    match mode {
        DisplayMode::Dark => Color32::from_rgb(31, 41, 55),
        DisplayMode::Light => Color32::from_rgb(55, 65, 81),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use std::collections::HashMap;

    /// In-memory stand-in for the framework's key-value store.
    #[derive(Default)]
    struct MemStorage {
        values: HashMap<String, String>,
    }

    impl eframe::Storage for MemStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for mode in [DisplayMode::Dark, DisplayMode::Light] {
            assert_eq!(mode.toggle().toggle(), mode);
            assert_ne!(mode.toggle(), mode);
        }
    }

    #[test]
    fn test_stored_preference_overrides_ambient() {
        assert_eq!(
            resolve_initial(Some(DisplayMode::Light), Some(DisplayMode::Dark)),
            DisplayMode::Light
        );
    }

    #[test]
    fn test_ambient_used_when_nothing_stored() {
        assert_eq!(resolve_initial(None, Some(DisplayMode::Dark)), DisplayMode::Dark);
        assert_eq!(resolve_initial(None, Some(DisplayMode::Light)), DisplayMode::Light);
    }

    #[test]
    fn test_defaults_to_dark_without_any_signal() {
        assert_eq!(resolve_initial(None, None), DisplayMode::Dark);
    }

    #[test]
    fn test_parse_round_trip_and_garbage() {
        assert_eq!(DisplayMode::parse("dark"), Some(DisplayMode::Dark));
        assert_eq!(DisplayMode::parse("light"), Some(DisplayMode::Light));
        assert_eq!(DisplayMode::parse("solarized"), None);
        for mode in [DisplayMode::Dark, DisplayMode::Light] {
            assert_eq!(DisplayMode::parse(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_persisted_value_tracks_toggles() {
        let mut storage = MemStorage::default();
        let mut mode = DisplayMode::Dark;

        for _ in 0..3 {
            mode = mode.toggle();
            persist(&mut storage, mode);
            assert_eq!(load_stored(Some(&storage)), Some(mode));
        }
    }

    #[test]
    fn test_load_stored_handles_missing_and_invalid() {
        assert_eq!(load_stored(None), None);

        let mut storage = MemStorage::default();
        assert_eq!(load_stored(Some(&storage)), None);

        storage.set_string(THEME_KEY, "neon".to_string());
        assert_eq!(load_stored(Some(&storage)), None);
    }
}
