// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog serialization and deserialization.
//!
//! This module handles exporting and importing the portfolio catalog in
//! YAML and JSON formats.

use crate::models::project::Catalog;
use anyhow::Result;
use std::path::Path;

/// Export the catalog to YAML format.
pub fn export_yaml(catalog: &Catalog, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(catalog)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export the catalog to JSON format.
pub fn export_json(catalog: &Catalog, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a catalog from YAML format.
pub fn import_yaml(path: &Path) -> Result<Catalog> {
    let yaml = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_yaml::from_str(&yaml)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Import a catalog from JSON format.
pub fn import_json(path: &Path) -> Result<Catalog> {
    let json = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&json)?;
    catalog.validate()?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_yaml_round_trip() {
        let path = env::temp_dir().join("folio_catalog_test.yaml");
        let catalog = Catalog::builtin();

        export_yaml(&catalog, &path).unwrap();
        let loaded = import_yaml(&path).unwrap();
        assert_eq!(loaded, catalog);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_json_round_trip() {
        let path = env::temp_dir().join("folio_catalog_test.json");
        let catalog = Catalog::builtin();

        export_json(&catalog, &path).unwrap();
        let loaded = import_json(&path).unwrap();
        assert_eq!(loaded, catalog);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_import_rejects_invalid_catalog() {
        let path = env::temp_dir().join("folio_catalog_dup.json");
        let mut catalog = Catalog::builtin();
        let duplicate = catalog.projects[0].clone();
        catalog.projects.push(duplicate);

        // Write without validation, then make sure import refuses it.
        std::fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();
        assert!(import_json(&path).is_err());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_import_missing_file_fails() {
        let path = env::temp_dir().join("folio_catalog_missing.yaml");
        assert!(import_yaml(&path).is_err());
    }
}
