//! # Settings Loader
//!
//! Loads the dashboard service configuration from a JSON file. Every field is
//! optional; anything left out takes the value from [`Settings::default`].
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! // Load settings from a specific path
//! let settings = settings_loader::load_settings("config/dashboard.json")?;
//!
//! // Use the given path, then settings.json, then built-in defaults
//! let path = Some(PathBuf::from("settings.json"));
//! let settings = settings_loader::load_settings_with_fallback(path.as_ref())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use models::Settings;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Loads and validates settings from a JSON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Reading settings file: {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing settings JSON in {}", path.display()))?;
    validate_settings(&settings)
        .with_context(|| format!("Validating settings in {}", path.display()))?;
    Ok(settings)
}

/// Loads settings from an optional path, returning None if no path is provided
pub fn load_optional_settings(path: Option<&PathBuf>) -> Result<Option<Settings>> {
    match path {
        Some(settings_path) => Ok(Some(load_settings(settings_path)?)),
        None => Ok(None),
    }
}

/// Resolves settings from the provided path, then `settings.json` in the current
/// directory, then built-in defaults.
///
/// A file that exists but is malformed is an error; only missing files fall through.
pub fn load_settings_with_fallback(path: Option<&PathBuf>) -> Result<Settings> {
    if let Some(settings_path) = path {
        if settings_file_exists(settings_path) {
            return load_settings(settings_path);
        }
    }

    if settings_file_exists(DEFAULT_SETTINGS_FILE) {
        return load_settings(DEFAULT_SETTINGS_FILE);
    }

    Ok(Settings::default())
}

/// Checks the invariants the month-range generator and calculator rely on
pub fn validate_settings(settings: &Settings) -> Result<()> {
    let bounds = &settings.month_range;
    if bounds.min_months == 0 {
        bail!("month_range.min_months must be at least 1");
    }
    if bounds.min_months > bounds.max_months {
        bail!(
            "month_range.min_months ({}) exceeds max_months ({})",
            bounds.min_months,
            bounds.max_months
        );
    }
    if settings.generation_markers.is_empty() {
        bail!("generation_markers must not be empty");
    }
    if settings.generation_markers.iter().any(|m| m.is_empty()) {
        bail!("generation_markers must not contain empty strings");
    }
    Ok(())
}

/// Checks if a settings file exists at the given path
pub fn settings_file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists() && path.as_ref().is_file()
}
