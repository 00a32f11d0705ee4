//! Navigation configuration
//!
//! Everything the adapter treats as static data lives here: linking options,
//! mapping tables and the small-screen breakpoint. Each section falls back to
//! the built-in app configuration when omitted from the file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::adapter::StateAdapter;
use crate::errors::{NavError, Result};
use crate::linking::LinkingOptions;
use crate::mapping::{MappingTables, ModalOverlap};
use crate::screen::{ScreenSize, DEFAULT_SMALL_SCREEN_BREAKPOINT};

/// Configuration loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// Widths at or below this are small screens
    pub small_screen_breakpoint: u32,
    /// Parser options
    pub linking: LinkingOptions,
    /// Modal and tab lookup tables
    pub mappings: MappingTables,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            small_screen_breakpoint: DEFAULT_SMALL_SCREEN_BREAKPOINT,
            linking: LinkingOptions::default(),
            mappings: MappingTables::default(),
        }
    }
}

impl NavigationConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NavError::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        Self::from_toml_str(&content).map_err(|e| {
            NavError::config(format!("Failed to parse config file {}: {e}", path.display()))
        })
    }

    /// Load `path` if it exists, otherwise the built-in configuration
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using built-in navigation config");
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| NavError::config(format!("Failed to serialize config: {e}")))
    }

    /// Reject malformed configuration and report ambiguous modal mappings
    ///
    /// Overlapping modal names are legal but order dependent, so they are
    /// returned and logged rather than rejected.
    pub fn validate(&self) -> Result<Vec<ModalOverlap>> {
        if self.small_screen_breakpoint == 0 {
            return Err(NavError::config(
                "small_screen_breakpoint must be greater than zero",
            ));
        }
        self.linking.validate()?;

        let overlaps = self.mappings.overlaps();
        for overlap in &overlaps {
            warn!(%overlap, "modal route mapped more than once; first claimant wins");
        }
        Ok(overlaps)
    }

    /// Screen size for a window `width`
    pub fn screen_size_for_width(&self, width: u32) -> ScreenSize {
        ScreenSize::from_width(width, self.small_screen_breakpoint)
    }

    /// Adapter over this configuration's mapping tables
    pub fn adapter(&self) -> StateAdapter {
        StateAdapter::new(self.mappings.clone())
    }
}
