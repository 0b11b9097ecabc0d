//! # Catalog Configuration
//!
//! Tunables for a catalog instance.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CATALOG_PAGE_SIZE=12                                               │
//! │     CATALOG_SEARCH_DEBOUNCE_MS=300                                     │
//! │     CATALOG_VIEW_MODE=card                                             │
//! │     CATALOG_SEED_SAMPLE_DATA=false                                     │
//! │                                                                         │
//! │  2. TOML document handed over by the shell                             │
//! │     (the core never opens files itself)                                │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     6 per page, 500 ms debounce, list view, sample data on             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Document Format
//! ```toml
//! page_size = 6
//! search_debounce_ms = 500
//! default_view = "list"   # list | card
//! seed_sample_data = true
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::types::ViewMode;
use crate::{DEFAULT_PAGE_SIZE, SEARCH_DEBOUNCE_MS};

/// Settings for one catalog instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Records per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Quiet period before a search commits, in milliseconds.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Layout the shell starts in.
    #[serde(default)]
    pub default_view: ViewMode,

    /// Load the six sample products at construction.
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_search_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE_MS
}

fn default_true() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            page_size: default_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
            default_view: ViewMode::default(),
            seed_sample_data: default_true(),
        }
    }
}

impl CatalogConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> CoreResult<Self> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document, then applies environment overrides.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml_str(document: &str) -> CoreResult<Self> {
        let mut config: CatalogConfig = toml::from_str(document)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> CoreResult<()> {
        if self.page_size == 0 {
            return Err(CoreError::InvalidConfig(
                "page_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Applies `CATALOG_*` environment variables. Unparseable values are
    /// logged and ignored.
    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("CATALOG_PAGE_SIZE") {
            match value.trim().parse::<usize>() {
                Ok(size) => {
                    debug!(page_size = size, "Overriding page size from environment");
                    self.page_size = size;
                }
                Err(_) => warn!(value = %value, "Ignoring invalid CATALOG_PAGE_SIZE"),
            }
        }

        if let Ok(value) = std::env::var("CATALOG_SEARCH_DEBOUNCE_MS") {
            match value.trim().parse::<u64>() {
                Ok(ms) => {
                    debug!(search_debounce_ms = ms, "Overriding search debounce from environment");
                    self.search_debounce_ms = ms;
                }
                Err(_) => warn!(value = %value, "Ignoring invalid CATALOG_SEARCH_DEBOUNCE_MS"),
            }
        }

        if let Ok(value) = std::env::var("CATALOG_VIEW_MODE") {
            match value.parse::<ViewMode>() {
                Ok(mode) => self.default_view = mode,
                Err(e) => warn!(error = %e, "Ignoring invalid CATALOG_VIEW_MODE"),
            }
        }

        if let Ok(value) = std::env::var("CATALOG_SEED_SAMPLE_DATA") {
            match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.seed_sample_data = true,
                "0" | "false" | "no" | "off" => self.seed_sample_data = false,
                _ => warn!(value = %value, "Ignoring invalid CATALOG_SEED_SAMPLE_DATA"),
            }
        }
    }
}
