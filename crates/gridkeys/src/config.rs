//! Grid navigation configuration.
//!
//! Configuration is plain TOML:
//!
//! ```toml
//! # Either name the direction outright...
//! direction = "rtl"
//! # ...or let it follow the host locale.
//! locale = "ar-EG"
//! ```
//!
//! An explicit `direction` wins over `locale`; with neither, the grid is LTR.

use std::path::Path;

use gridkeys_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::{GridError, Result};

/// Settings applied to a grid key manager at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridKeyConfig {
    /// Explicit text direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Locale used to pick a direction when none is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl GridKeyConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| GridError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded grid configuration");
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Set an explicit direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Set the locale used when no explicit direction is given.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// The direction to use: explicit, then locale-derived, then LTR.
    pub fn resolved_direction(&self) -> Direction {
        self.direction
            .or_else(|| self.locale.as_deref().map(Direction::for_locale))
            .unwrap_or_default()
    }
}
