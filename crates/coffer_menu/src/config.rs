//! # Router Configuration
//!
//! Loaded once at startup from TOML:
//!
//! ```toml
//! managed_kinds = ["chest", "combine"]
//! completion_delay_ticks = 1
//! prepare_delay_ticks = 1
//! owner_plugin = "shop"
//! respect_cancelled = true
//! ```
//!
//! Every key is optional.

use std::path::Path;

use coffer_core::ContainerKind;
use serde::Deserialize;

use crate::error::{MenuError, MenuResult};

/// Configuration for the menu controller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// Container kinds whose events are inspected at all.
    pub managed_kinds: Vec<ContainerKind>,
    /// Ticks between a result click and the completion handler.
    pub completion_delay_ticks: u32,
    /// Ticks between a combine recompute and the prepare handler.
    pub prepare_delay_ticks: u32,
    /// Only this plugin's unload closes menus. `None` reacts to any unload.
    pub owner_plugin: Option<String>,
    /// Skip click, drag and pickup events another listener already cancelled.
    pub respect_cancelled: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            managed_kinds: vec![ContainerKind::Chest, ContainerKind::Combine],
            completion_delay_ticks: 1,
            prepare_delay_ticks: 1,
            owner_plugin: None,
            respect_cancelled: true,
        }
    }
}

impl RouterConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidConfig` on malformed TOML, unknown keys
    /// or invalid values.
    pub fn from_toml_str(source: &str) -> MenuResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| MenuError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidConfig` if the file cannot be read or
    /// does not hold a valid configuration.
    pub fn from_toml_file(path: impl AsRef<Path>) -> MenuResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| MenuError::InvalidConfig(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!("Loaded router config from {}", path.display());
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidConfig` for zero delays or an empty kind
    /// list.
    pub fn validate(&self) -> MenuResult<()> {
        if self.completion_delay_ticks == 0 {
            return Err(MenuError::InvalidConfig(
                "completion_delay_ticks must be at least 1".to_string(),
            ));
        }
        if self.prepare_delay_ticks == 0 {
            return Err(MenuError::InvalidConfig(
                "prepare_delay_ticks must be at least 1".to_string(),
            ));
        }
        if self.managed_kinds.is_empty() {
            return Err(MenuError::InvalidConfig(
                "managed_kinds must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns true if events from views of `kind` are inspected.
    #[must_use]
    pub fn is_managed(&self, kind: ContainerKind) -> bool {
        self.managed_kinds.contains(&kind)
    }

    /// Returns true if an unload of `plugin` should close menus.
    #[must_use]
    pub fn owns_plugin(&self, plugin: &str) -> bool {
        match self.owner_plugin.as_deref() {
            Some(owner) => owner == plugin,
            None => true,
        }
    }
}
