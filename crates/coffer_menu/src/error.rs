//! # Menu Error Types
//!
//! Routing errors describe why an event was not for us. The controller
//! turns every one of them into a silent no-op; only configuration errors
//! ever reach a caller.

use coffer_core::{ContainerKind, InventoryId, PlayerId};
use thiserror::Error;

use crate::menu::MenuId;

/// Errors that can occur while routing an event or loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// The view's container kind is not managed.
    #[error("container kind {0:?} is not managed")]
    UnmanagedContainer(ContainerKind),

    /// No registered menu owns the inventory.
    #[error("no menu registered for {0}")]
    NoMenu(InventoryId),

    /// The player does not have a menu open.
    #[error("{0} has no open menu")]
    NoOpenMenu(PlayerId),

    /// The acting player is not a viewer of the menu.
    #[error("{player} is not viewing {menu}")]
    NotViewing {
        /// The acting player.
        player: PlayerId,
        /// The menu that was targeted.
        menu: MenuId,
    },

    /// A combine proposal arrived for an inventory nobody is viewing.
    #[error("no viewer of {menu} is looking at {inventory}")]
    NoCombineViewer {
        /// The combine menu.
        menu: MenuId,
        /// The inventory from the proposal.
        inventory: InventoryId,
    },

    /// Neither an explicit slot nor a base slot exists at the position.
    #[error("no slot at position {position} and no base slot")]
    NoTargetSlot {
        /// The 1-based logical position.
        position: usize,
    },

    /// The menu has no combine surface.
    #[error("{0} has no combine surface")]
    NotCombine(MenuId),

    /// The event was already cancelled by another listener.
    #[error("event already cancelled")]
    AlreadyCancelled,

    /// The plugin being unloaded is not the one that owns the menus.
    #[error("unload of foreign plugin {0}")]
    ForeignPlugin(String),

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MenuError {
    /// Returns true for errors that only mean "this event is not for us".
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        !matches!(self, Self::InvalidConfig(_))
    }
}

/// Result type for menu operations.
pub type MenuResult<T> = Result<T, MenuError>;
