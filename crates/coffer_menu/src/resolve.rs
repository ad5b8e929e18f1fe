//! Raw view positions to logical slots.

use std::sync::Arc;

use crate::error::{MenuError, MenuResult};
use crate::menu::Menu;
use crate::slot::Slot;

/// Converts a raw top-grid position into a 1-based logical position.
#[inline]
#[must_use]
pub const fn logical_index(raw_slot: usize) -> usize {
    raw_slot + 1
}

/// Finds the slot responsible for a 1-based logical position.
///
/// Explicit registrations win; otherwise the menu's base slot answers.
///
/// # Errors
///
/// Returns `MenuError::NoTargetSlot` if the position has no slot and the
/// menu has no base slot.
pub fn resolve(menu: &Menu, position: usize) -> MenuResult<Arc<Slot>> {
    menu.slot(position)
        .or_else(|| menu.base_slot())
        .cloned()
        .ok_or(MenuError::NoTargetSlot { position })
}
