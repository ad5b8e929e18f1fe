//! # Menu Registry
//!
//! Maps open inventories and players to the menus they belong to.
//!
//! The router only consumes [`MenuRegistry`]; it never creates or destroys
//! a menu. [`MenuStore`] is the in-memory implementation for hosts that do
//! not keep their own bookkeeping.
//!
//! ## Locking
//!
//! ```text
//! MenuStore
//! ├── by_inventory: RwLock<InventoryId -> Menu>
//! └── by_player:    RwLock<PlayerId    -> Menu>
//! ```
//!
//! At most one lock is held at a time and none while a handler runs. Menu
//! close handlers may therefore call back into the store.

use std::collections::HashMap;
use std::sync::Arc;

use coffer_core::{InventoryId, PlayerId, SharedInventory};
use parking_lot::RwLock;

use crate::menu::Menu;

/// Lookups the router needs from whoever owns menu lifetimes.
pub trait MenuRegistry: Send + Sync {
    /// The menu that owns an inventory instance.
    fn menu_for_inventory(&self, inventory: InventoryId) -> Option<Arc<Menu>>;

    /// The menu a player currently has open.
    fn menu_for_player(&self, player: PlayerId) -> Option<Arc<Menu>>;

    /// Closes `menu` for `player`.
    ///
    /// Returns false if the player was not viewing it.
    fn close(&self, menu: &Arc<Menu>, player: PlayerId, forced: bool) -> bool {
        menu.close(player, forced)
    }
}

/// In-memory menu registry.
#[derive(Debug, Default)]
pub struct MenuStore {
    by_inventory: RwLock<HashMap<InventoryId, Arc<Menu>>>,
    by_player: RwLock<HashMap<PlayerId, Arc<Menu>>>,
}

impl MenuStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `menu` for `player` on `inventory`.
    ///
    /// A menu the player already had open is closed first, voluntarily.
    pub fn open(&self, menu: &Arc<Menu>, player: PlayerId, inventory: SharedInventory) {
        let previous = self.by_player.read().get(&player).cloned();
        if let Some(previous) = previous {
            self.close(&previous, player, false);
        }

        let inventory_id = inventory.read().id();
        menu.add_viewer(player, inventory);
        self.by_inventory
            .write()
            .insert(inventory_id, Arc::clone(menu));
        self.by_player.write().insert(player, Arc::clone(menu));
        tracing::debug!("{} opened {} on {}", player, menu.id(), inventory_id);
    }

    /// Number of distinct menus with at least one registered inventory.
    #[must_use]
    pub fn menu_count(&self) -> usize {
        let menus: Vec<Arc<Menu>> = self.by_inventory.read().values().cloned().collect();
        let mut ids: Vec<_> = menus.iter().map(|menu| menu.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    /// Returns true if no menu is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_inventory.read().is_empty() && self.by_player.read().is_empty()
    }

    fn forget(&self, menu: &Arc<Menu>, player: PlayerId, inventory: Option<InventoryId>) {
        {
            let mut by_player = self.by_player.write();
            if by_player
                .get(&player)
                .is_some_and(|open| Arc::ptr_eq(open, menu))
            {
                by_player.remove(&player);
            }
        }

        let last_viewer = menu.viewer_count() == 0;
        // Another viewer may share the inventory instance the player left.
        let released = inventory.filter(|&id| menu.viewer_of(id).is_none());
        let mut by_inventory = self.by_inventory.write();
        if last_viewer {
            by_inventory.retain(|_, registered| !Arc::ptr_eq(registered, menu));
            tracing::debug!("{} dropped after its last viewer left", menu.id());
        } else if let Some(id) = released {
            if by_inventory
                .get(&id)
                .is_some_and(|registered| Arc::ptr_eq(registered, menu))
            {
                by_inventory.remove(&id);
            }
        }
    }
}

impl MenuRegistry for MenuStore {
    fn menu_for_inventory(&self, inventory: InventoryId) -> Option<Arc<Menu>> {
        self.by_inventory.read().get(&inventory).cloned()
    }

    fn menu_for_player(&self, player: PlayerId) -> Option<Arc<Menu>> {
        let menu = self.by_player.read().get(&player).cloned();
        menu.filter(|menu| menu.has_viewer(player))
    }

    fn close(&self, menu: &Arc<Menu>, player: PlayerId, forced: bool) -> bool {
        let inventory = menu
            .viewer_inventory(player)
            .map(|inventory| inventory.read().id());
        if !menu.close(player, forced) {
            return false;
        }
        self.forget(menu, player, inventory);
        true
    }
}
