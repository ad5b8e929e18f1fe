//! # Menus
//!
//! A managed container shown to one or more players.
//!
//! ## Layout
//!
//! ```text
//! Menu
//! ├── kind        Grid | Combine(CombineHandler)
//! ├── handler     MenuHandler  (moves, closes)
//! ├── slots       1-based position -> Slot
//! ├── base_slot   fallback for unregistered positions
//! └── viewers     player -> inventory instance they are looking at
//! ```
//!
//! Slots are fixed once the menu is built. Viewers change as players open
//! and close the menu; the registry drops the menu after its last viewer.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use coffer_core::{InventoryId, PlayerId, SharedInventory};
use parking_lot::RwLock;

use crate::records::{CombinePrepare, MenuClose, MenuComplete, MoveToMenu};
use crate::slot::Slot;

/// Unique identifier for a menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(pub u64);

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menu#{}", self.0)
    }
}

/// Menu-wide capabilities every menu kind has.
pub trait MenuHandler: Send + Sync {
    /// An item is about to enter the menu. Set `record.cancelled` to veto.
    fn move_to_menu(&self, record: &mut MoveToMenu) {
        let _ = record;
    }

    /// A viewer left. Skip voluntary-only side effects when `record.forced`.
    fn on_close(&self, record: &MenuClose) {
        let _ = record;
    }
}

/// Capabilities only combine surfaces have.
pub trait CombineHandler: Send + Sync {
    /// The host committed a new proposed result.
    fn prepare(&self, record: &CombinePrepare) {
        let _ = record;
    }

    /// A player took the finished result.
    fn complete(&self, record: &mut MenuComplete) {
        let _ = record;
    }
}

impl<T: MenuHandler + ?Sized> MenuHandler for Arc<T> {
    fn move_to_menu(&self, record: &mut MoveToMenu) {
        (**self).move_to_menu(record);
    }

    fn on_close(&self, record: &MenuClose) {
        (**self).on_close(record);
    }
}

impl<T: CombineHandler + ?Sized> CombineHandler for Arc<T> {
    fn prepare(&self, record: &CombinePrepare) {
        (**self).prepare(record);
    }

    fn complete(&self, record: &mut MenuComplete) {
        (**self).complete(record);
    }
}

/// Handler for menus that only need default behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopMenuHandler;

impl MenuHandler for NoopMenuHandler {}

/// The kinds of menu the router distinguishes.
#[derive(Clone)]
pub enum MenuKind {
    /// A plain item grid.
    Grid,
    /// A two-input combine surface with a lazily computed result.
    Combine(Arc<dyn CombineHandler>),
}

impl MenuKind {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Combine(_) => "combine",
        }
    }
}

impl fmt::Debug for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A managed container.
pub struct Menu {
    id: MenuId,
    kind: MenuKind,
    handler: Arc<dyn MenuHandler>,
    slots: HashMap<usize, Arc<Slot>>,
    base_slot: Option<Arc<Slot>>,
    viewers: RwLock<HashMap<PlayerId, SharedInventory>>,
}

impl Menu {
    /// Creates an item-grid menu.
    #[must_use]
    pub fn grid(id: MenuId, handler: impl MenuHandler + 'static) -> Self {
        Self::with_kind(id, MenuKind::Grid, handler)
    }

    /// Creates a combine-surface menu.
    #[must_use]
    pub fn combine(
        id: MenuId,
        handler: impl MenuHandler + 'static,
        combine: impl CombineHandler + 'static,
    ) -> Self {
        Self::with_kind(id, MenuKind::Combine(Arc::new(combine)), handler)
    }

    fn with_kind(id: MenuId, kind: MenuKind, handler: impl MenuHandler + 'static) -> Self {
        Self {
            id,
            kind,
            handler: Arc::new(handler),
            slots: HashMap::new(),
            base_slot: None,
            viewers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a slot at a 1-based position.
    ///
    /// Position 0 is never looked up.
    #[must_use]
    pub fn with_slot(mut self, position: usize, slot: Slot) -> Self {
        self.slots.insert(position, Arc::new(slot));
        self
    }

    /// Sets the fallback slot for unregistered positions.
    #[must_use]
    pub fn with_base_slot(mut self, slot: Slot) -> Self {
        self.base_slot = Some(Arc::new(slot));
        self
    }

    /// Returns the menu's identity.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> MenuId {
        self.id
    }

    /// Returns the menu kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> &MenuKind {
        &self.kind
    }

    /// Returns the combine handler if this is a combine surface.
    ///
    /// This is the only place menu kinds are told apart.
    #[must_use]
    pub fn combine_handler(&self) -> Option<&Arc<dyn CombineHandler>> {
        match &self.kind {
            MenuKind::Combine(handler) => Some(handler),
            MenuKind::Grid => None,
        }
    }

    /// Returns the menu-wide handler.
    #[must_use]
    pub fn handler(&self) -> &Arc<dyn MenuHandler> {
        &self.handler
    }

    /// The slot registered at a 1-based position.
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<&Arc<Slot>> {
        self.slots.get(&position)
    }

    /// The fallback slot.
    #[must_use]
    pub fn base_slot(&self) -> Option<&Arc<Slot>> {
        self.base_slot.as_ref()
    }

    // =========================================================================
    // Viewers
    // =========================================================================

    /// Records that `player` is viewing `inventory`.
    ///
    /// Replaces any earlier entry for the same player.
    pub fn add_viewer(&self, player: PlayerId, inventory: SharedInventory) {
        self.viewers.write().insert(player, inventory);
    }

    /// Returns true if `player` is viewing this menu.
    #[must_use]
    pub fn has_viewer(&self, player: PlayerId) -> bool {
        self.viewers.read().contains_key(&player)
    }

    /// The inventory `player` is viewing.
    #[must_use]
    pub fn viewer_inventory(&self, player: PlayerId) -> Option<SharedInventory> {
        self.viewers.read().get(&player).cloned()
    }

    /// Finds the viewer looking at a given inventory instance.
    ///
    /// When several viewers share the instance, the lowest player id wins.
    /// Linear scan; viewer counts are small.
    #[must_use]
    pub fn viewer_of(&self, inventory: InventoryId) -> Option<PlayerId> {
        self.viewers
            .read()
            .iter()
            .filter(|(_, viewed)| viewed.read().id() == inventory)
            .map(|(player, _)| *player)
            .min()
    }

    /// Snapshot of all viewers.
    #[must_use]
    pub fn viewers(&self) -> Vec<(PlayerId, SharedInventory)> {
        self.viewers
            .read()
            .iter()
            .map(|(player, inventory)| (*player, Arc::clone(inventory)))
            .collect()
    }

    /// Number of viewers.
    #[must_use]
    pub fn viewer_count(&self) -> usize {
        self.viewers.read().len()
    }

    /// Removes `player` from the viewers and notifies the handler.
    ///
    /// Returns false, without side effects, if the player was not viewing.
    pub fn close(&self, player: PlayerId, forced: bool) -> bool {
        let Some(inventory) = self.viewers.write().remove(&player) else {
            return false;
        };
        tracing::debug!("{} closed for {} (forced: {})", self.id, player, forced);
        self.handler.on_close(&MenuClose {
            player,
            inventory,
            forced,
        });
        true
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("slots", &self.slots.len())
            .field("base_slot", &self.base_slot.is_some())
            .field("viewers", &self.viewer_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffer_core::{ContainerKind, Inventory};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct CloseLog(Mutex<Vec<(PlayerId, bool)>>);

    impl MenuHandler for CloseLog {
        fn on_close(&self, record: &MenuClose) {
            self.0.lock().push((record.player, record.forced));
        }
    }

    fn inventory(id: u64) -> SharedInventory {
        Inventory::new(InventoryId(id), ContainerKind::Chest, 9).into_shared()
    }

    #[test]
    fn test_viewers() {
        let menu = Menu::grid(MenuId(1), NoopMenuHandler);
        menu.add_viewer(PlayerId(1), inventory(10));
        menu.add_viewer(PlayerId(2), inventory(11));

        assert!(menu.has_viewer(PlayerId(1)));
        assert_eq!(menu.viewer_count(), 2);
        assert_eq!(menu.viewer_of(InventoryId(11)), Some(PlayerId(2)));
        assert_eq!(menu.viewer_of(InventoryId(99)), None);
    }

    #[test]
    fn test_shared_inventory_picks_lowest_viewer() {
        let menu = Menu::grid(MenuId(1), NoopMenuHandler);
        let shared = inventory(10);
        for id in [7, 3, 9, 5] {
            menu.add_viewer(PlayerId(id), Arc::clone(&shared));
        }
        assert_eq!(menu.viewer_of(InventoryId(10)), Some(PlayerId(3)));

        assert!(menu.close(PlayerId(3), false));
        assert_eq!(menu.viewer_of(InventoryId(10)), Some(PlayerId(5)));
    }

    #[test]
    fn test_close_is_idempotent() {
        let log = Arc::new(CloseLog::default());
        let menu = Menu::grid(MenuId(1), Arc::clone(&log));
        menu.add_viewer(PlayerId(1), inventory(10));

        assert!(menu.close(PlayerId(1), false));
        assert!(!menu.close(PlayerId(1), false));
        assert!(!menu.close(PlayerId(1), true));
        assert_eq!(*log.0.lock(), vec![(PlayerId(1), false)]);
        assert_eq!(menu.viewer_count(), 0);
    }

    #[test]
    fn test_kind() {
        struct Anvil;
        impl CombineHandler for Anvil {}

        let grid = Menu::grid(MenuId(1), NoopMenuHandler);
        let combine = Menu::combine(MenuId(2), NoopMenuHandler, Anvil);
        assert!(grid.combine_handler().is_none());
        assert!(combine.combine_handler().is_some());
        assert_eq!(combine.kind().name(), "combine");
    }

    #[test]
    fn test_slots() {
        let menu = Menu::grid(MenuId(1), NoopMenuHandler)
            .with_slot(1, Slot::passive(false))
            .with_base_slot(Slot::passive(true));
        assert!(!menu.slot(1).unwrap().cancel_events());
        assert!(menu.slot(2).is_none());
        assert!(menu.base_slot().unwrap().cancel_events());
    }
}
