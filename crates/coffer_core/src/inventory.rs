//! # Host Inventories
//!
//! Inventory instances and the views that pair a container with the
//! player's own inventory.
//!
//! ```text
//! ┌──────────────────────────┐
//! │  top    (container grid) │  raw slots 0..top.size()
//! ├──────────────────────────┤
//! │  bottom (player storage) │  raw slots top.size()..
//! └──────────────────────────┘
//! ```
//!
//! Raw slots number the whole view; a click's converted slot numbers the
//! inventory that was actually hit. The two agree only inside the top grid.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{HostError, HostResult};
use crate::ids::InventoryId;
use crate::item::ItemStack;

/// Hotbar positions at the start of the player's inventory.
pub const HOTBAR_SIZE: usize = 9;

/// Main-storage positions shown above the hotbar in a view.
pub const VIEW_MAIN_STORAGE: usize = 27;

/// Raw position of the result on a combine surface.
pub const COMBINE_RESULT_SLOT: usize = 2;

/// Container kinds the host can open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// Plain item grid (rows of nine).
    Chest,
    /// Two inputs and a lazily computed result (anvil-style).
    Combine,
    /// Single-row hopper.
    Hopper,
    /// 3x3 dispenser grid.
    Dispenser,
    /// Furnace with fuel and result.
    Furnace,
    /// Crafting table.
    Workbench,
    /// The player's own 2x2 crafting view.
    Crafting,
    /// The player's storage.
    Player,
}

/// Role of the slot a click landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotType {
    /// Output slot of a crafting or combine surface.
    Result,
    /// Crafting input.
    Crafting,
    /// Armor slot.
    Armor,
    /// Regular container slot.
    Container,
    /// Hotbar slot.
    Quickbar,
    /// Outside the window.
    Outside,
    /// Furnace fuel slot.
    Fuel,
}

/// An inventory instance.
#[derive(Clone, Debug)]
pub struct Inventory {
    id: InventoryId,
    kind: ContainerKind,
    slots: Vec<ItemStack>,
}

/// Inventory handle shared between the host, menus and records.
pub type SharedInventory = Arc<RwLock<Inventory>>;

impl Inventory {
    /// Creates an empty inventory with `size` positions.
    #[must_use]
    pub fn new(id: InventoryId, kind: ContainerKind, size: usize) -> Self {
        Self {
            id,
            kind,
            slots: vec![ItemStack::empty(); size],
        }
    }

    /// Wraps this inventory in a shared handle.
    #[must_use]
    pub fn into_shared(self) -> SharedInventory {
        Arc::new(RwLock::new(self))
    }

    /// Returns the instance identity.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> InventoryId {
        self.id
    }

    /// Returns the container kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Returns the number of positions.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Gets the stack at a position.
    #[inline]
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot)
    }

    /// Returns a copy of the stack at a position, empty when out of range.
    #[must_use]
    pub fn item(&self, slot: usize) -> ItemStack {
        self.get(slot).cloned().unwrap_or_default()
    }

    /// Replaces the stack at a position.
    ///
    /// # Errors
    ///
    /// Returns `HostError::SlotOutOfRange` if `slot` is not a position of
    /// this inventory.
    pub fn set(&mut self, slot: usize, item: ItemStack) -> HostResult<()> {
        let size = self.slots.len();
        let target = self
            .slots
            .get_mut(slot)
            .ok_or(HostError::SlotOutOfRange { slot, size })?;
        *target = item;
        Ok(())
    }

    /// Iterates over every position.
    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.slots.iter()
    }

    /// Returns true if at least one position holds an item.
    #[must_use]
    pub fn any_occupied(&self) -> bool {
        self.slots.iter().any(|s| !s.is_empty())
    }
}

/// An open view: a container on top of the player's own inventory.
#[derive(Clone, Debug)]
pub struct InventoryView {
    /// Kind of the view, as reported by the host.
    pub kind: ContainerKind,
    /// The container grid.
    pub top: SharedInventory,
    /// The viewing player's inventory. Positions 0-8 are the hotbar.
    pub bottom: SharedInventory,
}

impl InventoryView {
    /// Creates a view over two inventories, taking the kind from `top`.
    #[must_use]
    pub fn new(top: SharedInventory, bottom: SharedInventory) -> Self {
        let kind = top.read().kind();
        Self { kind, top, bottom }
    }

    /// Identity of the top inventory.
    #[must_use]
    pub fn top_id(&self) -> InventoryId {
        self.top.read().id()
    }

    /// Number of positions in the top grid.
    #[must_use]
    pub fn top_size(&self) -> usize {
        self.top.read().size()
    }

    /// Converts a raw view position into a position of the inventory it hits.
    ///
    /// Inside the top grid the two agree. Below it the view shows main
    /// storage first and the hotbar last, while the player's inventory
    /// stores the hotbar first.
    #[must_use]
    pub fn convert_slot(&self, raw_slot: usize) -> usize {
        let top = self.top_size();
        if raw_slot < top {
            return raw_slot;
        }
        let offset = raw_slot - top;
        if offset < VIEW_MAIN_STORAGE {
            offset + HOTBAR_SIZE
        } else {
            offset - VIEW_MAIN_STORAGE
        }
    }

    /// Role of the slot at a raw view position.
    #[must_use]
    pub fn slot_type(&self, raw_slot: usize) -> SlotType {
        if raw_slot < self.top_size() {
            if self.kind == ContainerKind::Combine && raw_slot == COMBINE_RESULT_SLOT {
                SlotType::Result
            } else {
                SlotType::Container
            }
        } else if self.convert_slot(raw_slot) < HOTBAR_SIZE {
            SlotType::Quickbar
        } else {
            SlotType::Container
        }
    }

    /// Returns a copy of the stack shown at a raw view position.
    #[must_use]
    pub fn item_at(&self, raw_slot: usize) -> ItemStack {
        if raw_slot < self.top_size() {
            self.top.read().item(raw_slot)
        } else {
            self.bottom.read().item(self.convert_slot(raw_slot))
        }
    }

    /// Returns a copy of the bottom inventory's hotbar position.
    #[must_use]
    pub fn hotbar_item(&self, button: u8) -> ItemStack {
        self.bottom.read().item(usize::from(button))
    }
}
