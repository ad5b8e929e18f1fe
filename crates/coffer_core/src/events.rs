//! # Raw Host Events
//!
//! Container events exactly as the host's UI subsystem delivers them.
//!
//! ```text
//! UI subsystem ──> HostEvent ──> router ──> handlers
//!                     ▲                        │
//!                     └──── cancelled = true ──┘
//! ```
//!
//! Cancellable events carry a `cancelled` flag. The host reads it back
//! after every listener ran and skips its default behavior when set.

use std::collections::BTreeSet;

use crate::click::{ClickKind, InventoryAction};
use crate::ids::{EntityRef, PlayerId};
use crate::inventory::{InventoryView, SharedInventory, SlotType};
use crate::item::ItemStack;

/// Every event the router listens to.
#[derive(Clone, Debug)]
pub enum HostEvent {
    // =========================================================================
    // Lifecycle
    // =========================================================================
    /// A plugin is being unloaded.
    PluginDisable(PluginDisableEvent),

    // =========================================================================
    // Container interaction
    // =========================================================================
    /// A click inside an open view.
    Click(ClickEvent),
    /// A multi-slot drag inside an open view.
    Drag(DragEvent),
    /// An open view was closed.
    Close(CloseEvent),
    /// The host recomputed a combine surface's proposed result.
    Prepare(PrepareEvent),

    // =========================================================================
    // Ambient
    // =========================================================================
    /// An entity is about to pick up an item from the ground.
    Pickup(PickupEvent),
}

impl HostEvent {
    /// Returns true if this event is cancellable and has been cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        match self {
            Self::Click(e) => e.cancelled,
            Self::Drag(e) => e.cancelled,
            Self::Pickup(e) => e.cancelled,
            Self::PluginDisable(_) | Self::Close(_) | Self::Prepare(_) => false,
        }
    }
}

/// A plugin is being unloaded.
#[derive(Clone, Debug)]
pub struct PluginDisableEvent {
    /// Name of the plugin going away.
    pub plugin: String,
}

/// A click inside an open view.
#[derive(Clone, Debug)]
pub struct ClickEvent {
    /// The view that was clicked.
    pub view: InventoryView,
    /// The player who clicked.
    pub player: PlayerId,
    /// Physical gesture.
    pub click: ClickKind,
    /// Action the host derived from the gesture.
    pub action: InventoryAction,
    /// Position within the inventory that was hit.
    pub slot: usize,
    /// Position within the whole view.
    pub raw_slot: usize,
    /// Role of the clicked slot.
    pub slot_type: SlotType,
    /// Stack in the clicked position.
    pub current_item: ItemStack,
    /// Stack on the cursor.
    pub cursor: ItemStack,
    /// Hotbar button for number-key swaps.
    pub hotbar_button: Option<u8>,
    /// Whether the click will be vetoed.
    pub cancelled: bool,
}

impl ClickEvent {
    /// Creates a plain left click at a raw view position.
    ///
    /// The converted slot, slot type and current item are read from the
    /// view the way the host computes them.
    #[must_use]
    pub fn at(view: InventoryView, player: PlayerId, raw_slot: usize) -> Self {
        let slot = view.convert_slot(raw_slot);
        let slot_type = view.slot_type(raw_slot);
        let current_item = view.item_at(raw_slot);
        Self {
            view,
            player,
            click: ClickKind::Left,
            action: InventoryAction::PickupAll,
            slot,
            raw_slot,
            slot_type,
            current_item,
            cursor: ItemStack::empty(),
            hotbar_button: None,
            cancelled: false,
        }
    }

    /// Sets the gesture.
    #[must_use]
    pub fn with_click(mut self, click: ClickKind) -> Self {
        self.click = click;
        self
    }

    /// Sets the derived action.
    #[must_use]
    pub fn with_action(mut self, action: InventoryAction) -> Self {
        self.action = action;
        self
    }

    /// Sets the cursor stack.
    #[must_use]
    pub fn with_cursor(mut self, cursor: ItemStack) -> Self {
        self.cursor = cursor;
        self
    }

    /// Marks the click as a number-key swap with the given hotbar button.
    #[must_use]
    pub fn with_hotbar(mut self, button: u8) -> Self {
        self.click = ClickKind::NumberKey;
        self.action = InventoryAction::HotbarSwap;
        self.hotbar_button = Some(button);
        self
    }

    /// Returns true if the click landed inside the top grid.
    ///
    /// Decided by the grid bound rather than `slot == raw_slot`: below a
    /// single-row grid the converted and raw positions coincide.
    #[must_use]
    pub fn in_top_grid(&self) -> bool {
        self.raw_slot < self.view.top_size()
    }
}

/// A multi-slot drag inside an open view.
#[derive(Clone, Debug)]
pub struct DragEvent {
    /// The view the drag happened in.
    pub view: InventoryView,
    /// The dragging player.
    pub player: PlayerId,
    /// Raw view positions touched by the drag.
    pub raw_slots: BTreeSet<usize>,
    /// Whether the drag will be vetoed.
    pub cancelled: bool,
}

impl DragEvent {
    /// Creates a drag over raw view positions.
    #[must_use]
    pub fn new(
        view: InventoryView,
        player: PlayerId,
        raw_slots: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            view,
            player,
            raw_slots: raw_slots.into_iter().collect(),
            cancelled: false,
        }
    }
}

/// An open view was closed.
#[derive(Clone, Debug)]
pub struct CloseEvent {
    /// The view that closed.
    pub view: InventoryView,
    /// The player whose view closed.
    pub player: PlayerId,
}

/// The host recomputed a combine surface's proposed result.
#[derive(Clone, Debug)]
pub struct PrepareEvent {
    /// The combine inventory whose inputs changed.
    pub inventory: SharedInventory,
    /// The proposed result, if any.
    pub result: Option<ItemStack>,
}

/// An entity is about to pick up an item from the ground.
#[derive(Clone, Debug)]
pub struct PickupEvent {
    /// The acquiring entity.
    pub entity: EntityRef,
    /// The item being picked up.
    pub item: ItemStack,
    /// Whether the pickup will be vetoed.
    pub cancelled: bool,
}

impl PickupEvent {
    /// Creates an uncancelled pickup.
    #[must_use]
    pub const fn new(entity: EntityRef, item: ItemStack) -> Self {
        Self {
            entity,
            item,
            cancelled: false,
        }
    }
}
