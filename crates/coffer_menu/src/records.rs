//! # Semantic Records
//!
//! What a raw host event means to a menu. Each record is handed to exactly
//! one handler; records with a `cancelled` flag let that handler veto the
//! raw event.
//!
//! ```text
//! ClickEvent ─┬─> SlotInteract ──> SlotHandler::interact
//!             ├─> MenuComplete ──> CombineHandler::complete (next tick)
//!             └─> MoveToMenu   ──> MenuHandler::move_to_menu
//! PrepareEvent ──> CombinePrepare ─> CombineHandler::prepare (next tick)
//! close        ──> MenuClose    ──> MenuHandler::on_close
//! ```

use std::sync::Arc;

use coffer_core::{ClickKind, InventoryAction, ItemStack, PlayerId, SharedInventory};

use crate::menu::Menu;
use crate::slot::Slot;

/// A plain click on a slot of the menu grid.
#[derive(Clone, Debug)]
pub struct SlotInteract {
    /// The menu that was clicked.
    pub menu: Arc<Menu>,
    /// The inventory instance the player is viewing.
    pub inventory: SharedInventory,
    /// The acting player.
    pub player: PlayerId,
    /// 1-based logical slot index.
    pub slot_index: usize,
    /// The resolved slot (explicit or base).
    pub slot: Arc<Slot>,
    /// Veto flag, defaults from the slot.
    pub cancelled: bool,
    /// Physical gesture.
    pub click: ClickKind,
    /// Action the host derived from the gesture.
    pub action: InventoryAction,
    /// Stack in the clicked position.
    pub current_item: ItemStack,
    /// Stack on the cursor.
    pub cursor: ItemStack,
    /// Hotbar button for number-key swaps.
    pub hotbar_button: Option<u8>,
}

/// A click that takes a combine surface's finished result.
#[derive(Clone, Debug)]
pub struct MenuComplete {
    /// The underlying click.
    pub interact: SlotInteract,
    /// Display name of the result item, empty when it has none.
    pub text: String,
}

/// Outcome of classifying a click inside the grid.
#[derive(Clone, Debug)]
pub enum Interaction {
    /// Plain interaction, dispatched synchronously.
    Interact(SlotInteract),
    /// Result completion, dispatched after a deferral.
    Complete(MenuComplete),
}

impl Interaction {
    /// The underlying click record.
    #[must_use]
    pub const fn interact(&self) -> &SlotInteract {
        match self {
            Self::Interact(record) => record,
            Self::Complete(record) => &record.interact,
        }
    }
}

/// An item about to enter the menu.
#[derive(Clone, Debug)]
pub struct MoveToMenu {
    /// The receiving menu.
    pub menu: Arc<Menu>,
    /// The acting player.
    pub player: PlayerId,
    /// The inventory instance the player is viewing.
    pub inventory: SharedInventory,
    /// Veto flag, defaults from the slot at the raw position.
    pub cancelled: bool,
    /// The stack being moved.
    pub item: ItemStack,
    /// Hotbar button when the move is a number-key swap.
    pub hotbar_button: Option<u8>,
}

/// The host's freshly committed combine proposal.
#[derive(Clone, Debug)]
pub struct CombinePrepare {
    /// The combine menu.
    pub menu: Arc<Menu>,
    /// The viewer whose inventory changed.
    pub player: PlayerId,
    /// The combine inventory.
    pub inventory: SharedInventory,
    /// Proposed result, if the inputs combine into anything.
    pub result: Option<ItemStack>,
}

/// A viewer left the menu.
#[derive(Clone, Debug)]
pub struct MenuClose {
    /// The player who left.
    pub player: PlayerId,
    /// The inventory they were viewing.
    pub inventory: SharedInventory,
    /// True when the close was forced (plugin unload) rather than chosen.
    pub forced: bool,
}
