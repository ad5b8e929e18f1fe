//! Fixtures shared by the unit tests.

use std::sync::Arc;

use coffer_core::{
    ContainerKind, Inventory, InventoryId, InventoryView, ItemStack, PlayerId, SharedInventory,
};
use parking_lot::Mutex;

use crate::menu::{CombineHandler, MenuHandler};
use crate::records::{CombinePrepare, MenuClose, MenuComplete, MoveToMenu, SlotInteract};
use crate::slot::Slot;

pub const PLAYER: PlayerId = PlayerId(1);
pub const TOP: InventoryId = InventoryId(100);
pub const BOTTOM: InventoryId = InventoryId(200);

pub fn top(kind: ContainerKind, size: usize) -> SharedInventory {
    Inventory::new(TOP, kind, size).into_shared()
}

pub fn view_over(top: &SharedInventory) -> InventoryView {
    let bottom = Inventory::new(BOTTOM, ContainerKind::Player, 36).into_shared();
    InventoryView::new(Arc::clone(top), bottom)
}

pub fn put(inventory: &SharedInventory, slot: usize, item: ItemStack) {
    inventory.write().set(slot, item).unwrap();
}

/// Slot whose interactions land in `log` as 1-based indices.
pub fn recording_slot(cancel_events: bool, log: &Arc<Mutex<Vec<usize>>>) -> Slot {
    let log = Arc::clone(log);
    Slot::new(cancel_events, move |record: &mut SlotInteract| {
        log.lock().push(record.slot_index);
    })
}

#[derive(Default)]
pub struct RecordingMenu {
    pub cancel_moves: bool,
    pub moves: Mutex<Vec<(ItemStack, bool)>>,
    pub closes: Mutex<Vec<(PlayerId, bool)>>,
}

impl MenuHandler for RecordingMenu {
    fn move_to_menu(&self, record: &mut MoveToMenu) {
        self.moves.lock().push((record.item.clone(), record.cancelled));
        if self.cancel_moves {
            record.cancelled = true;
        }
    }

    fn on_close(&self, record: &MenuClose) {
        self.closes.lock().push((record.player, record.forced));
    }
}

#[derive(Default)]
pub struct RecordingCombine {
    pub prepares: Mutex<Vec<Option<ItemStack>>>,
    pub completes: Mutex<Vec<String>>,
}

impl CombineHandler for RecordingCombine {
    fn prepare(&self, record: &CombinePrepare) {
        self.prepares.lock().push(record.result.clone());
    }

    fn complete(&self, record: &mut MenuComplete) {
        self.completes.lock().push(record.text.clone());
    }
}
