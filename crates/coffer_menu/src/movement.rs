//! # Move Detection
//!
//! Recognizes clicks that carry an item into the menu.
//!
//! Two shapes count as a move:
//!
//! - A click inside the grid while the cursor holds something, or a
//!   number-key swap whose hotbar source holds something.
//! - A shift-click from the player area while the menu's inventory has any
//!   occupied position.
//!
//! The second test over-detects: shift-clicking into a grid with no free
//! room still reports a move. Handlers that care re-check capacity.

use std::sync::Arc;

use coffer_core::ClickEvent;

use crate::error::MenuResult;
use crate::menu::Menu;
use crate::records::MoveToMenu;
use crate::resolve::{logical_index, resolve};

/// Builds a move record if the click carries an item into `menu`.
///
/// # Errors
///
/// Returns `MenuError::NoTargetSlot` if a move was detected but no slot
/// answers the raw position.
pub fn detect_move(menu: &Arc<Menu>, event: &ClickEvent) -> MenuResult<Option<MoveToMenu>> {
    let hotbar_item = event.hotbar_button.map(|button| event.view.hotbar_item(button));

    let detected = if event.in_top_grid() {
        !event.cursor.is_empty() || hotbar_item.as_ref().is_some_and(|item| !item.is_empty())
    } else {
        event.click.is_shift_click() && event.view.top.read().any_occupied()
    };
    if !detected {
        return Ok(None);
    }

    let item = if !event.cursor.is_empty() {
        event.cursor.clone()
    } else if let Some(item) = hotbar_item {
        item
    } else {
        event.current_item.clone()
    };
    if item.is_empty() {
        return Ok(None);
    }

    let slot = resolve(menu, logical_index(event.raw_slot))?;
    Ok(Some(MoveToMenu {
        menu: Arc::clone(menu),
        player: event.player,
        inventory: Arc::clone(&event.view.top),
        cancelled: slot.cancel_events(),
        item,
        hotbar_button: event.hotbar_button,
    }))
}

/// Hands a move record to the menu handler.
///
/// Returns true if the raw click must be cancelled.
pub fn dispatch_move(mut record: MoveToMenu) -> bool {
    let handler = Arc::clone(record.menu.handler());
    handler.move_to_menu(&mut record);
    tracing::debug!(
        "{} moved item {} into {} (cancelled: {})",
        record.player,
        record.item.item_id,
        record.menu.id(),
        record.cancelled
    );
    record.cancelled
}
