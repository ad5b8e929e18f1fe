//! # Click Classification
//!
//! Decides what a click inside the menu grid means and hands it to the
//! right handler.
//!
//! ```text
//! ClickEvent (in grid)
//!     │
//!     ├── Result slot, non-empty, combine menu ──> MenuComplete
//!     │        └─> CombineHandler::complete      (after deferral)
//!     │
//!     └── anything else ─────────────────────────> SlotInteract
//!              └─> SlotHandler::interact         (synchronous)
//! ```
//!
//! The host commits a combine result only after the current tick, so the
//! completion handler cannot run inside the click. The raw click is vetoed
//! by the slot's default for completions, and by the handler's final
//! `cancelled` value for plain interactions.

use std::sync::Arc;

use coffer_core::{ClickEvent, SchedulerHandle, SlotType};

use crate::error::MenuResult;
use crate::menu::Menu;
use crate::records::{Interaction, MenuComplete, SlotInteract};
use crate::resolve::{logical_index, resolve};

/// Classifies a click on `menu`.
///
/// Returns `Ok(None)` for clicks outside the top grid.
///
/// # Errors
///
/// Returns `MenuError::NoTargetSlot` if no slot answers the position.
pub fn classify(menu: &Arc<Menu>, event: &ClickEvent) -> MenuResult<Option<Interaction>> {
    if !event.in_top_grid() {
        return Ok(None);
    }

    let slot_index = logical_index(event.slot);
    let slot = resolve(menu, slot_index)?;
    let interact = SlotInteract {
        menu: Arc::clone(menu),
        inventory: Arc::clone(&event.view.top),
        player: event.player,
        slot_index,
        cancelled: slot.cancel_events(),
        slot,
        click: event.click,
        action: event.action,
        current_item: event.current_item.clone(),
        cursor: event.cursor.clone(),
        hotbar_button: event.hotbar_button,
    };

    let completes = event.slot_type == SlotType::Result
        && !event.current_item.is_empty()
        && menu.combine_handler().is_some();

    if completes {
        let text = event.current_item.label().to_owned();
        Ok(Some(Interaction::Complete(MenuComplete { interact, text })))
    } else {
        Ok(Some(Interaction::Interact(interact)))
    }
}

/// Dispatches a classified click.
///
/// Plain interactions run now. Completions are queued `delay_ticks` ahead.
/// Returns true if the raw click must be cancelled.
pub fn dispatch(interaction: Interaction, scheduler: &SchedulerHandle, delay_ticks: u32) -> bool {
    match interaction {
        Interaction::Interact(mut record) => {
            let handler = Arc::clone(record.slot.handler());
            handler.interact(&mut record);
            tracing::debug!(
                "{} interact at slot {} (cancelled: {})",
                record.player,
                record.slot_index,
                record.cancelled
            );
            record.cancelled
        }
        Interaction::Complete(mut record) => {
            let cancelled = record.interact.cancelled;
            let Some(handler) = record.interact.menu.combine_handler().cloned() else {
                return cancelled;
            };
            tracing::debug!(
                "{} completing {} in {} tick(s)",
                record.interact.player,
                record.interact.menu.id(),
                delay_ticks
            );
            scheduler.schedule(delay_ticks, move || handler.complete(&mut record));
            cancelled
        }
    }
}
