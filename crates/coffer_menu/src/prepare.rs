//! # Combine Preparation
//!
//! The host recomputes a combine surface's proposed result whenever its
//! inputs change, but only commits it once the current tick ends. The
//! proposal is forwarded to the menu's combine handler after a deferral so
//! that the handler observes the committed value.

use std::sync::Arc;

use coffer_core::{PrepareEvent, SchedulerHandle};

use crate::error::{MenuError, MenuResult};
use crate::menu::Menu;
use crate::records::CombinePrepare;

/// Queues `CombineHandler::prepare` for the viewer of the changed inventory.
///
/// # Errors
///
/// - `MenuError::NotCombine` if the menu has no combine surface
/// - `MenuError::NoCombineViewer` if nobody views the changed inventory
pub fn on_prepare(
    menu: &Arc<Menu>,
    event: &PrepareEvent,
    scheduler: &SchedulerHandle,
    delay_ticks: u32,
) -> MenuResult<()> {
    let handler = menu
        .combine_handler()
        .cloned()
        .ok_or(MenuError::NotCombine(menu.id()))?;

    let inventory_id = event.inventory.read().id();
    let player = menu
        .viewer_of(inventory_id)
        .ok_or(MenuError::NoCombineViewer {
            menu: menu.id(),
            inventory: inventory_id,
        })?;

    let record = CombinePrepare {
        menu: Arc::clone(menu),
        player,
        inventory: Arc::clone(&event.inventory),
        result: event.result.clone(),
    };
    tracing::debug!("{} prepare for {} in {} tick(s)", menu.id(), player, delay_ticks);
    scheduler.schedule(delay_ticks, move || handler.prepare(&record));
    Ok(())
}
