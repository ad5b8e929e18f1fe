//! # Lifecycle Guard
//!
//! Keeps menus consistent when they go away outside the normal click flow.
//!
//! | Trigger        | Effect                                             |
//! |----------------|----------------------------------------------------|
//! | plugin unload  | every viewer's menu closed with `forced = true`    |
//! | view close     | the player's menu closed with `forced = false`     |
//! | item pickup    | vetoed while the player has a menu open            |

use coffer_core::{Host, PickupEvent, PlayerId};

use crate::error::{MenuError, MenuResult};
use crate::registry::MenuRegistry;

/// Force-closes the menu every online player is looking at.
///
/// Returns the number of viewers closed.
pub fn close_all_forced(registry: &dyn MenuRegistry, host: &dyn Host) -> usize {
    let mut closed = 0;
    for player in host.online_players() {
        let Some(inventory) = host.top_inventory(player) else {
            continue;
        };
        let Some(menu) = registry.menu_for_inventory(inventory) else {
            continue;
        };
        if registry.close(&menu, player, true) {
            closed += 1;
        }
    }
    tracing::info!("Force-closed {} menu viewer(s)", closed);
    closed
}

/// Closes the player's current menu after they closed the view themselves.
///
/// Returns false if the menu was already closed.
///
/// # Errors
///
/// Returns `MenuError::NoOpenMenu` if the player has no menu.
pub fn close_voluntary(registry: &dyn MenuRegistry, player: PlayerId) -> MenuResult<bool> {
    let menu = registry
        .menu_for_player(player)
        .ok_or(MenuError::NoOpenMenu(player))?;
    Ok(registry.close(&menu, player, false))
}

/// Vetoes a pickup by a player who has a menu open.
///
/// Returns true if the pickup was cancelled.
pub fn veto_pickup(registry: &dyn MenuRegistry, event: &mut PickupEvent) -> bool {
    let Some(player) = event.entity.as_player() else {
        return false;
    };
    if registry.menu_for_player(player).is_none() {
        return false;
    }
    event.cancelled = true;
    tracing::trace!("{} pickup vetoed while a menu is open", player);
    true
}
