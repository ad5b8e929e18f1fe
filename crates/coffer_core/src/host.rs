//! Queries the router makes against the host.

use crate::ids::{InventoryId, PlayerId};

/// Read access to the host's player and view state.
///
/// The host implements this trait; the router never caches the answers.
pub trait Host: Send + Sync {
    /// Players currently online.
    fn online_players(&self) -> Vec<PlayerId>;

    /// Identity of the top inventory of the player's open view, if any.
    fn top_inventory(&self, player: PlayerId) -> Option<InventoryId>;
}
