//! Host identifiers.

use std::fmt;

/// Identifies an online player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

/// Identifies one concrete inventory instance.
///
/// Two inventories are "the same instance" exactly when their ids match,
/// regardless of contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InventoryId(pub u64);

/// An entity taking part in an ambient event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityRef {
    /// A player.
    Player(PlayerId),
    /// Any non-player entity (mobs, minecarts, ...).
    Other(u64),
}

impl EntityRef {
    /// Returns the player id if this entity is a player.
    #[inline]
    #[must_use]
    pub const fn as_player(self) -> Option<PlayerId> {
        match self {
            Self::Player(id) => Some(id),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

impl fmt::Display for InventoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inventory#{}", self.0)
    }
}
