//! # Item Stacks
//!
//! The contents of a single inventory position as the host reports them.
//! An empty stack stands in for "no item" everywhere: cursors, hovered
//! slots and inventory positions.

/// Unique identifier for an item type. `0` is reserved for "nothing".
pub type ItemId = u32;

/// A stack of items in one position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemStack {
    /// The item type ID, or 0 for an empty position.
    pub item_id: ItemId,
    /// Number of items in this stack.
    pub count: u32,
    /// Custom display name, if the item carries one.
    pub display_name: Option<String>,
}

impl ItemStack {
    /// Creates an empty item stack.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            item_id: 0,
            count: 0,
            display_name: None,
        }
    }

    /// Creates a new unnamed item stack.
    #[inline]
    #[must_use]
    pub const fn new(item_id: ItemId, count: u32) -> Self {
        Self {
            item_id,
            count,
            display_name: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Returns true if this stack holds nothing.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0 || self.item_id == 0
    }

    /// Returns the display name, or an empty string when the item has none.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }

    /// Clears this stack.
    #[inline]
    pub fn clear(&mut self) {
        self.item_id = 0;
        self.count = 0;
        self.display_name = None;
    }
}
