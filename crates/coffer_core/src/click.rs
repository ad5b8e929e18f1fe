//! Click gestures and the actions the host derived from them.

/// The physical gesture behind a container click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickKind {
    /// Left mouse button.
    Left,
    /// Shift + left mouse button.
    ShiftLeft,
    /// Right mouse button.
    Right,
    /// Shift + right mouse button.
    ShiftRight,
    /// Left click on the window border.
    WindowBorderLeft,
    /// Right click on the window border.
    WindowBorderRight,
    /// Middle mouse button.
    Middle,
    /// Number key (hotbar swap gesture).
    NumberKey,
    /// Double click.
    DoubleClick,
    /// Drop key.
    Drop,
    /// Control + drop key.
    ControlDrop,
    /// Creative-mode inventory action.
    Creative,
    /// Offhand swap key.
    SwapOffhand,
    /// Anything the host could not classify.
    Unknown,
}

impl ClickKind {
    /// Returns true for shift-click gestures (bulk transfer).
    #[inline]
    #[must_use]
    pub const fn is_shift_click(self) -> bool {
        matches!(self, Self::ShiftLeft | Self::ShiftRight)
    }
}

/// What the host decided a click will do to inventory contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InventoryAction {
    /// Nothing happens.
    Nothing,
    /// All of the clicked stack moves to the cursor.
    PickupAll,
    /// Part of the clicked stack moves to the cursor.
    PickupSome,
    /// Half of the clicked stack moves to the cursor.
    PickupHalf,
    /// One item moves to the cursor.
    PickupOne,
    /// The whole cursor is placed.
    PlaceAll,
    /// Part of the cursor is placed.
    PlaceSome,
    /// One cursor item is placed.
    PlaceOne,
    /// Cursor and clicked slot are swapped.
    SwapWithCursor,
    /// Whole cursor is dropped.
    DropAllCursor,
    /// One cursor item is dropped.
    DropOneCursor,
    /// Whole clicked stack is dropped.
    DropAllSlot,
    /// One item of the clicked stack is dropped.
    DropOneSlot,
    /// Shift-click transfer to the other inventory.
    MoveToOtherInventory,
    /// Hotbar swap that re-adds the displaced stack elsewhere.
    HotbarMoveAndReadd,
    /// Hotbar swap.
    HotbarSwap,
    /// Creative clone of the clicked stack.
    CloneStack,
    /// Matching items gathered onto the cursor.
    CollectToCursor,
    /// Anything the host could not classify.
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_click() {
        assert!(ClickKind::ShiftLeft.is_shift_click());
        assert!(ClickKind::ShiftRight.is_shift_click());
        assert!(!ClickKind::Left.is_shift_click());
        assert!(!ClickKind::NumberKey.is_shift_click());
    }
}
