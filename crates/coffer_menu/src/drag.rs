//! Drag suppression.
//!
//! A drag that touches the menu grid would spread items over menu slots
//! without any per-slot interaction, so it is vetoed outright.

use coffer_core::DragEvent;

/// Returns true if the drag touches at least one position of the top grid.
#[must_use]
pub fn should_suppress(event: &DragEvent) -> bool {
    let top_size = event.view.top_size();
    event.raw_slots.iter().any(|&raw| raw < top_size)
}
