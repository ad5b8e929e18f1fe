//! Logical slots and their interact handlers.

use std::fmt;
use std::sync::Arc;

use crate::records::SlotInteract;

/// Handles plain interactions with a slot.
///
/// Set `record.cancelled` to veto the raw click.
pub trait SlotHandler: Send + Sync {
    /// Called synchronously for every plain click on the slot.
    fn interact(&self, record: &mut SlotInteract);
}

impl<F> SlotHandler for F
where
    F: Fn(&mut SlotInteract) + Send + Sync,
{
    fn interact(&self, record: &mut SlotInteract) {
        self(record);
    }
}

/// A logical position inside a menu.
#[derive(Clone)]
pub struct Slot {
    cancel_events: bool,
    handler: Arc<dyn SlotHandler>,
}

impl Slot {
    /// Creates a slot with a handler.
    #[must_use]
    pub fn new(cancel_events: bool, handler: impl SlotHandler + 'static) -> Self {
        Self {
            cancel_events,
            handler: Arc::new(handler),
        }
    }

    /// Creates a slot whose handler does nothing.
    #[must_use]
    pub fn passive(cancel_events: bool) -> Self {
        Self::new(cancel_events, |_: &mut SlotInteract| {})
    }

    /// Whether raw events on this slot are vetoed unless a handler says otherwise.
    #[inline]
    #[must_use]
    pub const fn cancel_events(&self) -> bool {
        self.cancel_events
    }

    /// The slot's handler.
    #[must_use]
    pub fn handler(&self) -> &Arc<dyn SlotHandler> {
        &self.handler
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("cancel_events", &self.cancel_events)
            .finish_non_exhaustive()
    }
}
