//! # COFFER Core
//!
//! The host model the menu router is built against.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        GAME HOST                          │
//! ├──────────────────────────────────────────────────────────┤
//! │  UI subsystem ──> HostEvent ──> (coffer_menu router)     │
//! │       │                               │                   │
//! │  Inventories <── SharedInventory      └─> TickScheduler  │
//! │                                              │            │
//! │  Tick loop ──────────── run_tick() ──────────┘            │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything in this crate is something the host owns or produces:
//! identifiers, item stacks, inventories, raw click/drag/close events and
//! the notion of a tick. Menu semantics live in `coffer_menu`.
//!
//! ## Threading
//!
//! The host delivers events serially on one logical thread. Handles are
//! still `Send + Sync` so deferred tasks can capture them.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod click;
pub mod error;
pub mod events;
pub mod host;
pub mod ids;
pub mod inventory;
pub mod item;
pub mod scheduler;

pub use click::{ClickKind, InventoryAction};
pub use error::{HostError, HostResult};
pub use events::{
    ClickEvent, CloseEvent, DragEvent, HostEvent, PickupEvent, PluginDisableEvent, PrepareEvent,
};
pub use host::Host;
pub use ids::{EntityRef, InventoryId, PlayerId};
pub use inventory::{
    ContainerKind, Inventory, InventoryView, SharedInventory, SlotType, COMBINE_RESULT_SLOT,
    HOTBAR_SIZE,
};
pub use item::{ItemId, ItemStack};
pub use scheduler::{SchedulerHandle, SchedulerStats, TickScheduler};
