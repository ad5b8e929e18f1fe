//! # COFFER Menu
//!
//! Turns raw container events into per-slot menu interactions.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         MenuController                          │
//! │   handle(&mut HostEvent) ── applicability ── fan-out            │
//! ├───────────────┬───────────────┬──────────────┬──────────────────┤
//! │   classify    │   movement    │    drag      │ prepare/lifecycle│
//! │ SlotInteract  │  MoveToMenu   │  veto drag   │ CombinePrepare   │
//! │ MenuComplete  │               │              │ MenuClose        │
//! ├───────────────┴───────────────┴──────────────┴──────────────────┤
//! │ resolve: raw position -> explicit slot | base slot              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │ MenuRegistry (MenuStore)    Menu { kind, slots, viewers }       │
//! └─────────────────────────────────────────────────────────────────┘
//!             │ deferred work
//!             ▼
//!     coffer_core::TickScheduler
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut scheduler = TickScheduler::new();
//! let store = Arc::new(MenuStore::new());
//! let controller = MenuController::new(
//!     RouterConfig::from_toml_file("coffer.toml")?,
//!     store.clone(),
//!     host,
//!     scheduler.handle(),
//! )?;
//!
//! let shop = Arc::new(Menu::grid(MenuId(1), ShopHandler).with_base_slot(Slot::passive(true)));
//! store.open(&shop, player, inventory);
//!
//! // Host event loop:
//! controller.handle(&mut event);
//! // Host tick boundary:
//! scheduler.run_tick();
//! ```
//!
//! Events that are not for a menu are silent no-ops. Handlers veto raw
//! events through the `cancelled` field of the record they receive.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod classify;
pub mod config;
pub mod controller;
pub mod drag;
pub mod error;
pub mod lifecycle;
pub mod menu;
pub mod movement;
pub mod prepare;
pub mod records;
pub mod registry;
pub mod resolve;
pub mod slot;

#[cfg(test)]
mod testing;

pub use classify::{classify, dispatch};
pub use config::RouterConfig;
pub use controller::MenuController;
pub use drag::should_suppress;
pub use error::{MenuError, MenuResult};
pub use lifecycle::{close_all_forced, close_voluntary, veto_pickup};
pub use menu::{CombineHandler, Menu, MenuHandler, MenuId, MenuKind, NoopMenuHandler};
pub use movement::{detect_move, dispatch_move};
pub use prepare::on_prepare;
pub use records::{CombinePrepare, Interaction, MenuClose, MenuComplete, MoveToMenu, SlotInteract};
pub use registry::{MenuRegistry, MenuStore};
pub use resolve::{logical_index, resolve};
pub use slot::{Slot, SlotHandler};
