//! # Menu Controller
//!
//! The single entry point the host feeds raw container events into.
//!
//! ```text
//!                  ┌────────────────────────────┐
//! HostEvent ──────>│ applicability              │── no ──> trace!, no-op
//!                  │  managed kind?             │
//!                  │  registered menu?          │
//!                  │  player is a viewer?       │
//!                  └─────────────┬──────────────┘
//!                                │ yes
//!      ┌──────────────┬──────────┼────────────┬──────────────┐
//!      ▼              ▼          ▼            ▼              ▼
//!   classify     detect_move   drag       prepare        lifecycle
//!      │              │          │            │              │
//!      └── cancelled ─┴── OR ────┘       (deferred)    (close / veto)
//! ```
//!
//! Routing errors never reach the host. They only mean the event was not
//! meant for a menu and are logged at trace level.

use std::fmt;
use std::sync::Arc;

use coffer_core::{
    ClickEvent, CloseEvent, DragEvent, Host, HostEvent, InventoryView, PickupEvent, PlayerId,
    PluginDisableEvent, PrepareEvent, SchedulerHandle,
};

use crate::classify::{classify, dispatch};
use crate::config::RouterConfig;
use crate::drag::should_suppress;
use crate::error::{MenuError, MenuResult};
use crate::lifecycle::{close_all_forced, close_voluntary, veto_pickup};
use crate::menu::Menu;
use crate::movement::{detect_move, dispatch_move};
use crate::prepare::on_prepare;
use crate::registry::MenuRegistry;

/// Routes raw host events to menu handlers.
pub struct MenuController {
    config: RouterConfig,
    registry: Arc<dyn MenuRegistry>,
    host: Arc<dyn Host>,
    scheduler: SchedulerHandle,
}

impl MenuController {
    /// Creates a controller.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidConfig` if `config` does not validate.
    pub fn new(
        config: RouterConfig,
        registry: Arc<dyn MenuRegistry>,
        host: Arc<dyn Host>,
        scheduler: SchedulerHandle,
    ) -> MenuResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            registry,
            host,
            scheduler,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Handles one raw host event.
    ///
    /// Cancellable events have their `cancelled` flag set when a handler
    /// vetoes them.
    pub fn handle(&self, event: &mut HostEvent) {
        let outcome = match event {
            HostEvent::PluginDisable(e) => self.on_plugin_disable(e).map(drop),
            HostEvent::Click(e) => self.on_click(e),
            HostEvent::Drag(e) => self.on_drag(e).map(drop),
            HostEvent::Close(e) => self.on_close(e).map(drop),
            HostEvent::Prepare(e) => self.on_prepare(e),
            HostEvent::Pickup(e) => self.on_pickup(e).map(drop),
        };
        if let Err(err) = outcome {
            tracing::trace!("Event ignored: {}", err);
        }
    }

    // =========================================================================
    // Container interaction
    // =========================================================================

    /// Routes a click through classification and move detection.
    ///
    /// The two paths fail independently; the click is cancelled if either
    /// asks for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the click does not target a menu the player views.
    pub fn on_click(&self, event: &mut ClickEvent) -> MenuResult<()> {
        self.check_cancelled(event.cancelled)?;
        let menu = self.viewed_menu(&event.view, event.player)?;

        let mut cancel = false;
        match classify(&menu, event) {
            Ok(Some(interaction)) => {
                cancel |= dispatch(
                    interaction,
                    &self.scheduler,
                    self.config.completion_delay_ticks,
                );
            }
            Ok(None) => {}
            Err(err) => tracing::trace!("Click not classified: {}", err),
        }
        match detect_move(&menu, event) {
            Ok(Some(record)) => cancel |= dispatch_move(record),
            Ok(None) => {}
            Err(err) => tracing::trace!("Move not dispatched: {}", err),
        }

        if cancel {
            event.cancelled = true;
        }
        Ok(())
    }

    /// Cancels drags that touch the menu grid.
    ///
    /// Returns true if the drag was cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the drag does not target a menu the player views.
    pub fn on_drag(&self, event: &mut DragEvent) -> MenuResult<bool> {
        self.check_cancelled(event.cancelled)?;
        self.viewed_menu(&event.view, event.player)?;
        if !should_suppress(event) {
            return Ok(false);
        }
        event.cancelled = true;
        tracing::debug!("{} drag over menu grid cancelled", event.player);
        Ok(true)
    }

    /// Closes the player's menu after their view closed.
    ///
    /// Returns false if the menu was already closed.
    ///
    /// # Errors
    ///
    /// Returns an error for unmanaged views or players without a menu.
    pub fn on_close(&self, event: &CloseEvent) -> MenuResult<bool> {
        if !self.config.is_managed(event.view.kind) {
            return Err(MenuError::UnmanagedContainer(event.view.kind));
        }
        close_voluntary(self.registry.as_ref(), event.player)
    }

    /// Forwards a combine proposal to the menu's combine handler.
    ///
    /// # Errors
    ///
    /// Returns an error if the inventory is not a combine menu being viewed.
    pub fn on_prepare(&self, event: &PrepareEvent) -> MenuResult<()> {
        let inventory = event.inventory.read().id();
        let menu = self
            .registry
            .menu_for_inventory(inventory)
            .ok_or(MenuError::NoMenu(inventory))?;
        on_prepare(
            &menu,
            event,
            &self.scheduler,
            self.config.prepare_delay_ticks,
        )
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Vetoes pickups while the player has a menu open.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::AlreadyCancelled` when another listener already
    /// cancelled the pickup and cancelled events are respected.
    pub fn on_pickup(&self, event: &mut PickupEvent) -> MenuResult<bool> {
        self.check_cancelled(event.cancelled)?;
        Ok(veto_pickup(self.registry.as_ref(), event))
    }

    /// Force-closes every open menu when the owning plugin unloads.
    ///
    /// Returns the number of viewers closed.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::ForeignPlugin` for other plugins' unloads when an
    /// owner is configured.
    pub fn on_plugin_disable(&self, event: &PluginDisableEvent) -> MenuResult<usize> {
        if !self.config.owns_plugin(&event.plugin) {
            return Err(MenuError::ForeignPlugin(event.plugin.clone()));
        }
        tracing::info!("Plugin {} unloading, closing menus", event.plugin);
        Ok(close_all_forced(self.registry.as_ref(), self.host.as_ref()))
    }

    // =========================================================================
    // Applicability
    // =========================================================================

    fn check_cancelled(&self, cancelled: bool) -> MenuResult<()> {
        if cancelled && self.config.respect_cancelled {
            return Err(MenuError::AlreadyCancelled);
        }
        Ok(())
    }

    fn viewed_menu(&self, view: &InventoryView, player: PlayerId) -> MenuResult<Arc<Menu>> {
        if !self.config.is_managed(view.kind) {
            return Err(MenuError::UnmanagedContainer(view.kind));
        }
        let inventory = view.top_id();
        let menu = self
            .registry
            .menu_for_inventory(inventory)
            .ok_or(MenuError::NoMenu(inventory))?;
        if !menu.has_viewer(player) {
            return Err(MenuError::NotViewing {
                player,
                menu: menu.id(),
            });
        }
        Ok(menu)
    }
}

impl fmt::Debug for MenuController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuController")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
