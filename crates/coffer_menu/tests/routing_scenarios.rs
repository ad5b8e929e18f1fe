//! End-to-end routing scenarios: raw host events in, handler calls out.

use std::collections::HashMap;
use std::sync::Arc;

use coffer_core::{
    ClickEvent, ClickKind, CloseEvent, ContainerKind, DragEvent, EntityRef, Host, HostEvent,
    Inventory, InventoryId, InventoryView, ItemStack, PickupEvent, PlayerId, PluginDisableEvent,
    PrepareEvent, SharedInventory, TickScheduler, COMBINE_RESULT_SLOT,
};
use coffer_menu::{
    CombineHandler, CombinePrepare, Menu, MenuClose, MenuComplete, MenuController, MenuHandler,
    MenuId, MenuRegistry, MenuStore, MoveToMenu, RouterConfig, Slot, SlotInteract,
};
use parking_lot::{Mutex, RwLock};

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Default)]
struct TestHost {
    views: RwLock<HashMap<PlayerId, InventoryId>>,
}

impl TestHost {
    fn show(&self, player: PlayerId, inventory: InventoryId) {
        self.views.write().insert(player, inventory);
    }
}

impl Host for TestHost {
    fn online_players(&self) -> Vec<PlayerId> {
        let mut players: Vec<_> = self.views.read().keys().copied().collect();
        players.sort();
        players
    }

    fn top_inventory(&self, player: PlayerId) -> Option<InventoryId> {
        self.views.read().get(&player).copied()
    }
}

#[derive(Default)]
struct Recorder {
    interacts: Mutex<Vec<usize>>,
    moves: Mutex<Vec<ItemStack>>,
    closes: Mutex<Vec<(PlayerId, bool)>>,
    prepares: Mutex<Vec<(PlayerId, Option<ItemStack>)>>,
    completes: Mutex<Vec<String>>,
    veto_moves: bool,
    cancel_completions: bool,
}

impl MenuHandler for Recorder {
    fn move_to_menu(&self, record: &mut MoveToMenu) {
        self.moves.lock().push(record.item.clone());
        if self.veto_moves {
            record.cancelled = true;
        }
    }

    fn on_close(&self, record: &MenuClose) {
        self.closes.lock().push((record.player, record.forced));
    }
}

impl CombineHandler for Recorder {
    fn prepare(&self, record: &CombinePrepare) {
        self.prepares
            .lock()
            .push((record.player, record.result.clone()));
    }

    fn complete(&self, record: &mut MenuComplete) {
        self.completes.lock().push(record.text.clone());
        if self.cancel_completions {
            record.interact.cancelled = true;
        }
    }
}

struct World {
    scheduler: TickScheduler,
    store: Arc<MenuStore>,
    host: Arc<TestHost>,
    controller: MenuController,
    recorder: Arc<Recorder>,
}

impl World {
    fn new(recorder: Recorder) -> Self {
        let scheduler = TickScheduler::new();
        let store = Arc::new(MenuStore::new());
        let host = Arc::new(TestHost::default());
        let controller = MenuController::new(
            RouterConfig::default(),
            Arc::clone(&store) as Arc<dyn MenuRegistry>,
            Arc::clone(&host) as Arc<dyn Host>,
            scheduler.handle(),
        )
        .unwrap();
        Self {
            scheduler,
            store,
            host,
            controller,
            recorder: Arc::new(recorder),
        }
    }

    fn interact_slot(&self, cancel_events: bool) -> Slot {
        let recorder = Arc::clone(&self.recorder);
        Slot::new(cancel_events, move |record: &mut SlotInteract| {
            recorder.interacts.lock().push(record.slot_index);
        })
    }

    fn grid_menu(&self, id: u64) -> Arc<Menu> {
        Arc::new(
            Menu::grid(MenuId(id), Arc::clone(&self.recorder))
                .with_base_slot(self.interact_slot(true)),
        )
    }

    fn combine_menu(&self, id: u64) -> Arc<Menu> {
        Arc::new(
            Menu::combine(
                MenuId(id),
                Arc::clone(&self.recorder),
                Arc::clone(&self.recorder),
            )
            .with_base_slot(self.interact_slot(true)),
        )
    }

    /// Opens `menu` for `player` on a fresh top inventory and returns the view.
    fn open(
        &self,
        menu: &Arc<Menu>,
        player: PlayerId,
        kind: ContainerKind,
        size: usize,
    ) -> InventoryView {
        let inventory_id = InventoryId(1_000 + player.0);
        let top = Inventory::new(inventory_id, kind, size).into_shared();
        let bottom = Inventory::new(InventoryId(2_000 + player.0), ContainerKind::Player, 36);
        self.store.open(menu, player, Arc::clone(&top));
        self.host.show(player, inventory_id);
        InventoryView::new(top, bottom.into_shared())
    }

    fn send(&self, mut event: HostEvent) -> HostEvent {
        self.controller.handle(&mut event);
        event
    }
}

fn put(inventory: &SharedInventory, slot: usize, item: ItemStack) {
    inventory.write().set(slot, item).unwrap();
}

const ALICE: PlayerId = PlayerId(1);
const BOB: PlayerId = PlayerId(2);

// =============================================================================
// Clicks
// =============================================================================

#[test]
fn test_result_click_completes_one_tick_later() {
    let mut world = World::new(Recorder::default());
    let menu = world.combine_menu(1);
    let view = world.open(&menu, ALICE, ContainerKind::Combine, 3);
    put(&view.top, COMBINE_RESULT_SLOT, ItemStack::new(11, 1).named("Renamed Blade"));

    let event = world.send(HostEvent::Click(ClickEvent::at(view, ALICE, COMBINE_RESULT_SLOT)));
    assert!(event.is_cancelled());
    assert!(world.recorder.completes.lock().is_empty());
    assert!(world.recorder.interacts.lock().is_empty());

    world.scheduler.run_tick();
    assert_eq!(*world.recorder.completes.lock(), vec!["Renamed Blade".to_owned()]);

    world.scheduler.run_tick();
    assert_eq!(world.recorder.completes.lock().len(), 1);
    assert!(world.recorder.interacts.lock().is_empty());
}

#[test]
fn test_completion_cancel_does_not_reach_the_click() {
    let mut world = World::new(Recorder {
        cancel_completions: true,
        ..Recorder::default()
    });
    let menu = Arc::new(
        Menu::combine(
            MenuId(1),
            Arc::clone(&world.recorder),
            Arc::clone(&world.recorder),
        )
        .with_slot(COMBINE_RESULT_SLOT + 1, Slot::passive(false)),
    );
    let view = world.open(&menu, ALICE, ContainerKind::Combine, 3);
    put(&view.top, COMBINE_RESULT_SLOT, ItemStack::new(11, 1).named("Renamed Blade"));

    let event = world.send(HostEvent::Click(ClickEvent::at(view, ALICE, COMBINE_RESULT_SLOT)));
    assert!(!event.is_cancelled());
    assert!(world.recorder.completes.lock().is_empty());

    world.scheduler.run_tick();
    assert_eq!(*world.recorder.completes.lock(), vec!["Renamed Blade".to_owned()]);
    assert!(!event.is_cancelled());
}

#[test]
fn test_unnamed_result_completes_with_empty_label() {
    let mut world = World::new(Recorder::default());
    let menu = world.combine_menu(1);
    let view = world.open(&menu, ALICE, ContainerKind::Combine, 3);
    put(&view.top, COMBINE_RESULT_SLOT, ItemStack::new(11, 1));

    world.send(HostEvent::Click(ClickEvent::at(view, ALICE, COMBINE_RESULT_SLOT)));
    world.scheduler.run_tick();
    assert_eq!(*world.recorder.completes.lock(), vec![String::new()]);
}

#[test]
fn test_grid_clicks_interact_synchronously() {
    let mut world = World::new(Recorder::default());
    let menu = world.grid_menu(1);
    let view = world.open(&menu, ALICE, ContainerKind::Chest, 27);

    for raw in [0, 13, 26] {
        let event = world.send(HostEvent::Click(ClickEvent::at(view.clone(), ALICE, raw)));
        assert!(event.is_cancelled());
    }
    assert_eq!(*world.recorder.interacts.lock(), vec![1, 14, 27]);

    world.scheduler.run_tick();
    assert!(world.recorder.completes.lock().is_empty());
    assert_eq!(world.scheduler.stats().tasks_run, 0);
}

#[test]
fn test_empty_result_surface_is_plain_interact() {
    let mut world = World::new(Recorder::default());
    let menu = world.combine_menu(1);
    let view = world.open(&menu, ALICE, ContainerKind::Combine, 3);

    world.send(HostEvent::Click(ClickEvent::at(view, ALICE, COMBINE_RESULT_SLOT)));
    world.scheduler.run_tick();
    assert_eq!(*world.recorder.interacts.lock(), vec![COMBINE_RESULT_SLOT + 1]);
    assert!(world.recorder.completes.lock().is_empty());
}

#[test]
fn test_click_outside_grid_is_not_an_interaction() {
    let world = World::new(Recorder::default());
    let menu = world.grid_menu(1);
    let view = world.open(&menu, ALICE, ContainerKind::Chest, 9);

    let event = world.send(HostEvent::Click(ClickEvent::at(view, ALICE, 20)));
    assert!(!event.is_cancelled());
    assert!(world.recorder.interacts.lock().is_empty());
    assert!(world.recorder.moves.lock().is_empty());
}

#[test]
fn test_cursor_move_targets_base_slot_and_veto_cancels() {
    let world = World::new(Recorder {
        veto_moves: true,
        ..Recorder::default()
    });
    // Slot 4 (raw 3) has no explicit registration; the base slot lets events through.
    let recorder = Arc::clone(&world.recorder);
    let menu = Arc::new(
        Menu::grid(MenuId(1), Arc::clone(&world.recorder))
            .with_slot(1, Slot::passive(true))
            .with_base_slot(Slot::new(false, move |record: &mut SlotInteract| {
                recorder.interacts.lock().push(record.slot_index);
            })),
    );
    let view = world.open(&menu, ALICE, ContainerKind::Chest, 9);

    let x = ItemStack::new(42, 8);
    let click = ClickEvent::at(view, ALICE, 3).with_cursor(x.clone());
    let event = world.send(HostEvent::Click(click));

    assert_eq!(*world.recorder.interacts.lock(), vec![4]);
    assert_eq!(*world.recorder.moves.lock(), vec![x]);
    assert!(event.is_cancelled());
}

#[test]
fn test_move_without_veto_leaves_click_alone() {
    let world = World::new(Recorder::default());
    let menu = Arc::new(
        Menu::grid(MenuId(1), Arc::clone(&world.recorder)).with_base_slot(Slot::passive(false)),
    );
    let view = world.open(&menu, ALICE, ContainerKind::Chest, 9);

    let click = ClickEvent::at(view, ALICE, 3).with_cursor(ItemStack::new(42, 8));
    let event = world.send(HostEvent::Click(click));
    assert_eq!(world.recorder.moves.lock().len(), 1);
    assert!(!event.is_cancelled());
}

#[test]
fn test_shift_click_from_player_area() {
    let world = World::new(Recorder::default());
    let menu = world.grid_menu(1);
    let view = world.open(&menu, ALICE, ContainerKind::Chest, 9);
    let raw = 20;
    put(&view.bottom, view.convert_slot(raw), ItemStack::new(5, 10));

    let shift = |view: &InventoryView| {
        ClickEvent::at(view.clone(), ALICE, raw).with_click(ClickKind::ShiftLeft)
    };

    world.send(HostEvent::Click(shift(&view)));
    assert!(world.recorder.moves.lock().is_empty());

    put(&view.top, 4, ItemStack::new(1, 1));
    world.send(HostEvent::Click(shift(&view)));
    assert_eq!(*world.recorder.moves.lock(), vec![ItemStack::new(5, 10)]);
}

#[test]
fn test_other_players_view_is_ignored() {
    let world = World::new(Recorder::default());
    let menu = world.grid_menu(1);
    let view = world.open(&menu, ALICE, ContainerKind::Chest, 9);

    let event = world.send(HostEvent::Click(ClickEvent::at(view, BOB, 0)));
    assert!(!event.is_cancelled());
    assert!(world.recorder.interacts.lock().is_empty());
}

#[test]
fn test_unregistered_inventory_is_ignored() {
    let world = World::new(Recorder::default());
    let top = Inventory::new(InventoryId(77), ContainerKind::Chest, 9).into_shared();
    let bottom = Inventory::new(InventoryId(78), ContainerKind::Player, 36).into_shared();
    let view = InventoryView::new(top, bottom);

    let event = world.send(HostEvent::Click(ClickEvent::at(view, ALICE, 0)));
    assert!(!event.is_cancelled());
}

// =============================================================================
// Drags
// =============================================================================

#[test]
fn test_drag_touching_grid_is_cancelled() {
    let world = World::new(Recorder::default());
    let menu = world.grid_menu(1);
    let view = world.open(&menu, ALICE, ContainerKind::Chest, 9);

    let event = world.send(HostEvent::Drag(DragEvent::new(view, ALICE, [7, 8, 9])));
    assert!(event.is_cancelled());
}

#[test]
fn test_drag_below_grid_is_untouched() {
    let world = World::new(Recorder::default());
    let menu = world.grid_menu(1);
    let view = world.open(&menu, ALICE, ContainerKind::Chest, 9);

    let event = world.send(HostEvent::Drag(DragEvent::new(view, ALICE, [10, 11, 12])));
    assert!(!event.is_cancelled());
}

// =============================================================================
// Prepare
// =============================================================================

#[test]
fn test_prepare_reaches_viewer_next_tick() {
    let mut world = World::new(Recorder::default());
    let menu = world.combine_menu(1);
    let alice_view = world.open(&menu, ALICE, ContainerKind::Combine, 3);
    let bob_view = world.open(&menu, BOB, ContainerKind::Combine, 3);

    world.send(HostEvent::Prepare(PrepareEvent {
        inventory: Arc::clone(&bob_view.top),
        result: Some(ItemStack::new(9, 1)),
    }));
    world.send(HostEvent::Prepare(PrepareEvent {
        inventory: Arc::clone(&alice_view.top),
        result: None,
    }));
    assert!(world.recorder.prepares.lock().is_empty());

    world.scheduler.run_tick();
    assert_eq!(
        *world.recorder.prepares.lock(),
        vec![(BOB, Some(ItemStack::new(9, 1))), (ALICE, None)]
    );
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_close_twice_is_a_no_op() {
    let world = World::new(Recorder::default());
    let menu = world.grid_menu(1);
    let view = world.open(&menu, ALICE, ContainerKind::Chest, 9);

    let close = CloseEvent { view, player: ALICE };
    world.send(HostEvent::Close(close.clone()));
    world.send(HostEvent::Close(close));

    assert_eq!(*world.recorder.closes.lock(), vec![(ALICE, false)]);
    assert!(world.store.menu_for_player(ALICE).is_none());
}

#[test]
fn test_plugin_unload_force_closes_all_viewers() {
    let world = World::new(Recorder::default());
    let menu = world.grid_menu(1);
    world.open(&menu, ALICE, ContainerKind::Chest, 9);
    world.open(&menu, BOB, ContainerKind::Chest, 9);

    world.send(HostEvent::PluginDisable(PluginDisableEvent {
        plugin: "shop".to_owned(),
    }));

    let mut closes = world.recorder.closes.lock().clone();
    closes.sort();
    assert_eq!(closes, vec![(ALICE, true), (BOB, true)]);
    assert!(world.store.is_empty());
}

#[test]
fn test_pickup_vetoed_only_with_open_menu() {
    let world = World::new(Recorder::default());
    let menu = world.grid_menu(1);
    world.open(&menu, ALICE, ContainerKind::Chest, 9);

    let item = ItemStack::new(3, 1);
    let alice = world.send(HostEvent::Pickup(PickupEvent::new(
        EntityRef::Player(ALICE),
        item.clone(),
    )));
    let bob = world.send(HostEvent::Pickup(PickupEvent::new(
        EntityRef::Player(BOB),
        item,
    )));
    assert!(alice.is_cancelled());
    assert!(!bob.is_cancelled());
}

#[test]
fn test_closed_menu_stops_routing() {
    let world = World::new(Recorder::default());
    let menu = world.grid_menu(1);
    let view = world.open(&menu, ALICE, ContainerKind::Chest, 9);

    world.send(HostEvent::Close(CloseEvent {
        view: view.clone(),
        player: ALICE,
    }));
    let event = world.send(HostEvent::Click(ClickEvent::at(view, ALICE, 0)));
    assert!(!event.is_cancelled());
    assert!(world.recorder.interacts.lock().is_empty());
}

#[test]
fn test_shared_inventory_keeps_routing_after_one_viewer_closes() {
    let world = World::new(Recorder::default());
    let menu = world.grid_menu(1);
    let shared = Inventory::new(InventoryId(10), ContainerKind::Chest, 9).into_shared();
    let views: Vec<InventoryView> = [ALICE, BOB]
        .into_iter()
        .map(|player| {
            world.store.open(&menu, player, Arc::clone(&shared));
            world.host.show(player, InventoryId(10));
            let bottom = Inventory::new(InventoryId(2_000 + player.0), ContainerKind::Player, 36);
            InventoryView::new(Arc::clone(&shared), bottom.into_shared())
        })
        .collect();

    world.send(HostEvent::Close(CloseEvent {
        view: views[0].clone(),
        player: ALICE,
    }));
    assert_eq!(*world.recorder.closes.lock(), vec![(ALICE, false)]);

    let event = world.send(HostEvent::Click(ClickEvent::at(views[1].clone(), BOB, 0)));
    assert!(event.is_cancelled());
    assert_eq!(*world.recorder.interacts.lock(), vec![1]);
}
