//! Headless integration tests for Sprout Patch.
//!
//! These tests exercise the game's ECS logic without a window or GPU.
//! They use Bevy's `MinimalPlugins` to tick the app, add the domain
//! plugins that do not need input hardware or UI, and drive the game by
//! writing `PlayerInput` directly. Wheel handling goes through the real
//! input plugins with synthetic `MouseWheel` events.
//!
//! Run with: `cargo test --test headless`

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use sprout_patch::config::GameConfig;
use sprout_patch::farming::{FarmingPlugin, RenderedTiles};
use sprout_patch::input::InputPlugin;
use sprout_patch::player::PlayerPlugin;
use sprout_patch::shared::*;
use sprout_patch::world::WorldPlugin;

// ─────────────────────────────────────────────────────────────────────────────
// Test App Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builds a minimal Bevy app with the shared resources registered and the
/// world, player and farming domains installed. No rendering, windowing,
/// input hardware or UI.
fn build_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);

    // ── Game State ───────────────────────────────────────────────────────
    app.init_state::<GameState>();

    // ── Shared Resources (mirrors main.rs) ───────────────────────────────
    app.insert_resource(GameConfig::default())
        .init_resource::<TileMap>()
        .init_resource::<WorldCamera>()
        .init_resource::<Inventory>()
        .init_resource::<PlayerInput>();

    // ── Domain Plugins ───────────────────────────────────────────────────
    app.add_plugins(WorldPlugin)
        .add_plugins(PlayerPlugin)
        .add_plugins(FarmingPlugin);

    app
}

/// Ticks until the world is generated and the game is in Playing.
fn boot(app: &mut App) {
    app.update();
    app.update();
    app.update();
    assert_eq!(
        app.world().resource::<State<GameState>>().get(),
        &GameState::Playing,
        "Expected to reach Playing after world setup"
    );
}

/// Applies `input` for exactly one frame.
fn press(app: &mut App, input: PlayerInput) {
    *app.world_mut().resource_mut::<PlayerInput>() = input;
    app.update();
    *app.world_mut().resource_mut::<PlayerInput>() = PlayerInput::default();
}

fn player_tile(app: &mut App) -> (i32, i32) {
    let center = app
        .world_mut()
        .query_filtered::<&PlayerBody, With<Player>>()
        .single(app.world())
        .center();
    app.world().resource::<TileMap>().world_to_tile(center.x, center.y)
}

// ─────────────────────────────────────────────────────────────────────────────
// Boot
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_headless_boot_builds_world_and_player() {
    let mut app = build_test_app();
    boot(&mut app);

    let map = app.world().resource::<TileMap>();
    assert_eq!((map.cols(), map.rows()), (25, 25));
    assert_eq!(map.tile(0, 0), Some(TileKind::CornerNorthWest));
    assert_eq!(map.tile(3, 3), Some(TileKind::Tree));

    let inventory = app.world().resource::<Inventory>();
    assert_eq!(inventory.slot_count(), 8);
    assert_eq!(inventory.count("carrot_seed"), 5);
    assert_eq!(inventory.count("tomato_seed"), 5);
    assert_eq!(
        inventory.selected_item().map(|s| s.name.as_str()),
        Some("carrot_seed")
    );

    let players = app
        .world_mut()
        .query_filtered::<Entity, With<Player>>()
        .iter(app.world())
        .count();
    assert_eq!(players, 1, "Exactly one player should be spawned");
    assert_eq!(player_tile(&mut app), (2, 2));
}

#[test]
fn test_only_visible_tiles_are_rendered() {
    let mut app = build_test_app();
    boot(&mut app);
    app.update();

    // Viewport (0, 0, 800, 600) over 64px tiles: 13 columns by 10 rows.
    assert_eq!(app.world().resource::<RenderedTiles>().tile_count(), 130);
}

// ─────────────────────────────────────────────────────────────────────────────
// Farming through player input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_interact_tills_then_plants_selected_seed() {
    let mut app = build_test_app();
    boot(&mut app);
    let (c, r) = player_tile(&mut app);

    press(&mut app, PlayerInput { interact: true, ..default() });
    {
        let map = app.world().resource::<TileMap>();
        assert!(map.is_tilled(c, r));
        assert_eq!(map.tile(c, r), Some(TileKind::Dirt));
        assert!(map.crop_at(c, r).is_none());
    }

    press(&mut app, PlayerInput { interact: true, ..default() });
    let map = app.world().resource::<TileMap>();
    assert_eq!(map.crop_at(c, r).map(|crop| crop.kind), Some(CropKind::Carrot));
    assert_eq!(app.world().resource::<Inventory>().count("carrot_seed"), 4);
}

#[test]
fn test_till_and_plant_keys_use_tile_actions() {
    let mut app = build_test_app();
    boot(&mut app);
    let (c, r) = player_tile(&mut app);

    // Planting on grass does nothing and costs nothing.
    press(&mut app, PlayerInput { plant: true, ..default() });
    assert!(app.world().resource::<TileMap>().crop_at(c, r).is_none());
    assert_eq!(app.world().resource::<Inventory>().count("carrot_seed"), 5);

    press(&mut app, PlayerInput { till: true, ..default() });
    assert!(app.world().resource::<TileMap>().is_tilled(c, r));

    press(&mut app, PlayerInput { slot_select: Some(1), ..default() });
    press(&mut app, PlayerInput { plant: true, ..default() });
    let map = app.world().resource::<TileMap>();
    assert_eq!(map.crop_at(c, r).map(|crop| crop.kind), Some(CropKind::Tomato));
    assert_eq!(app.world().resource::<Inventory>().count("tomato_seed"), 4);
}

#[test]
fn test_mouse_click_tills_tile_under_cursor() {
    let mut app = build_test_app();
    boot(&mut app);

    // Camera is pinned at the world origin near the spawn point, so
    // screen and world coordinates coincide.
    assert_eq!(app.world().resource::<WorldCamera>().world_view_rect().left, 0);
    press(
        &mut app,
        PlayerInput {
            cursor_till: Some(Vec2::new(330.0, 330.0)),
            ..default()
        },
    );
    assert!(app.world().resource::<TileMap>().is_tilled(5, 5));

    press(
        &mut app,
        PlayerInput {
            cursor_plant: Some(Vec2::new(330.0, 330.0)),
            ..default()
        },
    );
    assert_eq!(
        app.world().resource::<TileMap>().crop_at(5, 5).map(|c| c.kind),
        Some(CropKind::Carrot)
    );
}

#[test]
fn test_crops_grow_one_stage_per_growth_period() {
    let mut app = build_test_app();
    boot(&mut app);
    let (c, r) = player_tile(&mut app);

    press(&mut app, PlayerInput { till: true, ..default() });
    press(&mut app, PlayerInput { plant: true, ..default() });
    assert_eq!(app.world().resource::<TileMap>().crop_at(c, r).map(|c| c.stage), Some(0));

    for _ in 0..130 {
        app.update();
    }
    assert_eq!(app.world().resource::<TileMap>().crop_at(c, r).map(|c| c.stage), Some(1));

    for _ in 0..500 {
        app.update();
    }
    let map = app.world().resource::<TileMap>();
    let crop = map.crop_at(c, r).expect("crop should still exist");
    assert_eq!(crop.stage, 2);
    assert!(crop.is_mature());
    assert_eq!(app.world().resource::<RenderedTiles>().crop_count(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Camera and hotbar
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_camera_follows_player_and_clamps() {
    let mut app = build_test_app();
    boot(&mut app);

    let set_player_center = |app: &mut App, center: Vec2| {
        let mut body = app
            .world_mut()
            .query_filtered::<&mut PlayerBody, With<Player>>()
            .single_mut(app.world_mut());
        body.position = center - body.size / 2.0;
    };

    set_player_center(&mut app, Vec2::new(800.0, 800.0));
    app.update();
    let view = app.world().resource::<WorldCamera>().world_view_rect();
    assert_eq!((view.left, view.top), (400, 500));

    set_player_center(&mut app, Vec2::new(1550.0, 1550.0));
    app.update();
    let view = app.world().resource::<WorldCamera>().world_view_rect();
    assert_eq!((view.left, view.top), (800, 1000));

    set_player_center(&mut app, Vec2::new(50.0, 50.0));
    app.update();
    let view = app.world().resource::<WorldCamera>().world_view_rect();
    assert_eq!((view.left, view.top), (0, 0));
}

#[test]
fn test_slot_keys_and_scroll_change_selection() {
    let mut app = build_test_app();
    boot(&mut app);

    press(&mut app, PlayerInput { slot_select: Some(4), ..default() });
    assert_eq!(app.world().resource::<Inventory>().selected_index(), 4);

    // Scrolling up steps back, scrolling down steps forward.
    press(&mut app, PlayerInput { scroll_steps: vec![1.0], ..default() });
    assert_eq!(app.world().resource::<Inventory>().selected_index(), 3);
    press(&mut app, PlayerInput { scroll_steps: vec![-1.0, -1.0], ..default() });
    assert_eq!(app.world().resource::<Inventory>().selected_index(), 5);

    // Opposite notches in one frame each take effect.
    press(&mut app, PlayerInput { scroll_steps: vec![-1.0, 1.0], ..default() });
    assert_eq!(app.world().resource::<Inventory>().selected_index(), 5);

    // Out-of-range number keys are ignored.
    press(&mut app, PlayerInput { slot_select: Some(8), ..default() });
    assert_eq!(app.world().resource::<Inventory>().selected_index(), 5);
}

#[test]
fn test_each_wheel_event_moves_selection_once() {
    let mut app = build_test_app();
    app.add_plugins(bevy::input::InputPlugin).add_plugins(InputPlugin);
    boot(&mut app);
    assert_eq!(app.world().resource::<Inventory>().selected_index(), 0);

    let notch = |y: f32| MouseWheel {
        unit: MouseScrollUnit::Line,
        x: 0.0,
        y,
        window: Entity::PLACEHOLDER,
    };

    for _ in 0..3 {
        app.world_mut().send_event(notch(-1.0));
    }
    app.update();
    assert_eq!(app.world().resource::<PlayerInput>().scroll_steps, vec![-1.0; 3]);
    assert_eq!(app.world().resource::<Inventory>().selected_index(), 3);

    app.world_mut().send_event(notch(1.0));
    app.world_mut().send_event(notch(-1.0));
    app.world_mut().send_event(notch(1.0));
    app.update();
    assert_eq!(app.world().resource::<Inventory>().selected_index(), 2);

    // Input is rebuilt every frame, so a quiet frame leaves selection alone.
    app.update();
    assert!(app.world().resource::<PlayerInput>().scroll_steps.is_empty());
    assert_eq!(app.world().resource::<Inventory>().selected_index(), 2);
}
