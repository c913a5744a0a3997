//! World domain plugin.
//!
//! Builds the farm map, the world camera and the starting inventory in
//! `OnEnter(GameState::Loading)`, then moves the game into `Playing`.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::shared::*;

pub mod maps;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), setup_world);
    }
}

fn setup_world(
    config: Res<GameConfig>,
    mut tilemap: ResMut<TileMap>,
    mut camera: ResMut<WorldCamera>,
    mut inventory: ResMut<Inventory>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    *tilemap = maps::generate_farm(&config);
    *camera = WorldCamera::new(
        config.screen_width as i32,
        config.screen_height as i32,
        config.world_width,
        config.world_height,
    );

    *inventory = Inventory::new(config.slot_count);
    for (name, amount) in &config.starting_items {
        if !inventory.add_item(name, *amount) {
            warn!("[World] Could not stock starting item {} x{}", name, amount);
        }
    }

    info!(
        "[World] Farm ready: {}x{} tiles, {} starting stacks",
        tilemap.cols(),
        tilemap.rows(),
        inventory.slots().iter().flatten().count()
    );
    next_state.set(GameState::Playing);
}
