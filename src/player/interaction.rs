//! Player actions on the world: interact, till/plant requests, and
//! hotbar selection.

use bevy::prelude::*;
use crate::shared::*;

/// Work on the tile under the player's centre.
///
/// A selected seed (or crop item) is planted when the tile allows it, and
/// one unit is consumed. Otherwise a tillable tile is tilled. Returns
/// `None` when neither applies.
pub fn interact(
    center: Vec2,
    tilemap: &mut TileMap,
    inventory: &mut Inventory,
) -> Option<InteractOutcome> {
    let (c, r) = tilemap.world_to_tile(center.x, center.y);

    let crop = inventory
        .selected_item()
        .and_then(|item| CropKind::from_item(&item.name));
    if let Some(kind) = crop {
        if tilemap.plant(c, r, kind) {
            inventory.consume_selected(1);
            return Some(InteractOutcome::Planted);
        }
    }

    tilemap.till(c, r).then_some(InteractOutcome::Tilled)
}

pub fn handle_interact(
    input: Res<PlayerInput>,
    mut tilemap: ResMut<TileMap>,
    mut inventory: ResMut<Inventory>,
    query: Query<&PlayerBody, With<Player>>,
) {
    if !input.interact {
        return;
    }
    let Ok(body) = query.get_single() else {
        return;
    };
    let center = body.center();
    match interact(center, &mut tilemap, &mut inventory) {
        Some(outcome) => {
            let (c, r) = tilemap.world_to_tile(center.x, center.y);
            info!("[Player] {:?} tile ({}, {})", outcome, c, r);
        }
        None => debug!("[Player] Nothing to do here"),
    }
}

/// Turn till/plant keys and mouse clicks into `TileActionEvent`s. Keys
/// target the tile under the player, clicks the tile under the cursor.
pub fn send_tile_actions(
    input: Res<PlayerInput>,
    tilemap: Res<TileMap>,
    camera: Res<WorldCamera>,
    query: Query<&PlayerBody, With<Player>>,
    mut actions: EventWriter<TileActionEvent>,
) {
    let mut send = |world: Vec2, action: TileAction| {
        let (col, row) = tilemap.world_to_tile(world.x, world.y);
        actions.send(TileActionEvent { col, row, action });
    };

    if let Ok(body) = query.get_single() {
        if input.till {
            send(body.center(), TileAction::Till);
        }
        if input.plant {
            send(body.center(), TileAction::PlantSelected);
        }
    }
    if let Some(cursor) = input.cursor_till {
        send(camera.screen_to_world(cursor), TileAction::Till);
    }
    if let Some(cursor) = input.cursor_plant {
        send(camera.screen_to_world(cursor), TileAction::PlantSelected);
    }
}

/// Number keys pick a slot directly; the wheel steps through them.
pub fn handle_slot_selection(input: Res<PlayerInput>, mut inventory: ResMut<Inventory>) {
    if let Some(index) = input.slot_select {
        inventory.set_selected_index(index);
    }
    for &delta in &input.scroll_steps {
        inventory.scroll(delta);
    }
}
