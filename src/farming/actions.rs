//! Resolving till and plant requests.

use bevy::prelude::*;
use crate::shared::*;

/// Plant the selected seed on (c, r) and consume one unit. Only seed
/// items qualify here; crop items are planted through `interact`.
pub fn plant_selected_seed(tilemap: &mut TileMap, inventory: &mut Inventory, c: i32, r: i32) -> bool {
    let Some(kind) = inventory
        .selected_item()
        .and_then(|item| CropKind::from_seed_item(&item.name))
    else {
        return false;
    };
    if !tilemap.plant(c, r, kind) {
        return false;
    }
    inventory.consume_selected(1)
}

pub fn handle_tile_actions(
    mut events: EventReader<TileActionEvent>,
    mut tilemap: ResMut<TileMap>,
    mut inventory: ResMut<Inventory>,
) {
    for event in events.read() {
        let (c, r) = (event.col, event.row);
        let done = match event.action {
            TileAction::Till => tilemap.till(c, r),
            TileAction::PlantSelected => plant_selected_seed(&mut tilemap, &mut inventory, c, r),
        };
        if done {
            info!("[Farming] {:?} at ({}, {})", event.action, c, r);
        } else {
            debug!("[Farming] {:?} at ({}, {}) had no effect", event.action, c, r);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_selected_seed_consumes_only_on_success() {
        let mut map = TileMap::default();
        let mut inv = Inventory::new(8);
        inv.add_item("tomato_seed", 2);

        assert!(!plant_selected_seed(&mut map, &mut inv, 2, 2));
        assert_eq!(inv.count("tomato_seed"), 2);

        map.till(2, 2);
        assert!(plant_selected_seed(&mut map, &mut inv, 2, 2));
        assert_eq!(inv.count("tomato_seed"), 1);
        assert_eq!(map.crop_at(2, 2).map(|c| c.kind), Some(CropKind::Tomato));

        assert!(!plant_selected_seed(&mut map, &mut inv, 2, 2));
        assert_eq!(inv.count("tomato_seed"), 1);
    }

    #[test]
    fn test_crop_items_are_not_seeds() {
        let mut map = TileMap::default();
        map.till(2, 2);
        let mut inv = Inventory::new(8);
        inv.add_item("carrot", 1);
        assert!(!plant_selected_seed(&mut map, &mut inv, 2, 2));
        assert!(map.crop_at(2, 2).is_none());
    }
}
