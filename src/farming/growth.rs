//! Per-frame crop growth.

use bevy::prelude::*;
use crate::shared::*;

/// One growth tick for every crop, every frame. Growth is counted in
/// frames, so its real-time rate follows the frame rate.
pub fn grow_crops(mut tilemap: ResMut<TileMap>) {
    if tilemap.crops().next().is_none() {
        return;
    }
    let mature_before = tilemap.crops().filter(|c| c.is_mature()).count();
    tilemap.update_crops();
    let mature_after = tilemap.crops().filter(|c| c.is_mature()).count();
    if mature_after > mature_before {
        info!("[Farming] {} crop(s) matured", mature_after - mature_before);
    }
}
