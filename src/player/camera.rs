use bevy::prelude::*;
use crate::shared::*;

/// Keep the viewport centred on the player, clamped to the world.
pub fn camera_follow_player(
    query: Query<&PlayerBody, With<Player>>,
    mut camera: ResMut<WorldCamera>,
) {
    let Ok(body) = query.get_single() else {
        return;
    };
    camera.update(body);
}
