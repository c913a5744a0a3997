mod animation;
mod camera;
mod interaction;
mod movement;
mod spawn;

pub use interaction::interact;
pub use movement::steer;

use bevy::prelude::*;
use crate::shared::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn::spawn_player);

        app.add_systems(
            Update,
            (
                movement::read_movement_input,
                movement::apply_velocity,
                animation::animate_player,
                interaction::handle_interact,
                interaction::send_tile_actions,
                interaction::handle_slot_selection,
                camera::camera_follow_player,
            )
                .chain()
                .in_set(PlayerSystems)
                .run_if(in_state(GameState::Playing)),
        );

        app.add_systems(
            PostUpdate,
            animation::sync_player_sprite.run_if(in_state(GameState::Playing)),
        );
    }
}

/// Everything the player domain runs in `Update`. Other domains order
/// themselves after this set to see the frame's input already applied.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerSystems;

/// Walk-cycle state. The timer accumulates real seconds every frame,
/// moving or not.
#[derive(Component, Debug, Clone)]
pub struct PlayerAnimation {
    pub frame: usize,
    pub timer: f32,
    pub seconds_per_frame: f32,
    pub walk_frames: usize,
}

impl Default for PlayerAnimation {
    fn default() -> Self {
        Self {
            frame: 0,
            timer: 0.0,
            seconds_per_frame: 0.15,
            walk_frames: WALK_FRAMES,
        }
    }
}
