use bevy::prelude::*;
use crate::config::GameConfig;
use crate::shared::*;
use super::PlayerAnimation;

/// Spawn the player entity with all necessary components.
/// Runs once on `OnEnter(GameState::Playing)`.
pub fn spawn_player(
    mut commands: Commands,
    config: Res<GameConfig>,
    existing: Query<Entity, With<Player>>,
) {
    // Guard: don't double-spawn if returning to Playing state.
    if !existing.is_empty() {
        return;
    }

    let (x, y) = config.player_spawn;
    commands.spawn((
        Player,
        PlayerBody::new(Vec2::new(x, y)),
        PlayerMovement {
            speed: config.player_speed,
            ..default()
        },
        PlayerAnimation::new(config.seconds_per_frame),
        // Placeholder sprite, positioned by sync_player_sprite.
        Sprite {
            color: Color::srgb(0.2, 0.5, 0.8),
            custom_size: Some(Vec2::splat(PLAYER_SIZE)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 3.0),
        Visibility::default(),
    ));
    info!("[Player] Spawned at ({}, {})", x, y);
}
