use bevy::prelude::*;
use crate::config::GameConfig;
use crate::shared::*;
use super::PlayerAnimation;

impl PlayerAnimation {
    pub fn new(seconds_per_frame: f32) -> Self {
        Self {
            seconds_per_frame,
            ..default()
        }
    }

    /// Step the walk cycle. Idle always shows frame 0 of the facing's
    /// idle pose.
    pub fn advance(&mut self, dt: f32, moving: bool) {
        self.timer += dt;
        if !moving {
            self.frame = 0;
            return;
        }
        if self.timer >= self.seconds_per_frame {
            self.timer = 0.0;
            self.frame = (self.frame + 1) % self.walk_frames.max(1);
        }
    }
}

pub fn animate_player(
    time: Res<Time>,
    mut query: Query<(&mut PlayerAnimation, &PlayerMovement), With<Player>>,
) {
    for (mut anim, movement) in &mut query {
        anim.advance(time.delta_secs(), movement.is_moving());
    }
}

/// Placeholder body colour per facing.
fn facing_color(facing: Facing) -> Color {
    match facing {
        Facing::Down => Color::srgb(0.20, 0.50, 0.80),
        Facing::Left => Color::srgb(0.25, 0.45, 0.75),
        Facing::Right => Color::srgb(0.25, 0.55, 0.85),
        Facing::Up => Color::srgb(0.15, 0.40, 0.70),
    }
}

/// Place the player sprite in screen space and show the current walk
/// frame as a small vertical bob.
pub fn sync_player_sprite(
    config: Res<GameConfig>,
    camera: Res<WorldCamera>,
    mut query: Query<
        (&PlayerBody, &PlayerMovement, &PlayerAnimation, &mut Transform, &mut Sprite),
        With<Player>,
    >,
) {
    let screen = Vec2::new(config.screen_width as f32, config.screen_height as f32);
    for (body, movement, anim, mut transform, mut sprite) in &mut query {
        let on_screen = camera.apply(body.pixel_rect());
        let bob = if anim.frame % 2 == 1 { 2.0 } else { 0.0 };
        transform.translation = screen_to_translation(on_screen, screen, 3.0) + Vec3::Y * bob;
        sprite.color = facing_color(movement.facing);
        sprite.custom_size = Some(body.size);
    }
}
