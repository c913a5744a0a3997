use bevy::prelude::*;
use crate::config::GameConfig;
use crate::shared::*;

/// Keys are evaluated in this order and each held key overwrites the
/// facing, so later entries win ties: down > up > right > left.
const FACING_PRECEDENCE: [(Facing, Vec2); 4] = [
    (Facing::Left, Vec2::NEG_X),
    (Facing::Right, Vec2::X),
    (Facing::Up, Vec2::NEG_Y),
    (Facing::Down, Vec2::Y),
];

/// Velocity for the held movement keys, plus the facing they imply
/// (`None` when nothing is held). Diagonals are scaled so their speed
/// matches a single axis.
pub fn steer(input: &PlayerInput, speed: f32) -> (Vec2, Option<Facing>) {
    let held = [input.move_left, input.move_right, input.move_up, input.move_down];
    let mut axis = Vec2::ZERO;
    let mut facing = None;
    for (&(dir, step), pressed) in FACING_PRECEDENCE.iter().zip(held) {
        if pressed {
            axis += step;
            facing = Some(dir);
        }
    }
    let scale = if axis.x != 0.0 && axis.y != 0.0 {
        DIAGONAL_FACTOR
    } else {
        1.0
    };
    (axis * speed * scale, facing)
}

pub fn read_movement_input(
    input: Res<PlayerInput>,
    mut query: Query<&mut PlayerMovement, With<Player>>,
) {
    let Ok(mut movement) = query.get_single_mut() else {
        return;
    };
    let (velocity, facing) = steer(&input, movement.speed);
    movement.velocity = velocity;
    if let Some(facing) = facing {
        movement.facing = facing;
    }
}

/// Integrate velocity and keep the player inside the world.
pub fn apply_velocity(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut query: Query<(&mut PlayerBody, &PlayerMovement), With<Player>>,
) {
    let Ok((mut body, movement)) = query.get_single_mut() else {
        return;
    };
    if !movement.is_moving() {
        return;
    }
    let max_x = config.world_width as f32 - body.size.x;
    let max_y = config.world_height as f32 - body.size.y;
    let next = body.position + movement.velocity * time.delta_secs();
    body.position = Vec2::new(next.x.min(max_x).max(0.0), next.y.min(max_y).max(0.0));
}
