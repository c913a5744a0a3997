use bevy::input::mouse::MouseWheel;
use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .init_resource::<PlayerInput>()
            .add_systems(PreUpdate, reset_and_read_input.after(InputSystem))
            .add_systems(Update, exit_on_quit);
    }
}

/// Primary bindings. Arrow keys are always accepted for movement as well.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub move_left: KeyCode,
    pub move_right: KeyCode,
    pub move_up: KeyCode,
    pub move_down: KeyCode,
    pub interact: KeyCode,
    pub till: KeyCode,
    pub plant: KeyCode,
    pub quit: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: KeyCode::KeyA,
            move_right: KeyCode::KeyD,
            move_up: KeyCode::KeyW,
            move_down: KeyCode::KeyS,
            interact: KeyCode::KeyE,
            till: KeyCode::Space,
            plant: KeyCode::KeyP,
            quit: KeyCode::Escape,
        }
    }
}

const SLOT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// The single point where hardware input becomes game actions.
fn reset_and_read_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut wheel: EventReader<MouseWheel>,
    bindings: Res<KeyBindings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut input: ResMut<PlayerInput>,
) {
    *input = PlayerInput::default();

    input.move_left = keys.pressed(bindings.move_left) || keys.pressed(KeyCode::ArrowLeft);
    input.move_right = keys.pressed(bindings.move_right) || keys.pressed(KeyCode::ArrowRight);
    input.move_up = keys.pressed(bindings.move_up) || keys.pressed(KeyCode::ArrowUp);
    input.move_down = keys.pressed(bindings.move_down) || keys.pressed(KeyCode::ArrowDown);

    input.interact = keys.just_pressed(bindings.interact);
    input.till = keys.just_pressed(bindings.till);
    input.plant = keys.just_pressed(bindings.plant);
    input.quit = keys.just_pressed(bindings.quit);

    input.slot_select = SLOT_KEYS.iter().position(|key| keys.just_pressed(*key));

    input.scroll_steps = wheel.read().map(|ev| ev.y).collect();

    // Left click tills; right click or shift+left click plants.
    let cursor = windows.get_single().ok().and_then(Window::cursor_position);
    if let Some(cursor) = cursor {
        let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        if mouse.just_pressed(MouseButton::Right)
            || (mouse.just_pressed(MouseButton::Left) && shift)
        {
            input.cursor_plant = Some(cursor);
        } else if mouse.just_pressed(MouseButton::Left) {
            input.cursor_till = Some(cursor);
        }
    }
}

fn exit_on_quit(input: Res<PlayerInput>, mut exit: EventWriter<AppExit>) {
    if input.quit {
        info!("[Input] Quit requested");
        exit.send(AppExit::Success);
    }
}
