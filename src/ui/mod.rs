mod hud;

use bevy::prelude::*;
use crate::shared::*;

pub use hud::{HotbarBadge, HotbarSlot, HotbarSwatch};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // ─── HOTBAR: visible during Playing state ───
        app.add_systems(OnEnter(GameState::Playing), hud::spawn_hotbar);
        app.add_systems(
            Update,
            hud::update_hotbar.run_if(in_state(GameState::Playing)),
        );
    }
}
