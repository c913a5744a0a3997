//! Farming domain: tilling, planting, crop growth, and drawing the field.
//!
//! Communicates with other domains exclusively through crate::shared events/resources.

use bevy::prelude::*;
use crate::player::PlayerSystems;
use crate::shared::*;

pub mod actions;
pub mod growth;
mod render;

pub use render::RenderedTiles;

pub struct FarmingPlugin;

impl Plugin for FarmingPlugin {
    fn build(&self, app: &mut App) {
        app
            // Internal resources
            .init_resource::<RenderedTiles>()
            // Shared events this domain consumes
            .add_event::<TileActionEvent>()
            // ------------------------------------------------------------------
            // Highlight outline entities: spawned once per Playing session
            // ------------------------------------------------------------------
            .add_systems(OnEnter(GameState::Playing), render::spawn_highlight)
            // ------------------------------------------------------------------
            // State changes: after the player has turned input into requests
            // ------------------------------------------------------------------
            .add_systems(
                Update,
                (actions::handle_tile_actions, growth::grow_crops)
                    .chain()
                    .after(PlayerSystems)
                    .run_if(in_state(GameState::Playing)),
            )
            // ------------------------------------------------------------------
            // Visual sync: runs after all state mutations
            // ------------------------------------------------------------------
            .add_systems(
                PostUpdate,
                (
                    render::sync_tile_sprites,
                    render::sync_crop_sprites,
                    render::sync_highlight,
                )
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Placeholder colour for a crop, from pale seedling to the ripe colour of
/// its kind.
pub fn crop_stage_color(kind: CropKind, stage: u8) -> Color {
    let progress = stage as f32 / (CROP_STAGES - 1).max(1) as f32;
    let ripe = match kind {
        CropKind::Tomato => Vec3::new(0.85, 0.15, 0.10),
        CropKind::Carrot => Vec3::new(0.95, 0.55, 0.10),
    };
    let seedling = Vec3::new(0.50, 0.80, 0.30);
    let c = seedling.lerp(ripe, progress);
    Color::srgb(c.x, c.y, c.z)
}
