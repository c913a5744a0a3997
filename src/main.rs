use std::path::Path;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use sprout_patch::config::{log_config_source, GameConfig, CONFIG_PATH};
use sprout_patch::shared::*;
use sprout_patch::{farming, input, player, ui, world};

fn main() -> AppExit {
    let (config, source) = GameConfig::load_or_default(Path::new(CONFIG_PATH));
    let resolution = WindowResolution::new(config.screen_width as f32, config.screen_height as f32);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Sprout Patch".into(),
                        resolution,
                        present_mode: PresentMode::AutoVsync,
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .insert_resource(ClearColor(Color::srgb_u8(50, 150, 50)))
        .insert_resource(config)
        .insert_resource(source)
        // Game state
        .init_state::<GameState>()
        // Shared resources, filled in by the world domain on Loading
        .init_resource::<TileMap>()
        .init_resource::<WorldCamera>()
        .init_resource::<Inventory>()
        // Domain plugins
        .add_plugins(input::InputPlugin)
        .add_plugins(world::WorldPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(farming::FarmingPlugin)
        .add_plugins(ui::UiPlugin)
        // Camera
        .add_systems(Startup, (setup_camera, log_config_source))
        .run()
}

/// The render camera stays at the origin; `WorldCamera` does the scrolling.
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
