mod actor_render;
mod field_render;
mod hud;
mod movement;

use bevy::prelude::*;
use crate::config::GameConfig;
use crate::core::{GameState, BACKGROUND_COLOR, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE};
use crate::bevy_interface::actor_render::ActorRenderPlugin;
use crate::bevy_interface::field_render::FieldRenderPlugin;
use crate::bevy_interface::hud::HudPlugin;
use crate::bevy_interface::movement::MovementPlugin;

pub use movement::held_directions;

#[derive(Resource)]
pub struct GameResource(pub GameState);

#[derive(Resource)]
pub struct ConfigResource(pub GameConfig);

#[derive(Resource, Default)]
pub struct MoveStats {
    pub moves: usize,
    pub blocked: usize,
}

pub fn to_bevy_color(rgb: crate::core::Rgb) -> Color {
    Color::srgb_u8(rgb.r, rgb.g, rgb.b)
}

/// World-space center of a (possibly fractional) tile position.
///
/// Tile (0,0) is the top-left cell and the field is centered on the camera, y pointing down in tiles.
pub fn tile_to_world(tile: Vec2, field_size: IVec2, depth: f32) -> Vec3 {
    let half_extent = field_size.as_vec2() * TILE_SIZE * 0.5;
    let x = (tile.x + 0.5) * TILE_SIZE - half_extent.x;
    let y = half_extent.y - (tile.y + 0.5) * TILE_SIZE;
    Vec3::new(x, y, depth)
}

pub fn run_window(game: GameState, config: GameConfig) -> AppExit {
    let show_hud = config.show_hud;

    let mut app = App::new();
    app
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "PushCalc".to_string(),
                resolution: (SCREEN_WIDTH, SCREEN_HEIGHT).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(to_bevy_color(BACKGROUND_COLOR)))
        .insert_resource(Time::<Fixed>::from_hz(config.ticks_per_second))
        .insert_resource(GameResource(game))
        .insert_resource(ConfigResource(config))
        .init_resource::<MoveStats>()
        .add_systems(Startup, (setup_camera, log_startup))
        .add_plugins((FieldRenderPlugin, ActorRenderPlugin, MovementPlugin));

    if show_hud {
        app.add_plugins(HudPlugin);
    }

    app.run()
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn log_startup(game: Res<GameResource>, config: Res<ConfigResource>) {
    info!(
        "field {}x{}, {} actors, {} ticks/s, speed {}, seed {:?}",
        game.0.width(), game.0.height(), game.0.actors.len(),
        config.0.ticks_per_second, config.0.speed, config.0.seed
    );
}
