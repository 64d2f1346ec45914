use bevy::prelude::*;
use crate::bevy_interface::{tile_to_world, to_bevy_color, GameResource};
use crate::core::TILE_SIZE;

pub struct FieldRenderPlugin;

impl Plugin for FieldRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_field_tiles);
    }
}

#[derive(Component)]
pub struct FieldTile;

/// The field never changes after startup, so tiles are spawned once and left alone.
fn spawn_field_tiles(mut commands: Commands, game: Res<GameResource>) {
    let field = &game.0.field;
    let size = field.size().extent;
    for (location, tile) in field.iter() {
        commands.spawn((
            Sprite::from_color(to_bevy_color(tile.color), Vec2::splat(TILE_SIZE)),
            Transform::from_translation(tile_to_world(location.as_vec2(), size, 0.0)),
            FieldTile,
        ));
    }
    debug!("spawned {} field tiles", field.size().area());
}
