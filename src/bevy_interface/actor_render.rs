use bevy::prelude::*;
use crate::bevy_interface::{tile_to_world, to_bevy_color, GameResource};
use crate::core::{FONT_SIZE, LABEL_COLOR, TILE_SIZE};

const ACTOR_DEPTH: f32 = 1.0;

pub struct ActorRenderPlugin;

impl Plugin for ActorRenderPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, spawn_actor_sprites)
            .add_systems(Update, sync_actor_transforms);
    }
}

#[derive(Component)]
pub struct ActorSprite {
    pub index: usize,
}

fn spawn_actor_sprites(mut commands: Commands, game: Res<GameResource>) {
    let size = game.0.field.size().extent;
    for (index, actor) in game.0.actors.iter().enumerate() {
        commands
            .spawn((
                Sprite::from_color(to_bevy_color(actor.color), Vec2::splat(TILE_SIZE)),
                Transform::from_translation(tile_to_world(actor.render_pos, size, ACTOR_DEPTH)),
                ActorSprite { index },
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text2d::new(actor.label.to_string()),
                    TextFont {
                        font_size: FONT_SIZE,
                        ..default()
                    },
                    TextColor(to_bevy_color(LABEL_COLOR)),
                    Transform::from_xyz(0.0, 0.0, 0.1),
                ));
            });
    }
}

pub fn sync_actor_transforms(
    game: Res<GameResource>,
    mut sprites: Query<(&ActorSprite, &mut Transform)>,
) {
    let size = game.0.field.size().extent;
    for (sprite, mut transform) in sprites.iter_mut() {
        let Some(actor) = game.0.actors.get(sprite.index) else {
            warn!("actor sprite {} has no actor", sprite.index);
            continue;
        };
        transform.translation = tile_to_world(actor.render_pos, size, ACTOR_DEPTH);
    }
}
