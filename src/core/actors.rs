use bevy::math::IVec2;
use rand::Rng;
use crate::core::{generate_field, Actor, ActorKind, GameState, BOX_BAND, BOX_LABELS, BOX_ROW, FIELD_HEIGHT, FIELD_WIDTH, PLAYER_COLOR, PLAYER_LABEL, PLAYER_START};

/// The player followed by one box per character of `BOX_LABELS`, spaced every other column.
pub fn spawn_actors<R: Rng + ?Sized>(rng: &mut R) -> Vec<Actor> {
    let (px, py) = PLAYER_START;
    let mut actors = vec![Actor::new(ActorKind::Player, PLAYER_COLOR, IVec2::new(px, py), PLAYER_LABEL)];

    for (i, label) in BOX_LABELS.chars().enumerate() {
        let tile_pos = IVec2::new(2 * i as i32 + 3, BOX_ROW);
        actors.push(Actor::new(ActorKind::Box, rng.sample(BOX_BAND), tile_pos, label));
    }

    actors
}

impl GameState {
    pub fn new_default<R: Rng + ?Sized>(rng: &mut R) -> GameState {
        let field = generate_field(FIELD_WIDTH, FIELD_HEIGHT, rng);
        let actors = spawn_actors(rng);
        GameState { field, actors }
    }
}
