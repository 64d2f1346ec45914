use crate::core::{GameState, MoveUpdate};

pub struct GameRenderState<'a> {
    pub game: &'a GameState,
    pub last_update: Option<MoveUpdate>,
    pub moves: usize,
}
