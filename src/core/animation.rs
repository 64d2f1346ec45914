use crate::core::GameState;

/// Moves every animating actor `speed` of a tile along its direction.
///
/// Arrival snaps the render position onto the tile so repeated float steps never drift.
/// Returns how many actors arrived on this call.
pub fn advance_animations(game: &mut GameState, speed: f32) -> usize {
    let mut arrived = 0;
    for actor in game.actors.iter_mut().filter(|actor| actor.is_moving) {
        let dir = actor.move_dir.unwrap_or_default();
        actor.render_pos += dir * speed;
        actor.progress += speed;

        if actor.progress >= 1.0 {
            actor.is_moving = false;
            actor.render_pos = actor.tile_pos.as_vec2();
            actor.progress = 0.0;
            actor.move_dir = None;
            arrived += 1;
        }
    }
    arrived
}
