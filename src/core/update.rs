use bevy::log::debug;
use crate::core::{advance_animations, BlockedReason, Direction, GameState, MoveChange, MoveUpdate, TickReport, PLAYER_INDEX};

/// Walks from the player in `direction` and collects every actor that would be pushed.
///
/// The returned chain always starts with the player. Nothing is mutated, so a blocked
/// chain leaves no trace.
pub fn resolve_chain(game: &GameState, direction: Direction) -> Result<Vec<usize>, BlockedReason> {
    let dir = direction.to_ivec2();
    let mut chain = vec![PLAYER_INDEX];
    let mut probe = game.player().tile_pos;

    loop {
        probe += dir;
        if !game.field.contains(&probe) {
            return Err(BlockedReason::OutOfBounds(probe));
        }
        if !game.field[&probe].kind.is_walkable() {
            return Err(BlockedReason::Wall(probe));
        }
        match game.actor_at(&probe) {
            Some(index) => chain.push(index),
            None => return Ok(chain),
        }
    }
}

pub fn attempt_move(game: &mut GameState, direction: Direction) -> MoveUpdate {
    if game.player().is_moving {
        return MoveUpdate::PlayerBusy;
    }

    let chain = match resolve_chain(game, direction) {
        Ok(chain) => chain,
        Err(reason) => {
            debug!("move {:?} blocked: {:?}", direction, reason);
            return MoveUpdate::Blocked(reason);
        }
    };

    let dir = direction.to_ivec2();
    for &index in &chain {
        let actor = &mut game.actors[index];
        actor.tile_pos += dir;
        actor.move_dir = Some(dir.as_vec2());
        actor.progress = 0.0;
        actor.is_moving = true;
    }

    let change = match chain.len() - 1 {
        0 => MoveChange::PlayerMove,
        boxes => MoveChange::PlayerAndBoxesMove { boxes },
    };
    debug!("move {:?} committed: {:?}", direction, change);
    MoveUpdate::Moved(change)
}

/// One fixed-rate tick: resolve held directions while the player is idle, then animate.
///
/// Every held direction is tried in `Direction::all()` order; once one succeeds the player
/// is moving and the rest report `PlayerBusy`.
pub fn tick<I>(game: &mut GameState, held: I, speed: f32) -> TickReport
where
    I: IntoIterator<Item = Direction>,
{
    let mut report = TickReport::default();

    if !game.player().is_moving {
        let mut held: Vec<Direction> = held.into_iter().collect();
        held.sort_by_key(|d| Direction::all().iter().position(|o| o == d));
        held.dedup();
        for direction in held {
            match attempt_move(game, direction) {
                MoveUpdate::Moved(change) => {
                    if report.started.is_none() {
                        report.started = Some((direction, change));
                    }
                }
                MoveUpdate::Blocked(reason) => report.blocked = Some(reason),
                MoveUpdate::PlayerBusy => {}
            }
        }
        if report.started.is_some() {
            report.blocked = None;
        }
    }

    report.arrived = advance_animations(game, speed);
    report
}
