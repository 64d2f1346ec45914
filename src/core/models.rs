use bevy::math::{IVec2, Vec2};
use crate::core::bounded_grid::BoundedGrid;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TileKind {
    Wall,
    Floor,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    pub kind: TileKind,
    pub color: Rgb,
}

pub type Field = BoundedGrid<Tile>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ActorKind {
    Player,
    Box,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Actor {
    pub kind: ActorKind,
    pub color: Rgb,
    pub render_pos: Vec2,
    pub tile_pos: IVec2,
    pub move_dir: Option<Vec2>,
    pub progress: f32,
    pub is_moving: bool,
    pub label: char,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Everything the tick mutates. The player is always `actors[PLAYER_INDEX]`.
#[derive(Clone, Debug)]
pub struct GameState {
    pub field: Field,
    pub actors: Vec<Actor>,
}

pub const PLAYER_INDEX: usize = 0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlockedReason {
    OutOfBounds(IVec2),
    Wall(IVec2),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveChange {
    PlayerMove,
    PlayerAndBoxesMove { boxes: usize },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveUpdate {
    Moved(MoveChange),
    Blocked(BlockedReason),
    PlayerBusy,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TickReport {
    /// The resolver call that started a move this tick, if any.
    pub started: Option<(Direction, MoveChange)>,
    /// Why the last held direction failed, when none of them started a move.
    pub blocked: Option<BlockedReason>,
    /// Actors that reached their tile this tick.
    pub arrived: usize,
}
