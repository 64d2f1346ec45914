use bevy::math::IVec2;
use crate::core::{Actor, ActorKind, Direction, GameState, MoveUpdate, Rgb, TileKind, PLAYER_INDEX};

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
}

const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Every direction, in the order held keys are polled each tick.
    pub fn all() -> &'static [Direction] {
        &ALL_DIRECTIONS
    }

    pub fn to_ivec2(self) -> IVec2 {
        match self {
            Direction::Up => IVec2 { x: 0, y: -1 },
            Direction::Right => IVec2 { x: 1, y: 0 },
            Direction::Down => IVec2 { x: 0, y: 1 },
            Direction::Left => IVec2 { x: -1, y: 0 },
        }
    }
}

impl Actor {
    pub fn new(kind: ActorKind, color: Rgb, tile_pos: IVec2, label: char) -> Actor {
        Actor {
            kind,
            color,
            render_pos: tile_pos.as_vec2(),
            tile_pos,
            move_dir: None,
            progress: 0.0,
            is_moving: false,
            label,
        }
    }

    pub fn is_at_rest(&self) -> bool {
        !self.is_moving && self.progress == 0.0 && self.render_pos == self.tile_pos.as_vec2()
    }
}

impl MoveUpdate {
    pub fn moved(&self) -> bool {
        matches!(self, MoveUpdate::Moved(_))
    }
}

impl GameState {
    pub fn player(&self) -> &Actor {
        &self.actors[PLAYER_INDEX]
    }

    pub fn width(&self) -> i32 {
        self.field.size().width()
    }

    pub fn height(&self) -> i32 {
        self.field.size().height()
    }

    pub fn is_wall(&self, pos: &IVec2) -> bool {
        self.field.get(pos).is_some_and(|tile| tile.kind == TileKind::Wall)
    }

    /// First actor in registry order whose tile is `pos`.
    pub fn actor_at(&self, pos: &IVec2) -> Option<usize> {
        self.actors.iter().position(|actor| actor.tile_pos == *pos)
    }

    /// True while any animation is in flight. Benchmarks and tests drain ticks with it.
    pub fn any_moving(&self) -> bool {
        self.actors.iter().any(|actor| actor.is_moving)
    }
}
