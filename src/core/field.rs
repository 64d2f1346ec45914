use bevy::math::IVec2;
use rand::Rng;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::palette::ColorBand;
use crate::core::{Field, Tile, TileKind, FLOOR_BAND, OBSTACLE_LENGTH, OBSTACLE_ROWS, WALL_BAND};

impl TileKind {
    pub fn is_walkable(&self) -> bool {
        *self == TileKind::Floor
    }

    fn color_band(&self) -> ColorBand {
        match self {
            TileKind::Wall => WALL_BAND,
            TileKind::Floor => FLOOR_BAND,
        }
    }
}

impl Tile {
    pub fn new_random<R: Rng + ?Sized>(kind: TileKind, rng: &mut R) -> Tile {
        Tile {
            kind,
            color: rng.sample(kind.color_band()),
        }
    }
}

/// Walled border, floor inside, and two short wall segments against the right edge.
pub fn generate_field<R: Rng + ?Sized>(width: i32, height: i32, rng: &mut R) -> Field {
    let bounds = BoundsOriginRoot::new(width, height);
    let mut field = Field::from_fn(bounds, |pos| {
        let on_border = pos.x == 0 || pos.y == 0 || pos.x == width - 1 || pos.y == height - 1;
        let kind = if on_border { TileKind::Wall } else { TileKind::Floor };
        Tile::new_random(kind, rng)
    });

    for x in (width - OBSTACLE_LENGTH).max(0)..width {
        for y in OBSTACLE_ROWS {
            // small fields simply lack the obstacle rows
            if let Some(tile) = field.get_mut(&IVec2 { x, y }) {
                *tile = Tile::new_random(TileKind::Wall, rng);
            }
        }
    }

    field
}
