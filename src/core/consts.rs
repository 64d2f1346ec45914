use crate::core::palette::ColorBand;
use crate::core::Rgb;

pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;
pub const TILE_SIZE: f32 = 40.0;
pub const FONT_SIZE: f32 = 36.0;

pub const FIELD_WIDTH: i32 = 20;
pub const FIELD_HEIGHT: i32 = 15;

/// Fraction of a tile covered by a moving actor on every tick.
pub const SPEED: f32 = 0.1;
pub const TICKS_PER_SECOND: f64 = 60.0;

/// Rows carved into walls near the right edge. Literal, not scaled with the field.
pub const OBSTACLE_ROWS: [i32; 2] = [6, 8];
pub const OBSTACLE_LENGTH: i32 = 4;

pub const PLAYER_START: (i32, i32) = (5, 5);
pub const PLAYER_LABEL: char = 'P';
pub const PLAYER_COLOR: Rgb = Rgb::new(255, 215, 0);

pub const BOX_LABELS: &str = "82-4!+3";
pub const BOX_ROW: i32 = 10;

pub const FLOOR_BAND: ColorBand = ColorBand::Gray { brightness: (70, 80) };
pub const WALL_BAND: ColorBand = ColorBand::Rgb { r: (140, 160), g: (30, 40), b: (40, 50) };
pub const BOX_BAND: ColorBand = ColorBand::Rgb { r: (100, 160), g: (200, 240), b: (160, 200) };

pub const BACKGROUND_COLOR: Rgb = Rgb::new(255, 255, 255);
pub const LABEL_COLOR: Rgb = Rgb::new(0, 0, 0);
