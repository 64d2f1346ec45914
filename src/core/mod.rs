mod actors;
mod animation;
mod bounded_grid;
mod bounds;
mod consts;
mod field;
mod model_helpers;
mod models;
mod palette;
mod update;

pub use actors::spawn_actors;
pub use animation::advance_animations;
pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use field::generate_field;
pub use models::*;
pub use palette::ColorBand;
pub use update::{attempt_move, resolve_chain, tick};
