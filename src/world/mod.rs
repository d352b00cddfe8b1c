//! World geometry, level data and collision resolution

pub mod collision;
pub mod geometry;
pub mod level;

pub use collision::{resolve, CollisionResult};
pub use geometry::Rect;
pub use level::{boundary_walls, load_level, load_level_from_str, LevelData, LevelError};
