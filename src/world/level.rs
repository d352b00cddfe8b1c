//! Level loading
//!
//! Levels are RON files describing static geometry: world bounds, platform
//! list, goal zone and the two spawn points. The loader synthesizes four
//! boundary walls from the world bounds so a level file with missing or
//! misplaced walls can never let a player leave the play area.

use std::fs;
use std::path::Path;

use macroquad::math::{vec2, Vec2};
use serde::Deserialize;

use super::geometry::Rect;

/// Thickness of the synthesized boundary walls
pub const WALL_THICKNESS: f32 = 32.0;

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

/// On-disk rect record
#[derive(Debug, Clone, Copy, Deserialize)]
struct RectDef {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

impl From<RectDef> for Rect {
    fn from(d: RectDef) -> Self {
        Rect::new(d.x, d.y, d.w, d.h)
    }
}

/// On-disk spawn point record
#[derive(Debug, Clone, Copy, Deserialize)]
struct PointDef {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct SpawnsDef {
    player1: PointDef,
    player2: PointDef,
}

/// On-disk level record. Every field is required; a missing field is a
/// fatal parse error that names the field.
#[derive(Debug, Deserialize)]
struct LevelDef {
    world_bounds: RectDef,
    platforms: Vec<RectDef>,
    goal: RectDef,
    spawns: SpawnsDef,
}

/// Static geometry for one level, immutable after load.
///
/// `platforms` holds the level platforms followed by the four boundary
/// walls, in that order; the collision resolver treats them uniformly.
#[derive(Debug, Clone)]
pub struct LevelData {
    pub world_bounds: Rect,
    pub platforms: Vec<Rect>,
    pub goal: Rect,
    pub spawn1: Vec2,
    pub spawn2: Vec2,
}

/// The four boundary walls enclosing `world_bounds`: left, right, ceiling,
/// floor. Each wall spans the full extent of its side so the corners leave
/// no gap.
pub fn boundary_walls(world_bounds: Rect) -> [Rect; 4] {
    let wb = world_bounds;
    [
        Rect::new(wb.x - WALL_THICKNESS, wb.y, WALL_THICKNESS, wb.h),
        Rect::new(wb.right(), wb.y, WALL_THICKNESS, wb.h),
        Rect::new(wb.x, wb.y - WALL_THICKNESS, wb.w, WALL_THICKNESS),
        Rect::new(wb.x, wb.bottom(), wb.w, WALL_THICKNESS),
    ]
}

fn build_level(def: LevelDef) -> LevelData {
    let world_bounds: Rect = def.world_bounds.into();

    let mut platforms: Vec<Rect> = def.platforms.into_iter().map(Rect::from).collect();
    platforms.extend(boundary_walls(world_bounds));

    LevelData {
        world_bounds,
        platforms,
        goal: def.goal.into(),
        spawn1: vec2(def.spawns.player1.x, def.spawns.player1.y),
        spawn2: vec2(def.spawns.player2.x, def.spawns.player2.y),
    }
}

/// Load a level from a RON file
pub fn load_level<P: AsRef<Path>>(path: P) -> Result<LevelData, LevelError> {
    let contents = fs::read_to_string(path)?;
    load_level_from_str(&contents)
}

/// Load a level from a RON string (for embedded levels or testing)
pub fn load_level_from_str(s: &str) -> Result<LevelData, LevelError> {
    let def: LevelDef = ron::from_str(s)?;
    Ok(build_level(def))
}
