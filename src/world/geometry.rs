//! Axis-aligned rectangle type for world geometry
//!
//! Platforms, walls, the goal zone and the player bounds are all plain
//! axis-aligned rects. Coordinates are f32 but physics displaces by whole
//! units, so rects built from level data stay on the pixel grid.

/// An axis-aligned rectangle defined by top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Move the rect so its right edge sits at `x`
    pub fn set_right(&mut self, x: f32) {
        self.x = x - self.w;
    }

    /// Move the rect so its bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.y = y - self.h;
    }

    /// Strict overlap test: touching edges do not overlap, and a
    /// zero-size rect never overlaps anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
