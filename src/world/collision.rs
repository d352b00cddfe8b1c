//! Collision resolution
//!
//! Separate-axis AABB sweep: displace on X and resolve, then displace on Y
//! using the X-resolved rect. Velocities are small relative to platform
//! sizes at the fixed frame rate, so per-axis snapping is enough and no
//! swept test is needed.
//!
//! When the displaced rect overlaps several obstacles on one axis, it snaps
//! to the nearest obstacle in the direction of travel (minimum snap
//! distance), so the result does not depend on obstacle list order.

use macroquad::math::Vec2;

use super::geometry::Rect;

/// Result of one physics step
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Resolved position
    pub rect: Rect,
    /// Velocity with collided components zeroed
    pub velocity: Vec2,
    /// True if a falling Y-collision occurred this step
    pub grounded: bool,
}

/// Move a rect by `velocity * dt` against a set of static obstacles.
///
/// Displacement is truncated toward zero on each axis so movement stays on
/// the integer pixel grid. Pure function; the caller owns all state.
pub fn resolve(rect: Rect, velocity: Vec2, obstacles: &[Rect], dt: f32) -> CollisionResult {
    let mut rect = rect;
    let mut vel = velocity;
    let mut grounded = false;

    // X axis
    rect.x += (vel.x * dt).trunc();
    if vel.x > 0.0 {
        // Nearest obstacle ahead has the leftmost left edge
        let edge = overlapped(&rect, obstacles).map(|p| p.x).reduce(f32::min);
        if let Some(edge) = edge {
            rect.set_right(edge);
            vel.x = 0.0;
        }
    } else if vel.x < 0.0 {
        let edge = overlapped(&rect, obstacles).map(|p| p.right()).reduce(f32::max);
        if let Some(edge) = edge {
            rect.x = edge;
            vel.x = 0.0;
        }
    }

    // Y axis, using the X-resolved rect
    rect.y += (vel.y * dt).trunc();
    if vel.y > 0.0 {
        let edge = overlapped(&rect, obstacles).map(|p| p.y).reduce(f32::min);
        if let Some(edge) = edge {
            rect.set_bottom(edge);
            vel.y = 0.0;
            grounded = true;
        }
    } else if vel.y < 0.0 {
        let edge = overlapped(&rect, obstacles).map(|p| p.bottom()).reduce(f32::max);
        if let Some(edge) = edge {
            rect.y = edge;
            vel.y = 0.0;
        }
    }

    CollisionResult { rect, velocity: vel, grounded }
}

fn overlapped<'a>(rect: &'a Rect, obstacles: &'a [Rect]) -> impl Iterator<Item = &'a Rect> + 'a {
    obstacles.iter().filter(move |p| rect.overlaps(p))
}
