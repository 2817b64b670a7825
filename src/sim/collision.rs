//! Collision detection for the ball
//!
//! Two independent checks run every tick after the ball moves:
//!
//! 1. Corner sampling: the four corners of the ball's bounding box are looked
//!    up in the shape registry. Only the leading edge is sampled (bottom
//!    corners while falling, top corners while rising), left corner first.
//!    The first corner that lands on a body decides the hit.
//! 2. Boundary check: side walls, then ceiling, then floor. At most one fires.
//!
//! Both are read-only; applying the outcome is up to the tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::shape::{ShapeId, ShapeKind, ShapeRegistry};

/// A corner of the ball's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Sample point for this corner of a box starting at `origin`
    #[inline]
    pub fn point(self, origin: DVec2, diameter: f64) -> DVec2 {
        match self {
            Corner::TopLeft => origin,
            Corner::TopRight => origin + DVec2::new(diameter, 0.0),
            Corner::BottomLeft => origin + DVec2::new(0.0, diameter),
            Corner::BottomRight => origin + DVec2::new(diameter, diameter),
        }
    }

    /// Corners on the leading edge for a vertical velocity, in priority order
    pub fn leading(vy: f64) -> &'static [Corner] {
        if vy > 0.0 {
            &[Corner::BottomLeft, Corner::BottomRight]
        } else if vy < 0.0 {
            &[Corner::TopLeft, Corner::TopRight]
        } else {
            &[]
        }
    }
}

/// What the ball's leading corner ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CornerHit {
    Paddle { corner: Corner },
    Brick { corner: Corner, shape: ShapeId },
}

/// Sample the leading corners and report the first body found.
///
/// The ball's own body is skipped; everything that is neither ball nor
/// paddle counts as a brick.
pub fn corner_collision(ball: &Ball, registry: &ShapeRegistry) -> Option<CornerHit> {
    let diameter = ball.diameter();
    Corner::leading(ball.vel.y).iter().find_map(|&corner| {
        let point = corner.point(ball.pos, diameter);
        let shape = registry.element_at(point)?;
        match shape.kind {
            ShapeKind::Ball => None,
            ShapeKind::Paddle => Some(CornerHit::Paddle { corner }),
            ShapeKind::Brick => Some(CornerHit::Brick {
                corner,
                shape: shape.id,
            }),
        }
    })
}

/// Field wall touched by the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
}

/// Boundary outcome for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryHit {
    /// Bounce off a wall
    Wall(Wall),
    /// Ball fell past the bottom edge
    Floor,
}

/// Check the ball against the field edges.
///
/// Precedence: side walls, then ceiling, then floor. The floor only counts
/// once the top of the ball's box has reached the bottom edge.
pub fn boundary_check(ball: &Ball, field_width: f64, field_height: f64) -> Option<BoundaryHit> {
    let pos = ball.pos;
    if pos.x <= 0.0 {
        Some(BoundaryHit::Wall(Wall::Left))
    } else if pos.x >= field_width - ball.diameter() {
        Some(BoundaryHit::Wall(Wall::Right))
    } else if pos.y <= 0.0 {
        Some(BoundaryHit::Wall(Wall::Top))
    } else if pos.y >= field_height {
        Some(BoundaryHit::Floor)
    } else {
        None
    }
}
