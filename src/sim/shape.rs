//! Shape registry for point queries
//!
//! Every body on the field (bricks, paddle, ball) is registered here with a
//! stable handle. Collision detection asks "which body occupies this point?",
//! answered by a linear scan from the most recently added shape down, so the
//! topmost body wins when shapes overlap.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Stable handle for a registered shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u32);

/// What a shape represents in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Brick,
    Paddle,
    Ball,
}

/// Axis-aligned rectangle, `origin` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(x, y),
            size: DVec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.origin.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.y
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not
    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

/// Geometry of a registered body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Body {
    Rect(Rect),
    /// Circle described by its bounding box top-left corner and radius
    Circle { origin: DVec2, radius: f64 },
}

impl Body {
    pub fn contains(&self, p: DVec2) -> bool {
        match *self {
            Body::Rect(rect) => rect.contains(p),
            Body::Circle { origin, radius } => {
                let center = origin + DVec2::splat(radius);
                p.distance_squared(center) <= radius * radius
            }
        }
    }

    /// Top-left corner of the body's bounding box
    pub fn origin(&self) -> DVec2 {
        match *self {
            Body::Rect(rect) => rect.origin,
            Body::Circle { origin, .. } => origin,
        }
    }

    pub fn set_origin(&mut self, to: DVec2) {
        match self {
            Body::Rect(rect) => rect.origin = to,
            Body::Circle { origin, .. } => *origin = to,
        }
    }
}

/// A registered shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub body: Body,
    /// Fill color (RGB)
    pub fill: [u8; 3],
}

/// Registry of live shapes, in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShapeRegistry {
    shapes: Vec<Shape>,
    next_id: u32,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body and return its handle
    pub fn add(&mut self, kind: ShapeKind, body: Body, fill: [u8; 3]) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push(Shape { id, kind, body, fill });
        id
    }

    /// Unregister a shape. Returns false if it was not registered.
    pub fn remove(&mut self, id: ShapeId) -> bool {
        match self.shapes.iter().position(|s| s.id == id) {
            Some(index) => {
                self.shapes.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Move a shape so its bounding box starts at `origin`
    pub fn move_to(&mut self, id: ShapeId, origin: DVec2) {
        if let Some(shape) = self.shapes.iter_mut().find(|s| s.id == id) {
            shape.body.set_origin(origin);
        }
    }

    /// Topmost shape containing `p`
    pub fn element_at(&self, p: DVec2) -> Option<&Shape> {
        self.shapes.iter().rev().find(|s| s.body.contains(p))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
