//! Render surface seam

use std::collections::BTreeMap;

use glam::DVec2;

use crate::sim::{Shape, ShapeId};

/// Where the game is drawn
pub trait Surface {
    /// Create the play field, `(0, 0)` at the top-left
    fn create_field(&mut self, width: f64, height: f64);
    fn add_shape(&mut self, shape: &Shape);
    /// Move a shape so its bounding box starts at `origin`
    fn move_shape(&mut self, id: ShapeId, origin: DVec2);
    fn remove_shape(&mut self, id: ShapeId);
    /// Show a message centered on `(x, y)`
    fn show_text(&mut self, message: &str, x: f64, y: f64);
}

/// Surface without a window: keeps track of what would be on screen and
/// logs changes.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    pub size: (f64, f64),
    shapes: BTreeMap<ShapeId, Shape>,
    messages: Vec<String>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Surface for HeadlessSurface {
    fn create_field(&mut self, width: f64, height: f64) {
        log::debug!("Field {}x{}", width, height);
        self.size = (width, height);
        self.shapes.clear();
        self.messages.clear();
    }

    fn add_shape(&mut self, shape: &Shape) {
        self.shapes.insert(shape.id, shape.clone());
    }

    fn move_shape(&mut self, id: ShapeId, origin: DVec2) {
        match self.shapes.get_mut(&id) {
            Some(shape) => shape.body.set_origin(origin),
            None => log::warn!("Move of unknown shape {:?}", id),
        }
    }

    fn remove_shape(&mut self, id: ShapeId) {
        if self.shapes.remove(&id).is_none() {
            log::warn!("Removal of unknown shape {:?}", id);
        }
    }

    fn show_text(&mut self, message: &str, x: f64, y: f64) {
        log::info!("\"{}\" at ({}, {})", message, x, y);
        self.messages.push(message.to_string());
    }
}
