//! Brick field: layout, row colors and the set of surviving bricks
//!
//! The field is the only owner of the brick collection. Removing a brick also
//! unregisters its shape so later point queries no longer see it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::shape::{Body, Rect, ShapeId, ShapeKind, ShapeRegistry};
use crate::config::GameConfig;

/// Row color bands, two rows per band, repeating every 10 rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickColor {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
}

impl BrickColor {
    /// Color for a zero-based row index
    pub fn for_row(row: u32) -> Self {
        match row % 10 {
            0 | 1 => BrickColor::Red,
            2 | 3 => BrickColor::Orange,
            4 | 5 => BrickColor::Yellow,
            6 | 7 => BrickColor::Green,
            _ => BrickColor::Cyan,
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            BrickColor::Red => [255, 0, 0],
            BrickColor::Orange => [255, 200, 0],
            BrickColor::Yellow => [255, 255, 0],
            BrickColor::Green => [0, 255, 0],
            BrickColor::Cyan => [0, 255, 255],
        }
    }
}

/// Grid geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: u32,
    pub per_row: u32,
    pub brick_size: DVec2,
    pub separation: f64,
    /// Rows are centered horizontally in a field this wide
    pub field_width: f64,
    /// Top edge of the first row
    pub y_offset: f64,
}

impl GridLayout {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            rows: config.brick_rows,
            per_row: config.bricks_per_row,
            brick_size: DVec2::new(config.brick_width(), config.brick_height),
            separation: config.brick_sep,
            field_width: config.field_width,
            y_offset: config.brick_y_offset,
        }
    }

    /// Rectangle of the brick at (row, col)
    pub fn brick_rect(&self, row: u32, col: u32) -> Rect {
        let span = self.per_row as f64 * self.brick_size.x
            + self.per_row.saturating_sub(1) as f64 * self.separation;
        let left = (self.field_width - span) / 2.0;
        Rect::new(
            left + col as f64 * (self.brick_size.x + self.separation),
            self.y_offset + row as f64 * (self.brick_size.y + self.separation),
            self.brick_size.x,
            self.brick_size.y,
        )
    }
}

/// A surviving brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub shape: ShapeId,
    pub row: u32,
    pub col: u32,
    pub rect: Rect,
    pub color: BrickColor,
}

/// The set of surviving bricks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl BrickField {
    /// Lay out the full grid and register every brick
    pub fn build(registry: &mut ShapeRegistry, layout: &GridLayout) -> Self {
        let mut bricks = Vec::with_capacity((layout.rows * layout.per_row) as usize);
        for row in 0..layout.rows {
            let color = BrickColor::for_row(row);
            for col in 0..layout.per_row {
                let rect = layout.brick_rect(row, col);
                let shape = registry.add(ShapeKind::Brick, Body::Rect(rect), color.rgb());
                bricks.push(Brick {
                    shape,
                    row,
                    col,
                    rect,
                    color,
                });
            }
        }
        log::debug!("Built {}x{} brick grid", layout.rows, layout.per_row);
        Self { bricks }
    }

    /// Remove a brick and unregister its shape.
    ///
    /// Returns the removed brick, or `None` if it was already gone.
    pub fn remove(&mut self, registry: &mut ShapeRegistry, shape: ShapeId) -> Option<Brick> {
        let index = self.bricks.iter().position(|b| b.shape == shape)?;
        let brick = self.bricks.remove(index);
        registry.remove(shape);
        Some(brick)
    }

    pub fn contains(&self, shape: ShapeId) -> bool {
        self.bricks.iter().any(|b| b.shape == shape)
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }
}
