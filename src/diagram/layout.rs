//! Staggered grid placement for newly added table nodes.

use serde::{Deserialize, Serialize};

/// Number of node columns on the canvas grid.
pub const GRID_COLUMNS: u64 = 3;

/// Canvas coordinates of a node's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Grid spacing used to place nodes as they are added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    pub column_spacing: f64,
    pub row_spacing: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            origin_x: 50.0,
            origin_y: 50.0,
            column_spacing: 300.0,
            row_spacing: 250.0,
        }
    }
}

impl GridLayout {
    /// Position for the node with sequence number `n`: column `n % 3`,
    /// row `n / 3`.
    pub fn position_for(&self, n: u64) -> Position {
        let col = (n % GRID_COLUMNS) as f64;
        let row = (n / GRID_COLUMNS) as f64;
        Position::new(
            self.origin_x + col * self.column_spacing,
            self.origin_y + row * self.row_spacing,
        )
    }
}
