use serde::{Deserialize, Serialize};

/// Bounding box coordinates for an element, in page space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Integer point a scan is anchored on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl BoundingBox {
    /// Create a new BoundingBox
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Check if the bounding box is visible (has non-zero dimensions)
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Center of the box.
    ///
    /// Every component is truncated toward zero before the half extents are
    /// added, so `{100.9, 0, 51, 0}` centers on x = 100 + 25. Out-of-range
    /// components saturate at the `i64` bounds.
    pub fn center(&self) -> Point {
        let x = self.x.trunc() as i64;
        let y = self.y.trunc() as i64;
        let width = self.width.trunc() as i64;
        let height = self.height.trunc() as i64;

        Point { x: x.saturating_add(width / 2), y: y.saturating_add(height / 2) }
    }
}
