//! Pointer geometry for drop-position calculation.
//!
//! Geometry is an explicit input supplied by the presentation layer with the
//! drag-end event; the engine never measures a rendering tree itself.

use serde::{Deserialize, Serialize};

/// Vertical extent of a rendered task card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Vertical midpoint of the rect
    pub fn midpoint_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Pointer state at drag release, over a specific task card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerGeometry {
    /// Vertical pointer coordinate at release time
    pub pointer_y: f64,
    /// Bounding box of the card the pointer is over
    pub over_rect: Rect,
}

impl PointerGeometry {
    /// Create pointer geometry for a release over a task card
    pub fn new(pointer_y: f64, over_rect: Rect) -> Self {
        Self {
            pointer_y,
            over_rect,
        }
    }

    /// True when the pointer sits strictly above the card's vertical midpoint
    pub fn is_above_midpoint(&self) -> bool {
        self.pointer_y < self.over_rect.midpoint_y()
    }
}
