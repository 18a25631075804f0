//! Axis-aligned geometry for the playable region.

use serde::{Deserialize, Serialize};

/// Width/height of a box (task token or decoration footprint).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The window the simulation plays in. Top/left offsets are relative to its
/// origin; the reserved top margin is carved out separately by the placement
/// resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box: top/left offset plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, size: Size) -> Self {
        Self {
            top,
            left,
            width: size.width,
            height: size.height,
        }
    }

    /// AABB overlap test. Two boxes overlap unless separated on the
    /// horizontal or vertical axis; boxes that merely touch on an edge do
    /// not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.left + self.width <= other.left
            || other.left + other.width <= self.left
            || self.top + self.height <= other.top
            || other.top + other.height <= self.top)
    }
}
