//! Decoration markers: append-only ambient noise.
//!
//! Markers are cosmetic. They never collide with anything, never move, and
//! are never removed by the core (an optional cap bounds memory on long
//! sessions).

use std::collections::VecDeque;

use rand::Rng;
use serde::Serialize;

use crate::domain::{Rect, Size, Viewport};

/// One cosmetic marker. `seq` is its ordinal in the emission sequence and
/// keeps counting even after older markers fall off the capped log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecorationMarker {
    pub seq: u64,
    pub rect: Rect,
}

/// Append-only log of markers.
#[derive(Debug)]
pub struct DecorationLog {
    markers: VecDeque<DecorationMarker>,
    next_seq: u64,
    size: Size,
    reserved_top: f64,
    /// `None` keeps every marker for the lifetime of the engine.
    cap: Option<usize>,
}

impl DecorationLog {
    pub fn new(size: Size, reserved_top: f64, cap: Option<usize>) -> Self {
        Self {
            markers: VecDeque::new(),
            next_seq: 0,
            size,
            reserved_top,
            cap,
        }
    }

    /// Place one marker uniformly in the playable region and append it.
    /// No overlap checks: decorations carry no gameplay meaning.
    pub fn emit<R: Rng + ?Sized>(&mut self, rng: &mut R, viewport: Viewport) -> u64 {
        let vertical_span = viewport.height - self.reserved_top - self.size.height;
        let horizontal_span = viewport.width - self.size.width;

        let top = if vertical_span > 0.0 {
            self.reserved_top + rng.gen_range(0.0..vertical_span)
        } else {
            self.reserved_top
        };
        let left = if horizontal_span > 0.0 {
            rng.gen_range(0.0..horizontal_span)
        } else {
            0.0
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.markers.push_back(DecorationMarker {
            seq,
            rect: Rect::new(top, left, self.size),
        });

        if let Some(cap) = self.cap {
            while self.markers.len() > cap {
                self.markers.pop_front();
            }
        }
        seq
    }

    pub fn markers(&self) -> impl Iterator<Item = &DecorationMarker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
