//! # Viewport Rectangles
//!
//! The renderer only draws what is near the camera. These helpers build
//! the world-space rectangle it asks the [`World`](crate::World) about.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_VIEW_EXTENT, WORLD_HEIGHT, WORLD_WIDTH};

/// Axis-aligned rectangle in world units. Bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldRect {
    /// Western edge.
    pub min_x: f64,
    /// Eastern edge.
    pub max_x: f64,
    /// Northern edge.
    pub min_y: f64,
    /// Southern edge.
    pub max_y: f64,
}

impl WorldRect {
    /// The whole map.
    pub const WORLD: Self = Self {
        min_x: 0.0,
        max_x: WORLD_WIDTH,
        min_y: 0.0,
        max_y: WORLD_HEIGHT,
    };

    /// Creates a rectangle from its edges.
    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// The map of a world with the given dimensions, anchored at the origin.
    #[must_use]
    pub const fn of_size(width: f64, height: f64) -> Self {
        Self::new(0.0, width, 0.0, height)
    }

    /// Builds a rectangle of the given size centered on a point, inside the
    /// default-sized map.
    ///
    /// See [`WorldRect::around_point_within`].
    #[must_use]
    pub fn around_point(center_x: f64, center_y: f64, width: f64, height: f64) -> Self {
        Self::around_point_within(&Self::WORLD, center_x, center_y, width, height)
    }

    /// Builds a rectangle of the given size centered on a point, inside
    /// `bounds`.
    ///
    /// Each side is at least [`MIN_VIEW_EXTENT`]. A rectangle hanging over
    /// the map edge is shifted back inside rather than cropped, so the
    /// camera keeps its size near the border; only a rectangle larger than
    /// the map itself ends up clamped.
    #[must_use]
    pub fn around_point_within(
        bounds: &Self,
        center_x: f64,
        center_y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        let half_w = width.max(MIN_VIEW_EXTENT) / 2.0;
        let half_h = height.max(MIN_VIEW_EXTENT) / 2.0;

        let (min_x, max_x) =
            shift_inside(center_x - half_w, center_x + half_w, bounds.min_x, bounds.max_x);
        let (min_y, max_y) =
            shift_inside(center_y - half_h, center_y + half_h, bounds.min_y, bounds.max_y);

        Self::new(min_x, max_x, min_y, max_y).clamped_to(bounds)
    }

    /// Grows the rectangle by `padding` on every side, clamped to the
    /// default-sized map.
    #[must_use]
    pub fn padded(&self, padding: f64) -> Self {
        self.padded_within(padding, &Self::WORLD)
    }

    /// Grows the rectangle by `padding` on every side, clamped to `bounds`.
    #[must_use]
    pub fn padded_within(&self, padding: f64, bounds: &Self) -> Self {
        Self::new(
            self.min_x - padding,
            self.max_x + padding,
            self.min_y - padding,
            self.max_y + padding,
        )
        .clamped_to(bounds)
    }

    fn clamped_to(self, bounds: &Self) -> Self {
        Self {
            min_x: self.min_x.clamp(bounds.min_x, bounds.max_x),
            max_x: self.max_x.clamp(bounds.min_x, bounds.max_x),
            min_y: self.min_y.clamp(bounds.min_y, bounds.max_y),
            max_y: self.max_y.clamp(bounds.min_y, bounds.max_y),
        }
    }

    /// Returns whether the point lies inside (edges included).
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Width of the rectangle.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the rectangle.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Moves the interval `[min, max]` so it starts at or after `lo` and ends
/// at or before `hi`, preserving its length where possible.
fn shift_inside(mut min: f64, mut max: f64, lo: f64, hi: f64) -> (f64, f64) {
    if min < lo {
        max += lo - min;
        min = lo;
    }
    if max > hi {
        min -= max - hi;
        max = hi;
    }
    (min, max)
}
