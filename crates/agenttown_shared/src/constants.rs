//! # World Constants
//!
//! Baked into both the generator and the renderer's viewport sizing.
//! Changing them changes every generated layout.

/// Width of the town map in world units.
pub const WORLD_WIDTH: f64 = 2400.0;

/// Height of the town map in world units.
pub const WORLD_HEIGHT: f64 = 2800.0;

/// Distance from the map edge inside which no structure is placed.
pub const WORLD_MARGIN: f64 = 50.0;

/// Smallest side length a viewport rectangle is allowed to have.
pub const MIN_VIEW_EXTENT: f64 = 120.0;
