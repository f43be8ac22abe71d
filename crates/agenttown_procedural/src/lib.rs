//! # AgentTown Procedural Layout
//!
//! Generates the town map: market stalls and houses lined up along the
//! roads, kept clear of the river, plus a scatter of decorative trees.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same town
//! 2. **Injected randomness**: Every sampling function takes `&mut impl Rng`
//! 3. **Bounded**: Every loop runs against a fixed attempt budget
//! 4. **Graceful**: A placement that cannot be made is left out, never an error
//!
//! ## Core Components
//!
//! - [`geometry`]: River and road corridors as pure predicates
//! - [`placement`]: Road-side candidate sampling and validation
//! - [`factory`]: Lot identities and personas
//! - [`trees`]: Decorative scatter
//! - [`WorldBuilder`]: The markets, houses, trees pipeline
//!
//! ## Example
//!
//! ```rust,ignore
//! use agenttown_procedural::{generate_world_with_seed, WorldSeed};
//!
//! let world = generate_world_with_seed(WorldSeed::new(42));
//! assert!(world.structures().len() <= 35);
//! assert!(world.trees().len() <= 120);
//! ```
//!
//! ## Thread Safety
//!
//! Generation is synchronous and touches no shared state. Concurrent
//! runs must each own their random source; derive per-worker seeds with
//! [`WorldSeed::derive`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod builder;
pub mod config;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod placement;
pub mod seed;
pub mod trees;

pub use agenttown_shared::{
    Lot, Persona, Point, Tree, VisualVariant, World, WorldContent, WorldRect, WORLD_HEIGHT,
    WORLD_WIDTH,
};
pub use builder::{GenerationPhase, GenerationStats, WorldBuilder};
pub use config::{Category, LayoutConfig, PlacementRules};
pub use error::{LayoutError, LayoutResult};
pub use placement::{Rejection, RejectionCounts};
pub use seed::WorldSeed;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates a town with the default configuration and a fresh random
/// source seeded from the operating system.
///
/// Two calls return different towns. Use [`generate_world_with_seed`]
/// when the result must be reproducible.
#[must_use]
pub fn generate_world() -> World {
    generate_world_with_rng(&mut ChaCha8Rng::from_entropy())
}

/// Generates the town for a seed. Same seed, same town.
#[must_use]
pub fn generate_world_with_seed(seed: WorldSeed) -> World {
    generate_world_with_rng(&mut seed.rng())
}

/// Generates a town with the default configuration from the given
/// random source.
#[must_use]
pub fn generate_world_with_rng(rng: &mut impl Rng) -> World {
    WorldBuilder::default().build(rng)
}
