//! # AgentTown Shared
//!
//! The world snapshot produced by the layout generator and read by the
//! town-map renderer.
//!
//! ## CRITICAL RULE
//!
//! A [`World`] is immutable once constructed. Consumers only ever get
//! shared references to its lots and trees.
//!
//! This crate must NEVER depend on:
//! - `rand` or any other randomness source
//! - Any GPU or window-related crate

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod lot;
pub mod math;
pub mod view;
pub mod world;

pub use constants::{WORLD_HEIGHT, WORLD_MARGIN, WORLD_WIDTH};
pub use lot::{Lot, Persona, Tree, VisualVariant};
pub use math::Point;
pub use view::WorldRect;
pub use world::{World, WorldContent};
