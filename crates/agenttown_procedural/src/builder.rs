//! # World Builder
//!
//! Runs the three generation phases in a fixed order. No phase revisits
//! an earlier one and nothing is retried outside the attempt budgets:
//!
//! ```text
//! MARKETS ──► HOUSES ──► TREES ──► World
//!  per-slot    shared     fixed
//!  budget      budget     sample count
//! ```
//!
//! - **MARKETS**: each slot gets `market_attempts` draws; the first valid
//!   candidate is committed. A slot that never succeeds is skipped.
//! - **HOUSES**: one budget of `house_attempt_budget` draws for the whole
//!   phase. Stops at `markets + house_target` structures or when the
//!   budget runs out, whichever comes first.
//! - **TREES**: see [`scatter_trees`].
//!
//! Falling short of a target is a normal outcome, never an error.

use agenttown_shared::{Lot, World};
use rand::Rng;

use crate::config::{Category, LayoutConfig};
use crate::error::LayoutResult;
use crate::factory::{make_house, make_market};
use crate::placement::{
    sample_house_candidate, sample_road_adjacent_point, validate_structure, RejectionCounts,
};
use crate::trees::scatter_trees;

/// The phases of one generation run, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenerationPhase {
    /// Placing market stalls.
    Markets,
    /// Placing houses.
    Houses,
    /// Scattering trees.
    Trees,
}

impl GenerationPhase {
    /// All phases, in execution order.
    pub const ALL: [Self; 3] = [Self::Markets, Self::Houses, Self::Trees];
}

impl std::fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Markets => "markets",
            Self::Houses => "houses",
            Self::Trees => "trees",
        })
    }
}

/// What happened during one generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Market slots that received a market.
    pub markets_committed: usize,
    /// Market slots that exhausted their attempts.
    pub markets_skipped: usize,
    /// Candidate draws spent in the market phase.
    pub market_attempts: usize,
    /// Houses committed.
    pub houses_committed: usize,
    /// Candidate draws spent in the house phase.
    pub house_attempts: usize,
    /// Trees kept.
    pub trees_accepted: usize,
    /// Tree samples dropped.
    pub trees_rejected: usize,
    market_rejections: RejectionCounts,
    house_rejections: RejectionCounts,
    tree_rejections: RejectionCounts,
}

impl GenerationStats {
    /// Rejection tally for one phase.
    #[must_use]
    pub const fn rejections(&self, phase: GenerationPhase) -> &RejectionCounts {
        match phase {
            GenerationPhase::Markets => &self.market_rejections,
            GenerationPhase::Houses => &self.house_rejections,
            GenerationPhase::Trees => &self.tree_rejections,
        }
    }

    /// Total structures committed.
    #[must_use]
    pub const fn structures(&self) -> usize {
        self.markets_committed + self.houses_committed
    }
}

/// Generates worlds from a fixed configuration.
///
/// The builder holds only its configuration; every run starts from empty
/// lists and hands the finished [`World`] to the caller.
#[derive(Clone, Debug, Default)]
pub struct WorldBuilder {
    config: LayoutConfig,
}

impl WorldBuilder {
    /// Creates a builder after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`](crate::LayoutError::InvalidConfig)
    /// if the configuration cannot be sampled.
    pub fn new(config: LayoutConfig) -> LayoutResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this builder runs with.
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Generates one world.
    pub fn build(&self, rng: &mut impl Rng) -> World {
        self.build_with_stats(rng).0
    }

    /// Generates one world and reports how the run went.
    pub fn build_with_stats(&self, rng: &mut impl Rng) -> (World, GenerationStats) {
        let mut stats = GenerationStats::default();
        let mut lots = Vec::with_capacity(self.config.max_structures());

        self.place_markets(rng, &mut lots, &mut stats);
        self.place_houses(rng, &mut lots, &mut stats);

        let trees = scatter_trees(rng, &self.config, &mut stats.tree_rejections);
        stats.trees_accepted = trees.len();
        stats.trees_rejected = stats.tree_rejections.total();
        tracing::debug!(
            phase = %GenerationPhase::Trees,
            accepted = stats.trees_accepted,
            rejected = stats.trees_rejected,
            "phase complete"
        );

        tracing::info!(
            "Town generated: {} markets, {} houses, {} trees",
            stats.markets_committed,
            stats.houses_committed,
            stats.trees_accepted
        );

        (World::new(self.config.bounds(), lots, trees), stats)
    }

    fn place_markets(&self, rng: &mut impl Rng, lots: &mut Vec<Lot>, stats: &mut GenerationStats) {
        let rules = self.config.rules(Category::Market);

        for slot in 0..self.config.market_count {
            let mut placed = false;

            for _ in 0..self.config.market_attempts {
                stats.market_attempts += 1;
                let candidate = sample_road_adjacent_point(rng, &self.config);

                match validate_structure(candidate, rules, &self.config, lots) {
                    Ok(()) => {
                        lots.push(make_market(slot, candidate));
                        placed = true;
                        break;
                    }
                    Err(rejection) => stats.market_rejections.record(rejection),
                }
            }

            if placed {
                stats.markets_committed += 1;
            } else {
                stats.markets_skipped += 1;
                tracing::debug!(
                    "Market slot {} skipped after {} attempts",
                    slot,
                    self.config.market_attempts
                );
            }
        }

        tracing::debug!(
            phase = %GenerationPhase::Markets,
            committed = stats.markets_committed,
            skipped = stats.markets_skipped,
            attempts = stats.market_attempts,
            "phase complete"
        );
    }

    fn place_houses(&self, rng: &mut impl Rng, lots: &mut Vec<Lot>, stats: &mut GenerationStats) {
        let rules = self.config.rules(Category::House);
        let target = stats.markets_committed + self.config.house_target;

        while lots.len() < target && stats.house_attempts < self.config.house_attempt_budget {
            stats.house_attempts += 1;
            let candidate = sample_house_candidate(rng, &self.config);

            if let Err(rejection) = validate_structure(candidate, rules, &self.config, lots) {
                stats.house_rejections.record(rejection);
                continue;
            }

            let house = make_house(rng, candidate, stats.houses_committed, lots.len());
            lots.push(house);
            stats.houses_committed += 1;
        }

        if lots.len() < target {
            tracing::debug!(
                "House budget exhausted: {} of {} houses placed",
                stats.houses_committed,
                self.config.house_target
            );
        }
        tracing::debug!(
            phase = %GenerationPhase::Houses,
            committed = stats.houses_committed,
            attempts = stats.house_attempts,
            "phase complete"
        );
    }
}
