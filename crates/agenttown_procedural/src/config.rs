//! # Layout Configuration
//!
//! Every tunable number of the generator lives here. The defaults are the
//! values the town map has always shipped with; changing any of them
//! changes the layouts produced for a given seed.
//!
//! A TOML file may override any subset of the top-level fields. A
//! per-category table (`[market]`, `[house]`, `[tree]`) must be given in
//! full when present.
//!
//! ```toml
//! house_target = 20
//! house_attempt_budget = 1500
//!
//! [market]
//! river_padding = 360.0
//! road_padding = 80.0
//! separation = 250.0
//! ```

use std::path::Path;

use agenttown_shared::{WorldRect, WORLD_HEIGHT, WORLD_MARGIN, WORLD_WIDTH};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};

/// What kind of entity a candidate position is being validated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Market stall.
    Market,
    /// Residential house.
    House,
    /// Decorative tree.
    Tree,
}

/// Exclusion rules applied to one category of candidate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementRules {
    /// Minimum vertical distance from the river centerline.
    pub river_padding: f64,
    /// Half-width of the road corridors the candidate must avoid.
    pub road_padding: f64,
    /// Minimum distance to every committed structure (0 disables the check).
    pub separation: f64,
}

impl PlacementRules {
    /// Rules for market stalls.
    pub const MARKET: Self = Self {
        river_padding: 360.0,
        road_padding: 80.0,
        separation: 200.0,
    };

    /// Rules for houses.
    pub const HOUSE: Self = Self {
        river_padding: 360.0,
        road_padding: 90.0,
        separation: 160.0,
    };

    /// Rules for trees. Trees never check separation.
    pub const TREE: Self = Self {
        river_padding: 280.0,
        road_padding: 70.0,
        separation: 0.0,
    };
}

/// Full configuration of one generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// World width in world units.
    pub width: f64,
    /// World height in world units.
    pub height: f64,
    /// Border band in which no structure may stand.
    pub margin: f64,
    /// Number of market slots to attempt.
    pub market_count: usize,
    /// Candidate draws per market slot before the slot is skipped.
    pub market_attempts: usize,
    /// Number of houses to aim for.
    pub house_target: usize,
    /// Candidate draws shared by the whole house phase.
    pub house_attempt_budget: usize,
    /// Raw tree samples drawn (each accepted or dropped, no retry).
    pub tree_samples: usize,
    /// Lateral distance from a road at which structures are sampled.
    pub road_offset: f64,
    /// Distance from the map edge at which the along-road coordinate starts.
    pub road_sample_inset: f64,
    /// Maximum per-axis jitter applied to house candidates.
    pub house_jitter: f64,
    /// Smallest tree scale (inclusive).
    pub tree_scale_min: f64,
    /// Largest tree scale (exclusive).
    pub tree_scale_max: f64,
    /// Exclusion rules for markets.
    pub market: PlacementRules,
    /// Exclusion rules for houses.
    pub house: PlacementRules,
    /// Exclusion rules for trees.
    pub tree: PlacementRules,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            margin: WORLD_MARGIN,
            market_count: 5,
            market_attempts: 100,
            house_target: 30,
            house_attempt_budget: 3000,
            tree_samples: 120,
            road_offset: 130.0,
            road_sample_inset: 200.0,
            house_jitter: 30.0,
            tree_scale_min: 0.7,
            tree_scale_max: 1.3,
            market: PlacementRules::MARKET,
            house: PlacementRules::HOUSE,
            tree: PlacementRules::TREE,
        }
    }
}

impl LayoutConfig {
    /// Returns the exclusion rules for a category.
    #[must_use]
    pub const fn rules(&self, category: Category) -> &PlacementRules {
        match category {
            Category::Market => &self.market,
            Category::House => &self.house,
            Category::Tree => &self.tree,
        }
    }

    /// The full map this configuration lays towns out on.
    #[must_use]
    pub const fn bounds(&self) -> WorldRect {
        WorldRect::of_size(self.width, self.height)
    }

    /// Upper bound on the number of structures one world can hold.
    #[must_use]
    pub const fn max_structures(&self) -> usize {
        self.market_count + self.house_target
    }

    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Parse`] for malformed TOML and
    /// [`LayoutError::InvalidConfig`] if validation fails.
    pub fn from_toml_str(text: &str) -> LayoutResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`LayoutConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks that every distance is a finite, non-negative number and
    /// that every sampling range is non-empty with a finite span.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] naming the first offending
    /// field.
    pub fn validate(&self) -> LayoutResult<()> {
        let distances = [
            ("width", self.width),
            ("height", self.height),
            ("margin", self.margin),
            ("road_offset", self.road_offset),
            ("road_sample_inset", self.road_sample_inset),
            ("house_jitter", self.house_jitter),
            ("tree_scale_min", self.tree_scale_min),
            ("tree_scale_max", self.tree_scale_max),
        ];
        for (name, value) in distances {
            require_non_negative(name, value)?;
        }

        for (name, rules) in [
            ("market", &self.market),
            ("house", &self.house),
            ("tree", &self.tree),
        ] {
            require_non_negative(&format!("{name}.river_padding"), rules.river_padding)?;
            require_non_negative(&format!("{name}.road_padding"), rules.road_padding)?;
            require_non_negative(&format!("{name}.separation"), rules.separation)?;
        }

        let short_side = self.width.min(self.height);
        if short_side <= 0.0 {
            return Err(invalid("world must have a positive width and height"));
        }
        if 2.0 * self.margin >= short_side {
            return Err(invalid(format!(
                "margin {} leaves no placeable area in a {}x{} world",
                self.margin, self.width, self.height
            )));
        }
        if 2.0 * self.road_sample_inset >= short_side {
            return Err(invalid(format!(
                "road_sample_inset {} leaves no room to sample along roads",
                self.road_sample_inset
            )));
        }
        for (name, value) in [
            ("road_offset", self.road_offset),
            ("house_jitter", self.house_jitter),
        ] {
            if value >= short_side {
                return Err(invalid(format!(
                    "{name} {value} must be smaller than the world's short side {short_side}"
                )));
            }
        }
        if self.tree_scale_min >= self.tree_scale_max {
            return Err(invalid(format!(
                "tree scale range [{}, {}) is empty",
                self.tree_scale_min, self.tree_scale_max
            )));
        }
        if self.market_count > 0 && self.market_attempts == 0 {
            return Err(invalid("market_attempts must be positive when markets are requested"));
        }
        if self.house_target > 0 && self.house_attempt_budget == 0 {
            return Err(invalid(
                "house_attempt_budget must be positive when houses are requested",
            ));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> LayoutError {
    LayoutError::InvalidConfig(message.into())
}

fn require_non_negative(name: &str, value: f64) -> LayoutResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be a finite non-negative number, got {value}")))
    }
}
