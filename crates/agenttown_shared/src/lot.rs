//! # Lots, Personas and Trees
//!
//! The records a generated town is made of. A [`Lot`] is a committed
//! building (market stall or house) carrying the [`Persona`] that lives
//! there; a [`Tree`] is pure decoration.
//!
//! All records are created once by the generator and never modified.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::math::Point;

/// Base URL of the avatar service the renderer loads persona portraits from.
const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/png";

/// Avatar background for market shopkeepers.
const MARKET_AVATAR_BACKGROUND: &str = "ffdfbf";

/// Avatar background for house residents.
const HOUSE_AVATAR_BACKGROUND: &str = "c0aede";

/// Visual variant of a building.
///
/// Closed set: the renderer has exactly one sprite per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualVariant {
    /// Residential cottage (red roof).
    #[serde(rename = "red-cottage")]
    Cottage,
    /// Residential villa (blue).
    #[serde(rename = "blue-villa")]
    Villa,
    /// Residential cabin (dark timber).
    #[serde(rename = "dark-cabin")]
    Cabin,
    /// Residential manor (brown brick).
    #[serde(rename = "brown-manor")]
    Manor,
    /// Market stall. Only ever used for markets.
    #[serde(rename = "market-stall")]
    MarketStall,
}

impl VisualVariant {
    /// The four residential variants, in sprite-sheet order.
    pub const RESIDENTIAL: [Self; 4] = [Self::Cottage, Self::Villa, Self::Cabin, Self::Manor];

    /// Returns the renderer's tag for this variant.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Cottage => "red-cottage",
            Self::Villa => "blue-villa",
            Self::Cabin => "dark-cabin",
            Self::Manor => "brown-manor",
            Self::MarketStall => "market-stall",
        }
    }

    /// Returns whether this is one of the residential variants.
    #[must_use]
    pub const fn is_residential(self) -> bool {
        !matches!(self, Self::MarketStall)
    }

    /// Maps a numeric house type (as stored on a player's profile) onto a
    /// residential variant. Negative values wrap by magnitude.
    #[must_use]
    pub const fn for_house_type(house_type: i32) -> Self {
        Self::RESIDENTIAL[(house_type.unsigned_abs() % 4) as usize]
    }
}

impl std::fmt::Display for VisualVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Identity and flavour of the agent living on a lot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Display name.
    pub name: String,
    /// Role tag (e.g. "Merchant", "Engineer").
    pub role: String,
    /// Seed string for the avatar service.
    pub avatar_seed: String,
    /// First line the persona says when visited.
    pub greeting: String,
    /// Skill tag.
    pub skills: String,
}

/// A committed building on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    /// Unique identifier within one world (`market_N` or `bot_N`).
    pub id: String,
    /// Position in world units.
    pub position: Point,
    /// Display label.
    pub label: String,
    /// Sprite to draw.
    pub visual: VisualVariant,
    /// Whether this lot is a market stall.
    pub is_market: bool,
    /// The persona living here.
    pub persona: Persona,
}

impl Lot {
    /// Returns the avatar URL for this lot's persona.
    #[must_use]
    pub fn avatar_url(&self) -> String {
        let background = if self.is_market {
            MARKET_AVATAR_BACKGROUND
        } else {
            HOUSE_AVATAR_BACKGROUND
        };
        format!(
            "{AVATAR_BASE_URL}?seed={}&backgroundColor={background}",
            self.persona.avatar_seed
        )
    }
}

/// A decorative tree.
///
/// `#[repr(C)]` and `Pod` so a slice of trees can be uploaded as an
/// instance buffer without conversion.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Tree {
    /// Position in world units.
    pub position: Point,
    /// Sprite scale factor, in [0.7, 1.3) for generated trees.
    pub scale: f64,
}
