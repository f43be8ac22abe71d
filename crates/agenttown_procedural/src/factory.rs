//! # Lot Factory
//!
//! Turns an accepted position into a finished [`Lot`] with its persona.
//!
//! Markets are fully determined by their slot. Houses take their name
//! prefix from how many houses came before them; role, numeric suffix
//! and visual variant are drawn from the random source, in that order.

use agenttown_shared::{Lot, Persona, Point, VisualVariant};
use rand::Rng;

/// Name prefixes handed out to houses in commit order.
pub const HOUSE_NAMES: [&str; 24] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi",
    "Psi", "Omega",
];

/// Roles a house resident may have.
pub const HOUSE_ROLES: [&str; 12] = [
    "Engineer",
    "Designer",
    "Product Mgr",
    "Data Scientist",
    "Marketer",
    "Sales",
    "HR",
    "Support",
    "DevOps",
    "Architect",
    "Founder",
    "Investor",
];

/// Role of every market shopkeeper.
pub const MARKET_ROLE: &str = "Merchant";

/// Skill tag of every market shopkeeper.
pub const MARKET_SKILLS: &str = "Trading";

/// Builds the market for a 0-based slot.
#[must_use]
pub fn make_market(slot: usize, position: Point) -> Lot {
    let number = slot + 1;

    Lot {
        id: format!("market_{slot}"),
        position,
        label: format!("Market {number}"),
        visual: VisualVariant::MarketStall,
        is_market: true,
        persona: Persona {
            name: format!("Shopkeeper {number}"),
            role: MARKET_ROLE.to_string(),
            avatar_seed: format!("Market{slot}"),
            greeting: format!("Welcome to Market #{number}! Fresh data served daily."),
            skills: MARKET_SKILLS.to_string(),
        },
    }
}

/// Builds a house.
///
/// * `houses_before` - houses already committed; selects the name prefix
/// * `structures_before` - lots of any kind already committed; forms the id
pub fn make_house(
    rng: &mut impl Rng,
    position: Point,
    houses_before: usize,
    structures_before: usize,
) -> Lot {
    let role = HOUSE_ROLES[rng.gen_range(0..HOUSE_ROLES.len())];
    let suffix: u32 = rng.gen_range(10..=99);
    let visual = VisualVariant::RESIDENTIAL[rng.gen_range(0..VisualVariant::RESIDENTIAL.len())];

    let label = format!("{}-{suffix}", HOUSE_NAMES[houses_before % HOUSE_NAMES.len()]);

    Lot {
        id: format!("bot_{structures_before}"),
        position,
        visual,
        is_market: false,
        persona: Persona {
            name: format!("{label} Bot"),
            role: role.to_string(),
            avatar_seed: label.clone(),
            greeting: format!("Welcome to AgentTown! I'm {label}, a {role}. How can I help?"),
            skills: role.to_string(),
        },
        label,
    }
}
