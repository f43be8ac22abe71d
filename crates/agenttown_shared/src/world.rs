//! # World Snapshot
//!
//! The output of one generation run: every committed lot and every
//! accepted tree, in the order they were placed.
//!
//! ## Immutability
//!
//! The lists are private. After [`World::new`] the only access is through
//! shared slices, so a renderer holding a `&World` (or an `Arc<World>`)
//! can never disturb the layout it is drawing.

use serde::{Deserialize, Serialize};

use crate::lot::{Lot, Tree};
use crate::view::WorldRect;

/// A generated town: structures plus decorative trees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct World {
    bounds: WorldRect,
    structures: Vec<Lot>,
    trees: Vec<Tree>,
}

/// Borrowed view of the part of a [`World`] inside a rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldContent<'a> {
    /// The rectangle actually queried (after padding and clamping).
    pub rect: WorldRect,
    /// Lots inside `rect`, in world order.
    pub structures: Vec<&'a Lot>,
    /// Trees inside `rect`, in world order.
    pub trees: Vec<&'a Tree>,
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldRect::WORLD, Vec::new(), Vec::new())
    }
}

impl World {
    /// Freezes the given lists into a world snapshot covering `bounds`.
    #[must_use]
    pub fn new(bounds: WorldRect, structures: Vec<Lot>, trees: Vec<Tree>) -> Self {
        Self {
            bounds,
            structures,
            trees,
        }
    }

    /// The extent of the map this town was laid out on.
    #[must_use]
    pub const fn bounds(&self) -> &WorldRect {
        &self.bounds
    }

    /// All committed structures, markets first, in commit order.
    #[must_use]
    pub fn structures(&self) -> &[Lot] {
        &self.structures
    }

    /// All accepted trees, in sample order.
    #[must_use]
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    /// Iterates over market lots only.
    pub fn markets(&self) -> impl Iterator<Item = &Lot> {
        self.structures.iter().filter(|lot| lot.is_market)
    }

    /// Iterates over house lots only.
    pub fn houses(&self) -> impl Iterator<Item = &Lot> {
        self.structures.iter().filter(|lot| !lot.is_market)
    }

    /// Number of market lots.
    #[must_use]
    pub fn market_count(&self) -> usize {
        self.markets().count()
    }

    /// Number of house lots.
    #[must_use]
    pub fn house_count(&self) -> usize {
        self.houses().count()
    }

    /// Looks up a lot by its identifier.
    #[must_use]
    pub fn lot(&self, id: &str) -> Option<&Lot> {
        self.structures.iter().find(|lot| lot.id == id)
    }

    /// Returns the lots and trees inside `rect` grown by `padding`.
    ///
    /// The padded rectangle is clamped to [`World::bounds`].
    #[must_use]
    pub fn content_in_rect(&self, rect: &WorldRect, padding: f64) -> WorldContent<'_> {
        let rect = rect.padded_within(padding, &self.bounds);

        WorldContent {
            rect,
            structures: self
                .structures
                .iter()
                .filter(|lot| rect.contains(lot.position.x, lot.position.y))
                .collect(),
            trees: self
                .trees
                .iter()
                .filter(|tree| rect.contains(tree.position.x, tree.position.y))
                .collect(),
        }
    }

    /// Trees as raw bytes, ready for a GPU instance buffer.
    #[must_use]
    pub fn tree_instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.trees.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lot::{Persona, VisualVariant};
    use crate::math::Point;

    fn lot(id: &str, x: f64, y: f64, is_market: bool) -> Lot {
        Lot {
            id: id.to_string(),
            position: Point::new(x, y),
            label: id.to_string(),
            visual: if is_market {
                VisualVariant::MarketStall
            } else {
                VisualVariant::Villa
            },
            is_market,
            persona: Persona {
                name: id.to_string(),
                role: "Engineer".to_string(),
                avatar_seed: id.to_string(),
                greeting: String::new(),
                skills: "Engineer".to_string(),
            },
        }
    }

    fn sample_world() -> World {
        World::new(
            WorldRect::WORLD,
            vec![
                lot("market_0", 300.0, 300.0, true),
                lot("bot_1", 800.0, 300.0, false),
                lot("bot_2", 2000.0, 2500.0, false),
            ],
            vec![
                Tree {
                    position: Point::new(310.0, 500.0),
                    scale: 1.0,
                },
                Tree {
                    position: Point::new(2300.0, 100.0),
                    scale: 0.8,
                },
            ],
        )
    }

    #[test]
    fn test_counts_by_kind() {
        let world = sample_world();
        assert_eq!(world.market_count(), 1);
        assert_eq!(world.house_count(), 2);
        assert_eq!(world.structures().len(), 3);
        assert_eq!(world.trees().len(), 2);
    }

    #[test]
    fn test_lookup_by_id() {
        let world = sample_world();
        assert_eq!(world.lot("bot_2").map(|l| l.position.x), Some(2000.0));
        assert!(world.lot("bot_9").is_none());
    }

    #[test]
    fn test_content_in_rect_filters_and_preserves_order() {
        let world = sample_world();
        let rect = WorldRect::new(200.0, 900.0, 200.0, 400.0);

        let content = world.content_in_rect(&rect, 0.0);
        let ids: Vec<&str> = content.structures.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["market_0", "bot_1"]);
        assert!(content.trees.is_empty());

        let padded = world.content_in_rect(&rect, 100.0);
        assert_eq!(padded.rect, WorldRect::new(100.0, 1000.0, 100.0, 500.0));
        assert_eq!(padded.trees.len(), 1, "tree on the padded edge is included");
    }

    #[test]
    fn test_content_in_rect_uses_world_bounds() {
        let far_east = lot("bot_1", 4500.0, 300.0, false);
        let world = World::new(
            WorldRect::of_size(4800.0, 2800.0),
            vec![lot("market_0", 300.0, 300.0, true), far_east],
            vec![Tree {
                position: Point::new(4700.0, 2000.0),
                scale: 1.0,
            }],
        );

        let content = world.content_in_rect(world.bounds(), 0.0);
        assert_eq!(content.structures.len(), 2, "Lots past x = 2400 must be returned");
        assert_eq!(content.trees.len(), 1);
        assert_eq!(content.rect, WorldRect::of_size(4800.0, 2800.0));
    }

    #[test]
    fn test_default_world_is_empty_default_map() {
        let world = World::default();
        assert_eq!(*world.bounds(), WorldRect::WORLD);
        assert!(world.structures().is_empty());
    }

    #[test]
    fn test_instance_bytes_cover_all_trees() {
        let world = sample_world();
        let bytes = world.tree_instance_bytes();
        assert_eq!(bytes.len(), 2 * std::mem::size_of::<Tree>());

        let back: &[Tree] = bytemuck::cast_slice(bytes);
        assert_eq!(back, world.trees());
    }

    #[test]
    fn test_json_shape() {
        let world = sample_world();
        let value = serde_json::to_value(&world).unwrap();

        assert_eq!(value["structures"][0]["visual"], "market-stall");
        assert_eq!(value["structures"][1]["persona"]["role"], "Engineer");
        assert_eq!(value["trees"][1]["scale"], 0.8);
    }
}
