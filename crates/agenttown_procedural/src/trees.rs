//! # Tree Scatter
//!
//! Decorative trees are drawn uniformly over the whole map, with no road
//! bias, no margin and no spacing between trees. Each sample is checked
//! against the river and road corridors only; a rejected sample is
//! dropped without a retry, so the tree count is best-effort.

use agenttown_shared::{Point, Tree};
use rand::Rng;

use crate::config::LayoutConfig;
use crate::placement::{check_corridors, RejectionCounts};

/// Draws `config.tree_samples` candidates and keeps the valid ones.
///
/// Rejections are added to `rejections`.
pub fn scatter_trees(
    rng: &mut impl Rng,
    config: &LayoutConfig,
    rejections: &mut RejectionCounts,
) -> Vec<Tree> {
    let mut trees = Vec::with_capacity(config.tree_samples);

    for _ in 0..config.tree_samples {
        let x = rng.gen_range(0.0..config.width);
        let y = rng.gen_range(0.0..config.height);
        let position = Point::new(x, y);

        match check_corridors(position, &config.tree) {
            Ok(()) => trees.push(Tree {
                position,
                scale: rng.gen_range(config.tree_scale_min..config.tree_scale_max),
            }),
            Err(rejection) => {
                tracing::trace!(x = position.x, y = position.y, ?rejection, "tree sample dropped");
                rejections.record(rejection);
            }
        }
    }

    trees
}
