//! # Layout Config File Tests
//!
//! The shipped `data/layout.toml` must describe exactly the built-in
//! defaults, and a builder made from it must behave identically.

use std::path::PathBuf;

use agenttown_procedural::{LayoutConfig, WorldBuilder, WorldSeed};

fn shipped_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/layout.toml")
}

#[test]
fn test_shipped_config_matches_defaults() {
    let config = LayoutConfig::from_toml_file(shipped_config_path()).unwrap();
    assert_eq!(config, LayoutConfig::default());
}

#[test]
fn test_builder_from_file_matches_default_builder() {
    let config = LayoutConfig::from_toml_file(shipped_config_path()).unwrap();
    let from_file = WorldBuilder::new(config).unwrap();

    let seed = WorldSeed::new(31337);
    assert_eq!(
        from_file.build(&mut seed.rng()),
        WorldBuilder::default().build(&mut seed.rng())
    );
}

#[test]
fn test_tuned_config_changes_density() {
    let config = LayoutConfig::from_toml_str(
        r#"
        market_count = 2
        house_target = 10
        tree_samples = 30
        "#,
    )
    .unwrap();
    let (world, stats) = WorldBuilder::new(config)
        .unwrap()
        .build_with_stats(&mut WorldSeed::new(5).rng());

    assert!(world.market_count() <= 2);
    assert!(world.house_count() <= 10);
    assert_eq!(stats.trees_accepted + stats.trees_rejected, 30);
}
