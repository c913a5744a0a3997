//! Farm map generation.
//!
//! The field is open grass ringed by edge tiles, with a tree in each upper
//! corner of the interior and a seeded scatter of flowers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::shared::*;

/// Label for a tile on the outer ring, or `None` for the interior.
pub fn border_kind(c: i32, r: i32, cols: i32, rows: i32) -> Option<TileKind> {
    let left = c == 0;
    let right = c == cols - 1;
    let top = r == 0;
    let bottom = r == rows - 1;
    let kind = match (left, right, top, bottom) {
        (true, _, true, _) => TileKind::CornerNorthWest,
        (_, true, true, _) => TileKind::CornerNorthEast,
        (true, _, _, true) => TileKind::CornerSouthWest,
        (_, true, _, true) => TileKind::CornerSouthEast,
        (_, _, true, _) => TileKind::EdgeUp,
        (_, _, _, true) => TileKind::EdgeDown,
        (true, _, _, _) => TileKind::EdgeLeft,
        (_, true, _, _) => TileKind::EdgeRight,
        _ => return None,
    };
    Some(kind)
}

/// Tree positions for a map of the given size. Small maps get none.
pub fn tree_positions(cols: i32, rows: i32) -> Vec<(i32, i32)> {
    if cols > 6 && rows > 6 {
        vec![(3, 3), (cols - 4, 3)]
    } else {
        Vec::new()
    }
}

/// Replace interior grass with flowers. The same seed always gives the
/// same layout.
pub fn scatter_flowers(map: &mut TileMap, seed: u64, density: f64) {
    let density = if density.is_finite() {
        density.clamp(0.0, 1.0)
    } else {
        GameConfig::default().flower_density
    };
    let mut rng = StdRng::seed_from_u64(seed);
    for r in 1..map.rows() - 1 {
        for c in 1..map.cols() - 1 {
            // Draw for every interior tile so layout depends only on the seed.
            let bloom = rng.gen_bool(density);
            let variant = FlowerKind::ALL[rng.gen_range(0..FlowerKind::ALL.len())];
            if bloom && map.tile(c, r) == Some(TileKind::Grass) {
                map.set_tile(c, r, TileKind::Flower(variant));
            }
        }
    }
}

pub fn generate_farm(config: &GameConfig) -> TileMap {
    let mut map = TileMap::new(
        config.world_width,
        config.world_height,
        config.tile_width,
        config.tile_height,
    )
    .with_growth_speed(config.growth_speed);

    let (cols, rows) = (map.cols(), map.rows());
    for r in 0..rows {
        for c in 0..cols {
            if let Some(kind) = border_kind(c, r, cols, rows) {
                map.set_tile(c, r, kind);
            }
        }
    }
    for (c, r) in tree_positions(cols, rows) {
        map.set_tile(c, r, TileKind::Tree);
    }
    scatter_flowers(&mut map, config.map_seed, config.flower_density);
    map
}
