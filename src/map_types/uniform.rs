//! Uniform random noise: one Bernoulli trial per cell.

use crate::grid::GridMap;
use crate::map_types::MapSpec;
use rand::Rng;
use rand_distr::{Bernoulli, Distribution};

/// Generate a map where each cell is independently an obstacle with
/// probability `spec.obstacle_density`. Trials are consumed in row-major
/// order from the shared stream, so a seed pins down every cell.
pub fn generate(spec: &MapSpec, rng: &mut impl Rng) -> GridMap {
    log::debug!(
        "generating {}x{} uniform map, density {}",
        spec.width,
        spec.height,
        spec.obstacle_density
    );

    let mut map = GridMap::new(spec.width, spec.height, 0);
    let density = spec.obstacle_density.max(0.0).min(1.0);
    let trial = Bernoulli::new(density).expect("density clamped to [0, 1]");

    for y in 0..spec.height {
        for x in 0..spec.width {
            if trial.sample(rng) {
                map.set(x, y, 1);
            }
        }
    }

    if spec.add_border_walls {
        super::add_border_walls(&mut map);
    }

    map
}
