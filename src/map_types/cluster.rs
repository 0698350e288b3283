//! Cellular-automaton blob growth, applied as a post-process over any
//! primary generator.

use crate::grid::GridMap;
use crate::Connectivity;

/// Run `iterations` synchronous automaton passes over `map`.
///
/// Each pass counts every cell's blocked neighbors in the configured
/// direction set (out-of-bounds neighbors count as blocked) against a
/// snapshot of the current raster, and writes the next state into a fresh
/// buffer: blocked cells stay blocked with 3 or more blocked neighbors,
/// free cells become blocked with 5 or more.
pub fn grow_clusters(map: &mut GridMap, iterations: i32, connectivity: Connectivity) {
    let offsets = connectivity.offsets();

    for pass in 0..iterations {
        let mut next = GridMap::new(map.width(), map.height(), 0);

        for y in 0..map.height() {
            for x in 0..map.width() {
                let mut blocked = 0;
                for &(dx, dy) in offsets {
                    if !map.is_free(x + dx, y + dy) {
                        blocked += 1;
                    }
                }

                let occupied = if map.is_free(x, y) {
                    blocked >= 5
                } else {
                    blocked >= 3
                };
                next.set(x, y, occupied as u8);
            }
        }

        *map = next;
        log::trace!("cluster pass {} of {} done", pass + 1, iterations);
    }
}
