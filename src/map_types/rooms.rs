//! Rooms-and-corridors generation: carve rectangular rooms out of a fully
//! blocked raster, then connect their centers along a minimum spanning
//! tree.

use crate::grid::GridMap;
use crate::map_types::MapSpec;
use crate::room::{self, Room};
use crate::{graph, sampling};
use rand::Rng;

/// Generate a rooms-and-corridors map.
///
/// Room placement uses bounded rejection sampling and may end up with fewer
/// rooms than requested; with fewer than two rooms no corridors are carved.
pub fn generate(spec: &MapSpec, rng: &mut impl Rng) -> GridMap {
    log::debug!(
        "generating {}x{} map with up to {} rooms",
        spec.width,
        spec.height,
        spec.num_rooms
    );

    let mut map = GridMap::new(spec.width, spec.height, 1);

    let rooms = sampling::sample_rooms(
        spec.num_rooms.max(0) as usize,
        (spec.width, spec.height),
        (spec.room_min_w, spec.room_max_w),
        (spec.room_min_h, spec.room_max_h),
        rng,
    );
    for r in rooms.iter() {
        room::carve_room(&mut map, r);
    }

    if rooms.len() >= 2 {
        let centers: Vec<_> = rooms.iter().map(Room::center).collect();
        let parents = graph::prim_parents(&centers);
        log::debug!("corridor tree parents: {:?}", parents);

        for (child, parent) in parents.iter().enumerate() {
            if let Some(parent) = *parent {
                carve_corridor(
                    &mut map,
                    centers[child],
                    centers[parent],
                    spec.corridor_width,
                    rng,
                );
            }
        }
    }

    if spec.add_border_walls {
        super::add_border_walls(&mut map);
    }

    map
}

/// Carve an L-shaped corridor between two room centers. The elbow
/// orientation is a coin flip from the shared stream.
fn carve_corridor(
    map: &mut GridMap,
    from: (i32, i32),
    to: (i32, i32),
    width: i32,
    rng: &mut impl Rng,
) {
    let (x0, y0) = from;
    let (x1, y1) = to;

    if rng.gen_bool(0.5) {
        room::carve_leg(map, x0, y0, x1, y0, width);
        room::carve_leg(map, x1, y0, x1, y1, width);
    } else {
        room::carve_leg(map, x0, y0, x0, y1, width);
        room::carve_leg(map, x0, y1, x1, y1, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::map_rng;

    fn rooms_spec() -> MapSpec {
        MapSpec {
            width: 48,
            height: 40,
            seed: 7,
            add_border_walls: true,
            num_rooms: 5,
            room_min_w: 5,
            room_min_h: 5,
            room_max_w: 9,
            room_max_h: 9,
            corridor_width: 2,
            ..MapSpec::default()
        }
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let spec = rooms_spec();
        let a = generate(&spec, &mut map_rng(spec.seed));
        let b = generate(&spec, &mut map_rng(spec.seed));
        assert_eq!(a, b);
    }

    #[test]
    fn rooms_are_carved_out_of_blocked_space() {
        let spec = rooms_spec();
        let map = generate(&spec, &mut map_rng(spec.seed));

        let free = map.cells().iter().filter(|&&c| c == 0).count();
        assert!(free > 0, "no free space carved");
        assert!(
            free < map.cells().len(),
            "map should keep blocked space around rooms"
        );
    }

    #[test]
    fn border_walls_survive_corridor_carving() {
        let spec = rooms_spec();
        let map = generate(&spec, &mut map_rng(spec.seed));

        for x in 0..spec.width {
            assert_eq!(map.get(x, 0), 1);
            assert_eq!(map.get(x, spec.height - 1), 1);
        }
        for y in 0..spec.height {
            assert_eq!(map.get(0, y), 1);
            assert_eq!(map.get(spec.width - 1, y), 1);
        }
    }

    #[test]
    fn corridor_elbow_carves_both_orientations() {
        // Whichever way the coin lands, both legs together must connect
        // the two points.
        for seed in 0..4 {
            let mut map = GridMap::new(20, 20, 1);
            let mut rng = map_rng(seed);
            carve_corridor(&mut map, (3, 3), (15, 12), 1, &mut rng);

            assert!(map.is_free(3, 3));
            // the elbow is at one of the two axis-aligned corners
            assert!(map.is_free(15, 3) || map.is_free(3, 12));
        }
    }
}
