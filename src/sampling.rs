//! Seeded random sampling for map generation.
//!
//! Every generation call owns a single [`SmallRng`] built from the spec's
//! seed and threads it through each step, so a seed always reproduces the
//! same map.

use crate::room::Room;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

/// Total placement attempts per requested room.
pub const PLACEMENT_TRIES_PER_ROOM: i32 = 10;

/// Build the per-map random stream for `seed`.
pub fn map_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Bounded rejection sampling of non-overlapping rooms inside a
/// `bounds.0 x bounds.1` grid, keeping a one-cell margin to the edge.
///
/// Draws candidate sizes from the inclusive `size_w`/`size_h` ranges and a
/// random anchor, and rejects candidates overlapping any accepted room.
/// Exhausting the attempt budget returns however many rooms were accepted,
/// possibly fewer than requested.
///
/// Panics if a size range is inverted; [`MapSpec::validate`] rules that out
/// for spec-driven callers.
///
/// [`MapSpec::validate`]: crate::map_types::MapSpec::validate
pub fn sample_rooms(
    num_rooms: usize,
    bounds: (i32, i32),
    size_w: (i32, i32),
    size_h: (i32, i32),
    rng: &mut impl Rng,
) -> Vec<Room> {
    let (width, height) = bounds;
    let rw = Uniform::new_inclusive(size_w.0, size_w.1);
    let rh = Uniform::new_inclusive(size_h.0, size_h.1);
    let rx = Uniform::new_inclusive(1, (width - 2).max(1));
    let ry = Uniform::new_inclusive(1, (height - 2).max(1));

    let mut rooms: Vec<Room> = Vec::with_capacity(num_rooms);
    let mut tries = PLACEMENT_TRIES_PER_ROOM * num_rooms as i32;
    while rooms.len() < num_rooms && tries > 0 {
        tries -= 1;

        let w = rw.sample(rng).min(width - 2);
        let h = rh.sample(rng).min(height - 2);
        let x = (rx.sample(rng) - w / 2).max(1).min(width - w - 1);
        let y = (ry.sample(rng) - h / 2).max(1).min(height - h - 1);
        let candidate = Room { x, y, w, h };

        if rooms.iter().any(|r| candidate.overlaps(r)) {
            continue;
        }
        rooms.push(candidate);
    }

    log::debug!(
        "placed {} of {} rooms with {} attempts left",
        rooms.len(),
        num_rooms,
        tries
    );

    rooms
}
