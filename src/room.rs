//! Room rectangles for the rooms-and-corridors generator, plus the carving
//! helpers that stamp them into a [`GridMap`]. Rooms only live for the
//! duration of one generation call; they are never persisted.

use crate::grid::GridMap;

/// Axis-aligned room footprint covering the half-open range
/// `[x, x+w) x [y, y+h)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Room {
    /// The room's center cell, the anchor corridors connect to.
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Half-open overlap test. Edge-adjacent rooms do not overlap.
    pub fn overlaps(&self, other: &Room) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Carve a room's footprint free.
pub fn carve_room(map: &mut GridMap, room: &Room) {
    for y in room.y..room.y + room.h {
        for x in room.x..room.x + room.w {
            map.set(x, y, 0);
        }
    }
}

/// Carve one axis-aligned corridor leg from `(x0, y0)` toward `(x1, y1)`,
/// stamping a square brush of half-width `width / 2` at every step. The
/// final endpoint cell itself is not stamped.
pub fn carve_leg(map: &mut GridMap, x0: i32, y0: i32, x1: i32, y1: i32, width: i32) {
    let half = width / 2;
    let dx = (x1 - x0).signum();
    let dy = (y1 - y0).signum();

    let mut x = x0;
    let mut y = y0;
    while x != x1 || y != y1 {
        for ox in -half..=half {
            for oy in -half..=half {
                map.set(x + ox, y + oy, 0);
            }
        }
        x += dx;
        y += dy;
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
