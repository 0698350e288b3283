//! Painting primitives for [`GridMap`]: rectangles, Bresenham lines, and
//! midpoint circles. All of them clip silently through the grid's
//! bounds-safe `set`, and none of them consume randomness.

use crate::grid::GridMap;

impl GridMap {
    /// Paint the inclusive cell range `[x0, x0+w-1] x [y0, y0+h-1]`, either
    /// filled or as a one-cell outline. Non-positive `w`/`h` paint nothing.
    pub fn rectangle(&mut self, x0: i32, y0: i32, w: i32, h: i32, value: u8, filled: bool) {
        let x1 = x0 + w - 1;
        let y1 = y0 + h - 1;

        if filled {
            for y in y0..=y1 {
                for x in x0..=x1 {
                    self.set(x, y, value);
                }
            }
        } else {
            for x in x0..=x1 {
                self.set(x, y0, value);
                self.set(x, y1, value);
            }
            for y in y0..=y1 {
                self.set(x0, y, value);
                self.set(x1, y, value);
            }
        }
    }

    /// Integer Bresenham line. Visits every cell of the 8-connected path
    /// between the endpoints, both inclusive, in any octant.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, value: u8) {
        let mut x = x0;
        let mut y = y0;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x, y, value);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Midpoint circle of radius `r` around `(cx, cy)`. Outline mode paints
    /// the 8 symmetric points per step; filled mode paints the full
    /// horizontal span at `cy +/- y` for each computed `(x, y)` pair.
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32, value: u8, filled: bool) {
        let mut x = r;
        let mut y = 0;
        let mut err = 0;

        while x >= y {
            if filled {
                for ix in (cx - x)..=(cx + x) {
                    self.set(ix, cy + y, value);
                    self.set(ix, cy - y, value);
                }
            } else {
                self.set(cx + x, cy + y, value);
                self.set(cx - x, cy + y, value);
                self.set(cx + x, cy - y, value);
                self.set(cx - x, cy - y, value);
                self.set(cx + y, cy + x, value);
                self.set(cx - y, cy + x, value);
                self.set(cx + y, cy - x, value);
                self.set(cx - y, cy - x, value);
            }

            y += 1;
            if err <= 0 {
                err += 2 * y + 1;
            }
            if err > 0 {
                x -= 1;
                err -= 2 * x + 1;
            }
        }
    }
}
