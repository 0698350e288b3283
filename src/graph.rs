//! Minimum spanning tree over room centers.
//!
//! Corridor layout must be reproducible for a given seed, so the MST is
//! computed with Prim's algorithm over explicit `key`/`parent` arrays:
//! selection order, and therefore the parent of every room, is fully
//! determined by the input order.

/// Manhattan distance between two grid points.
pub fn manhattan(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// Prim's algorithm over the complete graph of `points` with Manhattan edge
/// weights, rooted at index 0.
///
/// Returns each node's MST parent; the root (and every node of an empty
/// input) has none. Ties in minimum-key selection go to the lowest index.
pub fn prim_parents(points: &[(i32, i32)]) -> Vec<Option<usize>> {
    let n = points.len();
    let mut parent: Vec<Option<usize>> = vec![None; n];
    if n < 2 {
        return parent;
    }

    let mut key = vec![i32::max_value(); n];
    let mut in_tree = vec![false; n];
    key[0] = 0;

    for _ in 0..n - 1 {
        let mut u = None;
        let mut best = i32::max_value();
        for (i, &k) in key.iter().enumerate() {
            if !in_tree[i] && k < best {
                best = k;
                u = Some(i);
            }
        }
        let u = match u {
            Some(u) => u,
            None => break,
        };
        in_tree[u] = true;

        for v in 0..n {
            if !in_tree[v] {
                let weight = manhattan(points[u], points[v]);
                if weight < key[v] {
                    key[v] = weight;
                    parent[v] = Some(u);
                }
            }
        }
    }

    parent
}
