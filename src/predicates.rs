//! Structural predicates over packed adjacency rows.
//!
//! Both predicates scan unordered vertex pairs and decide with word-wise
//! boolean operations on the two rows, short-circuiting on the first witness
//! pair. Worst case \(O(n^2 \cdot m)\) for `m` words per row; typical
//! rejections are far cheaper because of the early exit.

use crate::graph::{row_contains, Graph};

// ============================================================================
// Maximal triangle-freeness
// ============================================================================

/// Returns the first non-adjacent pair with no common neighbor, if any.
///
/// Such a pair witnesses that the corresponding edge could be added without
/// creating a triangle, i.e. the graph is not maximal.
pub fn find_extendable_pair(g: &Graph) -> Option<(usize, usize)> {
    let n = g.order();
    for i in 0..n {
        let ri = g.row(i);
        for j in (i + 1)..n {
            if row_contains(ri, j) {
                continue; // already adjacent
            }
            let rj = g.row(j);
            let has_common = ri.iter().zip(rj).any(|(a, b)| a & b != 0);
            if !has_common {
                return Some((i, j));
            }
        }
    }
    None
}

/// Returns whether every pair of non-adjacent vertices shares a common
/// neighbor, i.e. adding any missing edge would create a triangle.
///
/// Vacuously true for `n < 2`. Note that this is maximality alone: the graph
/// is not required to be triangle-free (callers holding that precondition
/// can assert it with [`is_triangle_free`]).
#[inline]
pub fn is_maximal_triangle_free(g: &Graph) -> bool {
    find_extendable_pair(g).is_none()
}

// ============================================================================
// Twin-freeness
// ============================================================================

/// Returns the first pair of distinct vertices with identical adjacency
/// rows, if any.
///
/// Rows are compared raw, including the two bits encoding whether the pair
/// is mutually adjacent; no exclusion is applied.
pub fn find_twin_pair(g: &Graph) -> Option<(usize, usize)> {
    let n = g.order();
    for i in 0..n {
        let ri = g.row(i);
        for j in (i + 1)..n {
            if ri == g.row(j) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Returns whether no two distinct vertices have identical adjacency rows.
///
/// Vacuously true for `n < 2`.
#[inline]
pub fn is_twin_free(g: &Graph) -> bool {
    find_twin_pair(g).is_none()
}

// ============================================================================
// Triangle-freeness
// ============================================================================

/// Returns whether the graph contains no triangle.
///
/// An edge `(u, v)` lies on a triangle iff its endpoints share a neighbor,
/// so it suffices to intersect the endpoint rows of every edge.
pub fn is_triangle_free(g: &Graph) -> bool {
    let n = g.order();
    for u in 0..n {
        let ru = g.row(u);
        for v in (u + 1)..n {
            if !row_contains(ru, v) {
                continue;
            }
            let rv = g.row(v);
            if ru.iter().zip(rv).any(|(a, b)| a & b != 0) {
                return false;
            }
        }
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn c5() -> Graph {
        Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap()
    }

    /// The Petersen graph: outer 5-cycle, inner pentagram, five spokes.
    fn petersen() -> Graph {
        Graph::from_edges(
            10,
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 4),
                (4, 0),
                (0, 5),
                (1, 6),
                (2, 7),
                (3, 8),
                (4, 9),
                (5, 7),
                (7, 9),
                (9, 6),
                (6, 8),
                (8, 5),
            ],
        )
        .unwrap()
    }

    /// Star with the given number of leaves around center 0.
    fn star(leaves: usize) -> Graph {
        let edges: Vec<(usize, usize)> = (1..=leaves).map(|v| (0, v)).collect();
        Graph::from_edges(leaves + 1, &edges).unwrap()
    }

    // -------------------------------------------------------------------------
    // Naive per-bit references for randomized cross-checks
    // -------------------------------------------------------------------------

    fn naive_maximal(g: &Graph) -> bool {
        let n = g.order();
        for i in 0..n {
            for j in (i + 1)..n {
                if g.has_edge(i, j) {
                    continue;
                }
                let common = (0..n).any(|k| g.has_edge(i, k) && g.has_edge(j, k));
                if !common {
                    return false;
                }
            }
        }
        true
    }

    fn naive_twin_free(g: &Graph) -> bool {
        let n = g.order();
        for i in 0..n {
            for j in (i + 1)..n {
                if (0..n).all(|k| g.has_edge(i, k) == g.has_edge(j, k)) {
                    return false;
                }
            }
        }
        true
    }

    fn naive_triangle_free(g: &Graph) -> bool {
        let n = g.order();
        for a in 0..n {
            for b in (a + 1)..n {
                for c in (b + 1)..n {
                    if g.has_edge(a, b) && g.has_edge(b, c) && g.has_edge(a, c) {
                        return false;
                    }
                }
            }
        }
        true
    }

    // -------------------------------------------------------------------------
    // Concrete graphs
    // -------------------------------------------------------------------------

    #[test]
    fn tiny_graphs_are_vacuously_fine() {
        for n in 0..2 {
            let g = Graph::empty(n);
            assert!(is_maximal_triangle_free(&g));
            assert!(is_twin_free(&g));
            assert!(is_triangle_free(&g));
        }
    }

    #[test]
    fn single_edge_on_two_vertices_passes_both() {
        let g = Graph::from_edges(2, &[(0, 1)]).unwrap();
        // No non-adjacent pair exists, and the rows differ (each holds the
        // other's bit).
        assert!(is_maximal_triangle_free(&g));
        assert!(is_twin_free(&g));
    }

    #[test]
    fn two_isolated_vertices_fail_both() {
        let g = Graph::empty(2);
        assert_eq!(find_extendable_pair(&g), Some((0, 1)));
        assert_eq!(find_twin_pair(&g), Some((0, 1)));
    }

    #[test]
    fn c5_passes_both_predicates() {
        let g = c5();
        assert!(is_triangle_free(&g));
        assert!(is_maximal_triangle_free(&g));
        assert!(is_twin_free(&g));
    }

    #[test]
    fn petersen_passes_both_predicates() {
        // Strongly regular (10,3,0,1): adjacent pairs share no neighbor,
        // non-adjacent pairs share exactly one.
        let g = petersen();
        assert!(is_triangle_free(&g));
        assert!(is_maximal_triangle_free(&g));
        assert!(is_twin_free(&g));
    }

    #[test]
    fn path_p4_is_not_maximal() {
        // Endpoints 0 and 3 are non-adjacent with no common neighbor.
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert!(is_triangle_free(&g));
        assert_eq!(find_extendable_pair(&g), Some((0, 3)));
        assert!(!is_maximal_triangle_free(&g));
    }

    #[test]
    fn star_leaves_are_twins() {
        let g = star(4);
        assert!(is_maximal_triangle_free(&g));
        assert_eq!(find_twin_pair(&g), Some((1, 2)));
        assert!(!is_twin_free(&g));
    }

    #[test]
    fn engineered_twin_pair_is_detected() {
        // 0 and 1 are non-adjacent with the same neighbors {2, 3}: raw rows
        // are identical.
        let g = Graph::from_edges(5, &[(0, 2), (0, 3), (1, 2), (1, 3), (2, 4)]).unwrap();
        assert_eq!(find_twin_pair(&g), Some((0, 1)));
    }

    #[test]
    fn adjacent_twins_are_invisible_to_raw_row_equality() {
        // 0 and 1 are adjacent and share {2, 3}; row 0 carries bit 1 where
        // row 1 carries bit 0, so the raw rows differ. This is the literal
        // behavior: only non-adjacent ("false") twins compare equal.
        let g = Graph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 4)]).unwrap();
        assert_ne!(find_twin_pair(&g), Some((0, 1)));
    }

    #[test]
    fn triangle_is_maximal_but_not_triangle_free() {
        // K3 has no non-adjacent pair, so the maximality scan passes; the
        // input contract of the filter is that generators already removed
        // graphs with triangles.
        let g = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        assert!(is_maximal_triangle_free(&g));
        assert!(!is_triangle_free(&g));
    }

    #[test]
    fn complete_bipartite_is_maximal_but_has_twins() {
        // K_{2,3}: parts {0,1} and {2,3,4}.
        let g = Graph::from_edges(
            5,
            &[(0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4)],
        )
        .unwrap();
        assert!(is_triangle_free(&g));
        assert!(is_maximal_triangle_free(&g));
        assert_eq!(find_twin_pair(&g), Some((0, 1)));
    }

    // -------------------------------------------------------------------------
    // Multi-word rows
    // -------------------------------------------------------------------------

    #[test]
    fn wide_star_exercises_two_word_rows() {
        // 70 vertices: every leaf pair shares the center, so maximality
        // holds; all leaves are twins.
        let g = star(69);
        assert_eq!(g.words_per_row(), 2);
        assert!(is_maximal_triangle_free(&g));
        assert!(!is_twin_free(&g));
    }

    #[test]
    fn common_neighbor_found_in_second_word_only() {
        // Non-adjacent 0 and 1 share only the neighbor 68, whose bit lives
        // in the second word of both rows.
        let g = Graph::from_edges(70, &[(0, 68), (1, 68)]).unwrap();
        let pair = find_extendable_pair(&g);
        assert_ne!(pair, Some((0, 1)));
    }

    #[test]
    fn twins_differing_only_in_second_word_are_distinguished() {
        let g = Graph::from_edges(70, &[(0, 2), (1, 2), (0, 67)]).unwrap();
        assert_ne!(find_twin_pair(&g), Some((0, 1)));
        let h = Graph::from_edges(70, &[(0, 67), (1, 67)]).unwrap();
        assert_eq!(find_twin_pair(&h), Some((0, 1)));
    }

    // -------------------------------------------------------------------------
    // Randomized cross-checks against the per-bit references
    // -------------------------------------------------------------------------

    #[test]
    fn predicates_match_naive_references() {
        let mut rng = XorShiftRng::seed_from_u64(0xF117E2);
        for &(n, p) in &[(0usize, 0.0), (1, 0.0), (9, 0.3), (16, 0.5), (70, 0.06)] {
            for _ in 0..40 {
                let g = Graph::random(&mut rng, n, p);
                assert_eq!(is_maximal_triangle_free(&g), naive_maximal(&g));
                assert_eq!(is_twin_free(&g), naive_twin_free(&g));
                assert_eq!(is_triangle_free(&g), naive_triangle_free(&g));
            }
        }
    }

    #[test]
    fn predicates_are_isomorphism_invariant() {
        let mut rng = XorShiftRng::seed_from_u64(0x150);
        for _ in 0..30 {
            let n = 12;
            let g = Graph::random(&mut rng, n, 0.35);

            // Random permutation by Fisher-Yates.
            let mut perm: Vec<usize> = (0..n).collect();
            for i in (1..n).rev() {
                let j = rng.random_range(0..=i);
                perm.swap(i, j);
            }

            let mut edges = Vec::new();
            for u in 0..n {
                for v in (u + 1)..n {
                    if g.has_edge(u, v) {
                        edges.push((perm[u], perm[v]));
                    }
                }
            }
            let h = Graph::from_edges(n, &edges).unwrap();

            assert_eq!(is_maximal_triangle_free(&g), is_maximal_triangle_free(&h));
            assert_eq!(is_twin_free(&g), is_twin_free(&h));
            assert_eq!(is_triangle_free(&g), is_triangle_free(&h));
        }
    }

    #[test]
    fn extendable_pair_witness_is_genuine() {
        let mut rng = XorShiftRng::seed_from_u64(0xBEA7);
        for _ in 0..50 {
            let g = Graph::random(&mut rng, 14, 0.25);
            if let Some((i, j)) = find_extendable_pair(&g) {
                assert!(!g.has_edge(i, j));
                assert!(!(0..14).any(|k| g.has_edge(i, k) && g.has_edge(j, k)));
            }
        }
    }

    #[test]
    fn twin_pair_witness_is_genuine() {
        let mut rng = XorShiftRng::seed_from_u64(0x771A);
        for _ in 0..50 {
            let g = Graph::random(&mut rng, 10, 0.4);
            if let Some((i, j)) = find_twin_pair(&g) {
                assert_ne!(i, j);
                assert_eq!(g.row(i), g.row(j));
            }
        }
    }
}
