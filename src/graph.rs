//! Packed-bitset graph representation for arbitrary order \(n\).
//!
//! Each vertex owns an adjacency row of `m = ceil(n / 64)` machine words;
//! bit `j` of row `i` is set iff vertices `i` and `j` are adjacent. Rows are
//! stored in one flat `Vec<u64>` so that a row is a contiguous `&[u64]` slice
//! and the predicate scans reduce to word-wise boolean operations.

use rand::Rng;
use std::fmt;

/// Number of bits per adjacency word.
pub const WORD_BITS: usize = 64;

/// Returns the number of words needed for one adjacency row of order `n`.
#[inline(always)]
pub const fn words_for(n: usize) -> usize {
    n.div_ceil(WORD_BITS)
}

#[inline(always)]
const fn word_of(v: usize) -> usize {
    v / WORD_BITS
}

#[inline(always)]
const fn bit_of(v: usize) -> u64 {
    1u64 << (v % WORD_BITS)
}

/// Tests whether vertex `v` is present in a packed adjacency row.
#[inline(always)]
pub fn row_contains(row: &[u64], v: usize) -> bool {
    debug_assert!(word_of(v) < row.len());
    (row[word_of(v)] & bit_of(v)) != 0
}

// ============================================================================
// Graph
// ============================================================================

/// An undirected, loop-free simple graph on `n` labeled vertices.
///
/// Invariants (upheld by every constructor, `debug_assert`ed on mutation):
/// - symmetry: bit `j` of row `i` equals bit `i` of row `j`;
/// - zero diagonal: bit `i` of row `i` is never set;
/// - no stray bits at positions `>= n` in the last word of any row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    m: usize,
    /// Flat row storage, `n * m` words; row `v` is `rows[v*m .. (v+1)*m]`.
    rows: Vec<u64>,
}

impl Graph {
    /// Creates an edgeless graph on `n` vertices.
    pub fn empty(n: usize) -> Self {
        let m = words_for(n);
        Self {
            n,
            m,
            rows: vec![0u64; n * m],
        }
    }

    /// Creates a graph from flat row storage (`n * m` words, row-major).
    ///
    /// # Errors
    /// Returns an error if the storage length is wrong, a row has bits at or
    /// above position `n`, the diagonal is non-zero, or the matrix is not
    /// symmetric.
    pub fn from_rows(n: usize, rows: Vec<u64>) -> Result<Self, GraphError> {
        let m = words_for(n);
        if rows.len() != n * m {
            return Err(GraphError::WrongLength {
                expected: n * m,
                got: rows.len(),
            });
        }

        // Only the last word of a row can hold bits at or above n.
        if m > 0 && n % WORD_BITS != 0 {
            let mask = (1u64 << (n % WORD_BITS)) - 1;
            for v in 0..n {
                if rows[v * m + m - 1] & !mask != 0 {
                    return Err(GraphError::StrayBits { vertex: v });
                }
            }
        }

        let g = Self { n, m, rows };
        for i in 0..n {
            if row_contains(g.row(i), i) {
                return Err(GraphError::SelfLoop { vertex: i });
            }
        }
        for i in 0..n {
            let ri = g.row(i);
            for j in (i + 1)..n {
                if row_contains(ri, j) != row_contains(g.row(j), i) {
                    return Err(GraphError::NotSymmetric { i, j });
                }
            }
        }
        Ok(g)
    }

    /// Creates a graph on `n` vertices from an edge list.
    ///
    /// # Errors
    /// Returns an error if an endpoint is out of range or an edge is a loop.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut g = Self::empty(n);
        for &(u, v) in edges {
            if u >= n || v >= n {
                return Err(GraphError::VertexOutOfRange {
                    vertex: u.max(v),
                    order: n,
                });
            }
            if u == v {
                return Err(GraphError::SelfLoop { vertex: u });
            }
            g.add_edge(u, v);
        }
        Ok(g)
    }

    /// Samples a random graph: each of the \(\binom{n}{2}\) edges is present
    /// independently with probability `p`.
    pub fn random<R: Rng>(rng: &mut R, n: usize, p: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");
        let mut g = Self::empty(n);
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.random_bool(p) {
                    g.add_edge(i, j);
                }
            }
        }
        g
    }

    /// Returns the number of vertices.
    #[inline(always)]
    pub fn order(&self) -> usize {
        self.n
    }

    /// Returns the number of words per adjacency row.
    #[inline(always)]
    pub fn words_per_row(&self) -> usize {
        self.m
    }

    /// Returns the packed adjacency row of vertex `v`.
    #[inline(always)]
    pub fn row(&self, v: usize) -> &[u64] {
        debug_assert!(v < self.n);
        &self.rows[v * self.m..(v + 1) * self.m]
    }

    /// Returns whether the edge `(u, v)` exists.
    #[inline(always)]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        debug_assert!(u < self.n && v < self.n);
        row_contains(self.row(u), v)
    }

    /// Inserts the edge `(u, v)`, setting both symmetric bits.
    #[inline]
    pub fn add_edge(&mut self, u: usize, v: usize) {
        debug_assert!(u < self.n && v < self.n);
        debug_assert!(u != v, "self-loop at vertex {u}");
        self.rows[u * self.m + word_of(v)] |= bit_of(v);
        self.rows[v * self.m + word_of(u)] |= bit_of(u);
    }

    /// Returns the degree of vertex `v`.
    #[inline]
    pub fn degree(&self, v: usize) -> u32 {
        self.row(v).iter().map(|w| w.count_ones()).sum()
    }

    /// Returns the total number of edges.
    pub fn edge_count(&self) -> usize {
        let ones: u32 = self.rows.iter().map(|w| w.count_ones()).sum();
        (ones as usize) / 2
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors from validated graph construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// Row storage length does not equal `n * m`.
    WrongLength {
        /// Expected word count.
        expected: usize,
        /// Actual word count.
        got: usize,
    },
    /// A row has bits set at or above position `n`.
    StrayBits {
        /// The offending row's vertex.
        vertex: usize,
    },
    /// The diagonal bit of a row is set, or an edge joins a vertex to itself.
    SelfLoop {
        /// The vertex with the loop.
        vertex: usize,
    },
    /// Bit `j` of row `i` disagrees with bit `i` of row `j`.
    NotSymmetric {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
    },
    /// An edge endpoint is not in `[0, n)`.
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// Graph order.
        order: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::WrongLength { expected, got } => {
                write!(f, "row storage has {got} words, expected {expected}")
            }
            GraphError::StrayBits { vertex } => {
                write!(f, "row {vertex} has bits beyond the graph order")
            }
            GraphError::SelfLoop { vertex } => write!(f, "self-loop at vertex {vertex}"),
            GraphError::NotSymmetric { i, j } => {
                write!(f, "adjacency is not symmetric at ({i},{j})")
            }
            GraphError::VertexOutOfRange { vertex, order } => {
                write!(f, "vertex {vertex} out of range for order {order}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

// ============================================================================
// Tests
// ============================================================================
