//! # Maximal-Triangle-Free / Twin-Free Graph Filter
//!
//! A structural filter over streams of finite simple graphs: each input
//! graph is kept iff it satisfies two independent predicates,
//!
//! - **maximal triangle-freeness** — every pair of non-adjacent vertices
//!   shares a common neighbor (equivalently, adding any missing edge would
//!   create a triangle), and
//! - **twin-freeness** — no two distinct vertices have identical adjacency
//!   rows.
//!
//! It is intended to prune large candidate sets produced by exhaustive
//! generators such as `geng`, consuming and emitting the graph6 line format
//! on the way through.
//!
//! ## Quick Start
//!
//! ```
//! use mtf_filter::filter::filter_graphs;
//!
//! // A 5-cycle (kept) followed by a path (rejected: not maximal).
//! let input = "Dhc\nCh\n";
//! let mut output = Vec::new();
//! let stats = filter_graphs(input.as_bytes(), &mut output).unwrap();
//! assert_eq!(stats.read, 2);
//! assert_eq!(stats.accepted, 1);
//! ```
//!
//! ## Working with Graphs Directly
//!
//! ```
//! use mtf_filter::graph::Graph;
//! use mtf_filter::predicates::{is_maximal_triangle_free, is_twin_free};
//!
//! let c5 = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
//! assert!(is_maximal_triangle_free(&c5));
//! assert!(is_twin_free(&c5));
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: packed-bitset adjacency representation (`m` words per row).
//! - [`predicates`]: the two structural predicates plus witness finders.
//! - [`g6`]: graph6 codec and stream reader/writer.
//! - [`filter`]: the sequential stream driver.
//!
//! ## Performance Notes
//!
//! - Both predicates are \(O(n^2 \cdot m)\) word operations per graph, with
//!   short-circuit exits on the first witness pair.
//! - Rows are compared and intersected a word at a time; no per-bit loops.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::inline_always)] // Intentional for hot-path code
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::doc_markdown)] // LaTeX-style notation in docs

pub mod filter;
pub mod g6;
pub mod graph;
pub mod predicates;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::filter::{filter_graphs, FilterStats};
    pub use crate::g6::{decode, encode, Graph6Reader, Graph6Writer, StreamError};
    pub use crate::graph::Graph;
    pub use crate::predicates::{is_maximal_triangle_free, is_triangle_free, is_twin_free};
}
