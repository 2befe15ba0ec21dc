//! Constructive heuristics for building initial tours.
//!
//! - [`greedy_randomized`] — Restricted-candidate-list construction, O(n² log n)

mod greedy_randomized;

pub use greedy_randomized::greedy_randomized;
