//! Distance matrices.
//!
//! Provides a dense pairwise distance matrix computed once from point
//! coordinates and read-only for the rest of the search.

mod matrix;

pub use matrix::DistanceMatrix;
