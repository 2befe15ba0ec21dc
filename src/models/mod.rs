//! Domain model types for the traveling salesman problem.
//!
//! Provides the core abstractions: points in the plane and tours as
//! validated permutations of city indices.

mod point;
mod tour;

pub use point::Point;
pub use tour::Tour;
