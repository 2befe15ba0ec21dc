//! Perturbation moves for iterated local search.
//!
//! - [`swap_perturbation`] — Exchange two random positions

mod swap;

pub use swap::swap_perturbation;
