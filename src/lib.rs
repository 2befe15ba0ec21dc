//! # grasp-tsp
//!
//! GRASP (Greedy Randomized Adaptive Search Procedure) with iterated local
//! search for the symmetric traveling salesman problem.
//!
//! Each GRASP iteration builds a tour with a restricted-candidate-list
//! heuristic, refines it with 2-opt, perturbs the local optimum, and
//! refines again, keeping the best tour found across the iteration budget.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Tour)
//! - [`error`] — Crate error type
//! - [`distance`] — Distance matrix
//! - [`evaluation`] — Cyclic tour cost evaluation
//! - [`constructive`] — Greedy-randomized (RCL) construction
//! - [`local_search`] — 2-opt improvement
//! - [`perturbation`] — Random swap move for iterated local search
//! - [`grasp`] — Iteration control loop, sequential and parallel
//!
//! ## Example
//!
//! ```
//! use grasp_tsp::distance::DistanceMatrix;
//! use grasp_tsp::grasp::{run_grasp, GraspConfig};
//! use grasp_tsp::models::Point;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//! ];
//! let dm = DistanceMatrix::from_points(&points);
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let best = run_grasp(&dm, &GraspConfig::default(), &mut rng).unwrap();
//! assert!((best.cost() - 4.0).abs() < 1e-9);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod grasp;
pub mod local_search;
pub mod models;
pub mod perturbation;

pub use error::{Error, Result};
