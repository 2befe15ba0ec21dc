//! GRASP iteration control.
//!
//! Each iteration chains construction, 2-opt refinement, perturbation,
//! and re-refinement, keeping the cheaper of the two refined candidates;
//! the best result across the whole budget is returned.
//!
//! - [`GraspConfig`] — Iteration budget and RCL parameter
//! - [`GraspSolution`] — Best (tour, cost) pair found
//! - [`run_grasp`] — Sequential runner over a caller-supplied RNG
//! - [`run_grasp_parallel`] — Rayon-parallel runner with per-iteration
//!   seed streams and a deterministic min reduction
//!
//! # Reference
//!
//! Lourenço, H.R., Martin, O.C. & Stützle, T. (2003). "Iterated Local
//! Search", in *Handbook of Metaheuristics*, 320-353.

mod config;
mod runner;

pub use config::GraspConfig;
pub use runner::{run_grasp, run_grasp_parallel, GraspSolution};
