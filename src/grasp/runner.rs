//! Sequential and parallel GRASP runners.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use super::GraspConfig;
use crate::constructive::greedy_randomized;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::local_search::two_opt_improve;
use crate::models::Tour;
use crate::perturbation::swap_perturbation;

/// The best tour found by a GRASP run, with its cached cyclic cost.
///
/// The cost is always recomputable from the tour and the distance
/// matrix via [`tour_cost`](crate::evaluation::tour_cost); it is stored
/// here as a cache, not as authoritative state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraspSolution {
    tour: Tour,
    cost: f64,
}

impl GraspSolution {
    fn new(tour: Tour, cost: f64) -> Self {
        Self { tour, cost }
    }

    /// The best tour found.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Cyclic cost of the best tour.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Consumes the solution, returning the tour and its cost.
    pub fn into_parts(self) -> (Tour, f64) {
        (self.tour, self.cost)
    }
}

/// Runs GRASP with iterated local search over a fixed iteration budget.
///
/// Each iteration constructs a greedy-randomized tour, refines it with
/// 2-opt, perturbs the refined tour and refines again, then keeps the
/// cheaper of the two refined candidates. The best candidate across all
/// iterations is returned; the best cost never increases once recorded.
/// There is no early-exit criterion; the budget is always exhausted.
///
/// Given the same seeded `rng`, repeated runs return the same solution.
///
/// # Errors
///
/// Returns [`Error::TooFewCities`] for instances with fewer than 2
/// cities, and whatever [`GraspConfig::validate`] rejects.
///
/// # Examples
///
/// ```
/// use grasp_tsp::distance::DistanceMatrix;
/// use grasp_tsp::grasp::{run_grasp, GraspConfig};
/// use grasp_tsp::models::Point;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let best = run_grasp(&dm, &GraspConfig::new(20, 0.3), &mut rng).unwrap();
/// assert!((best.cost() - 4.0).abs() < 1e-9);
/// ```
pub fn run_grasp<R: Rng>(
    distances: &DistanceMatrix,
    config: &GraspConfig,
    rng: &mut R,
) -> Result<GraspSolution> {
    config.validate()?;
    if distances.size() < 2 {
        return Err(Error::TooFewCities(distances.size()));
    }

    let mut best = grasp_iteration(distances, config.alpha(), rng)?;
    for _ in 1..config.iterations() {
        let candidate = grasp_iteration(distances, config.alpha(), rng)?;
        if candidate.cost < best.cost {
            best = candidate;
        }
    }
    Ok(best)
}

/// Runs GRASP iterations on the rayon thread pool.
///
/// Iterations are independent, so they fan out across the pool and are
/// reduced by minimum cost (ties broken by iteration index). Iteration
/// `i` draws from its own RNG stream seeded with `seed + i`, so both the
/// best cost and the returned tour are deterministic for a given seed,
/// regardless of thread scheduling.
///
/// # Errors
///
/// Same conditions as [`run_grasp`].
///
/// # Examples
///
/// ```
/// use grasp_tsp::distance::DistanceMatrix;
/// use grasp_tsp::grasp::{run_grasp_parallel, GraspConfig};
/// use grasp_tsp::models::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let best = run_grasp_parallel(&dm, &GraspConfig::new(20, 0.3), 42).unwrap();
/// assert!((best.cost() - 4.0).abs() < 1e-9);
/// ```
pub fn run_grasp_parallel(
    distances: &DistanceMatrix,
    config: &GraspConfig,
    seed: u64,
) -> Result<GraspSolution> {
    config.validate()?;
    if distances.size() < 2 {
        return Err(Error::TooFewCities(distances.size()));
    }

    let reduced = (0..config.iterations() as u64)
        .into_par_iter()
        .map(|index| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index));
            grasp_iteration(distances, config.alpha(), &mut rng)
                .map(|solution| (index, solution))
        })
        .try_reduce_with(|a, b| Ok(select_min(a, b)));

    match reduced {
        Some(result) => result.map(|(_, solution)| solution),
        // Unreachable once validate() has passed, kept for the empty range
        None => Err(Error::ZeroIterations),
    }
}

/// One GRASP iteration: construct, refine, perturb, refine, select.
fn grasp_iteration<R: Rng>(
    distances: &DistanceMatrix,
    alpha: f64,
    rng: &mut R,
) -> Result<GraspSolution> {
    let constructed = greedy_randomized(distances, alpha, rng)?;
    let (refined, refined_cost) = two_opt_improve(&constructed, distances);

    let shaken = swap_perturbation(&refined, rng)?;
    let (reoptimized, reoptimized_cost) = two_opt_improve(&shaken, distances);

    if reoptimized_cost < refined_cost {
        Ok(GraspSolution::new(reoptimized, reoptimized_cost))
    } else {
        Ok(GraspSolution::new(refined, refined_cost))
    }
}

/// The cheaper of two indexed candidates; ties go to the lower index so
/// the parallel reduction is order-independent.
fn select_min(
    a: (u64, GraspSolution),
    b: (u64, GraspSolution),
) -> (u64, GraspSolution) {
    if b.1.cost < a.1.cost || (b.1.cost == a.1.cost && b.0 < a.0) {
        b
    } else {
        a
    }
}
