//! Greedy-randomized constructive heuristic.
//!
//! # Algorithm
//!
//! Starting from a uniformly random city, repeatedly rank the unvisited
//! cities by distance from the current city and pick uniformly at random
//! from a restricted candidate list (RCL) of the `floor(k * alpha) + 1`
//! nearest, where k is the number of unvisited cities at that step.
//! `alpha = 0` degenerates to pure nearest-neighbor, `alpha = 1` to a
//! uniform pick among all remaining cities.
//!
//! # Complexity
//!
//! O(n² log n) from sorting the candidate list at each of the n steps.
//!
//! # Reference
//!
//! Feo, T.A. & Resende, M.G.C. (1995). "Greedy Randomized Adaptive Search
//! Procedures", *Journal of Global Optimization* 6, 109-133.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;

/// Constructs a tour with the greedy-randomized (RCL) heuristic.
///
/// # Arguments
///
/// * `distances` — Distance matrix for the instance
/// * `alpha` — RCL control parameter in `[0, 1]` (0 = greedy, 1 = random)
/// * `rng` — Random source; seed it for reproducible construction
///
/// # Errors
///
/// Returns [`Error::TooFewCities`] if the instance has fewer than 2
/// cities, and [`Error::InvalidAlpha`] if `alpha` is outside `[0, 1]`
/// or non-finite.
///
/// # Examples
///
/// ```
/// use grasp_tsp::constructive::greedy_randomized;
/// use grasp_tsp::distance::DistanceMatrix;
/// use grasp_tsp::models::Point;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let tour = greedy_randomized(&dm, 0.3, &mut rng).unwrap();
/// assert_eq!(tour.len(), 3);
/// ```
pub fn greedy_randomized<R: Rng>(
    distances: &DistanceMatrix,
    alpha: f64,
    rng: &mut R,
) -> Result<Tour> {
    let n = distances.size();
    if n < 2 {
        return Err(Error::TooFewCities(n));
    }
    if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
        return Err(Error::InvalidAlpha(alpha));
    }

    let mut tour = Vec::with_capacity(n);
    let mut unvisited: Vec<usize> = (0..n).collect();

    let start = rng.random_range(0..n);
    let mut current = unvisited.swap_remove(start);
    tour.push(current);

    while !unvisited.is_empty() {
        let mut candidates: Vec<(usize, f64)> = unvisited
            .iter()
            .map(|&city| (city, distances.get(current, city)))
            .collect();
        candidates.sort_by(|a, b| {
            a.1.partial_cmp(&b.1).expect("distance should not be NaN")
        });

        // floor(k * alpha) + 1, capped at k so alpha = 1 covers everything
        let rcl_len = ((candidates.len() as f64 * alpha) as usize + 1).min(candidates.len());
        let (chosen, _) = candidates[rng.random_range(0..rcl_len)];

        let pos = unvisited
            .iter()
            .position(|&city| city == chosen)
            .expect("chosen city comes from the unvisited set");
        unvisited.swap_remove(pos);
        tour.push(chosen);
        current = chosen;
    }

    Ok(Tour::from_permutation(tour))
}
