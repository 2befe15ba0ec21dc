//! Random swap move.

use rand::Rng;

use crate::error::{Error, Result};
use crate::models::Tour;

/// Returns a copy of the tour with two positions, chosen uniformly at
/// random without replacement, exchanged.
///
/// The input tour is left untouched; downstream local search assumes an
/// independent copy. Exactly two distinct positions change.
///
/// # Errors
///
/// Returns [`Error::TooFewCities`] if the tour has fewer than 2 cities.
///
/// # Examples
///
/// ```
/// use grasp_tsp::models::Tour;
/// use grasp_tsp::perturbation::swap_perturbation;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let tour = Tour::new(vec![0, 1, 2, 3]).unwrap();
/// let mut rng = StdRng::seed_from_u64(5);
///
/// let shaken = swap_perturbation(&tour, &mut rng).unwrap();
/// let changed = tour
///     .cities()
///     .iter()
///     .zip(shaken.cities())
///     .filter(|(a, b)| a != b)
///     .count();
/// assert_eq!(changed, 2);
/// ```
pub fn swap_perturbation<R: Rng>(tour: &Tour, rng: &mut R) -> Result<Tour> {
    let n = tour.len();
    if n < 2 {
        return Err(Error::TooFewCities(n));
    }

    let i = rng.random_range(0..n);
    // Sample j from the n - 1 positions other than i
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }

    let mut cities = tour.cities().to_vec();
    cities.swap(i, j);
    Ok(Tour::from_permutation(cities))
}
