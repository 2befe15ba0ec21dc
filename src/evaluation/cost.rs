//! Cyclic tour length.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Computes the total length of a closed tour: the sum of distances
/// between consecutive cities plus the wrap-around edge from the last
/// city back to the first.
///
/// The tour's permutation invariant is established at
/// [`Tour`](crate::models::Tour) construction, so no per-call validation
/// happens here. Does not mutate its inputs and is callable at every
/// search phase.
///
/// # Panics
///
/// Panics if the tour references a city index at or beyond
/// `distances.size()` (a contract violation by the caller, since the
/// tour was validated against a different instance size).
///
/// # Examples
///
/// ```
/// use grasp_tsp::distance::DistanceMatrix;
/// use grasp_tsp::evaluation::tour_cost;
/// use grasp_tsp::models::{Point, Tour};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let tour = Tour::new(vec![0, 1, 2]).unwrap();
/// // 1 + 1 + sqrt(2)
/// assert!((tour_cost(&tour, &dm) - (2.0 + 2f64.sqrt())).abs() < 1e-10);
/// ```
pub fn tour_cost(tour: &Tour, distances: &DistanceMatrix) -> f64 {
    cost_of(tour.cities(), distances)
}

/// Cost of a raw city sequence. Used internally on sequences that are
/// mid-mutation and not yet rewrapped in a [`Tour`].
pub(crate) fn cost_of(cities: &[usize], distances: &DistanceMatrix) -> f64 {
    if cities.len() < 2 {
        return 0.0;
    }
    let mut cost = 0.0;
    for window in cities.windows(2) {
        cost += distances.get(window[0], window[1]);
    }
    cost + distances.get(cities[cities.len() - 1], cities[0])
}
