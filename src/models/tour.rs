//! Validated tour type.

use serde::Serialize;

use crate::error::{Error, Result};

/// A closed tour: an ordered permutation of the city indices `0..n`,
/// interpreted as a cycle (the last city connects back to the first).
///
/// The permutation invariant is checked once at construction; cost
/// evaluation and search operators rely on it instead of re-validating
/// on every call. Operators that provably preserve the permutation use
/// the crate-internal [`Tour::from_permutation`].
///
/// # Examples
///
/// ```
/// use grasp_tsp::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]).unwrap();
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.cities(), &[2, 0, 1]);
///
/// assert!(Tour::new(vec![0, 0, 1]).is_err()); // duplicate
/// assert!(Tour::new(vec![0, 3]).is_err()); // out of range
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Creates a tour, validating that `cities` is a permutation of
    /// `0..cities.len()`.
    pub fn new(cities: Vec<usize>) -> Result<Self> {
        let n = cities.len();
        let mut seen = vec![false; n];
        for &city in &cities {
            if city >= n {
                return Err(Error::InvalidTour(format!(
                    "city index {city} out of range for {n} cities"
                )));
            }
            if seen[city] {
                return Err(Error::InvalidTour(format!("city {city} appears twice")));
            }
            seen[city] = true;
        }
        Ok(Self(cities))
    }

    /// Wraps a city sequence already known to be a permutation.
    pub(crate) fn from_permutation(cities: Vec<usize>) -> Self {
        debug_assert!(
            Self::is_permutation(&cities),
            "caller must supply a permutation of 0..len"
        );
        Self(cities)
    }

    fn is_permutation(cities: &[usize]) -> bool {
        let n = cities.len();
        let mut seen = vec![false; n];
        cities.iter().all(|&city| {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
            true
        })
    }

    /// The cities in visit order.
    pub fn cities(&self) -> &[usize] {
        &self.0
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the tour, returning the underlying city sequence.
    pub fn into_cities(self) -> Vec<usize> {
        self.0
    }
}
