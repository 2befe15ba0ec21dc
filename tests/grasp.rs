//! End-to-end tests for the GRASP runners.

use grasp_tsp::distance::DistanceMatrix;
use grasp_tsp::evaluation::tour_cost;
use grasp_tsp::grasp::{run_grasp, run_grasp_parallel, GraspConfig};
use grasp_tsp::local_search::two_opt_improve;
use grasp_tsp::models::{Point, Tour};
use grasp_tsp::perturbation::swap_perturbation;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn unit_square() -> DistanceMatrix {
    DistanceMatrix::from_points(&[
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 0.0),
    ])
}

/// Deterministic pseudo-random instance, no rand dependency needed.
fn scattered_points(n: usize) -> Vec<Point> {
    let mut state: u64 = 0x9e3779b97f4a7c15;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let x = ((state >> 33) % 1000) as f64 / 10.0;
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let y = ((state >> 33) % 1000) as f64 / 10.0;
            Point::new(x, y)
        })
        .collect()
}

#[test]
fn unit_square_reaches_the_optimum() {
    let dm = unit_square();
    for alpha in [0.0, 0.3, 1.0] {
        let mut rng = StdRng::seed_from_u64(42);
        let best = run_grasp(&dm, &GraspConfig::new(10, alpha), &mut rng).expect("valid input");
        assert!(
            (best.cost() - 4.0).abs() < 1e-9,
            "alpha {alpha}: expected the perimeter, got {}",
            best.cost()
        );
        assert!(best.cost() >= 4.0 - 1e-9, "cost below the known optimum");
    }
}

#[test]
fn sequential_run_is_deterministic_under_seed() {
    let dm = DistanceMatrix::from_points(&scattered_points(25));
    let config = GraspConfig::new(30, 0.3);

    let mut rng_a = StdRng::seed_from_u64(1234);
    let mut rng_b = StdRng::seed_from_u64(1234);
    let a = run_grasp(&dm, &config, &mut rng_a).expect("valid input");
    let b = run_grasp(&dm, &config, &mut rng_b).expect("valid input");

    assert_eq!(a.tour(), b.tour());
    assert_eq!(a.cost(), b.cost());
}

#[test]
fn parallel_run_is_deterministic_under_seed() {
    let dm = DistanceMatrix::from_points(&scattered_points(20));
    let config = GraspConfig::new(24, 0.3);

    let a = run_grasp_parallel(&dm, &config, 777).expect("valid input");
    let b = run_grasp_parallel(&dm, &config, 777).expect("valid input");

    assert_eq!(a.tour(), b.tour());
    assert_eq!(a.cost(), b.cost());
}

#[test]
fn reported_cost_is_recomputable() {
    let dm = DistanceMatrix::from_points(&scattered_points(15));
    let mut rng = StdRng::seed_from_u64(9);
    let best = run_grasp(&dm, &GraspConfig::new(20, 0.3), &mut rng).expect("valid input");
    assert!((tour_cost(best.tour(), &dm) - best.cost()).abs() < 1e-9);
}

#[test]
fn best_tour_is_a_permutation() {
    let n = 18;
    let dm = DistanceMatrix::from_points(&scattered_points(n));
    let mut rng = StdRng::seed_from_u64(5);
    let best = run_grasp(&dm, &GraspConfig::new(15, 0.5), &mut rng).expect("valid input");

    let mut cities = best.tour().cities().to_vec();
    cities.sort_unstable();
    assert_eq!(cities, (0..n).collect::<Vec<_>>());
}

#[test]
fn two_city_boundary() {
    let dm = DistanceMatrix::from_points(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);

    let mut rng = StdRng::seed_from_u64(0);
    let best = run_grasp(&dm, &GraspConfig::new(5, 0.3), &mut rng).expect("valid input");
    assert!((best.cost() - 10.0).abs() < 1e-10);

    // Local search and perturbation must survive a 2-element tour
    let tour = Tour::new(vec![0, 1]).expect("valid");
    let (improved, cost) = two_opt_improve(&tour, &dm);
    assert!((cost - 10.0).abs() < 1e-10);
    let shaken = swap_perturbation(&improved, &mut rng).expect("valid input");
    assert_eq!(shaken.cities(), &[1, 0]);
}

#[test]
fn parallel_and_sequential_agree_on_the_square() {
    let dm = unit_square();
    let config = GraspConfig::new(10, 0.3);

    let mut rng = StdRng::seed_from_u64(42);
    let sequential = run_grasp(&dm, &config, &mut rng).expect("valid input");
    let parallel = run_grasp_parallel(&dm, &config, 42).expect("valid input");

    // Different RNG streams, same known optimum
    assert!((sequential.cost() - parallel.cost()).abs() < 1e-9);
}

#[test]
fn explicit_matrix_input() {
    // Symmetric 3-city instance supplied as raw data rather than points
    let dm = DistanceMatrix::from_data(
        3,
        vec![
            0.0, 2.0, 9.0, //
            2.0, 0.0, 6.0, //
            9.0, 6.0, 0.0,
        ],
    )
    .expect("well-formed grid");
    assert!(dm.is_symmetric(1e-10));

    let mut rng = StdRng::seed_from_u64(11);
    let best = run_grasp(&dm, &GraspConfig::new(10, 0.3), &mut rng).expect("valid input");
    // Every 3-city cycle has the same cost: 2 + 6 + 9
    assert!((best.cost() - 17.0).abs() < 1e-10);
}
