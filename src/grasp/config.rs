//! GRASP run parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters controlling a GRASP run.
///
/// # Examples
///
/// ```
/// use grasp_tsp::grasp::GraspConfig;
///
/// let config = GraspConfig::new(100, 0.3);
/// assert_eq!(config.iterations(), 100);
///
/// let defaults = GraspConfig::default();
/// assert_eq!(defaults.iterations(), 50);
/// assert!((defaults.alpha() - 0.3).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraspConfig {
    iterations: usize,
    alpha: f64,
}

impl GraspConfig {
    /// Creates a config with the given iteration budget and RCL parameter.
    ///
    /// Validation happens when the config is used by a runner, so a
    /// deserialized config carries whatever values it was built with
    /// until then.
    pub fn new(iterations: usize, alpha: f64) -> Self {
        Self { iterations, alpha }
    }

    /// Number of GRASP iterations to run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// RCL control parameter: 0 = purely greedy, 1 = purely random.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Checks that the budget is positive and `alpha` lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::ZeroIterations);
        }
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(Error::InvalidAlpha(self.alpha));
        }
        Ok(())
    }
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            alpha: 0.3,
        }
    }
}
