//! Tour cost evaluation.

mod cost;

pub use cost::tour_cost;

pub(crate) use cost::cost_of;
