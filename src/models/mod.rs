//! Forecasting models.

mod traits;

pub mod ar;

pub use traits::{BoxedForecaster, Forecaster};
