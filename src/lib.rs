//! # burg-forecast
//!
//! Autoregressive time series forecasting using Burg's method.
//!
//! Fits an AR model of fixed order by recursively minimizing the sum of
//! forward and backward prediction-error energy, then extrapolates
//! future values through the fitted linear recurrence. The immutable
//! fitted model is exposed as [`models::ar::BurgFit`]; the
//! [`models::Forecaster`]-trait wrapper [`models::ar::Burg`] adds
//! in-sample fitted values and residuals.

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{Forecast, TimeSeries};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::ar::{Burg, BurgFit};
    pub use crate::models::Forecaster;
    pub use crate::utils::{calculate_metrics, AccuracyMetrics};
}
