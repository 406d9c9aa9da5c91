//! Autoregressive (AR) models.
//!
//! Fixed-order AR estimation via Burg's recursive method and
//! linear-recurrence extrapolation from the fitted coefficients.

mod burg;

pub use burg::{Burg, BurgFit};
