//! Burg's method for fixed-order autoregressive estimation.
//!
//! Burg's method fits AR coefficients by minimizing the sum of forward
//! and backward prediction-error energy at each recursion stage, subject
//! to the Levinson-Durbin consistency constraint. It works directly on
//! the data rather than on autocovariance estimates, which gives it less
//! finite-sample bias than Yule-Walker for short series.

use crate::core::{Forecast, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;

/// Below this total error energy the reflection coefficient is undefined
/// and the recursion must stop.
const ENERGY_FLOOR: f64 = 1e-15;

/// A fitted AR(m) model produced by [`BurgFit::estimate`].
///
/// Holds the `m` coefficients of the AR polynomial (the leading unit
/// term is implicit) together with the last `m` observations of the
/// training series, which seed extrapolation. The value is immutable:
/// coefficients and seed always come from the same estimation run.
///
/// # Example
/// ```
/// use burg_forecast::models::ar::BurgFit;
///
/// let fit = BurgFit::estimate(&[1.0, 2.0, 4.0, 8.0, 16.0], 1).unwrap();
/// assert_eq!(fit.order(), 1);
/// assert_eq!(fit.predict(1).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BurgFit {
    coefficients: Vec<f64>,
    tail: Vec<f64>,
    error_energy: f64,
}

impl BurgFit {
    /// Estimate an AR(`order`) model from `values` with Burg's recursion.
    ///
    /// # Errors
    /// - [`ForecastError::InvalidParameter`] if `order` is zero.
    /// - [`ForecastError::EmptyData`] if `values` is empty.
    /// - [`ForecastError::MissingValues`] if any value is NaN or infinite.
    /// - [`ForecastError::InsufficientData`] if `values.len() <= order`
    ///   (the minimum usable length is `order + 1`).
    /// - [`ForecastError::DegenerateRecursion`] if the total error energy
    ///   vanishes before the requested order is reached, e.g. on a
    ///   constant series. No partial coefficients are returned.
    pub fn estimate(values: &[f64], order: usize) -> Result<Self> {
        if order == 0 {
            return Err(ForecastError::InvalidParameter(
                "order must be positive".to_string(),
            ));
        }
        if values.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::MissingValues);
        }
        let n = values.len();
        if n <= order {
            return Err(ForecastError::InsufficientData {
                needed: order + 1,
                got: n,
            });
        }

        let mut a = vec![0.0; order + 1];
        a[0] = 1.0;
        let mut f = values.to_vec();
        let mut b = values.to_vec();

        // Total forward + backward error energy over the valid windows.
        let mut d = 2.0 * f.iter().map(|v| v * v).sum::<f64>() - f[0] * f[0] - b[n - 1] * b[n - 1];

        for k in 0..order {
            if !d.is_finite() || d.abs() < ENERGY_FLOOR {
                return Err(ForecastError::DegenerateRecursion { stage: k });
            }

            // Reflection coefficient from the forward/backward error
            // correlation over the stage-k window.
            let mut num = 0.0;
            for i in 0..n - k - 1 {
                num += f[i + k + 1] * b[i];
            }
            let mu = -2.0 / d * num;

            // Butterfly update of the coefficient vector: both new values
            // of each symmetric pair come from the old pair.
            for i in 0..=(k + 1) / 2 {
                let lo = a[i];
                let hi = a[k + 1 - i];
                a[i] = lo + mu * hi;
                a[k + 1 - i] = hi + mu * lo;
            }

            // Simultaneous update of the error vectors, same rule: read
            // both old values before writing either.
            for i in 0..n - k - 1 {
                let fi = f[i + k + 1];
                let bi = b[i];
                f[i + k + 1] = fi + mu * bi;
                b[i] = bi + mu * fi;
            }

            d = (1.0 - mu * mu) * d - f[k + 1] * f[k + 1] - b[n - k - 2] * b[n - k - 2];
        }

        Ok(Self {
            coefficients: a[1..].to_vec(),
            tail: values[n - order..].to_vec(),
            error_energy: d,
        })
    }

    /// The model order `m` (number of coefficients).
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    /// The AR polynomial coefficients `a1..am` (leading unit term
    /// implicit). The next value is forecast as
    /// `-(a1·x[t-1] + a2·x[t-2] + … + am·x[t-m])`.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The last `m` training observations, oldest first. These seed the
    /// prediction recurrence.
    pub fn tail(&self) -> &[f64] {
        &self.tail
    }

    /// Total forward + backward prediction-error energy remaining after
    /// the final recursion stage.
    pub fn error_energy(&self) -> f64 {
        self.error_energy
    }

    /// Extrapolate future values from the stored tail.
    ///
    /// The single-call horizon is clamped to the model order: `count`
    /// values are returned when `1 <= count <= m`, and exactly `m` values
    /// when `count` is 0 or exceeds `m`. Longer horizons require
    /// re-estimating on the extended series.
    pub fn predict(&self, count: usize) -> Vec<f64> {
        let m = self.coefficients.len();
        let horizon = if count == 0 || count > m { m } else { count };

        let mut buf = self.tail.clone();
        for _ in 0..horizon {
            let mut acc = 0.0;
            for j in 0..m {
                acc += self.coefficients[j] * buf[buf.len() - 1 - j];
            }
            buf.push(-acc);
        }
        buf.split_off(m)
    }
}

/// Burg autoregressive forecaster of fixed order.
///
/// Wraps [`BurgFit`] behind the [`Forecaster`] interface: `fit` estimates
/// the coefficients and the in-sample one-step predictions, `predict`
/// extrapolates from the tail of the training series.
///
/// The prediction horizon is clamped to the model order (see
/// [`BurgFit::predict`]).
///
/// # Example
/// ```
/// use burg_forecast::core::TimeSeries;
/// use burg_forecast::models::ar::Burg;
/// use burg_forecast::models::Forecaster;
///
/// let values = vec![1.0, 2.0, 3.0, 2.0, 1.0, 2.0, 3.0, 2.0, 1.0, 2.0, 3.0, 2.0];
/// let ts = TimeSeries::from_values(values);
///
/// let mut model = Burg::new(2);
/// model.fit(&ts).unwrap();
///
/// let forecast = model.predict(2).unwrap();
/// assert_eq!(forecast.horizon(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Burg {
    order: usize,
    fit: Option<BurgFit>,
    fitted: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
}

impl Burg {
    /// Create a new Burg AR model with the given order.
    ///
    /// The order is fixed for the model's lifetime. A zero order is
    /// rejected at fit time.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            fit: None,
            fitted: None,
            residuals: None,
        }
    }

    /// The configured model order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// The coefficients of the most recent fit, or `None` before the
    /// first successful fit.
    pub fn coefficients(&self) -> Option<&[f64]> {
        self.fit.as_ref().map(|f| f.coefficients())
    }

    /// The fitted model of the most recent fit, or `None` before the
    /// first successful fit.
    pub fn fit_result(&self) -> Option<&BurgFit> {
        self.fit.as_ref()
    }
}

impl Forecaster for Burg {
    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        let values = series.values();
        let fit = BurgFit::estimate(values, self.order)?;

        // In-sample one-step predictions. The first m positions have no
        // full lag window and are undefined.
        let m = self.order;
        let mut fitted = vec![f64::NAN; values.len()];
        let mut residuals = vec![f64::NAN; values.len()];
        for t in m..values.len() {
            let mut acc = 0.0;
            for j in 0..m {
                acc += fit.coefficients()[j] * values[t - 1 - j];
            }
            fitted[t] = -acc;
            residuals[t] = values[t] - fitted[t];
        }

        self.fit = Some(fit);
        self.fitted = Some(fitted);
        self.residuals = Some(residuals);
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let fit = self.fit.as_ref().ok_or(ForecastError::FitRequired)?;
        Ok(Forecast::from_values(fit.predict(horizon)))
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        "Burg"
    }
}
