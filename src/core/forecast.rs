//! Forecast result structure for holding predictions.

/// A forecast result containing point predictions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    values: Vec<f64>,
}

impl Forecast {
    /// Create an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecast from point predictions.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Get the forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.values.len()
    }

    /// Check if the forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the predicted values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the forecast and return the predicted values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}
