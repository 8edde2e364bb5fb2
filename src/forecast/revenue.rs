use serde::Serialize;
use tracing::info;
use crate::error::{EngineError, Result};
use crate::stats::LinearFit;

/// Historical pricing and revenue series
#[derive(Debug, Clone, Default)]
pub struct TrainingData {
    pub prices: Vec<f64>,
    pub revenue: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueForecast {
    pub price: f64,
    pub period: u32,
    pub predicted_revenue: f64,
}

/// Linear model of revenue as a function of price
pub struct RevenueForecaster {
    model: Option<LinearFit>,
    history: Vec<(f64, f64)>,
}

impl RevenueForecaster {
    pub fn new() -> Self {
        Self {
            model: None,
            history: Vec::new(),
        }
    }

    /// Fit the model on `training_data`, replacing any previous fit
    pub fn train(&mut self, training_data: &TrainingData) -> Result<()> {
        let revenue = training_data
            .revenue
            .as_deref()
            .ok_or_else(|| EngineError::InvalidInput("Training data has no revenue series".to_string()))?;

        if training_data.prices.is_empty() || revenue.is_empty() {
            return Err(EngineError::InvalidInput("Training data is empty".to_string()));
        }

        if training_data.prices.len() != revenue.len() {
            return Err(EngineError::InvalidInput(format!(
                "Price and revenue series differ in length: {} vs {}",
                training_data.prices.len(),
                revenue.len()
            )));
        }

        let fit = LinearFit::fit(&training_data.prices, revenue)
            .ok_or_else(|| EngineError::InvalidInput("Could not fit training data".to_string()))?;

        info!(
            "Revenue model trained on {} points: slope={:.4}, intercept={:.4}, r²={:.3}",
            revenue.len(),
            fit.slope,
            fit.intercept,
            fit.r_squared
        );

        self.model = Some(fit);
        self.history = training_data
            .prices
            .iter()
            .copied()
            .zip(revenue.iter().copied())
            .collect();

        Ok(())
    }

    /// Predict revenue at `price`.
    ///
    /// `period` is reported back but does not scale the prediction.
    pub fn forecast(&self, price: f64, period: u32) -> Result<RevenueForecast> {
        let model = self.model.as_ref().ok_or(EngineError::NotTrained)?;

        Ok(RevenueForecast {
            price,
            period,
            predicted_revenue: model.predict(price),
        })
    }

    pub fn model(&self) -> Option<&LinearFit> {
        self.model.as_ref()
    }

    /// (price, revenue) pairs of the last successful training run
    pub fn history(&self) -> &[(f64, f64)] {
        &self.history
    }
}

impl Default for RevenueForecaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_history() -> TrainingData {
        TrainingData {
            prices: vec![10.0, 20.0, 30.0],
            revenue: Some(vec![100.0, 200.0, 300.0]),
        }
    }

    #[test]
    fn test_forecast_before_train() {
        let forecaster = RevenueForecaster::new();
        assert!(matches!(forecaster.forecast(20.0, 1), Err(EngineError::NotTrained)));
    }

    #[test]
    fn test_train_and_forecast() {
        let mut forecaster = RevenueForecaster::new();
        forecaster.train(&linear_history()).unwrap();

        let forecast = forecaster.forecast(20.0, 1).unwrap();
        assert!((forecast.predicted_revenue - 200.0).abs() < 1e-6);
        assert_eq!(forecast.price, 20.0);
        assert_eq!(forecast.period, 1);

        // Extrapolation follows the same line
        let forecast = forecaster.forecast(45.0, 1).unwrap();
        assert!((forecast.predicted_revenue - 450.0).abs() < 1e-6);
    }

    #[test]
    fn test_period_does_not_scale() {
        let mut forecaster = RevenueForecaster::new();
        forecaster.train(&linear_history()).unwrap();

        let one = forecaster.forecast(25.0, 1).unwrap();
        let twelve = forecaster.forecast(25.0, 12).unwrap();
        assert_eq!(one.predicted_revenue, twelve.predicted_revenue);
    }

    #[test]
    fn test_train_rejects_missing_revenue() {
        let mut forecaster = RevenueForecaster::new();
        let data = TrainingData {
            prices: vec![1.0, 2.0],
            revenue: None,
        };

        assert!(matches!(forecaster.train(&data), Err(EngineError::InvalidInput(_))));
        assert!(forecaster.model().is_none());
    }

    #[test]
    fn test_train_rejects_empty() {
        let mut forecaster = RevenueForecaster::new();
        let data = TrainingData {
            prices: vec![],
            revenue: Some(vec![]),
        };

        assert!(matches!(forecaster.train(&data), Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_train_rejects_ragged_series() {
        let mut forecaster = RevenueForecaster::new();
        let data = TrainingData {
            prices: vec![1.0, 2.0, 3.0],
            revenue: Some(vec![10.0, 20.0]),
        };

        assert!(matches!(forecaster.train(&data), Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_failed_retrain_keeps_model() {
        let mut forecaster = RevenueForecaster::new();
        forecaster.train(&linear_history()).unwrap();

        assert!(forecaster.train(&TrainingData::default()).is_err());
        assert!(forecaster.forecast(20.0, 1).is_ok());
        assert_eq!(forecaster.history().len(), 3);
    }

    #[test]
    fn test_retrain_replaces_model() {
        let mut forecaster = RevenueForecaster::new();
        forecaster.train(&linear_history()).unwrap();

        forecaster
            .train(&TrainingData {
                prices: vec![1.0, 2.0],
                revenue: Some(vec![5.0, 5.0]),
            })
            .unwrap();

        let forecast = forecaster.forecast(100.0, 1).unwrap();
        assert!((forecast.predicted_revenue - 5.0).abs() < 1e-9);
        assert_eq!(forecaster.history(), &[(1.0, 5.0), (2.0, 5.0)]);
    }
}
