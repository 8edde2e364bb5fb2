use tracing::{info, warn};
use crate::data::types::MarketData;
use crate::error::{EngineError, Result};
use crate::stats::{mean, pearson_correlation, round_cents};
use crate::strategies::types::Objective;

pub const DEFAULT_PRICE: f64 = 100.0;
pub const UNIT_COST: f64 = 50.0;
pub const TARGET_MARGIN_PCT: f64 = 30.0;

/// Correlation above which demand is treated as price-sensitive
const ELASTICITY_THRESHOLD: f64 = 0.8;

pub struct PriceOptimizer {
    current_price: f64,
}

impl PriceOptimizer {
    pub fn new() -> Self {
        Self::with_price(DEFAULT_PRICE)
    }

    pub fn with_price(current_price: f64) -> Self {
        Self { current_price }
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    pub fn update_current_price(&mut self, new_price: f64) {
        self.current_price = new_price;
    }

    /// Compute a new price for `objective` from the given market data.
    ///
    /// Absent or empty data is rejected for every objective, even the ones
    /// that do not read it.
    pub fn calculate_optimal_price(
        &self,
        market_data: Option<&MarketData>,
        objective: Objective,
    ) -> Result<f64> {
        let data = match market_data {
            Some(data) if !data.is_empty() => data,
            _ => {
                return Err(EngineError::InvalidInput(
                    "No valid market data provided".to_string(),
                ))
            }
        };

        let price = match objective {
            Objective::MaxRevenue => self.price_for_max_revenue(data),
            Objective::ProfitMax => self.price_for_profit_max(),
        };

        info!("Optimal price for {}: ${:.2}", objective, price);
        Ok(price)
    }

    fn price_for_max_revenue(&self, data: &MarketData) -> f64 {
        let prices = data.prices();
        let volumes = data.volumes();

        let mean_price = match mean(&prices) {
            Some(m) => m,
            None => return self.current_price,
        };

        // Price/volume correlation as an elasticity proxy
        let elasticity = pearson_correlation(&prices, &volumes);
        if elasticity.is_none() {
            warn!(
                "Correlation undefined for {} observation(s), assuming low elasticity",
                prices.len()
            );
        }

        let new_price = match elasticity {
            Some(e) if e > ELASTICITY_THRESHOLD => mean_price * 0.95,
            _ => mean_price * 1.05,
        };

        round_cents(new_price)
    }

    // Market data is not consulted here
    fn price_for_profit_max(&self) -> f64 {
        let margin = (self.current_price - UNIT_COST) / UNIT_COST * 100.0;

        if margin < TARGET_MARGIN_PCT {
            self.current_price + 10.0
        } else {
            self.current_price - 5.0
        }
    }
}

impl Default for PriceOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::MarketSnapshot;

    fn data(points: &[(f64, f64)]) -> MarketData {
        MarketData::from_rows(
            points
                .iter()
                .map(|&(price, volume)| MarketSnapshot { price, volume, timestamp: None })
                .collect(),
        )
    }

    #[test]
    fn test_missing_data_rejected() {
        let optimizer = PriceOptimizer::new();
        let empty = MarketData::default();

        for objective in [Objective::MaxRevenue, Objective::ProfitMax] {
            assert!(matches!(
                optimizer.calculate_optimal_price(None, objective),
                Err(EngineError::InvalidInput(_))
            ));
            assert!(matches!(
                optimizer.calculate_optimal_price(Some(&empty), objective),
                Err(EngineError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_max_revenue_single_point() {
        // Correlation undefined -> low elasticity branch
        let optimizer = PriceOptimizer::new();
        let price = optimizer
            .calculate_optimal_price(Some(&data(&[(100.0, 500.0)])), Objective::MaxRevenue)
            .unwrap();

        assert!((price - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_revenue_high_correlation() {
        let optimizer = PriceOptimizer::new();
        let market = data(&[(10.0, 100.0), (20.0, 200.0), (30.0, 300.0)]);
        let price = optimizer
            .calculate_optimal_price(Some(&market), Objective::MaxRevenue)
            .unwrap();

        // mean 20 * 0.95
        assert!((price - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_revenue_negative_correlation() {
        let optimizer = PriceOptimizer::new();
        let market = data(&[(10.0, 300.0), (20.0, 200.0), (30.0, 100.0)]);
        let price = optimizer
            .calculate_optimal_price(Some(&market), Objective::MaxRevenue)
            .unwrap();

        assert!((price - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_revenue_rounds_to_cents() {
        let optimizer = PriceOptimizer::new();
        let market = data(&[(9.99, 10.0), (10.01, 5.0), (10.02, 1.0)]);
        let price = optimizer
            .calculate_optimal_price(Some(&market), Objective::MaxRevenue)
            .unwrap();

        // mean 10.006666 * 1.05 = 10.507
        assert_eq!(price, 10.51);
    }

    #[test]
    fn test_profit_max_default_price() {
        // margin 100% >= 30% -> lower by 5
        let optimizer = PriceOptimizer::new();
        let price = optimizer
            .calculate_optimal_price(Some(&data(&[(1.0, 1.0)])), Objective::ProfitMax)
            .unwrap();

        assert_eq!(price, 95.0);
    }

    #[test]
    fn test_profit_max_low_margin() {
        // margin 20% < 30% -> raise by 10
        let optimizer = PriceOptimizer::with_price(60.0);
        let price = optimizer
            .calculate_optimal_price(Some(&data(&[(1.0, 1.0)])), Objective::ProfitMax)
            .unwrap();

        assert_eq!(price, 70.0);
    }

    #[test]
    fn test_update_current_price_moves_anchor() {
        let mut optimizer = PriceOptimizer::new();
        optimizer.update_current_price(150.0);
        assert_eq!(optimizer.current_price(), 150.0);

        let price = optimizer
            .calculate_optimal_price(Some(&data(&[(1.0, 1.0)])), Objective::ProfitMax)
            .unwrap();
        assert_eq!(price, 145.0);
    }

    #[test]
    fn test_update_current_price_unvalidated() {
        let mut optimizer = PriceOptimizer::new();
        optimizer.update_current_price(-10.0);
        assert_eq!(optimizer.current_price(), -10.0);
    }
}
