use std::str::FromStr;
use crate::error::EngineError;

/// Pricing goal selecting which heuristic runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    MaxRevenue,
    ProfitMax,
}

impl Objective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::MaxRevenue => "max_revenue",
            Objective::ProfitMax => "profit_max",
        }
    }
}

impl FromStr for Objective {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "max_revenue" => Ok(Objective::MaxRevenue),
            "profit_max" => Ok(Objective::ProfitMax),
            other => Err(EngineError::UnsupportedObjective(other.to_string())),
        }
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_objective() {
        assert_eq!("max_revenue".parse::<Objective>().unwrap(), Objective::MaxRevenue);
        assert_eq!("profit_max".parse::<Objective>().unwrap(), Objective::ProfitMax);

        let err = "min_cost".parse::<Objective>().unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedObjective(s) if s == "min_cost"));
    }
}
