//! Scenario analysis: the fallback formula applied to three fixed hypothetical days.

use crate::domain::{DayType, InputRecord};
use crate::models::formula::evaluate_inputs;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub fuel_volume: f64,
    pub lotto_revenue: f64,
    pub day_type: DayType,
}

impl Scenario {
    pub fn inputs(&self) -> InputRecord {
        InputRecord::new(self.fuel_volume, self.lotto_revenue, self.day_type)
    }
}

pub const SCENARIOS: [Scenario; 3] = [
    Scenario {
        name: "Best Case",
        description: "High traffic weekend",
        fuel_volume: 600.0,
        lotto_revenue: 250.0,
        day_type: DayType::Weekend,
    },
    Scenario {
        name: "Worst Case",
        description: "Low traffic weekday",
        fuel_volume: 400.0,
        lotto_revenue: 150.0,
        day_type: DayType::Weekday,
    },
    Scenario {
        name: "Average Day",
        description: "Typical weekday",
        fuel_volume: 500.0,
        lotto_revenue: 200.0,
        day_type: DayType::Weekday,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub predicted_sales: f64,
}

/// Stateless; recomputed on every frame.
pub fn run_scenarios() -> Vec<ScenarioResult> {
    SCENARIOS
        .iter()
        .map(|scenario| ScenarioResult {
            scenario: *scenario,
            predicted_sales: evaluate_inputs(&scenario.inputs()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(results: &'a [ScenarioResult], name: &str) -> &'a ScenarioResult {
        results
            .iter()
            .find(|r| r.scenario.name == name)
            .expect("scenario present")
    }

    #[test]
    fn best_case_beats_worst_case() {
        let results = run_scenarios();
        assert_eq!(results.len(), 3);
        let best = find(&results, "Best Case");
        let worst = find(&results, "Worst Case");
        assert!(best.predicted_sales > worst.predicted_sales);
    }

    #[test]
    fn scenario_values_match_formula() {
        let results = run_scenarios();
        assert_eq!(find(&results, "Best Case").predicted_sales, 1559.34);
        assert_eq!(find(&results, "Worst Case").predicted_sales, 973.91);
        assert_eq!(find(&results, "Average Day").predicted_sales, 1208.26);
    }
}
