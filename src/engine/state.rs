use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::data::fallback_chart_data;
use crate::domain::{ChartDatum, DayType, HealthStatus, InputRecord, Insight, StepDirection};
use crate::models::{PredictionHistory, PredictionResult, ScenarioResult, run_scenarios};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The closed set of views in the right-hand column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Serialize, Deserialize,
)]
pub enum DashboardTab {
    #[default]
    Predictor,
    Insights,
    Scenarios,
    History,
}

/// Everything that can change the dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetFuelVolume(f64),
    StepFuelVolume(StepDirection),
    SetLottoRevenue(f64),
    StepLottoRevenue(StepDirection),
    SetDayType(DayType),
    SelectTab(DashboardTab),
    /// A prediction request has been dispatched.
    PredictionStarted,
    /// A prediction finished (remote or fallback).
    PredictionCompleted(PredictionResult),
    HealthChecked(HealthStatus),
    ChartDataLoaded(Vec<ChartDatum>),
    InsightsGenerated(Vec<Insight>),
}

/// The dashboard store. Independent pieces of state plus one derived value
/// (`scenarios`); every change goes through `apply`.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub inputs: InputRecord,
    pub latest_prediction: Option<PredictionResult>,
    pub history: PredictionHistory,
    pub health: HealthStatus,
    pub chart_data: Vec<ChartDatum>,
    pub insights: Vec<Insight>,
    pub active_tab: DashboardTab,
    /// Requests dispatched but not yet completed
    pub predictions_in_flight: usize,
}

impl DashboardState {
    /// Starts from persisted inputs and tab; everything else is session state.
    pub fn with_persisted(inputs: InputRecord, active_tab: DashboardTab) -> Self {
        Self {
            inputs: inputs.clamped(),
            active_tab,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetFuelVolume(value) => self.inputs.set_fuel_volume(value),
            Action::StepFuelVolume(direction) => self.inputs.step_fuel_volume(direction),
            Action::SetLottoRevenue(value) => self.inputs.set_lotto_revenue(value),
            Action::StepLottoRevenue(direction) => self.inputs.step_lotto_revenue(direction),
            Action::SetDayType(day_type) => self.inputs.set_day_type(day_type),
            Action::SelectTab(tab) => self.active_tab = tab,
            Action::PredictionStarted => self.predictions_in_flight += 1,
            Action::PredictionCompleted(result) => {
                self.predictions_in_flight = self.predictions_in_flight.saturating_sub(1);
                self.history.record(&result);
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_history_updates {
                    if let Some(entry) = self.history.head() {
                        log::info!(
                            "History #{}: ${:.2} ({:?}), {} stored",
                            entry.id,
                            entry.predicted_value,
                            entry.source,
                            self.history.len()
                        );
                    }
                }
                self.latest_prediction = Some(result);
            }
            Action::HealthChecked(status) => {
                self.health = status;
                // A failed probe also swaps in the fallback chart data,
                // regardless of what the chart fetch returned.
                if status == HealthStatus::Unhealthy {
                    self.chart_data = fallback_chart_data();
                }
            }
            Action::ChartDataLoaded(data) => self.chart_data = data,
            Action::InsightsGenerated(insights) => self.insights = insights,
        }
    }

    pub fn is_predicting(&self) -> bool {
        self.predictions_in_flight > 0
    }

    /// Derived on demand; never stored.
    pub fn scenarios(&self) -> Vec<ScenarioResult> {
        run_scenarios()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generate_insights;
    use crate::models::evaluate;

    #[test]
    fn input_actions_clamp_to_bounds() {
        let mut state = DashboardState::default();
        state.apply(Action::SetFuelVolume(0.0));
        state.apply(Action::StepFuelVolume(StepDirection::Down));
        assert_eq!(state.inputs.fuel_volume(), 0.0);

        state.apply(Action::SetLottoRevenue(500.0));
        state.apply(Action::StepLottoRevenue(StepDirection::Up));
        assert_eq!(state.inputs.lotto_revenue(), 500.0);

        state.apply(Action::SetDayType(DayType::Weekend));
        assert_eq!(state.inputs.day_type(), DayType::Weekend);
    }

    #[test]
    fn tab_switch_only_changes_active_tab() {
        let mut state = DashboardState::default();
        let inputs_before = state.inputs;
        state.apply(Action::SelectTab(DashboardTab::History));
        assert_eq!(state.active_tab, DashboardTab::History);
        assert_eq!(state.inputs, inputs_before);
        assert!(state.history.is_empty());
    }

    #[test]
    fn completed_prediction_updates_latest_and_history() {
        let mut state = DashboardState::default();
        state.apply(Action::PredictionStarted);
        assert!(state.is_predicting());

        let result = PredictionResult::from_formula(state.inputs);
        state.apply(Action::PredictionCompleted(result.clone()));

        assert!(!state.is_predicting());
        assert_eq!(state.latest_prediction, Some(result));
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history.head().unwrap().predicted_value, evaluate(500.0, 200.0, 0));
    }

    #[test]
    fn unhealthy_probe_loads_fallback_chart_data() {
        let mut state = DashboardState::default();
        state.apply(Action::ChartDataLoaded(vec![ChartDatum::new(
            "Live", 1.0, 1.0, 1.0, "Weekday",
        )]));
        state.apply(Action::HealthChecked(HealthStatus::Unhealthy));

        assert_eq!(state.health, HealthStatus::Unhealthy);
        assert_eq!(state.chart_data, fallback_chart_data());
    }

    #[test]
    fn healthy_probe_leaves_chart_data_alone() {
        let mut state = DashboardState::default();
        let live = vec![ChartDatum::new("Live", 1.0, 1.0, 1.0, "Weekday")];
        state.apply(Action::ChartDataLoaded(live.clone()));
        state.apply(Action::HealthChecked(HealthStatus::Healthy));

        assert!(state.health.is_healthy());
        assert_eq!(state.chart_data, live);
    }

    #[test]
    fn persisted_state_is_clamped_and_session_state_is_fresh() {
        let persisted: InputRecord = serde_json::from_str(
            r#"{"TotalGasGallons": 2500.0, "LottoSales": 50.0, "DayType": 1}"#,
        )
        .unwrap();
        let mut state = DashboardState::with_persisted(persisted, DashboardTab::Scenarios);
        state.apply(Action::InsightsGenerated(generate_insights()));

        assert_eq!(state.inputs.fuel_volume(), 1000.0);
        assert_eq!(state.active_tab, DashboardTab::Scenarios);
        assert_eq!(state.health, HealthStatus::Checking);
        assert_eq!(state.insights.len(), 4);
        assert_eq!(state.scenarios().len(), 3);
    }
}
