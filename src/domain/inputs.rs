//! The live input record edited by the predictor panel.
//!
//! Every mutator clamps to the slider bounds in `INPUT_LIMITS`, so an
//! `InputRecord` owned by the store is always within range.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumIter;

use crate::config::INPUT_LIMITS;

/// Binary day type flag: 0 = weekday, 1 = weekend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum DayType {
    #[default]
    Weekday,
    Weekend,
}

impl DayType {
    /// The numeric flag fed into the linear model and sent on the wire.
    pub fn flag(self) -> u8 {
        match self {
            DayType::Weekday => 0,
            DayType::Weekend => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
        }
    }
}

impl From<DayType> for u8 {
    fn from(day_type: DayType) -> Self {
        day_type.flag()
    }
}

impl TryFrom<u8> for DayType {
    type Error = String;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(DayType::Weekday),
            1 => Ok(DayType::Weekend),
            other => Err(format!("Invalid day type flag: {} (expected 0 or 1)", other)),
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Direction of a +/- stepper click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Down,
    Up,
}

impl StepDirection {
    fn signum(self) -> f64 {
        match self {
            StepDirection::Down => -1.0,
            StepDirection::Up => 1.0,
        }
    }
}

/// The three model inputs, using the sales service's field names on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "TotalGasGallons")]
    fuel_volume: f64,
    #[serde(rename = "LottoSales")]
    lotto_revenue: f64,
    #[serde(rename = "DayType")]
    day_type: DayType,
}

impl Default for InputRecord {
    fn default() -> Self {
        Self {
            fuel_volume: INPUT_LIMITS.default_fuel_volume,
            lotto_revenue: INPUT_LIMITS.default_lotto_revenue,
            day_type: DayType::Weekday,
        }
    }
}

impl InputRecord {
    /// Builds a record, clamping both amounts into their slider bounds.
    pub fn new(fuel_volume: f64, lotto_revenue: f64, day_type: DayType) -> Self {
        let mut record = Self {
            fuel_volume: 0.0,
            lotto_revenue: 0.0,
            day_type,
        };
        record.set_fuel_volume(fuel_volume);
        record.set_lotto_revenue(lotto_revenue);
        record
    }

    pub fn fuel_volume(&self) -> f64 {
        self.fuel_volume
    }

    pub fn lotto_revenue(&self) -> f64 {
        self.lotto_revenue
    }

    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    /// Non-finite values are ignored and the previous value is kept.
    pub fn set_fuel_volume(&mut self, value: f64) {
        if value.is_finite() {
            self.fuel_volume = value.clamp(0.0, INPUT_LIMITS.fuel_volume_max);
        }
    }

    pub fn set_lotto_revenue(&mut self, value: f64) {
        if value.is_finite() {
            self.lotto_revenue = value.clamp(0.0, INPUT_LIMITS.lotto_revenue_max);
        }
    }

    pub fn set_day_type(&mut self, day_type: DayType) {
        self.day_type = day_type;
    }

    pub fn step_fuel_volume(&mut self, direction: StepDirection) {
        self.set_fuel_volume(self.fuel_volume + direction.signum() * INPUT_LIMITS.step);
    }

    pub fn step_lotto_revenue(&mut self, direction: StepDirection) {
        self.set_lotto_revenue(self.lotto_revenue + direction.signum() * INPUT_LIMITS.step);
    }

    /// Re-applies the bounds, e.g. after deserializing persisted state.
    pub fn clamped(self) -> Self {
        Self::new(self.fuel_volume, self.lotto_revenue, self.day_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrementing_fuel_below_zero_clamps_to_zero() {
        let mut inputs = InputRecord::new(5.0, 100.0, DayType::Weekday);
        inputs.step_fuel_volume(StepDirection::Down);
        assert_eq!(inputs.fuel_volume(), 0.0);
        inputs.step_fuel_volume(StepDirection::Down);
        assert_eq!(inputs.fuel_volume(), 0.0);
    }

    #[test]
    fn incrementing_lotto_above_max_clamps_to_max() {
        let mut inputs = InputRecord::new(0.0, 495.0, DayType::Weekday);
        inputs.step_lotto_revenue(StepDirection::Up);
        assert_eq!(inputs.lotto_revenue(), 500.0);
        inputs.step_lotto_revenue(StepDirection::Up);
        assert_eq!(inputs.lotto_revenue(), 500.0);
    }

    #[test]
    fn setters_clamp_and_ignore_non_finite() {
        let mut inputs = InputRecord::default();
        inputs.set_fuel_volume(5_000.0);
        assert_eq!(inputs.fuel_volume(), 1000.0);
        inputs.set_lotto_revenue(-20.0);
        assert_eq!(inputs.lotto_revenue(), 0.0);
        inputs.set_fuel_volume(f64::NAN);
        assert_eq!(inputs.fuel_volume(), 1000.0);
    }

    #[test]
    fn serializes_with_service_field_names() {
        let inputs = InputRecord::new(500.0, 200.0, DayType::Weekend);
        let value = serde_json::to_value(inputs).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"TotalGasGallons": 500.0, "LottoSales": 200.0, "DayType": 1})
        );
    }

    #[test]
    fn rejects_unknown_day_type_flag() {
        let parsed: Result<InputRecord, _> = serde_json::from_str(
            r#"{"TotalGasGallons": 1.0, "LottoSales": 2.0, "DayType": 7}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn default_matches_initial_form_values() {
        let inputs = InputRecord::default();
        assert_eq!(inputs.fuel_volume(), 500.0);
        assert_eq!(inputs.lotto_revenue(), 200.0);
        assert_eq!(inputs.day_type(), DayType::Weekday);
    }
}
