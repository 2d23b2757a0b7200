//! The fixed-coefficient linear model used when the remote service is unavailable.

use crate::config::FALLBACK_MODEL;
use crate::domain::InputRecord;

/// Rounds to 2 decimal places, half away from zero at the cent boundary.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Predicted total sales for the given inputs, rounded to cents.
pub fn evaluate(fuel_volume: f64, lotto_revenue: f64, day_type_flag: u8) -> f64 {
    let raw = FALLBACK_MODEL.intercept
        + fuel_volume * FALLBACK_MODEL.fuel_volume_weight
        + lotto_revenue * FALLBACK_MODEL.lotto_revenue_weight
        + f64::from(day_type_flag) * FALLBACK_MODEL.weekend_weight;
    round_to_cents(raw)
}

pub fn evaluate_inputs(inputs: &InputRecord) -> f64 {
    evaluate(
        inputs.fuel_volume(),
        inputs.lotto_revenue(),
        inputs.day_type().flag(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DayType;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn intercept_only_rounds_to_cents() {
        assert!(approx_eq(evaluate(0.0, 0.0, 0), 144.26));
    }

    #[test]
    fn average_weekday_matches_coefficients() {
        let expected =
            round_to_cents(144.25678737 + 500.0 * 1.26595992 + 200.0 * 2.15510668);
        assert!(approx_eq(evaluate(500.0, 200.0, 0), expected));
        assert!(approx_eq(expected, 1208.26));
    }

    #[test]
    fn weekend_adds_flat_uplift() {
        let weekday = evaluate(600.0, 250.0, 0);
        let weekend = evaluate(600.0, 250.0, 1);
        assert!(approx_eq(weekend, 1559.34));
        assert!((weekend - weekday - 116.73).abs() < 0.011);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert!(approx_eq(round_to_cents(1.005_000_1), 1.01));
        assert!(approx_eq(round_to_cents(-2.675_000_1), -2.68));
        assert!(approx_eq(round_to_cents(3.0), 3.0));
    }

    #[test]
    fn evaluate_inputs_uses_record_fields() {
        let inputs = InputRecord::new(400.0, 150.0, DayType::Weekday);
        assert!(approx_eq(evaluate_inputs(&inputs), 973.91));
    }
}
