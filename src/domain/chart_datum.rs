use serde::{Deserialize, Serialize};

/// One day of recorded sales, as served by `/chart_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    #[serde(rename = "name")]
    pub label: String,
    #[serde(rename = "TotalSales")]
    pub total_sales: f64,
    #[serde(rename = "GasSold")]
    pub gas_sold: f64,
    #[serde(rename = "Lotto")]
    pub lotto_sales: f64,
    #[serde(rename = "DayType")]
    pub day_type_label: String,
}

impl ChartDatum {
    pub fn new(
        label: impl Into<String>,
        total_sales: f64,
        gas_sold: f64,
        lotto_sales: f64,
        day_type_label: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            total_sales,
            gas_sold,
            lotto_sales,
            day_type_label: day_type_label.into(),
        }
    }
}

/// Counts of weekday and weekend records, used by the day-type pie chart.
/// Labels other than "Weekday"/"Weekend" are not counted.
pub fn day_type_counts(data: &[ChartDatum]) -> (usize, usize) {
    data.iter()
        .fold((0, 0), |(weekday, weekend), datum| {
            match datum.day_type_label.as_str() {
                "Weekday" => (weekday + 1, weekend),
                "Weekend" => (weekday, weekend + 1),
                _ => (weekday, weekend),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_payload() {
        let payload = r#"[
            {"name": "Mon", "TotalSales": 1234.5, "GasSold": 510, "Lotto": 190, "DayType": "Weekday"}
        ]"#;
        let data: Vec<ChartDatum> = serde_json::from_str(payload).unwrap();
        assert_eq!(data, vec![ChartDatum::new("Mon", 1234.5, 510.0, 190.0, "Weekday")]);
    }

    #[test]
    fn counts_day_types_ignoring_unknown_labels() {
        let data = vec![
            ChartDatum::new("a", 1.0, 1.0, 1.0, "Weekday"),
            ChartDatum::new("b", 1.0, 1.0, 1.0, "Weekend"),
            ChartDatum::new("c", 1.0, 1.0, 1.0, "Weekday"),
            ChartDatum::new("d", 1.0, 1.0, 1.0, "Holiday"),
        ];
        assert_eq!(day_type_counts(&data), (2, 1));
    }
}
