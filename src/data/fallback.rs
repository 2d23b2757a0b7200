//! Fixed dataset shown when the sales service cannot provide chart data.

use crate::domain::ChartDatum;

pub fn fallback_chart_data() -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("Day 1", 1200.0, 500.0, 200.0, "Weekday"),
        ChartDatum::new("Day 2", 1100.0, 450.0, 180.0, "Weekday"),
        ChartDatum::new("Day 3", 1500.0, 600.0, 220.0, "Weekend"),
        ChartDatum::new("Day 4", 1300.0, 550.0, 210.0, "Weekday"),
        ChartDatum::new("Day 5", 1000.0, 400.0, 150.0, "Weekday"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_table_has_five_fixed_days() {
        let data = fallback_chart_data();
        assert_eq!(data.len(), 5);

        let labels: Vec<&str> = data.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Day 1", "Day 2", "Day 3", "Day 4", "Day 5"]);

        let totals: Vec<f64> = data.iter().map(|d| d.total_sales).collect();
        assert_eq!(totals, vec![1200.0, 1100.0, 1500.0, 1300.0, 1000.0]);

        assert_eq!(data[2].day_type_label, "Weekend");
        assert_eq!(data[4], ChartDatum::new("Day 5", 1000.0, 400.0, 150.0, "Weekday"));
    }
}
