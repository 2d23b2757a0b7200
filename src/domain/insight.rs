use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Impact {
    #[strum(to_string = "HIGH")]
    High,
    #[strum(to_string = "MEDIUM")]
    Medium,
    #[strum(to_string = "LOW")]
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum InsightCategory {
    Revenue,
    Efficiency,
    Strategy,
}

impl InsightCategory {
    pub fn icon(self) -> &'static str {
        match self {
            InsightCategory::Revenue => "💰",
            InsightCategory::Efficiency => "⚡",
            InsightCategory::Strategy => "🎯",
        }
    }
}

/// A static business insight shown on the insights tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Impact,
    pub category: InsightCategory,
}

/// The fixed insight set, generated once at startup.
pub fn generate_insights() -> Vec<Insight> {
    vec![
        Insight {
            id: 1,
            title: "Weekend Boost",
            description: "Weekends typically generate $116 more in sales compared to weekdays",
            impact: Impact::High,
            category: InsightCategory::Revenue,
        },
        Insight {
            id: 2,
            title: "Gas Sales Impact",
            description: "Each additional gallon of gas sold increases total sales by $1.27",
            impact: Impact::Medium,
            category: InsightCategory::Efficiency,
        },
        Insight {
            id: 3,
            title: "Lotto Performance",
            description: "Lotto sales have a 2.15x multiplier effect on total revenue",
            impact: Impact::High,
            category: InsightCategory::Revenue,
        },
        Insight {
            id: 4,
            title: "Peak Hours",
            description: "Focus on high-traffic periods to maximize gas and lotto sales",
            impact: Impact::Medium,
            category: InsightCategory::Strategy,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_four_insights_with_unique_ids() {
        let insights = generate_insights();
        assert_eq!(insights.len(), 4);
        let mut ids: Vec<u32> = insights.iter().map(|i| i.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(insights[0].title, "Weekend Boost");
        assert_eq!(insights[3].category, InsightCategory::Strategy);
    }

    #[test]
    fn impact_renders_as_badge_text() {
        assert_eq!(Impact::High.to_string(), "HIGH");
        assert_eq!(Impact::Medium.to_string(), "MEDIUM");
    }
}
