/// Every user-visible string in one place.
pub struct UiText {
    pub window_title: &'static str,
    pub app_title: &'static str,
    pub app_subtitle: &'static str,

    // Health badge
    pub status_prefix: &'static str,
    pub status_checking: &'static str,
    pub status_healthy: &'static str,
    pub status_unhealthy: &'static str,

    // Tabs
    pub tab_predictor: &'static str,
    pub tab_insights: &'static str,
    pub tab_scenarios: &'static str,
    pub tab_history: &'static str,

    // Input card
    pub input_heading: &'static str,
    pub fuel_volume_label: &'static str,
    pub fuel_volume_suffix: &'static str,
    pub lotto_revenue_label: &'static str,
    pub day_type_label: &'static str,
    pub weekday_option: &'static str,
    pub weekend_option: &'static str,
    pub predict_button: &'static str,
    pub predicting_button: &'static str,

    // Prediction card
    pub prediction_heading: &'static str,
    pub source_remote: &'static str,
    pub source_fallback: &'static str,

    // Cards and charts
    pub quick_insights_heading: &'static str,
    pub insights_heading: &'static str,
    pub impact_suffix: &'static str,
    pub scenarios_heading: &'static str,
    pub history_heading: &'static str,
    pub history_empty: &'static str,
    pub trend_chart_heading: &'static str,
    pub bar_chart_heading: &'static str,
    pub pie_chart_heading: &'static str,
    pub data_table_heading: &'static str,
    pub chart_loading: &'static str,

    // Series names (appear in legends)
    pub series_total_sales: &'static str,
    pub series_gas_sold: &'static str,
    pub series_lotto_sales: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "Store Sales Intelligence Dashboard",
    app_title: "🏪 Store Sales Intelligence Dashboard",
    app_subtitle: "AI-Powered Sales Predictions & Business Insights",

    status_prefix: "API Status:",
    status_checking: "Checking...",
    status_healthy: "✅ Connected",
    status_unhealthy: "❌ Using Fallback Data",

    tab_predictor: "🎯 Sales Predictor",
    tab_insights: "📊 Business Insights",
    tab_scenarios: "🔄 Scenarios",
    tab_history: "📈 Prediction History",

    input_heading: "Enter Today's Data",
    fuel_volume_label: "Gas Sold (Gallons)",
    fuel_volume_suffix: " gallons",
    lotto_revenue_label: "Lotto Sales ($)",
    day_type_label: "Day Type",
    weekday_option: "📅 Weekday",
    weekend_option: "🎉 Weekend",
    predict_button: "🚀 Predict Sales",
    predicting_button: "🔮 Predicting...",

    prediction_heading: "Predicted Total Sales",
    source_remote: "Source: prediction service",
    source_fallback: "Source: local fallback formula",

    quick_insights_heading: "💡 Quick Insights",
    insights_heading: "📈 Business Intelligence",
    impact_suffix: " IMPACT",
    scenarios_heading: "🔄 Scenario Analysis",
    history_heading: "📊 Prediction History",
    history_empty: "No predictions yet. Make your first prediction!",
    trend_chart_heading: "Sales & Gas Trends",
    bar_chart_heading: "Sales Distribution",
    pie_chart_heading: "Day Type Distribution",
    data_table_heading: "Sales Data",
    chart_loading: "Loading sales data...",

    series_total_sales: "Total Sales ($)",
    series_gas_sold: "Gas Sold (Gallons)",
    series_lotto_sales: "Lotto Sales ($)",
};
