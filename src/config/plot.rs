//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub total_sales_color: Color32,
    pub gas_sold_color: Color32,
    pub lotto_sales_color: Color32,
    /// Bar fill for the sales distribution chart
    pub bar_color: Color32,
    pub weekday_color: Color32,
    pub weekend_color: Color32,
    /// Height of the main trend chart in points
    pub trend_chart_height: f32,
    /// Height of the smaller bar/pie charts in points
    pub small_chart_height: f32,
    /// Width of each bar (in x-axis units, one unit per record)
    pub bar_width: f64,
    /// Number of records shown in the bar chart
    pub bar_chart_records: usize,
    /// Number of records shown in the data table
    pub table_records: usize,
    /// Vertices used to approximate a full circle in the pie chart
    pub pie_segments: usize,
    pub line_width: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    total_sales_color: Color32::from_rgb(0x88, 0x84, 0xd8), // Lavender
    gas_sold_color: Color32::from_rgb(0x82, 0xca, 0x9d),    // Mint
    lotto_sales_color: Color32::from_rgb(0xff, 0xc6, 0x58), // Amber
    bar_color: Color32::from_rgb(0x88, 0x84, 0xd8),
    weekday_color: Color32::from_rgb(0x00, 0x88, 0xfe), // Blue
    weekend_color: Color32::from_rgb(0x00, 0xc4, 0x9f), // Teal
    trend_chart_height: 300.0,
    small_chart_height: 250.0,
    bar_width: 0.6,
    bar_chart_records: 6,
    table_records: 10,
    pie_segments: 96,
    line_width: 2.0,
};
