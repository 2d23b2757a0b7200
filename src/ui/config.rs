use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card_fill: Color32,
    pub prediction_amount: Color32,
    pub status_healthy: Color32,
    pub status_unhealthy: Color32,
    pub impact_high: Color32,
    pub impact_medium: Color32,
    pub impact_low: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
    /// Insights shown in the quick insights card on the predictor tab
    pub quick_insight_count: usize,
    pub card_spacing: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::from_rgb(0xf0, 0xf0, 0xff),
        subsection_heading: Color32::from_rgb(0x88, 0x84, 0xd8),
        central_panel: Color32::from_rgb(28, 30, 40),
        side_panel: Color32::from_rgb(22, 22, 30),
        card_fill: Color32::from_rgb(38, 40, 54),
        prediction_amount: Color32::from_rgb(0x82, 0xca, 0x9d),
        status_healthy: Color32::from_rgb(100, 210, 120),
        status_unhealthy: Color32::from_rgb(255, 100, 100),
        impact_high: Color32::from_rgb(255, 120, 120),
        impact_medium: Color32::from_rgb(255, 198, 88),
        impact_low: Color32::from_rgb(130, 200, 140),
    },
    side_panel_width: 320.0,
    quick_insight_count: 2,
    card_spacing: 12.0,
};
