use eframe::egui::{Color32, Context, CornerRadius, Frame, Margin, RichText, Ui, Visuals};

use crate::domain::Impact;
use crate::ui::config::UI_CONFIG;

/// Creates a sub-section heading using the configured color
pub fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Draws a filled, padded card and runs `add_contents` inside it
pub fn card<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let inner = Frame::new()
        .fill(UI_CONFIG.colors.card_fill)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner;
    ui.add_space(UI_CONFIG.card_spacing);
    inner
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(6.0);
    ui.separator();
    ui.add_space(6.0);
}

pub fn impact_color(impact: Impact) -> Color32 {
    match impact {
        Impact::High => UI_CONFIG.colors.impact_high,
        Impact::Medium => UI_CONFIG.colors.impact_medium,
        Impact::Low => UI_CONFIG.colors.impact_low,
    }
}

/// Formats a dollar amount the way the dashboard shows it: whole numbers
/// without decimals ("$1200"), everything else with cents ("$1208.26").
pub fn format_currency(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Same rule as `format_currency`, without the dollar sign.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_drops_cents_only_for_whole_amounts() {
        assert_eq!(format_currency(1200.0), "$1200");
        assert_eq!(format_currency(1208.26), "$1208.26");
        assert_eq!(format_currency(973.9), "$973.90");
    }

    #[test]
    fn quantity_matches_currency_rule() {
        assert_eq!(format_quantity(500.0), "500");
        assert_eq!(format_quantity(12.5), "12.50");
    }
}
