use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;
use crate::ui::utils::format_currency;

/// Dashboard text styles as methods on `egui::Ui`, so panels never build `RichText` by hand.
pub trait UiStyleExt {
    /// Small gray caption ("Source: fallback formula").
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Card title.
    fn label_header(&mut self, text: impl Into<String>);

    /// Column headers and field names.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// "Transport: HTTP" with a subdued key and a colored value.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// A dollar amount in the prediction color. `size` in points.
    fn amount(&mut self, value: f64, size: f32);

    /// Short all-caps tag (impact badges).
    fn badge(&mut self, text: impl Into<String>, color: Color32);

    /// Bold colored status text (health badge).
    fn status(&mut self, text: &str, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).strong());
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).color(color));
        });
    }

    fn amount(&mut self, value: f64, size: f32) {
        self.label(
            RichText::new(format_currency(value))
                .size(size)
                .strong()
                .color(UI_CONFIG.colors.prediction_amount),
        );
    }

    fn badge(&mut self, text: impl Into<String>, color: Color32) {
        self.label(RichText::new(text.into().to_uppercase()).small().strong().color(color));
    }

    fn status(&mut self, text: &str, color: Color32) {
        self.label(RichText::new(text).strong().color(color));
    }
}
