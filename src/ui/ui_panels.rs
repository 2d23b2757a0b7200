use eframe::egui::{Button, ComboBox, DragValue, Grid, RichText, Slider, Ui};
use strum::IntoEnumIterator;

use crate::config::INPUT_LIMITS;
use crate::domain::{ChartDatum, DayType, InputRecord, Insight, StepDirection};
use crate::engine::DashboardTab;
use crate::models::{HistoryEntry, PredictionResult, PredictionSource, ScenarioResult};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{
    card, colored_subsection_heading, format_currency, format_quantity, impact_color,
    spaced_separator,
};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

pub fn tab_label(tab: DashboardTab) -> &'static str {
    match tab {
        DashboardTab::Predictor => UI_TEXT.tab_predictor,
        DashboardTab::Insights => UI_TEXT.tab_insights,
        DashboardTab::Scenarios => UI_TEXT.tab_scenarios,
        DashboardTab::History => UI_TEXT.tab_history,
    }
}

fn day_type_option(day_type: DayType) -> &'static str {
    match day_type {
        DayType::Weekday => UI_TEXT.weekday_option,
        DayType::Weekend => UI_TEXT.weekend_option,
    }
}

/// Row of tab buttons
pub struct TabBarPanel {
    active: DashboardTab,
}

impl TabBarPanel {
    pub fn new(active: DashboardTab) -> Self {
        Self { active }
    }
}

impl Panel for TabBarPanel {
    type Event = DashboardTab;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            for tab in DashboardTab::iter() {
                if ui.selectable_label(self.active == tab, tab_label(tab)).clicked()
                    && self.active != tab
                {
                    self.active = tab;
                    events.push(tab);
                }
            }
        });
        events
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    FuelVolume(f64),
    StepFuelVolume(StepDirection),
    LottoRevenue(f64),
    StepLottoRevenue(StepDirection),
    DayType(DayType),
    Predict,
}

/// Slider/stepper changes to a single amount
enum AmountChange {
    Set(f64),
    Step(StepDirection),
}

/// The "Enter Today's Data" card
pub struct InputPanel {
    inputs: InputRecord,
    is_predicting: bool,
}

impl InputPanel {
    pub fn new(inputs: InputRecord, is_predicting: bool) -> Self {
        Self {
            inputs,
            is_predicting,
        }
    }

    fn render_amount(
        ui: &mut Ui,
        label: &str,
        value: f64,
        max: f64,
        current_text: String,
    ) -> Vec<AmountChange> {
        let mut changes = Vec::new();

        ui.label(colored_subsection_heading(label));

        let mut slider_value = value;
        if ui
            .add(
                Slider::new(&mut slider_value, 0.0..=max)
                    .step_by(INPUT_LIMITS.step)
                    .show_value(false),
            )
            .changed()
        {
            changes.push(AmountChange::Set(slider_value));
        }

        ui.horizontal(|ui| {
            let mut typed_value = value;
            if ui
                .add(
                    DragValue::new(&mut typed_value)
                        .range(0.0..=max)
                        .speed(INPUT_LIMITS.step),
                )
                .changed()
            {
                changes.push(AmountChange::Set(typed_value));
            }
            if ui.add(Button::new("-").small()).clicked() {
                changes.push(AmountChange::Step(StepDirection::Down));
            }
            if ui.add(Button::new("+").small()).clicked() {
                changes.push(AmountChange::Step(StepDirection::Up));
            }
        });
        ui.label_subdued(current_text);
        ui.add_space(8.0);

        changes
    }

    fn render_day_type(&mut self, ui: &mut Ui) -> Option<DayType> {
        let mut changed = None;
        ui.label(colored_subsection_heading(UI_TEXT.day_type_label));

        let mut selected = self.inputs.day_type();
        ComboBox::from_id_salt("day_type")
            .selected_text(day_type_option(selected))
            .show_ui(ui, |ui| {
                for day_type in DayType::iter() {
                    if ui
                        .selectable_value(&mut selected, day_type, day_type_option(day_type))
                        .clicked()
                    {
                        changed = Some(day_type);
                    }
                }
            });
        ui.add_space(8.0);
        changed
    }
}

impl Panel for InputPanel {
    type Event = InputEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        card(ui, |ui| {
            ui.label_header(UI_TEXT.input_heading);
            ui.add_space(8.0);

            let fuel = self.inputs.fuel_volume();
            for change in Self::render_amount(
                ui,
                UI_TEXT.fuel_volume_label,
                fuel,
                INPUT_LIMITS.fuel_volume_max,
                format!("Current: {}{}", format_quantity(fuel), UI_TEXT.fuel_volume_suffix),
            ) {
                events.push(match change {
                    AmountChange::Set(value) => InputEvent::FuelVolume(value),
                    AmountChange::Step(direction) => InputEvent::StepFuelVolume(direction),
                });
            }

            let lotto = self.inputs.lotto_revenue();
            for change in Self::render_amount(
                ui,
                UI_TEXT.lotto_revenue_label,
                lotto,
                INPUT_LIMITS.lotto_revenue_max,
                format!("Current: {}", format_currency(lotto)),
            ) {
                events.push(match change {
                    AmountChange::Set(value) => InputEvent::LottoRevenue(value),
                    AmountChange::Step(direction) => InputEvent::StepLottoRevenue(direction),
                });
            }

            if let Some(day_type) = self.render_day_type(ui) {
                events.push(InputEvent::DayType(day_type));
            }

            let button_text = if self.is_predicting {
                UI_TEXT.predicting_button
            } else {
                UI_TEXT.predict_button
            };
            let button = Button::new(RichText::new(button_text).strong())
                .min_size([ui.available_width(), 32.0].into());
            if ui.add_enabled(!self.is_predicting, button).clicked() {
                events.push(InputEvent::Predict);
            }
        });

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions && !events.is_empty() {
            log::info!("Input events: {:?}", events);
        }

        events
    }
}

/// Read-only card for the most recent prediction
pub struct PredictionCard<'a> {
    pub result: &'a PredictionResult,
    /// Time label of the matching history entry
    pub timestamp: Option<&'a str>,
}

impl PredictionCard<'_> {
    pub fn show(&self, ui: &mut Ui) {
        card(ui, |ui| {
            ui.label_subheader(UI_TEXT.prediction_heading);
            ui.amount(self.result.predicted_sales(), 32.0);
            spaced_separator(ui);

            let inputs = self.result.source_inputs();
            ui.label(format!("⛽ Gas: {} gallons", format_quantity(inputs.fuel_volume())));
            ui.label(format!("🎫 Lotto: {}", format_currency(inputs.lotto_revenue())));
            ui.label(format!("📅 Day: {}", inputs.day_type()));
            if let Some(timestamp) = self.timestamp {
                ui.label(format!("🕒 Time: {}", timestamp));
            }
            match self.result.source() {
                PredictionSource::Remote => ui.label_subdued(UI_TEXT.source_remote),
                PredictionSource::Fallback => ui.label_subdued(UI_TEXT.source_fallback),
            }
        });
    }
}

/// Insight list. `compact` renders the short "quick insights" variant.
pub struct InsightsPanel<'a> {
    pub insights: &'a [Insight],
    pub compact: bool,
}

impl InsightsPanel<'_> {
    pub fn show(&self, ui: &mut Ui) {
        card(ui, |ui| {
            if self.compact {
                ui.label_header(UI_TEXT.quick_insights_heading);
            } else {
                ui.label_header(UI_TEXT.insights_heading);
            }
            ui.add_space(6.0);

            let count = if self.compact {
                UI_CONFIG.quick_insight_count
            } else {
                self.insights.len()
            };

            for insight in self.insights.iter().take(count) {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        if !self.compact {
                            ui.label(RichText::new(insight.category.icon()).size(20.0));
                        }
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(insight.title)
                                    .strong()
                                    .color(impact_color(insight.impact)),
                            );
                            ui.label(insight.description);
                            if !self.compact {
                                ui.badge(
                                    format!("{}{}", insight.impact, UI_TEXT.impact_suffix),
                                    impact_color(insight.impact),
                                );
                            }
                        });
                    });
                });
                ui.add_space(4.0);
            }
        });
    }
}

pub struct ScenarioPanel<'a> {
    pub results: &'a [ScenarioResult],
}

impl ScenarioPanel<'_> {
    pub fn show(&self, ui: &mut Ui) {
        card(ui, |ui| {
            ui.label_header(UI_TEXT.scenarios_heading);
            ui.add_space(6.0);

            ui.columns(self.results.len().max(1), |columns| {
                for (ui, result) in columns.iter_mut().zip(self.results) {
                    ui.group(|ui| {
                        let scenario = &result.scenario;
                        ui.label_subheader(scenario.name);
                        ui.amount(result.predicted_sales, 22.0);
                        ui.label(format!(
                            "⛽ Gas: {} gallons",
                            format_quantity(scenario.fuel_volume)
                        ));
                        ui.label(format!("🎫 Lotto: {}", format_currency(scenario.lotto_revenue)));
                        ui.label(format!("📅 {}", scenario.day_type));
                        ui.label_subdued(scenario.description);
                    });
                }
            });
        });
    }
}

pub struct HistoryPanel<'a> {
    pub entries: Vec<&'a HistoryEntry>,
}

impl HistoryPanel<'_> {
    pub fn show(&self, ui: &mut Ui) {
        card(ui, |ui| {
            ui.label_header(UI_TEXT.history_heading);
            ui.add_space(6.0);

            if self.entries.is_empty() {
                ui.label_subdued(UI_TEXT.history_empty);
                return;
            }

            Grid::new("history_table")
                .striped(true)
                .num_columns(6)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for header in ["Time", "Gas", "Lotto", "Day", "Predicted", "Source"] {
                        ui.label_subheader(header);
                    }
                    ui.end_row();

                    for entry in &self.entries {
                        ui.label(entry.timestamp.as_str());
                        ui.label(format!("{} gal", format_quantity(entry.inputs.fuel_volume())));
                        ui.label(format_currency(entry.inputs.lotto_revenue()));
                        ui.label(entry.inputs.day_type().label());
                        ui.amount(entry.predicted_value, 14.0);
                        ui.label_subdued(match entry.source {
                            PredictionSource::Remote => "API",
                            PredictionSource::Fallback => "Fallback",
                        });
                        ui.end_row();
                    }
                });
        });
    }
}

pub struct DataTablePanel<'a> {
    pub data: &'a [ChartDatum],
}

impl DataTablePanel<'_> {
    pub fn show(&self, ui: &mut Ui) {
        card(ui, |ui| {
            ui.label_header(UI_TEXT.data_table_heading);
            ui.add_space(6.0);

            Grid::new("sales_data_table")
                .striped(true)
                .num_columns(5)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for header in ["Date", "Total Sales", "Gas Sold", "Lotto Sales", "Day Type"] {
                        ui.label_subheader(header);
                    }
                    ui.end_row();

                    for datum in self.data {
                        ui.label(datum.label.as_str());
                        ui.label(format_currency(datum.total_sales));
                        ui.label(format!("{} gal", format_quantity(datum.gas_sold)));
                        ui.label(format_currency(datum.lotto_sales));
                        ui.label(datum.day_type_label.as_str());
                        ui.end_row();
                    }
                });
        });
    }
}
