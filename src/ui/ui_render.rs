use eframe::egui::{
    Align, CentralPanel, Context, Frame, Layout, Margin, ScrollArea, SidePanel,
    TopBottomPanel, Ui,
};

use crate::config::PLOT_CONFIG;
use crate::domain::HealthStatus;
use crate::engine::{Action, DashboardTab};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    DataTablePanel, HistoryPanel, InputEvent, InputPanel, InsightsPanel, Panel, PredictionCard,
    ScenarioPanel, TabBarPanel,
};
use crate::ui::ui_plot_view::{show_bar_chart, show_pie_chart, show_trend_chart};

use super::app::DashboardApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl DashboardApp {
    pub(super) fn render_header_panel(&mut self, ctx: &Context) {
        let header_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(16, 10));

        TopBottomPanel::top("header_panel")
            .frame(header_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label_header(UI_TEXT.app_title);
                        ui.label_subdued(UI_TEXT.app_subtitle);
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        self.render_health_badge(ui);
                    });
                });
                ui.add_space(6.0);

                let mut tab_bar = TabBarPanel::new(self.engine.state().active_tab);
                for tab in tab_bar.render(ui) {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("Tab selected: {:?}", tab);
                    }
                    self.engine.dispatch(Action::SelectTab(tab));
                }
            });
    }

    /// Reflects the startup probe only; individual predictions report their own source.
    fn render_health_badge(&self, ui: &mut Ui) {
        // Right-to-left layout: rightmost widget first
        match self.engine.state().health {
            HealthStatus::Checking => {
                ui.label(UI_TEXT.status_checking);
                ui.spinner();
            }
            HealthStatus::Healthy => {
                ui.status(UI_TEXT.status_healthy, UI_CONFIG.colors.status_healthy);
            }
            HealthStatus::Unhealthy => {
                ui.status(UI_TEXT.status_unhealthy, UI_CONFIG.colors.status_unhealthy);
            }
        }
        ui.label_subdued(UI_TEXT.status_prefix);
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));

        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                let state = self.engine.state();
                ui.horizontal(|ui| {
                    ui.metric("Transport", self.engine.transport(), UI_CONFIG.colors.heading);
                    ui.separator();
                    ui.metric(
                        "History",
                        &format!("{}/{}", state.history.len(), state.history.capacity()),
                        UI_CONFIG.colors.heading,
                    );
                    if state.is_predicting() {
                        ui.separator();
                        ui.spinner();
                        ui.label_subdued(format!("{} in flight", state.predictions_in_flight));
                    }
                });
            });
    }

    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(10));

        SidePanel::left("input_panel")
            .resizable(false)
            .exact_width(UI_CONFIG.side_panel_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("input_scroll")
                    .show(ui, |ui| {
                        let state = self.engine.state();
                        let mut input_panel = InputPanel::new(state.inputs, state.is_predicting());
                        let events = input_panel.render(ui);
                        self.handle_input_events(events);

                        let state = self.engine.state();
                        if let Some(result) = &state.latest_prediction {
                            PredictionCard {
                                result,
                                timestamp: state.history.head().map(|e| e.timestamp.as_str()),
                            }
                            .show(ui);
                        }

                        if state.active_tab == DashboardTab::Predictor && !state.insights.is_empty() {
                            InsightsPanel {
                                insights: &state.insights,
                                compact: true,
                            }
                            .show(ui);
                        }
                    });
            });
    }

    fn handle_input_events(&mut self, events: Vec<InputEvent>) {
        for event in events {
            match event {
                InputEvent::FuelVolume(value) => self.engine.dispatch(Action::SetFuelVolume(value)),
                InputEvent::StepFuelVolume(direction) => {
                    self.engine.dispatch(Action::StepFuelVolume(direction))
                }
                InputEvent::LottoRevenue(value) => {
                    self.engine.dispatch(Action::SetLottoRevenue(value))
                }
                InputEvent::StepLottoRevenue(direction) => {
                    self.engine.dispatch(Action::StepLottoRevenue(direction))
                }
                InputEvent::DayType(day_type) => self.engine.dispatch(Action::SetDayType(day_type)),
                InputEvent::Predict => {
                    let job_id = self.engine.request_prediction();
                    log::info!("Prediction #{} requested", job_id);
                }
            }
        }
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("tab_scroll")
                    .show(ui, |ui| match self.engine.state().active_tab {
                        DashboardTab::Predictor => self.render_predictor_tab(ui),
                        DashboardTab::Insights => InsightsPanel {
                            insights: &self.engine.state().insights,
                            compact: false,
                        }
                        .show(ui),
                        DashboardTab::Scenarios => ScenarioPanel {
                            results: &self.engine.state().scenarios(),
                        }
                        .show(ui),
                        DashboardTab::History => HistoryPanel {
                            entries: self.engine.state().history.iter().collect(),
                        }
                        .show(ui),
                    });
            });
    }

    fn render_predictor_tab(&self, ui: &mut Ui) {
        let data = &self.engine.state().chart_data;

        show_trend_chart(ui, data);
        if data.is_empty() {
            return;
        }

        ui.columns(2, |columns| {
            show_bar_chart(&mut columns[0], data);
            show_pie_chart(&mut columns[1], data);
        });

        DataTablePanel {
            data: &data[..data.len().min(PLOT_CONFIG.table_records)],
        }
        .show(ui);
    }
}
