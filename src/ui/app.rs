use std::sync::Arc;

use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};

use crate::data::SalesApi;
use crate::domain::InputRecord;
use crate::engine::{DashboardEngine, DashboardState, DashboardTab};
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// What survives a restart. History, health and chart data are session-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub inputs: InputRecord,
    pub active_tab: DashboardTab,
}

impl PersistedState {
    pub fn from_state(state: &DashboardState) -> Self {
        Self {
            inputs: state.inputs,
            active_tab: state.active_tab,
        }
    }
}

pub struct DashboardApp {
    pub(super) engine: DashboardEngine,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, api: Arc<dyn SalesApi>) -> Self {
        let persisted = cc
            .storage
            .and_then(|storage| {
                let value = eframe::get_value::<PersistedState>(storage, eframe::APP_KEY);
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    match &value {
                        Some(state) => log::info!("Successfully loaded persisted state: {:?}", state),
                        None => log::info!("No persisted dashboard state found. Creating anew."),
                    }
                }
                value
            })
            .unwrap_or_default();

        Self::with_persisted(api, persisted)
    }

    /// Builds the app from already-loaded state and kicks off the startup requests.
    pub fn with_persisted(api: Arc<dyn SalesApi>, persisted: PersistedState) -> Self {
        let state = DashboardState::with_persisted(persisted.inputs, persisted.active_tab);
        let mut engine = DashboardEngine::new(api, state);
        engine.start();
        Self { engine }
    }

    pub fn engine(&self) -> &DashboardEngine {
        &self.engine
    }
}

impl eframe::App for DashboardApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let persisted = PersistedState::from_state(self.engine.state());
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Saving dashboard state: {:?}", persisted);
        }
        eframe::set_value(storage, eframe::APP_KEY, &persisted);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Fold in finished requests before drawing
        if self.engine.update() {
            ctx.request_repaint();
        }

        self.render_header_panel(ctx);
        self.render_status_panel(ctx);
        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
    }
}
