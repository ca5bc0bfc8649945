//! Main application module

use crate::actions::dispatch_action;
use crate::panels::{ParamsPanel, ViewportPanel};
use crate::state::{SharedAppState, create_shared_state};

/// Main application
pub struct EnclosureViewerApp {
    app_state: SharedAppState,
    params_panel: ParamsPanel,
    viewport_panel: ViewportPanel,
}

impl EnclosureViewerApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            app_state: create_shared_state(),
            params_panel: ParamsPanel::new(),
            viewport_panel: ViewportPanel::new(),
        }
    }

    fn process_actions(&mut self) {
        let mut state = self.app_state.lock();
        for action in state.take_pending_actions() {
            dispatch_action(action, &mut state);
        }
    }
}

impl eframe::App for EnclosureViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_actions();

        egui::SidePanel::left("params_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.params_panel.ui(ui, &self.app_state);
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.viewport_panel.ui(ui, &self.app_state);
            });
    }
}
