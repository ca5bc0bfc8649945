//! Enclosure parameter panel

use ec_core::{EnclosureParams, PartKind};

use crate::state::{AnnotationTarget, AppAction, SharedAppState};
use crate::theme::palette;

/// Side panel for editing enclosure parameters
#[derive(Default)]
pub struct ParamsPanel;

impl ParamsPanel {
    /// Create a new params panel
    pub fn new() -> Self {
        Self
    }

    /// Render the panel.
    ///
    /// Edits apply to the shared parameters directly; file and annotation
    /// target changes are queued as [`AppAction`]s.
    pub fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut state = app_state.lock();

        ui.heading("Enclosure");
        ui.separator();

        dimension_sliders(ui, &mut state.params);

        ui.separator();
        ui.checkbox(&mut state.params.water_proof, "Waterproof");
        ui.add_enabled_ui(state.params.water_proof, |ui| {
            mm_slider(ui, "Seal", &mut state.params.seal_thickness, 0.5..=10.0);
        });

        ui.separator();
        ui.label("Show");
        ui.horizontal(|ui| {
            ui.checkbox(&mut state.params.show_base, "Base");
            ui.checkbox(&mut state.params.show_lid, "Lid");
            ui.checkbox(&mut state.params.show_dimensions, "Dimensions");
        });

        let mut target = state.annotation_target;
        egui::ComboBox::from_label("Annotate")
            .selected_text(target.label())
            .show_ui(ui, |ui| {
                for option in [
                    AnnotationTarget::AllVisible,
                    AnnotationTarget::Part(PartKind::Base),
                    AnnotationTarget::Part(PartKind::Lid),
                    AnnotationTarget::Part(PartKind::Seal),
                ] {
                    ui.selectable_value(&mut target, option, option.label());
                }
            });
        if target != state.annotation_target {
            state.queue_action(AppAction::SetAnnotationTarget(target));
        }

        ui.separator();
        ui.label("Measurements");
        let dims = state.dimensions().to_vec();
        if dims.is_empty() {
            ui.colored_label(palette::TEXT_SECONDARY, "No dimensions for this part");
        }
        egui::Grid::new("measurements").striped(true).show(ui, |ui| {
            for dim in &dims {
                let [r, g, b] = dim.color.0;
                ui.colored_label(egui::Color32::from_rgb(r, g, b), dim.axis.name());
                ui.label(&dim.label);
                ui.end_row();
            }
        });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Open…").clicked() {
                if let Some(path) = pick_file(false) {
                    state.queue_action(AppAction::LoadParams(path));
                }
            }
            if ui.button("Save…").clicked() {
                if let Some(path) = pick_file(true) {
                    state.queue_action(AppAction::SaveParams(path));
                }
            }
            if ui.button("Reset").clicked() {
                state.queue_action(AppAction::ResetParams);
            }
        });

        if let Some(status) = &state.status {
            ui.colored_label(palette::TEXT_SECONDARY, status);
        }
    }
}

fn dimension_sliders(ui: &mut egui::Ui, params: &mut EnclosureParams) {
    mm_slider(ui, "Length", &mut params.length, 10.0..=500.0);
    mm_slider(ui, "Width", &mut params.width, 10.0..=500.0);
    mm_slider(ui, "Height", &mut params.height, 5.0..=300.0);
    mm_slider(ui, "Roof", &mut params.roof, 0.5..=10.0);
    mm_slider(ui, "Floor", &mut params.floor, 0.5..=10.0);
    mm_slider(ui, "Wall", &mut params.wall, 0.5..=10.0);
    mm_slider(ui, "Corner radius", &mut params.corner_radius, 0.0..=20.0);
}

fn mm_slider(ui: &mut egui::Ui, label: &str, value: &mut f64, range: std::ops::RangeInclusive<f64>) {
    ui.add(
        egui::Slider::new(value, range)
            .text(label)
            .suffix(" mm")
            .fixed_decimals(1),
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn pick_file(save: bool) -> Option<std::path::PathBuf> {
    let dialog = rfd::FileDialog::new().add_filter("Enclosure parameters", &["ron"]);
    if save {
        dialog.set_file_name("enclosure.ron").save_file()
    } else {
        dialog.pick_file()
    }
}

#[cfg(target_arch = "wasm32")]
fn pick_file(_save: bool) -> Option<std::path::PathBuf> {
    tracing::warn!("File actions are not supported in WASM");
    None
}
