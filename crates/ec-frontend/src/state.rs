//! Application state

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;

use ec_core::{DimensionLine, EnclosureParams, PartKind, calculate_dimensions, visible_parts};

/// Which parts get dimension annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationTarget {
    /// A single part
    Part(PartKind),
    /// Every part currently shown
    #[default]
    AllVisible,
}

impl AnnotationTarget {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            AnnotationTarget::Part(PartKind::Base) => "Base",
            AnnotationTarget::Part(PartKind::Lid) => "Lid",
            AnnotationTarget::Part(PartKind::Seal) => "Seal",
            AnnotationTarget::AllVisible => "All visible",
        }
    }
}

/// Actions that can be performed on the app state
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Save parameters to a RON file
    SaveParams(PathBuf),
    /// Load parameters from a RON file
    LoadParams(PathBuf),
    /// Restore default parameters
    ResetParams,
    /// Change the annotated part(s)
    SetAnnotationTarget(AnnotationTarget),
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Enclosure parameters being edited
    pub params: EnclosureParams,
    /// Part(s) to annotate
    pub annotation_target: AnnotationTarget,
    /// Last file the parameters were saved to or loaded from
    pub params_path: Option<PathBuf>,
    /// Last status message for the panel footer
    pub status: Option<String>,
    pending_actions: Vec<AppAction>,
    dimensions: Vec<DimensionLine>,
    /// Inputs the cached dimensions were computed from
    computed_for: Option<(EnclosureParams, AnnotationTarget)>,
}

impl AppState {
    /// Create state with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action for the next update
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Drain queued actions
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Dimension lines for the current parameters and target.
    ///
    /// Recomputed only when a layout parameter, visibility flag or the target
    /// changed since the last call.
    pub fn dimensions(&mut self) -> &[DimensionLine] {
        let stale = match &self.computed_for {
            Some((params, target)) => {
                *target != self.annotation_target
                    || params.layout_differs(&self.params)
                    || params.show_base != self.params.show_base
                    || params.show_lid != self.params.show_lid
            }
            None => true,
        };

        if stale {
            self.dimensions = match self.annotation_target {
                AnnotationTarget::Part(part) => calculate_dimensions(&self.params, part),
                AnnotationTarget::AllVisible => visible_parts(&self.params)
                    .into_iter()
                    .flat_map(|part| calculate_dimensions(&self.params, part))
                    .collect(),
            };
            self.computed_for = Some((self.params.clone(), self.annotation_target));
            tracing::debug!(count = self.dimensions.len(), "dimension lines updated");
        }

        &self.dimensions
    }
}

/// Shared state handle
pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared state
pub fn create_shared_state() -> SharedAppState {
    Arc::new(Mutex::new(AppState::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_visible_annotates_each_part() {
        let mut state = AppState::new();
        assert_eq!(state.dimensions().len(), 9);

        state.params.water_proof = false;
        assert_eq!(state.dimensions().len(), 6);

        state.params.show_lid = false;
        assert_eq!(state.dimensions().len(), 3);
    }

    #[test]
    fn test_single_part_target() {
        let mut state = AppState::new();
        state.annotation_target = AnnotationTarget::Part(PartKind::Lid);
        let dims = state.dimensions();
        assert_eq!(dims.len(), 3);
        assert_eq!(dims[2].label, "2.0mm");
    }

    #[test]
    fn test_recomputes_on_layout_change_only() {
        let mut state = AppState::new();
        state.annotation_target = AnnotationTarget::Part(PartKind::Base);
        assert_eq!(state.dimensions()[0].label, "80.0mm");

        state.params.length = 90.0;
        assert_eq!(state.dimensions()[0].label, "90.0mm");

        state.params.corner_radius = 10.0;
        assert_eq!(state.dimensions()[0].label, "90.0mm");
    }

    #[test]
    fn test_actions_drain() {
        let mut state = AppState::new();
        state.queue_action(AppAction::ResetParams);
        assert_eq!(state.take_pending_actions().len(), 1);
        assert!(state.take_pending_actions().is_empty());
    }
}
