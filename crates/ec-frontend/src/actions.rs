//! Action handlers

use ec_core::EnclosureParams;

use crate::state::{AppAction, AppState};

/// Apply an action to the app state
pub fn dispatch_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::SaveParams(path) => match state.params.save(&path) {
            Ok(()) => {
                tracing::info!("Saved parameters to {:?}", path);
                state.status = Some(format!("Saved {}", path.display()));
                state.params_path = Some(path);
            }
            Err(e) => {
                tracing::error!("Failed to save parameters: {}", e);
                state.status = Some(e.to_string());
            }
        },
        AppAction::LoadParams(path) => match EnclosureParams::load(&path) {
            Ok(params) => {
                tracing::info!("Loaded parameters from {:?}", path);
                state.params = params;
                state.status = Some(format!("Loaded {}", path.display()));
                state.params_path = Some(path);
            }
            Err(e) => {
                tracing::error!("Failed to load parameters: {}", e);
                state.status = Some(e.to_string());
            }
        },
        AppAction::ResetParams => {
            state.params = EnclosureParams::default();
            state.status = None;
        }
        AppAction::SetAnnotationTarget(target) => {
            state.annotation_target = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::state::AnnotationTarget;
    use ec_core::PartKind;

    #[test]
    fn test_load_missing_file_keeps_params() {
        let mut state = AppState::new();
        state.params.width = 42.0;
        dispatch_action(
            AppAction::LoadParams(PathBuf::from("/nonexistent/enclosure.ron")),
            &mut state,
        );
        assert_eq!(state.params.width, 42.0);
        assert!(state.status.is_some());
        assert!(state.params_path.is_none());
    }

    #[test]
    fn test_reset_and_target() {
        let mut state = AppState::new();
        state.params.height = 99.0;
        dispatch_action(AppAction::ResetParams, &mut state);
        assert_eq!(state.params, EnclosureParams::default());

        let target = AnnotationTarget::Part(PartKind::Seal);
        dispatch_action(AppAction::SetAnnotationTarget(target), &mut state);
        assert_eq!(state.annotation_target, target);
    }
}
