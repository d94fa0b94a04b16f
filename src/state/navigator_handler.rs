//! Overview navigator and era filter action handler.
//!
//! Pure functions that transform AppState in response to zoom, pan and
//! era filter actions.

use crate::model::{Era, KeyAction};
use crate::state::AppState;
use tracing::{debug, warn};

/// Handle a navigator or era filter action.
///
/// Actions that do not concern the overview leave the state unchanged.
pub fn handle_navigator_action(state: &mut AppState, action: KeyAction) {
    match action {
        KeyAction::ZoomIn => state.zoom_in(),
        KeyAction::ZoomOut => state.zoom_out(),
        KeyAction::PanLeft => state.pan_left(),
        KeyAction::PanRight => state.pan_right(),
        KeyAction::ResetView => state.reset_view(),
        KeyAction::CenterOnSelection => state.center_on_selection(),
        KeyAction::ZoomToEra => state.zoom_to_selected_era(),
        KeyAction::ToggleEra(index) => match Era::from_index(index) {
            Some(era) => state.toggle_era(era),
            None => warn!(index, "Ignoring toggle of unknown era"),
        },
        KeyAction::ShowAllEras => state.show_all_eras(),
        _ => return,
    }

    if action.moves_view() {
        let range = state.view_range();
        debug!(?action, start = range.start(), end = range.end(), "Navigator action");
    }
}
