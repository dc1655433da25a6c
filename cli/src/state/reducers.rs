use soundbar::DeviceSnapshot;

use crate::views::ViewType;

use super::store::AppState;

#[derive(Debug)]
pub enum AppAction {
    SetDevice { name: String, endpoint: String },
    SetSnapshot(DeviceSnapshot),
    SetStatusMessage(String),
    SetError(String),
}

pub fn app_reducer(state: &mut AppState, action: AppAction) {
    match action {
        AppAction::SetDevice { name, endpoint } => {
            log::debug!("SetDevice action received: {} at {}", name, endpoint);
            state.name = name;
            state.endpoint = endpoint;
        }
        AppAction::SetSnapshot(snapshot) => {
            state.snapshot = snapshot;
            // A fatal setup error stays on screen
            if state.view == ViewType::Startup {
                log::debug!("First snapshot received, switching to Control view");
                state.view = ViewType::Control;
            }
        }
        AppAction::SetStatusMessage(message) => {
            state.status_message = message;
        }
        AppAction::SetError(message) => {
            log::debug!("SetError action received: {}", message);
            state.error = Some(message);
            state.view = ViewType::Error;
        }
    }
}
