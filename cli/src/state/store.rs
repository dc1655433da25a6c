use std::sync::{Mutex, PoisonError};

use soundbar::DeviceSnapshot;

use crate::views::ViewType;

use super::reducers::{self, AppAction};

pub struct AppState {
  pub view: ViewType,
  pub name: String,
  pub endpoint: String,
  pub snapshot: DeviceSnapshot,
  pub status_message: String,
  pub error: Option<String>,
}

impl Default for AppState {
  fn default() -> Self {
    Self {
      view: ViewType::Startup,
      name: String::new(),
      endpoint: String::new(),
      snapshot: DeviceSnapshot::default(),
      status_message: String::new(),
      error: None,
    }
  }
}

pub struct Store {
  state: Mutex<AppState>,
}

impl Store {
  pub fn new() -> Self {
    Self {
      state: Mutex::new(AppState::default()),
    }
  }

  pub fn dispatch(&self, action: AppAction) {
    let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
    reducers::app_reducer(&mut state, action);
  }

  pub fn with_state<F, T>(&self, f: F) -> T
  where
    F: FnOnce(&AppState) -> T
  {
    let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
    f(&state)
  }
}

impl Default for Store {
  fn default() -> Self {
    Self::new()
  }
}
