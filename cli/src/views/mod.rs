pub mod control;
pub mod error;
pub mod startup;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::commands::ControlCommand;
use crate::state::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
  Startup,
  Control,
  Error,
}

pub trait View {
  fn render(&mut self, frame: &mut Frame);
  /// Returns the device command the key maps to, if any
  fn handle_input(&mut self, key_event: KeyEvent, store: &Store) -> Option<ControlCommand>;
}
