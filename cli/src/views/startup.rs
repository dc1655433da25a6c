use std::sync::Arc;
use crossterm::event::KeyEvent;
use ratatui::{
  layout::Alignment,
  text::Text,
  widgets::Paragraph,
  Frame,
};

use crate::commands::ControlCommand;
use crate::state::store::Store;
use crate::widgets::{ logo, util };

use super::View;

pub struct StartupView {
  store: Arc<Store>,
}

impl StartupView {
  pub fn new(store: Arc<Store>) -> Self {
    Self { store }
  }

  fn get_status_message(&self) -> String {
    self.store.with_state(|state| format!("Connecting to {}...", state.endpoint))
  }
}

impl View for StartupView {
  fn render(&mut self, frame: &mut Frame) {
    let rows = util::vertically_centered_rows(frame.area(), &[logo::logo_height(), 1, 1]);

    let logo_paragraph = Paragraph::new(logo::logo()).alignment(Alignment::Center);
    frame.render_widget(logo_paragraph, rows[0]);

    let body_paragraph = Paragraph::new(Text::from(self.get_status_message())).alignment(Alignment::Center);
    frame.render_widget(body_paragraph, rows[2]);
  }

  fn handle_input(&mut self, _key_event: KeyEvent, _store: &Store) -> Option<ControlCommand> {
    None
  }
}
