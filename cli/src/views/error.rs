use std::sync::Arc;
use crossterm::event::KeyEvent;
use ratatui::{
  layout::Alignment,
  style::{ Style, Stylize },
  text::{ Line, Text },
  widgets::{ Paragraph, Wrap },
  Frame,
};

use crate::commands::ControlCommand;
use crate::state::store::Store;
use crate::widgets::{ logo, util };

use super::View;

pub struct ErrorView {
  store: Arc<Store>,
}

impl ErrorView {
  pub fn new(store: Arc<Store>) -> Self {
    Self { store }
  }

  fn get_error(&self) -> String {
    self.store.with_state(|state| {
      state.error.clone().unwrap_or_else(|| "Unknown error".to_string())
    })
  }
}

impl View for ErrorView {
  fn render(&mut self, frame: &mut Frame) {
    let rows = util::vertically_centered_rows(frame.area(), &[logo::logo_height(), 1, 2, 1]);

    let logo_paragraph = Paragraph::new(logo::logo()).alignment(Alignment::Center);
    frame.render_widget(logo_paragraph, rows[0]);

    let body = Text::from(Line::styled(self.get_error(), Style::new().red()));
    let body_paragraph = Paragraph::new(body).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(body_paragraph, rows[2]);

    let hint = Paragraph::new("Press q to quit").alignment(Alignment::Center);
    frame.render_widget(hint, rows[3]);
  }

  fn handle_input(&mut self, _key_event: KeyEvent, _store: &Store) -> Option<ControlCommand> {
    None
  }
}
