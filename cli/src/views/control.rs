use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph};
use ratatui::Frame;
use std::sync::Arc;

use soundbar::client::volume_to_percent;
use soundbar::{DeviceSnapshot, Source};

use crate::commands::ControlCommand;
use crate::state::store::Store;
use crate::widgets::selectable_list::SelectableList;

use super::View;

const HELP: &str = "↑/↓ source  enter select  ←/→ volume  m mute  p power  r refresh  q quit";

pub struct ControlView {
	store: Arc<Store>,
	sources: Vec<Source>,
	source_list: SelectableList,
}

impl ControlView {
	pub fn new(store: Arc<Store>, sources: Vec<Source>) -> Self {
		let source_list = SelectableList::new("Sources", source_labels(&sources, None));
		Self { store, sources, source_list }
	}

	fn get_header(&self) -> String {
		self.store.with_state(|state| format!("{} @ {}", state.name, state.endpoint))
	}

	fn get_snapshot(&self) -> DeviceSnapshot {
		self.store.with_state(|state| state.snapshot.clone())
	}

	fn get_status_message(&self) -> String {
		self.store.with_state(|state| state.status_message.clone())
	}
}

fn source_labels(sources: &[Source], active: Option<&str>) -> Vec<String> {
	sources
		.iter()
		.map(|source| {
			if active == Some(source.as_str()) {
				format!("{} (active)", source)
			} else {
				source.to_string()
			}
		})
		.collect()
}

fn status_line(snapshot: &DeviceSnapshot) -> Line<'static> {
	let muted = match snapshot.muted {
		Some(true) => "on",
		Some(false) => "off",
		None => "?",
	};
	let source = snapshot.source.clone().unwrap_or_else(|| "?".to_string());

	Line::from(vec![
		Span::raw("Power: "),
		Span::styled(snapshot.power.to_string(), Style::new().bold()),
		Span::raw("   Mute: "),
		Span::styled(muted, Style::new().bold()),
		Span::raw("   Source: "),
		Span::styled(source, Style::new().bold()),
	])
}

fn volume_gauge(volume: Option<f64>) -> Gauge<'static> {
	let gauge = Gauge::default().block(Block::bordered().title("Volume"));
	match volume {
		Some(level) => {
			let level = level.clamp(0.0, 1.0);
			gauge
				.ratio(level)
				.label(format!("{}%", volume_to_percent(level)))
		}
		None => gauge.ratio(0.0).label("unknown"),
	}
}

impl View for ControlView {
	fn render(&mut self, frame: &mut Frame) {
		let snapshot = self.get_snapshot();
		self.source_list
			.update_items(source_labels(&self.sources, snapshot.source.as_deref()));

		let [header, status, volume, list, message, help] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(3),
			Constraint::Min(3),
			Constraint::Length(1),
			Constraint::Length(1),
		])
		.areas(frame.area());

		let header_paragraph = Paragraph::new(self.get_header()).alignment(Alignment::Center).bold();
		frame.render_widget(header_paragraph, header);
		frame.render_widget(Paragraph::new(status_line(&snapshot)), status);
		frame.render_widget(volume_gauge(snapshot.volume), volume);

		self.source_list.draw(frame, list);

		frame.render_widget(Paragraph::new(self.get_status_message()), message);
		frame.render_widget(Paragraph::new(HELP).dim(), help);
	}

	fn handle_input(&mut self, key_event: KeyEvent, store: &Store) -> Option<ControlCommand> {
		match key_event.code {
			KeyCode::Up => {
				self.source_list.previous();
				None
			}
			KeyCode::Down => {
				self.source_list.next();
				None
			}
			KeyCode::Enter => self
				.source_list
				.selected()
				.and_then(|i| self.sources.get(i))
				.map(|source| ControlCommand::SelectSource(source.as_str().to_string())),
			KeyCode::Left => Some(ControlCommand::VolumeDown),
			KeyCode::Right => Some(ControlCommand::VolumeUp),
			KeyCode::Char('m') => {
				let muted = store.with_state(|state| state.snapshot.muted.unwrap_or(false));
				Some(ControlCommand::SetMute(!muted))
			}
			KeyCode::Char('p') => {
				let on = store.with_state(|state| state.snapshot.power.is_on());
				Some(ControlCommand::SetPower(!on))
			}
			KeyCode::Char('r') => Some(ControlCommand::Refresh),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crossterm::event::KeyModifiers;
	use ratatui::{backend::TestBackend, Terminal};
	use soundbar::PowerState;

	use crate::state::reducers::AppAction;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn store_with(snapshot: DeviceSnapshot) -> Arc<Store> {
		let store = Arc::new(Store::new());
		store.dispatch(AppAction::SetDevice {
			name: "Den".to_string(),
			endpoint: "10.0.0.7:56001".to_string(),
		});
		store.dispatch(AppAction::SetSnapshot(snapshot));
		store
	}

	fn rendered(view: &mut ControlView) -> String {
		let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
		terminal.draw(|frame| view.render(frame)).unwrap();

		let buffer = terminal.backend().buffer();
		let width = buffer.area.width as usize;
		buffer
			.content
			.chunks(width)
			.map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
			.collect::<Vec<_>>()
			.join("\n")
	}

	#[test]
	fn test_render_known_state() {
		let store = store_with(DeviceSnapshot {
			power: PowerState::On,
			volume: Some(0.57),
			muted: Some(false),
			source: Some("optical".to_string()),
			..DeviceSnapshot::default()
		});
		store.dispatch(AppAction::SetStatusMessage("Source: optical".to_string()));
		let mut view = ControlView::new(store, Source::ALL.to_vec());

		let screen = rendered(&mut view);

		assert!(screen.contains("Den @ 10.0.0.7:56001"));
		assert!(screen.contains("Power: on"));
		assert!(screen.contains("Mute: off"));
		assert!(screen.contains("57%"));
		assert!(screen.contains("optical (active)"));
		assert!(screen.contains("Source: optical"));
	}

	#[test]
	fn test_render_unknown_state() {
		let mut view = ControlView::new(store_with(DeviceSnapshot::default()), Source::ALL.to_vec());

		let screen = rendered(&mut view);

		assert!(screen.contains("Mute: ?"));
		assert!(screen.contains("unknown"));
		assert!(!screen.contains("(active)"));
	}

	#[test]
	fn test_enter_selects_highlighted_source() {
		let store = store_with(DeviceSnapshot::default());
		let mut view = ControlView::new(store.clone(), Source::ALL.to_vec());

		assert_eq!(view.handle_input(key(KeyCode::Down), &store), None);
		assert_eq!(view.handle_input(key(KeyCode::Down), &store), None);

		assert_eq!(
			view.handle_input(key(KeyCode::Enter), &store),
			Some(ControlCommand::SelectSource("optical".to_string()))
		);
	}

	#[test]
	fn test_toggles_follow_snapshot() {
		let store = store_with(DeviceSnapshot {
			power: PowerState::On,
			muted: Some(true),
			..DeviceSnapshot::default()
		});
		let mut view = ControlView::new(store.clone(), Source::ALL.to_vec());

		assert_eq!(view.handle_input(key(KeyCode::Char('m')), &store), Some(ControlCommand::SetMute(false)));
		assert_eq!(view.handle_input(key(KeyCode::Char('p')), &store), Some(ControlCommand::SetPower(false)));
	}

	#[test]
	fn test_unknown_mute_toggles_to_muted() {
		let store = store_with(DeviceSnapshot::default());
		let mut view = ControlView::new(store.clone(), Source::ALL.to_vec());

		assert_eq!(view.handle_input(key(KeyCode::Char('m')), &store), Some(ControlCommand::SetMute(true)));
		assert_eq!(view.handle_input(key(KeyCode::Char('p')), &store), Some(ControlCommand::SetPower(true)));
	}

	#[test]
	fn test_volume_and_refresh_keys() {
		let store = store_with(DeviceSnapshot::default());
		let mut view = ControlView::new(store.clone(), Source::ALL.to_vec());

		assert_eq!(view.handle_input(key(KeyCode::Left), &store), Some(ControlCommand::VolumeDown));
		assert_eq!(view.handle_input(key(KeyCode::Right), &store), Some(ControlCommand::VolumeUp));
		assert_eq!(view.handle_input(key(KeyCode::Char('r')), &store), Some(ControlCommand::Refresh));
		assert_eq!(view.handle_input(key(KeyCode::Char('x')), &store), None);
	}
}
