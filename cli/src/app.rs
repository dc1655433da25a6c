use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind};
use futures::StreamExt;
use log::{error, info, warn};
use ratatui::{DefaultTerminal, Frame};
use soundbar::{DeviceClient, Source};
use tokio::task::JoinSet;
use tokio::time::{self, MissedTickBehavior};

use crate::commands::ControlCommand;
use crate::state::reducers::AppAction;
use crate::state::store::Store;
use crate::views::control::ControlView;
use crate::views::error::ErrorView;
use crate::views::startup::StartupView;
use crate::views::{View, ViewType};

/// Device calls run as background tasks so a slow or unreachable soundbar
/// never stalls drawing or key handling. Each finished task wakes the loop
/// for a redraw.
pub struct App {
    store: Arc<Store>,
    device: Option<Arc<dyn DeviceClient>>,
    poll_interval: Duration,
    polling: Arc<AtomicBool>,
    tasks: JoinSet<()>,
    startup: StartupView,
    control: ControlView,
    error: ErrorView,
    exit: bool,
}

impl App {
    /// `device` is `None` when the client could not be built; the store is
    /// expected to hold the error in that case.
    pub fn new(store: Arc<Store>, device: Option<Arc<dyn DeviceClient>>, poll_interval: Duration) -> Self {
        let sources = device
            .as_ref()
            .map(|device| device.source_list())
            .unwrap_or_else(|| Source::ALL.to_vec());

        Self {
            startup: StartupView::new(store.clone()),
            control: ControlView::new(store.clone(), sources),
            error: ErrorView::new(store.clone()),
            store,
            device,
            poll_interval,
            polling: Arc::new(AtomicBool::new(false)),
            tasks: JoinSet::new(),
            exit: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        let mut events = EventStream::new();
        let mut ticker = time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while !self.exit {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = ticker.tick() => self.refresh(),
                Some(joined) = self.tasks.join_next() => {
                    if let Err(e) = joined {
                        error!("Device task failed: {}", e);
                    }
                }
                event = events.next() => match event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key(key_event);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e),
                    None => self.exit = true,
                },
            }
        }
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame) {
        match self.store.with_state(|state| state.view) {
            ViewType::Startup => self.startup.render(frame),
            ViewType::Control => self.control.render(frame),
            ViewType::Error => self.error.render(frame),
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('q') {
            self.exit = true;
            return;
        }

        let command = match self.store.with_state(|state| state.view) {
            ViewType::Startup => self.startup.handle_input(key_event, &self.store),
            ViewType::Control => self.control.handle_input(key_event, &self.store),
            ViewType::Error => self.error.handle_input(key_event, &self.store),
        };

        if let Some(command) = command {
            self.execute(command);
        }
    }

    /// Starts a poll unless one is still running
    pub fn refresh(&mut self) {
        let Some(device) = self.device.clone() else {
            return;
        };
        if self.polling.swap(true, Ordering::SeqCst) {
            return;
        }

        let store = self.store.clone();
        let polling = self.polling.clone();
        self.tasks.spawn(async move {
            let snapshot = device.poll().await;
            store.dispatch(AppAction::SetSnapshot(snapshot));
            polling.store(false, Ordering::SeqCst);
        });
    }

    /// Waits for every device call started so far
    pub async fn settle(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined {
                error!("Device task failed: {}", e);
            }
        }
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    fn execute(&mut self, command: ControlCommand) {
        let Some(device) = self.device.clone() else {
            return;
        };

        let store = self.store.clone();
        self.tasks.spawn(async move {
            let message = match command.execute(device.as_ref()).await {
                Ok(message) => {
                    info!("{}: {}", command.name(), message);
                    message
                }
                Err(e) => {
                    warn!("{} failed: {}", command.name(), e);
                    e.to_string()
                }
            };

            store.dispatch(AppAction::SetStatusMessage(message));
            store.dispatch(AppAction::SetSnapshot(device.snapshot()));
        });
    }
}
