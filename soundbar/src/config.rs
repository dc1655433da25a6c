use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_NAME: &str = "Samsung Soundbar";
pub const DEFAULT_PORT: u16 = 56001;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_VOLUME_STEP: f64 = 0.1;

/// Whether one HTTP client is shared by every request or built per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
  #[default]
  Shared,
  PerRequest,
}

/// Settings for a single soundbar client
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SoundbarConfig {
  /// May be left out of a config file and supplied later; an empty host is
  /// rejected when the client is built.
  #[serde(default)]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default = "default_name")]
  pub name: String,
  #[serde(default = "default_timeout_ms")]
  pub timeout_ms: u64,
  #[serde(default)]
  pub session: SessionMode,
  #[serde(default = "default_volume_step")]
  pub volume_step: f64,
}

impl SoundbarConfig {
  pub fn new(host: impl Into<String>) -> Self {
    Self {
      host: host.into(),
      port: DEFAULT_PORT,
      name: DEFAULT_NAME.to_string(),
      timeout_ms: DEFAULT_TIMEOUT_MS,
      session: SessionMode::default(),
      volume_step: DEFAULT_VOLUME_STEP,
    }
  }

  pub fn with_port(mut self, port: u16) -> Self {
    self.port = port;
    self
  }

  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout_ms = timeout.as_millis() as u64;
    self
  }

  pub fn with_session(mut self, session: SessionMode) -> Self {
    self.session = session;
    self
  }

  pub fn with_volume_step(mut self, step: f64) -> Self {
    self.volume_step = step;
    self
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_millis(self.timeout_ms)
  }
}

fn default_port() -> u16 {
  DEFAULT_PORT
}

fn default_name() -> String {
  DEFAULT_NAME.to_string()
}

fn default_timeout_ms() -> u64 {
  DEFAULT_TIMEOUT_MS
}

fn default_volume_step() -> f64 {
  DEFAULT_VOLUME_STEP
}
