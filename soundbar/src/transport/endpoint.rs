use crate::command::Command;
use crate::error::{Result, SoundbarError};

pub const UIC_PATH: &str = "/UIC?cmd=";

/// Network target for every command sent to one soundbar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEndpoint {
  host: String,
  port: u16,
}

impl DeviceEndpoint {
  pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
    let host = host.into().trim().to_string();
    if host.is_empty() {
      return Err(SoundbarError::InvalidConfig("host must not be empty".to_string()));
    }

    Ok(Self { host, port })
  }

  pub fn host(&self) -> &str {
    &self.host
  }

  pub fn port(&self) -> u16 {
    self.port
  }

  /// `http://{host}:{port}/UIC?cmd=`
  pub fn base_url(&self) -> String {
    format!("http://{}:{}{}", self.host, self.port, UIC_PATH)
  }

  pub fn command_url(&self, command: &Command) -> String {
    format!("{}{}", self.base_url(), command.encode())
  }
}
