use std::time::Duration;

use log::debug;

use crate::command::Command;
use crate::config::SessionMode;
use crate::error::{Result, SoundbarError};
use crate::transport::endpoint::DeviceEndpoint;
use crate::xml;

pub struct UicResponse {
  pub body: String,
}

impl UicResponse {
  pub fn value(&self, tag: &str) -> Result<String> {
    xml::require_element_text(&self.body, tag)
  }
}

enum Session {
  Shared(reqwest::Client),
  PerRequest,
}

/// Sends UIC commands to one soundbar over HTTP GET
pub struct UicClient {
  endpoint: DeviceEndpoint,
  session: Session,
  timeout: Duration,
}

impl UicClient {
  pub fn new(endpoint: DeviceEndpoint, timeout: Duration, mode: SessionMode) -> Result<Self> {
    let session = match mode {
      SessionMode::Shared => Session::Shared(Self::build_http_client(timeout)?),
      SessionMode::PerRequest => Session::PerRequest,
    };

    Ok(Self {
      endpoint,
      session,
      timeout,
    })
  }

  pub fn endpoint(&self) -> &DeviceEndpoint {
    &self.endpoint
  }

  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  pub async fn call(&self, command: &Command) -> Result<UicResponse> {
    let url = self.endpoint.command_url(command);
    debug!("GET {}", url);

    let http_client = match &self.session {
      Session::Shared(client) => client.clone(),
      Session::PerRequest => Self::build_http_client(self.timeout)?,
    };

    let response = http_client
      .get(&url)
      .send()
      .await
      .map_err(|e| self.transport_error(command, e))?;

    if !response.status().is_success() {
      return Err(SoundbarError::BadResponse(response.status().as_u16()));
    }

    let body = response
      .text()
      .await
      .map_err(|e| self.transport_error(command, e))?;

    Ok(UicResponse { body })
  }

  fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| SoundbarError::ClientBuild(e.to_string()))
  }

  fn transport_error(&self, command: &Command, error: reqwest::Error) -> SoundbarError {
    if error.is_timeout() {
      SoundbarError::DeviceUnreachable(format!(
        "{} timed out after {:?}",
        command.action(),
        self.timeout
      ))
    } else {
      SoundbarError::DeviceUnreachable(error.to_string())
    }
  }
}
