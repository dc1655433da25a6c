/// Errors produced by a single exchange with the soundbar.
///
/// None of these cross the `DeviceClient` boundary; the client logs them and
/// leaves the affected snapshot field untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SoundbarError {
  #[error("Failed to reach soundbar: {0}")]
  DeviceUnreachable(String),

  #[error("Soundbar responded with status code {0}")]
  BadResponse(u16),

  #[error("Failed to parse response: {0}")]
  ParseError(String),

  #[error("Response does not contain a `{0}` element")]
  MissingElement(String),

  #[error("Unknown source: {0}")]
  InvalidSource(String),

  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("Failed to build HTTP client: {0}")]
  ClientBuild(String),
}

pub type Result<T> = std::result::Result<T, SoundbarError>;
