use std::fmt;
use soundbar::SoundbarError;

/// Reasons a key press could not be turned into a device call
#[derive(Debug, PartialEq)]
pub enum CommandError {
    /// The device does not advertise the feature this command needs
    UnsupportedFeature(&'static str),
    InvalidSource(String),
    Soundbar(SoundbarError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CommandError::UnsupportedFeature(command) => {
                write!(f, "{} is not supported by this device", command)
            }
            CommandError::InvalidSource(source) => {
                write!(f, "Unknown source: {}", source)
            }
            CommandError::Soundbar(err) => {
                write!(f, "Soundbar error: {}", err)
            }
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SoundbarError> for CommandError {
    fn from(err: SoundbarError) -> Self {
        match err {
            SoundbarError::InvalidSource(source) => CommandError::InvalidSource(source),
            other => CommandError::Soundbar(other),
        }
    }
}

/// Status line text on success
pub type CommandResult = Result<String, CommandError>;
