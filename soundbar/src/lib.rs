pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod transport;
pub mod xml;

#[cfg(feature = "mock")]
pub mod mock;

// Re-export key types for easier access
pub use client::{DeviceClient, SoundbarClient};
pub use command::{Command, ParamValue};
pub use config::{SessionMode, SoundbarConfig};
pub use error::{Result, SoundbarError};
pub use model::{Action, Feature, PowerState, Source};
pub use state::DeviceSnapshot;
pub use transport::DeviceEndpoint;
