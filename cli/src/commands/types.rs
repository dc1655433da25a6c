use soundbar::client::volume_to_percent;
use soundbar::{DeviceClient, Feature, Source};

use crate::commands::error::{CommandError, CommandResult};

/// What a key press asks the soundbar to do
///
/// Toggles are resolved against the current snapshot before a command is
/// built, so every variant carries the exact target state.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlCommand {
    SetPower(bool),
    SetMute(bool),
    VolumeUp,
    VolumeDown,
    SelectSource(String),
    Refresh,
}

impl ControlCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ControlCommand::SetPower(_) => "Power",
            ControlCommand::SetMute(_) => "Mute",
            ControlCommand::VolumeUp => "Volume up",
            ControlCommand::VolumeDown => "Volume down",
            ControlCommand::SelectSource(_) => "Select source",
            ControlCommand::Refresh => "Refresh",
        }
    }

    /// Feature the device must advertise, if any
    pub fn required_feature(&self) -> Option<Feature> {
        match self {
            ControlCommand::SetPower(true) => Some(Feature::TurnOn),
            ControlCommand::SetPower(false) => Some(Feature::TurnOff),
            ControlCommand::SetMute(_) => Some(Feature::VolumeMute),
            ControlCommand::VolumeUp | ControlCommand::VolumeDown => Some(Feature::VolumeStep),
            ControlCommand::SelectSource(_) => Some(Feature::SelectSource),
            ControlCommand::Refresh => None,
        }
    }

    pub async fn execute(&self, device: &dyn DeviceClient) -> CommandResult {
        if let Some(feature) = self.required_feature() {
            if !device.supported_features().contains(&feature) {
                return Err(CommandError::UnsupportedFeature(self.name()));
            }
        }

        match self {
            ControlCommand::SetPower(on) => {
                device.set_power(*on).await;
                Ok(format!("Power {}", if *on { "on" } else { "off" }))
            }
            ControlCommand::SetMute(muted) => {
                device.set_mute(*muted).await;
                Ok(if *muted { "Muted" } else { "Unmuted" }.to_string())
            }
            ControlCommand::VolumeUp => {
                device.volume_up().await;
                Ok(volume_message(device))
            }
            ControlCommand::VolumeDown => {
                device.volume_down().await;
                Ok(volume_message(device))
            }
            ControlCommand::SelectSource(name) => {
                let source: Source = name.parse()?;
                device.select_source(source.as_str()).await;
                Ok(format!("Source: {}", source))
            }
            ControlCommand::Refresh => {
                device.poll().await;
                Ok(format!("Refreshed {}", device.name()))
            }
        }
    }
}

fn volume_message(device: &dyn DeviceClient) -> String {
    match device.snapshot().volume {
        Some(level) => format!("Volume {}%", volume_to_percent(level)),
        None => "Volume unknown".to_string(),
    }
}
