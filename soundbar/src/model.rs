use std::fmt;
use std::str::FromStr;

use crate::error::SoundbarError;

/// Commands understood by the soundbar's UIC endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  GetVolume,
  SetVolume,
  GetMute,
  SetMute,
  GetFunc,
  SetFunc,
  PowerOn,
  PowerOff,
  GetSoundMode,
  GetWooferLevel,
}

impl Action {
  pub fn name(&self) -> &'static str {
    match self {
      Action::GetVolume => "GetVolume",
      Action::SetVolume => "SetVolume",
      Action::GetMute => "GetMute",
      Action::SetMute => "SetMute",
      Action::GetFunc => "GetFunc",
      Action::SetFunc => "SetFunc",
      Action::PowerOn => "PowerOn",
      Action::PowerOff => "PowerOff",
      Action::GetSoundMode => "GetSoundMode",
      Action::GetWooferLevel => "GetWooferLevel",
    }
  }

  /// Element holding the answer to a Get* command
  pub fn response_tag(&self) -> Option<&'static str> {
    match self {
      Action::GetVolume => Some("volume"),
      Action::GetMute => Some("mute"),
      Action::GetFunc => Some("function"),
      Action::GetSoundMode => Some("soundMode"),
      Action::GetWooferLevel => Some("level"),
      Action::SetVolume
      | Action::SetMute
      | Action::SetFunc
      | Action::PowerOn
      | Action::PowerOff
      => None,
    }
  }
}

impl fmt::Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Input sources the soundbar accepts for `SetFunc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
  Hdmi1,
  Hdmi2,
  Optical,
  Bluetooth,
}

impl Source {
  pub const ALL: [Source; 4] = [Source::Hdmi1, Source::Hdmi2, Source::Optical, Source::Bluetooth];

  pub fn as_str(&self) -> &'static str {
    match self {
      Source::Hdmi1 => "hdmi1",
      Source::Hdmi2 => "hdmi2",
      Source::Optical => "optical",
      Source::Bluetooth => "bluetooth",
    }
  }
}

impl fmt::Display for Source {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Source {
  type Err = SoundbarError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Source::ALL
      .iter()
      .find(|source| source.as_str() == s)
      .copied()
      .ok_or_else(|| SoundbarError::InvalidSource(s.to_string()))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
  On,
  #[default]
  Off,
}

impl PowerState {
  pub fn is_on(&self) -> bool {
    matches!(self, PowerState::On)
  }
}

impl From<bool> for PowerState {
  fn from(on: bool) -> Self {
    if on { PowerState::On } else { PowerState::Off }
  }
}

impl fmt::Display for PowerState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PowerState::On => f.write_str("on"),
      PowerState::Off => f.write_str("off"),
    }
  }
}

/// Capabilities a host can offer for this device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
  VolumeSet,
  VolumeMute,
  VolumeStep,
  TurnOn,
  TurnOff,
  SelectSource,
}

pub const SUPPORTED_FEATURES: [Feature; 6] = [
  Feature::VolumeSet,
  Feature::VolumeMute,
  Feature::TurnOn,
  Feature::TurnOff,
  Feature::VolumeStep,
  Feature::SelectSource,
];
