use async_trait::async_trait;
use log::{debug, error, warn};

use crate::command::Command;
use crate::config::SoundbarConfig;
use crate::error::{Result, SoundbarError};
use crate::model::{Action, Feature, PowerState, Source, SUPPORTED_FEATURES};
use crate::state::{DeviceSnapshot, SnapshotCache};
use crate::transport::{DeviceEndpoint, UicClient, UicResponse};

/// Operations a host can perform on a soundbar.
///
/// Nothing here returns an error: failed exchanges are logged and reported as
/// unknown (`None`), and Set* operations update the snapshot whether or not the
/// device acknowledged them. The next `poll` reconciles the snapshot.
#[async_trait]
pub trait DeviceClient: Send + Sync {
    fn name(&self) -> String;
    fn source_list(&self) -> Vec<Source>;
    fn supported_features(&self) -> Vec<Feature>;
    fn snapshot(&self) -> DeviceSnapshot;

    async fn get_volume(&self) -> Option<f64>;
    async fn get_mute(&self) -> Option<bool>;
    async fn get_active_source(&self) -> Option<String>;

    async fn set_power(&self, on: bool);
    async fn set_volume(&self, level: f64);
    async fn set_mute(&self, muted: bool);
    async fn select_source(&self, source: &str);
    async fn volume_up(&self);
    async fn volume_down(&self);

    async fn poll(&self) -> DeviceSnapshot;
}

/// Converts a 0.0-1.0 level into the integer percent sent with `SetVolume`.
/// Halves round to even, so 0.125 sends 12.
pub fn volume_to_percent(level: f64) -> u8 {
    (level * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

/// Parses the text of a `<volume>` element into a 0.0-1.0 level
pub fn parse_volume(text: &str) -> Result<f64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(SoundbarError::ParseError(format!("volume is not a number: {:?}", text)));
    }

    // All digits, so the only parse failure left is overflow
    let percent = text.parse::<u32>().unwrap_or(u32::MAX);

    Ok(percent.min(100) as f64 / 100.0)
}

/// Parses the text of a `<mute>` element
pub fn parse_mute(text: &str) -> Result<bool> {
    if text.is_empty() {
        return Err(SoundbarError::ParseError("mute element is empty".to_string()));
    }

    Ok(text.eq_ignore_ascii_case("on"))
}

/// `DeviceClient` for Samsung soundbars speaking the UIC protocol
pub struct SoundbarClient {
    name: String,
    transport: UicClient,
    cache: SnapshotCache,
    volume_step: f64,
}

impl SoundbarClient {
    pub fn new(config: &SoundbarConfig) -> Result<Self> {
        let endpoint = DeviceEndpoint::new(config.host.clone(), config.port)?;
        let transport = UicClient::new(endpoint, config.timeout(), config.session)?;

        Ok(Self {
            name: config.name.clone(),
            transport,
            cache: SnapshotCache::new(),
            volume_step: config.volume_step,
        })
    }

    pub fn endpoint(&self) -> &DeviceEndpoint {
        self.transport.endpoint()
    }

    /// Sends a command, logging and swallowing any failure
    async fn send(&self, command: Command) -> Option<UicResponse> {
        match self.transport.call(&command).await {
            Ok(response) => Some(response),
            Err(e) => {
                error!("Error sending command {}: {}", command.action(), e);
                None
            }
        }
    }

    /// Sends a Get* command and extracts its response element
    async fn fetch(&self, action: Action) -> Option<String> {
        let tag = action.response_tag()?;
        let response = self.send(Command::new(action)).await?;

        match response.value(tag) {
            Ok(text) => Some(text),
            Err(e) => {
                warn!("{} returned no usable <{}>: {}", action, tag, e);
                None
            }
        }
    }

    /// Values that are logged but not kept in the snapshot
    async fn observe(&self, action: Action) {
        if let Some(value) = self.fetch(action).await {
            debug!("{}: {}", action, value);
        }
    }

    async fn step_volume(&self, delta: f64) {
        let current = self.cache.get().volume.unwrap_or(0.0);
        let target = (current + delta).clamp(0.0, 1.0);
        self.set_volume(target).await;
    }
}

#[async_trait]
impl DeviceClient for SoundbarClient {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn source_list(&self) -> Vec<Source> {
        Source::ALL.to_vec()
    }

    fn supported_features(&self) -> Vec<Feature> {
        SUPPORTED_FEATURES.to_vec()
    }

    fn snapshot(&self) -> DeviceSnapshot {
        self.cache.get()
    }

    async fn get_volume(&self) -> Option<f64> {
        let text = self.fetch(Action::GetVolume).await?;
        match parse_volume(&text) {
            Ok(volume) => {
                self.cache.set_volume(volume);
                debug!("Volume updated: {}", text);
                Some(volume)
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    async fn get_mute(&self) -> Option<bool> {
        let text = self.fetch(Action::GetMute).await?;
        match parse_mute(&text) {
            Ok(muted) => {
                self.cache.set_muted(muted);
                debug!("Mute updated: {}", text);
                Some(muted)
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        }
    }

    async fn get_active_source(&self) -> Option<String> {
        let source = self.fetch(Action::GetFunc).await?;
        if source.is_empty() {
            warn!("GetFunc returned an empty <function>");
            return None;
        }

        self.cache.set_source(source.clone());
        debug!("Source updated: {}", source);
        Some(source)
    }

    async fn set_power(&self, on: bool) {
        self.send(Command::power(on)).await;
        self.cache.set_power(PowerState::from(on));
    }

    async fn set_volume(&self, level: f64) {
        if !level.is_finite() {
            error!("Refusing to send non-finite volume level {}", level);
            return;
        }

        let percent = volume_to_percent(level);
        self.send(Command::set_volume(percent)).await;
        self.cache.set_volume(level.clamp(0.0, 1.0));
    }

    async fn set_mute(&self, muted: bool) {
        self.send(Command::set_mute(muted)).await;
        self.cache.set_muted(muted);
    }

    async fn select_source(&self, source: &str) {
        let source = match source.parse::<Source>() {
            Ok(source) => source,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };

        self.send(Command::set_func(source)).await;
        self.cache.set_source(source.to_string());
    }

    async fn volume_up(&self) {
        self.step_volume(self.volume_step).await;
    }

    async fn volume_down(&self) {
        self.step_volume(-self.volume_step).await;
    }

    async fn poll(&self) -> DeviceSnapshot {
        tokio::join!(
            self.get_volume(),
            self.get_mute(),
            self.get_active_source(),
            self.observe(Action::GetSoundMode),
            self.observe(Action::GetWooferLevel),
        );

        self.cache.get()
    }
}
