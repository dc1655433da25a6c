use async_trait::async_trait;
use mockall::mock;

use crate::client::DeviceClient;
use crate::model::{Feature, Source, SUPPORTED_FEATURES};
use crate::state::DeviceSnapshot;

mock! {
    pub Soundbar {}

    #[async_trait]
    impl DeviceClient for Soundbar {
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
}

/// Builds a `MockSoundbar` whose metadata and reads answer from a fixed snapshot
pub struct MockSoundbarBuilder {
    name: String,
    snapshot: DeviceSnapshot,
}

impl MockSoundbarBuilder {
    pub fn new() -> Self {
        Self {
            name: "Samsung Soundbar".into(),
            snapshot: DeviceSnapshot::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn snapshot(mut self, snapshot: DeviceSnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Metadata and read expectations only; callers add expectations for
    /// the commands they want to observe.
    pub fn build(self) -> MockSoundbar {
        let mut soundbar = MockSoundbar::new();

        soundbar.expect_name().return_const(self.name);
        soundbar.expect_source_list().returning(|| Source::ALL.to_vec());
        soundbar
            .expect_supported_features()
            .returning(|| SUPPORTED_FEATURES.to_vec());

        let snapshot = self.snapshot;
        soundbar.expect_snapshot().return_const(snapshot.clone());
        soundbar.expect_poll().return_const(snapshot);

        soundbar
    }
}

impl Default for MockSoundbarBuilder {
    fn default() -> Self {
        Self::new()
    }
}
