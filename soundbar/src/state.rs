use std::sync::{PoisonError, RwLock};

use crate::model::{PowerState, Source};

/// Best-known copy of the soundbar's state. Not guaranteed current: Set*
/// commands write it optimistically and the next poll corrects it.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSnapshot {
    pub power: PowerState,
    pub volume: Option<f64>,
    pub muted: Option<bool>,
    pub source: Option<String>,
    pub source_list: Vec<Source>,
}

impl Default for DeviceSnapshot {
    fn default() -> Self {
        Self {
            power: PowerState::Off,
            volume: None,
            muted: None,
            source: None,
            source_list: Source::ALL.to_vec(),
        }
    }
}

/// Shared snapshot; every setter is an independent write
pub struct SnapshotCache {
    snapshot: RwLock<DeviceSnapshot>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(DeviceSnapshot::default()),
        }
    }

    pub fn get(&self) -> DeviceSnapshot {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_power(&self, power: PowerState) {
        self.write(|snapshot| snapshot.power = power);
    }

    pub fn set_volume(&self, volume: f64) {
        self.write(|snapshot| snapshot.volume = Some(volume));
    }

    pub fn set_muted(&self, muted: bool) {
        self.write(|snapshot| snapshot.muted = Some(muted));
    }

    pub fn set_source(&self, source: String) {
        self.write(|snapshot| snapshot.source = Some(source));
    }

    fn write<F>(&self, f: F)
    where
        F: FnOnce(&mut DeviceSnapshot),
    {
        let mut snapshot = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut snapshot);
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_unknown() {
        let snapshot = DeviceSnapshot::default();

        assert_eq!(snapshot.power, PowerState::Off);
        assert_eq!(snapshot.volume, None);
        assert_eq!(snapshot.muted, None);
        assert_eq!(snapshot.source, None);
        assert_eq!(
            snapshot.source_list,
            vec![Source::Hdmi1, Source::Hdmi2, Source::Optical, Source::Bluetooth]
        );
    }

    #[test]
    fn test_cache_updates_single_fields() {
        let cache = SnapshotCache::new();

        cache.set_volume(0.25);
        let snapshot = cache.get();
        assert_eq!(snapshot.volume, Some(0.25));
        assert_eq!(snapshot.muted, None);

        cache.set_muted(true);
        cache.set_source("optical".to_string());
        cache.set_power(PowerState::On);

        let snapshot = cache.get();
        assert_eq!(snapshot.volume, Some(0.25));
        assert_eq!(snapshot.muted, Some(true));
        assert_eq!(snapshot.source.as_deref(), Some("optical"));
        assert!(snapshot.power.is_on());
    }

    #[test]
    fn test_get_returns_a_copy() {
        let cache = SnapshotCache::new();
        let before = cache.get();

        cache.set_volume(0.5);

        assert_eq!(before.volume, None);
        assert_eq!(cache.get().volume, Some(0.5));
    }
}
