//! Per-run table of canonical releases.
//!
//! Many recordings point at the same release. The registry makes sure there
//! is exactly one [`Release`] per (name, ID) pair and keeps each release's
//! track list in step with the tracks that reference it.

use std::collections::HashMap;

use super::{Release, ReleaseKey, ReleaseType};

/// Release fields as read from a raw recording.
#[derive(Debug, Clone, Default)]
pub struct ReleaseData {
    pub name: String,
    pub mb_id: String,
    pub release_type: ReleaseType,
    pub date: Option<String>,
}

impl ReleaseData {
    pub fn key(&self) -> ReleaseKey {
        ReleaseKey::new(&self.name, &self.mb_id)
    }
}

/// Releases seen during one artist-processing run.
#[derive(Debug, Default)]
pub struct ReleaseRegistry {
    releases: HashMap<ReleaseKey, Release>,
    /// Registration order, for stable iteration
    order: Vec<ReleaseKey>,
}

impl ReleaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up or create the release described by `data` and register
    /// `track_id` against it.
    ///
    /// Registering the same track twice is a no-op.
    pub fn resolve(&mut self, track_id: &str, data: ReleaseData) -> ReleaseKey {
        let key = data.key();

        if let Some(release) = self.releases.get_mut(&key) {
            if !release.tracks.iter().any(|t| t == track_id) {
                release.tracks.push(track_id.to_string());
            }
            return key;
        }

        let release = Release {
            name: data.name,
            mb_id: data.mb_id,
            release_type: data.release_type,
            date: data.date,
            tracks: vec![track_id.to_string()],
        };
        tracing::trace!(release = %release, "Registered release");
        self.order.push(key.clone());
        self.releases.insert(key.clone(), release);
        key
    }

    /// Remove the release if no track references it any more.
    ///
    /// Returns `true` if the release was evicted.
    pub fn evict_if_empty(&mut self, key: &ReleaseKey) -> bool {
        let empty = self
            .releases
            .get(key)
            .is_some_and(|release| release.tracks.is_empty());

        if empty {
            self.releases.remove(key);
            self.order.retain(|k| k != key);
            tracing::debug!(release = %key.name, "Evicted empty release");
        }
        empty
    }

    /// Drop `track_id` from the release's track list, evicting the release
    /// if that was its last track.
    pub fn detach(&mut self, key: &ReleaseKey, track_id: &str) -> bool {
        if let Some(release) = self.releases.get_mut(key) {
            release.tracks.retain(|t| t != track_id);
        }
        self.evict_if_empty(key)
    }

    pub fn get(&self, key: &ReleaseKey) -> Option<&Release> {
        self.releases.get(key)
    }

    pub fn contains(&self, key: &ReleaseKey) -> bool {
        self.releases.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Releases in the order they were first registered.
    pub fn iter(&self) -> impl Iterator<Item = &Release> {
        self.order.iter().filter_map(|key| self.releases.get(key))
    }

    pub fn clear(&mut self) {
        self.releases.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(name: &str, id: &str) -> ReleaseData {
        ReleaseData {
            name: name.to_string(),
            mb_id: id.to_string(),
            release_type: ReleaseType::Album,
            date: Some("1998".to_string()),
        }
    }

    #[test]
    fn test_resolve_creates_once() {
        let mut registry = ReleaseRegistry::new();
        let a = registry.resolve("t1", data("Version 2.0", "rel-1"));
        let b = registry.resolve("t2", data("Version 2.0", "rel-1"));

        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&a).unwrap().tracks, vec!["t1", "t2"]);
    }

    #[test]
    fn test_resolve_is_idempotent_per_track() {
        let mut registry = ReleaseRegistry::new();
        let key = registry.resolve("t1", data("Album", "rel-1"));
        registry.resolve("t1", data("Album", "rel-1"));

        assert_eq!(registry.get(&key).unwrap().tracks, vec!["t1"]);
    }

    #[test]
    fn test_same_name_different_id_are_distinct() {
        let mut registry = ReleaseRegistry::new();
        let a = registry.resolve("t1", data("Garbage", "rel-1"));
        let b = registry.resolve("t2", data("Garbage", "rel-2"));

        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_detach_evicts_last_track() {
        let mut registry = ReleaseRegistry::new();
        let key = registry.resolve("t1", data("Album", "rel-1"));
        registry.resolve("t2", data("Album", "rel-1"));

        assert!(!registry.detach(&key, "t1"));
        assert!(registry.contains(&key));

        assert!(registry.detach(&key, "t2"));
        assert!(!registry.contains(&key));
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }

    #[test]
    fn test_evict_if_empty_keeps_populated_release() {
        let mut registry = ReleaseRegistry::new();
        let key = registry.resolve("t1", data("Album", "rel-1"));

        assert!(!registry.evict_if_empty(&key));
        assert!(!registry.evict_if_empty(&ReleaseKey::new("Missing", "rel-x")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iter_keeps_registration_order() {
        let mut registry = ReleaseRegistry::new();
        registry.resolve("t1", data("B", "rel-b"));
        registry.resolve("t2", data("A", "rel-a"));
        registry.resolve("t3", data("C", "rel-c"));

        let names: Vec<_> = registry.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);

        registry.clear();
        assert!(registry.is_empty());
    }
}
