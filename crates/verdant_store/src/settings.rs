use std::sync::Arc;

use crate::kv::{KvStore, StoreError};

const ONBOARDING_KEY: &str = "verdant/onboarding/seen";

/// App-level flags kept next to the plant collection. Currently just the
/// one-time onboarding marker.
pub struct Settings {
    store: Arc<KvStore>,
}

impl Settings {
    pub fn new(store: Arc<KvStore>) -> Self {
        Self { store }
    }

    pub fn onboarding_seen(&self) -> bool {
        self.store.get(ONBOARDING_KEY).unwrap_or(false)
    }

    pub fn set_onboarding_seen(&self, seen: bool) -> Result<(), StoreError> {
        self.store.set(ONBOARDING_KEY, &seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn onboarding_defaults_to_unseen_and_persists() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("store.json");

        let settings = Settings::new(Arc::new(KvStore::open(&path)));
        assert!(!settings.onboarding_seen());

        settings.set_onboarding_seen(true).expect("set flag");
        assert!(settings.onboarding_seen());

        let reopened = Settings::new(Arc::new(KvStore::open(&path)));
        assert!(reopened.onboarding_seen());
    }
}
