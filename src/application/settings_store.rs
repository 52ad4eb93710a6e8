// src/application/settings_store.rs
use crate::constants::{FONT_SIZE_MAX, FONT_SIZE_MIN, SETTINGS_KEY};
use crate::domain::{DomainError, Settings, SettingsPatch};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Durable string storage addressed by a fixed key
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError>;
}

/// Holds the current settings and writes the full object back on every change.
pub struct SettingsStore<S: KeyValueStorage> {
    storage: S,
    settings: Settings,
}

impl<S: KeyValueStorage> SettingsStore<S> {
    /// Read the persisted blob, merge it over the defaults and persist the result.
    ///
    /// Fields missing from the blob keep their defaults; fields with an
    /// unexpected shape are skipped; an unreadable blob yields the defaults.
    pub fn load(mut storage: S) -> Result<Self, DomainError> {
        let settings = match storage.get(SETTINGS_KEY)? {
            Some(blob) => parse_blob(&blob),
            None => {
                debug!("No stored settings, using defaults");
                Settings::default()
            }
        };

        persist(&mut storage, &settings)?;
        Ok(Self { storage, settings })
    }

    pub fn current(&self) -> &Settings {
        &self.settings
    }

    /// Shallow-merge the patch. Invalid values or a failed write leave
    /// everything unchanged.
    pub fn update(&mut self, patch: SettingsPatch) -> Result<&Settings, DomainError> {
        patch.validate()?;
        let mut staged = self.settings.clone();
        staged.merge(patch);
        self.adopt(staged)
    }

    pub fn reset(&mut self) -> Result<&Settings, DomainError> {
        self.adopt(Settings::default())
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Only settings that reached storage become current.
    fn adopt(&mut self, staged: Settings) -> Result<&Settings, DomainError> {
        persist(&mut self.storage, &staged)?;
        self.settings = staged;
        Ok(&self.settings)
    }
}

fn persist<S: KeyValueStorage>(storage: &mut S, settings: &Settings) -> Result<(), DomainError> {
    let blob = serde_json::to_string(settings)
        .map_err(|e| DomainError::Storage(format!("Failed to serialize settings: {e}")))?;
    storage.set(SETTINGS_KEY, &blob)
}

/// Any stored number counts as a font size: rounded, then pulled into range.
fn stored_font_size(value: &Value) -> Option<u8> {
    let size = value.as_f64()?.round();
    Some(size.clamp(f64::from(FONT_SIZE_MIN), f64::from(FONT_SIZE_MAX)) as u8)
}

fn parse_blob(blob: &str) -> Settings {
    let mut settings = Settings::default();

    let fields: Map<String, Value> = match serde_json::from_str(blob) {
        Ok(fields) => fields,
        Err(e) => {
            warn!(error = %e, "Stored settings are unreadable, using defaults");
            return settings;
        }
    };

    for (key, value) in fields {
        if key == "fontSize" {
            match stored_font_size(&value) {
                Some(size) => settings.font_size = size,
                None => warn!(%value, "Skipping stored font size"),
            }
            continue;
        }
        let single = Value::Object(Map::from_iter([(key.clone(), value)]));
        match serde_json::from_value::<SettingsPatch>(single) {
            Ok(patch) => settings.merge(patch),
            Err(e) => warn!(field = %key, error = %e, "Skipping stored setting"),
        }
    }
    settings.sanitized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FontFamily, Theme};
    use crate::infrastructure::MemoryKeyValueStorage;
    use rstest::rstest;

    /// Accepts a fixed number of writes, then fails every later one
    struct FailingStorage {
        inner: MemoryKeyValueStorage,
        writes_left: usize,
    }

    impl FailingStorage {
        fn after(writes: usize) -> Self {
            Self {
                inner: MemoryKeyValueStorage::new(),
                writes_left: writes,
            }
        }
    }

    impl KeyValueStorage for FailingStorage {
        fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
            if self.writes_left == 0 {
                return Err(DomainError::Storage("disk full".to_string()));
            }
            self.writes_left -= 1;
            self.inner.set(key, value)
        }
    }

    fn persisted(storage: &FailingStorage) -> Settings {
        let blob = storage.get(SETTINGS_KEY).unwrap().expect("Settings should be persisted");
        serde_json::from_str(&blob).unwrap()
    }

    fn stored_blob(store: SettingsStore<MemoryKeyValueStorage>) -> String {
        store
            .into_storage()
            .get(SETTINGS_KEY)
            .unwrap()
            .expect("Settings should be persisted")
    }

    #[test]
    fn given_empty_storage_when_loading_then_persists_defaults() {
        // Arrange
        let storage = MemoryKeyValueStorage::new();

        // Act
        let store = SettingsStore::load(storage).unwrap();

        // Assert
        assert_eq!(store.current(), &Settings::default());
        let blob = stored_blob(store);
        assert!(blob.contains(r#""fontSize":16"#));
    }

    #[test]
    fn given_partial_blob_when_loading_then_missing_fields_take_defaults() {
        let storage = MemoryKeyValueStorage::with_entry(
            SETTINGS_KEY,
            r#"{"fontSize":20,"theme":"dark"}"#,
        );

        let store = SettingsStore::load(storage).unwrap();

        let settings = store.current();
        assert_eq!(settings.font_size, 20);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.font_family, FontFamily::SfProDisplay);
        assert!(settings.auto_save);
    }

    #[test]
    fn given_field_with_wrong_shape_when_loading_then_skips_only_that_field() {
        let storage = MemoryKeyValueStorage::with_entry(
            SETTINGS_KEY,
            r#"{"fontSize":"huge","autoSave":false,"legacyField":1}"#,
        );

        let store = SettingsStore::load(storage).unwrap();

        assert_eq!(store.current().font_size, 16);
        assert!(!store.current().auto_save);
    }

    #[test]
    fn given_corrupt_blob_when_loading_then_uses_defaults_and_overwrites() {
        let storage = MemoryKeyValueStorage::with_entry(SETTINGS_KEY, "{not json");

        let store = SettingsStore::load(storage).unwrap();

        assert_eq!(store.current(), &Settings::default());
        let blob = stored_blob(store);
        assert!(serde_json::from_str::<Settings>(&blob).is_ok());
    }

    #[rstest]
    #[case("99", 24)]
    #[case("300", 24)]
    #[case("-5", 12)]
    #[case("18.0", 18)]
    #[case("17.6", 18)]
    #[case("1e9", 24)]
    fn test_stored_font_size_is_rounded_and_clamped(#[case] stored: &str, #[case] expected: u8) {
        let blob = format!(r#"{{"fontSize":{stored},"theme":"dark"}}"#);
        let storage = MemoryKeyValueStorage::with_entry(SETTINGS_KEY, &blob);

        let store = SettingsStore::load(storage).unwrap();

        assert_eq!(store.current().font_size, expected);
        assert_eq!(store.current().theme, Theme::Dark);
    }

    #[test]
    fn given_failing_write_when_updating_then_current_matches_persisted() {
        // Arrange: the load succeeds, the next write fails
        let mut store = SettingsStore::load(FailingStorage::after(1)).unwrap();

        // Act
        let result = store.update(SettingsPatch {
            font_size: Some(20),
            ..Default::default()
        });

        // Assert
        assert!(matches!(result, Err(DomainError::Storage(_))));
        assert_eq!(store.current().font_size, 16);
        let current = store.current().clone();
        assert_eq!(current, persisted(&store.into_storage()));
    }

    #[test]
    fn given_failing_write_when_resetting_then_keeps_previous_settings() {
        let mut store = SettingsStore::load(FailingStorage::after(2)).unwrap();
        store
            .update(SettingsPatch {
                theme: Some(Theme::Dark),
                ..Default::default()
            })
            .unwrap();

        let result = store.reset();

        assert!(matches!(result, Err(DomainError::Storage(_))));
        assert_eq!(store.current().theme, Theme::Dark);
        let current = store.current().clone();
        assert_eq!(current, persisted(&store.into_storage()));
    }

    #[test]
    fn given_update_when_applied_then_persists_full_object() {
        let mut store = SettingsStore::load(MemoryKeyValueStorage::new()).unwrap();

        store
            .update(SettingsPatch {
                show_word_count: Some(false),
                ..Default::default()
            })
            .unwrap();

        let persisted: Settings = serde_json::from_str(&stored_blob(store)).unwrap();
        assert!(!persisted.show_word_count);
        assert_eq!(persisted.font_size, 16);
    }

    #[test]
    fn given_invalid_font_size_when_updating_then_rejects_and_keeps_state() {
        let mut store = SettingsStore::load(MemoryKeyValueStorage::new()).unwrap();

        let result = store.update(SettingsPatch {
            font_size: Some(99),
            theme: Some(Theme::Dark),
            ..Default::default()
        });

        assert!(matches!(result, Err(DomainError::InvalidSetting(_))));
        assert_eq!(store.current(), &Settings::default());
    }

    #[test]
    fn given_reset_update_reset_when_reading_then_yields_default_font_size() {
        let mut store = SettingsStore::load(MemoryKeyValueStorage::new()).unwrap();

        store.reset().unwrap();
        let _ = store.update(SettingsPatch {
            font_size: Some(99),
            ..Default::default()
        });
        store
            .update(SettingsPatch {
                font_size: Some(22),
                ..Default::default()
            })
            .unwrap();
        store.reset().unwrap();

        assert_eq!(store.current().font_size, 16);
        let persisted: Settings = serde_json::from_str(&stored_blob(store)).unwrap();
        assert_eq!(persisted.font_size, 16);
    }
}
