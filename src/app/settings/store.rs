// Settings store: data types, global state, and load/save.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize, Deserializer, Serializer};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::localization::SupportedLang;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    // UI language (None = auto/system). Stored as "en"/"ru" or null; legacy "auto" maps to null.
    #[serde(
        default,
        serialize_with = "serialize_language_opt",
        deserialize_with = "deserialize_language_opt"
    )]
    pub language: Option<SupportedLang>,
    // Snap flip and hover animations to their final state instead of animating
    #[serde(default)]
    pub reduce_motion: bool,
}

fn deserialize_language_opt<'de, D>(deserializer: D) -> Result<Option<SupportedLang>, D::Error>
where
    D: Deserializer<'de>,
{
    // Unknown values intentionally land on None rather than failing the
    // whole settings file.
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.as_deref().and_then(SupportedLang::from_locale))
}

fn serialize_language_opt<S>(
    value: &Option<SupportedLang>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(lang) => serializer.serialize_some(lang.code()),
        None => serializer.serialize_none(),
    }
}

lazy_static! {
    pub static ref APP_SETTINGS: RwLock<AppSettings> = RwLock::new(AppSettings::default());
}

fn settings_file_path() -> PathBuf {
    // Store settings in current working directory to avoid extra deps
    PathBuf::from("app_settings.json")
}

impl AppSettings {
    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    pub fn save_to_file(&self, path: &Path) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, data)
    }
}

pub fn load_settings_from_disk() {
    let path = settings_file_path();
    match AppSettings::load_from_file(&path) {
        Ok(s) => {
            *APP_SETTINGS.write().unwrap() = s;
            log::info!("Settings loaded from {}", path.to_string_lossy());
        }
        Err(e) => {
            // Keep defaults if missing/unreadable
            log::info!(
                "Using default settings, cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

pub fn save_settings_to_disk() {
    let path = settings_file_path();
    let st = APP_SETTINGS.read().unwrap().clone();
    match st.save_to_file(&path) {
        Ok(()) => log::info!("Settings saved to {}", path.to_string_lossy()),
        Err(e) => log::error!("Failed to save settings to {}: {}", path.to_string_lossy(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_explicit_language_code() {
        let s: AppSettings = serde_json::from_str(r#"{"language":"ru"}"#).unwrap();
        assert_eq!(s.language, Some(SupportedLang::Russian));
        assert!(!s.reduce_motion);
    }

    #[test]
    fn legacy_auto_value_maps_to_none() {
        let s: AppSettings = serde_json::from_str(r#"{"language":"auto"}"#).unwrap();
        assert_eq!(s.language, None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let s: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(s.language, None);
        assert!(!s.reduce_motion);
    }

    #[test]
    fn language_serializes_as_short_code() {
        let s = AppSettings {
            language: Some(SupportedLang::English),
            reduce_motion: true,
        };
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains(r#""language":"en""#));
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.language, Some(SupportedLang::English));
        assert!(back.reduce_motion);
    }
}
