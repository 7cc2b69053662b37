// Fluent-based UI strings. Bundles are embedded at build time; the active
// language lives in a thread-local manager on the UI thread.

use fluent_bundle::{FluentBundle, FluentResource};
use std::cell::RefCell;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

/// Languages the UI ships translations for. The strum display strings are
/// the human-readable names shown in the settings combo box.
#[derive(strum::EnumIter, strum::Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedLang {
    #[strum(serialize = "English")]
    English,
    #[strum(serialize = "Русский")]
    Russian,
}

pub const FALLBACK_LANG: SupportedLang = SupportedLang::English;

impl SupportedLang {
    pub fn code(self) -> &'static str {
        match self {
            SupportedLang::English => "en",
            SupportedLang::Russian => "ru",
        }
    }

    /// Match a locale string like "ru-RU" or "en_US" against the shipped
    /// languages by its primary subtag.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let lower = locale.to_ascii_lowercase();
        let primary = lower.split(['-', '_']).next().unwrap_or("");
        Self::iter().find(|l| l.code() == primary)
    }

    fn ftl_source(self) -> &'static str {
        match self {
            SupportedLang::English => include_str!("resources/en.ftl"),
            SupportedLang::Russian => include_str!("resources/ru.ftl"),
        }
    }

    fn build_bundle(self) -> Result<Bundle, LocalizationError> {
        let res = FluentResource::try_new(self.ftl_source().to_string()).map_err(
            |(_, errors)| LocalizationError::BadResource {
                lang: self.code(),
                details: errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; "),
            },
        )?;
        let langid: LanguageIdentifier = self.code().parse().unwrap_or_default();
        let mut bundle = FluentBundle::new(vec![langid]);
        bundle
            .add_resource(res)
            .map_err(|errors| LocalizationError::BadResource {
                lang: self.code(),
                details: format!("{} overriding message ids", errors.len()),
            })?;
        Ok(bundle)
    }
}

fn detect_system_lang() -> SupportedLang {
    sys_locale::get_locale()
        .as_deref()
        .and_then(SupportedLang::from_locale)
        .unwrap_or(FALLBACK_LANG)
}

struct LocalizationManager {
    current: SupportedLang,
    bundles: HashMap<SupportedLang, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let mut bundles = HashMap::new();
        for lang in SupportedLang::iter() {
            match lang.build_bundle() {
                Ok(b) => {
                    bundles.insert(lang, b);
                }
                Err(e) => log::error!("{}", e),
            }
        }
        Self {
            current: FALLBACK_LANG,
            bundles,
        }
    }

    fn format(&self, id: &str) -> String {
        for lang in [self.current, FALLBACK_LANG] {
            let Some(bundle) = self.bundles.get(&lang) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(id).and_then(|m| m.value()) else {
                continue;
            };
            let mut errors = vec![];
            return bundle.format_pattern(pattern, None, &mut errors).to_string();
        }
        format!("[missing: {}]", id)
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("embedded FTL for '{lang}' is invalid: {details}")]
    BadResource { lang: &'static str, details: String },
}

/// Validate every embedded resource and set the startup language. A broken
/// FTL file surfaces here as a clear error instead of missing strings later.
pub fn initialize_localization(preferred: Option<SupportedLang>) -> Result<(), LocalizationError> {
    for lang in SupportedLang::iter() {
        lang.build_bundle()?;
    }
    set_language(preferred);
    Ok(())
}

/// Switch the UI language. None re-detects the system locale.
pub fn set_language(preferred: Option<SupportedLang>) {
    let lang = preferred.unwrap_or_else(detect_system_lang);
    LOCALIZATION.with(|cell| cell.borrow_mut().current = lang);
}

/// Short code of the active language ("en", "ru").
pub fn get_current_language() -> &'static str {
    LOCALIZATION.with(|cell| cell.borrow().current.code())
}

/// Translate a message without arguments. Returns owned String.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format(message_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_english() {
        // Fresh thread-local manager starts on the fallback bundle.
        assert_eq!(translate("header-title"), "Card Sorting Activity");
    }

    #[test]
    fn switching_to_russian_changes_output() {
        set_language(Some(SupportedLang::Russian));
        assert_eq!(translate("reset-order"), "Сбросить порядок");
        set_language(Some(SupportedLang::English));
        assert_eq!(translate("reset-order"), "Reset Order");
    }

    #[test]
    fn unknown_message_is_marked() {
        assert_eq!(translate("no-such-key"), "[missing: no-such-key]");
    }

    #[test]
    fn locales_map_to_shipped_languages_by_primary_subtag() {
        assert_eq!(SupportedLang::from_locale("ru-RU"), Some(SupportedLang::Russian));
        assert_eq!(SupportedLang::from_locale("en_US"), Some(SupportedLang::English));
        assert_eq!(SupportedLang::from_locale("de-DE"), None);
        assert_eq!(SupportedLang::from_locale(""), None);
    }

    #[test]
    fn embedded_resources_are_valid() {
        assert!(initialize_localization(Some(SupportedLang::English)).is_ok());
    }

    #[test]
    fn combo_display_names() {
        assert_eq!(SupportedLang::English.to_string(), "English");
        assert_eq!(SupportedLang::Russian.to_string(), "Русский");
    }
}
