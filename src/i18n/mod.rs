//! Internationalization module for multi-language support.
//!
//! Translations are `key = value` resources embedded at compile time, with
//! optional user overrides loaded from disk. Lookups fall back from the current
//! language to Russian and finally to the key itself.

pub mod loader;

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};

pub use loader::{TranslationLoadError, TranslationLoader};

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Russian,
    English,
    Belarusian,
}

impl Language {
    /// Identifier stored in settings.
    pub fn id(&self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
            Language::Belarusian => "be",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Russian => "Русский",
            Language::English => "English",
            Language::Belarusian => "Беларуская",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::Russian => "🇷🇺",
            Language::English => "🇺🇸",
            Language::Belarusian => "🇧🇾",
        }
    }

    /// Parse from a language identifier or a system locale such as `be-BY`.
    ///
    /// The legacy `by` identifier maps to Belarusian.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.to_lowercase();
        if id.starts_with("ru") {
            Some(Language::Russian)
        } else if id.starts_with("en") {
            Some(Language::English)
        } else if id.starts_with("be") || id == "by" {
            Some(Language::Belarusian)
        } else {
            None
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::Russian, Language::English, Language::Belarusian]
    }

    fn embedded_resource(&self) -> &'static str {
        match self {
            Language::Russian => include_str!("locales/ru/main.ftl"),
            Language::English => include_str!("locales/en/main.ftl"),
            Language::Belarusian => include_str!("locales/be/main.ftl"),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Translation tables for every language plus the active one.
pub struct TranslationStore {
    current_language: Language,
    translations: HashMap<Language, HashMap<String, String>>,
}

impl Default for TranslationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationStore {
    pub fn new() -> Self {
        let translations = Language::all()
            .iter()
            .map(|lang| (*lang, loader::parse_ftl(lang.embedded_resource())))
            .collect();
        Self {
            current_language: Language::default(),
            translations,
        }
    }

    pub fn language(&self) -> Language {
        self.current_language
    }

    pub fn set_language(&mut self, lang: Language) {
        self.current_language = lang;
    }

    fn lookup(&self, lang: Language, key: &str) -> Option<&String> {
        self.translations.get(&lang).and_then(|t| t.get(key))
    }

    pub fn translate(&self, key: &str) -> String {
        self.lookup(self.current_language, key)
            .or_else(|| self.lookup(Language::Russian, key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Merge override files from `<base>/<lang id>/*.ftl`; returns the number of keys applied.
    pub fn load_overrides(&mut self, base: &Path) -> usize {
        let mut applied = 0;
        for lang in Language::all() {
            let dir = base.join(lang.id());
            if !dir.is_dir() {
                continue;
            }
            let mut loader = TranslationLoader::new();
            match loader.load_from_dir(&dir) {
                Ok(()) => {
                    applied += loader.count();
                    self.translations
                        .entry(*lang)
                        .or_default()
                        .extend(loader.into_translations());
                }
                Err(e) => tracing::warn!("Failed to load translations from {:?}: {}", dir, e),
            }
        }
        applied
    }

    /// Keys present in Russian but absent from `lang`.
    pub fn missing_keys(&self, lang: Language) -> Vec<String> {
        let Some(reference) = self.translations.get(&Language::Russian) else {
            return Vec::new();
        };
        let target = self.translations.get(&lang);
        let mut missing: Vec<String> = reference
            .keys()
            .filter(|k| target.map_or(true, |t| !t.contains_key(*k)))
            .cloned()
            .collect();
        missing.sort();
        missing
    }
}

/// Global translation store.
static TRANSLATION_STORE: OnceLock<Mutex<TranslationStore>> = OnceLock::new();

fn store() -> MutexGuard<'static, TranslationStore> {
    TRANSLATION_STORE
        .get_or_init(|| Mutex::new(TranslationStore::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Initialize the translation system, applying overrides from `<data_dir>/locales`.
pub fn init(data_dir: &Path) {
    let applied = store().load_overrides(&data_dir.join("locales"));
    if applied > 0 {
        tracing::info!("Loaded {} translation overrides", applied);
    }
}

/// Translate a message by key.
pub fn t(key: &str) -> String {
    store().translate(key)
}

/// Translate a message, substituting `{ $name }` placeholders.
pub fn t_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = t(key);
    for (arg_key, arg_value) in args {
        result = result.replace(&format!("{{ ${} }}", arg_key), arg_value);
        result = result.replace(&format!("{{${}}}", arg_key), arg_value);
    }
    result
}

pub fn current_language() -> Language {
    store().language()
}

pub fn set_language(lang: Language) {
    store().set_language(lang);
}

/// Best matching language for the system locale, Russian when unsupported.
pub fn detect_system_locale() -> Language {
    sys_locale::get_locale()
        .and_then(|locale| Language::from_id(&locale))
        .unwrap_or_default()
}

/// Macro for convenient translation.
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::t($key)
    };
    ($key:expr, $($arg_name:expr => $arg_value:expr),+ $(,)?) => {
        $crate::i18n::t_args($key, &[$(($arg_name, &$arg_value.to_string())),+])
    };
}
