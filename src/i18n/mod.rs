//! Internationalization (i18n) support
//!
//! Provides language selection, detection and translation lookup.
//!
//! There is no process-wide locale. [`init_translator`] runs once at
//! startup, detects the language, persists it to the state cache and hands
//! back an [`Arc<Translator>`] that is passed down to every component that
//! renders text.
//!
//! # Detection
//!
//! Sources are tried in the configured order (by default
//! `localStorage` → `navigator` → `htmlTag`); the first candidate that
//! resolves to a supported [`Language`] wins. When nothing matches the
//! fallback language (`he`) is used.
//!
//! # Catalogs
//!
//! Catalogs are JSON files located by expanding a load path template such
//! as `locales/{{lng}}/translation.json`. They are loaded lazily the first
//! time a language is used.

pub mod catalog;
pub mod detect;
pub mod translator;

pub use catalog::{
    expand_load_path, Catalog, FallbackBackend, FsBackend, MemoryBackend, TranslationBackend,
};
pub use detect::{
    system_locales, Detection, DetectionInputs, DetectionSource, LanguageCache, LanguageDetector,
};
pub use translator::Translator;

use crate::config::I18nConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Supported languages
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Language {
    #[default]
    #[serde(rename = "he")]
    Hebrew,
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    /// Get the locale code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hebrew => "he",
            Language::Russian => "ru",
        }
    }

    /// Get the display name for this language (in its native script)
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Hebrew => "עברית",
            Language::Russian => "Русский",
        }
    }

    /// Get all available languages
    pub fn all() -> &'static [Language] {
        &[Language::Hebrew, Language::Russian]
    }

    /// Parse a language from its exact locale code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "he" => Some(Language::Hebrew),
            "ru" => Some(Language::Russian),
            _ => None,
        }
    }

    /// Resolve an arbitrary locale tag to a supported language.
    ///
    /// Accepts BCP 47 tags (`ru-RU`) as well as POSIX locale names
    /// (`he_IL.UTF-8`, `ru_RU@euro`). The exact code wins; otherwise the
    /// primary subtag is compared case-insensitively. `iw` is the legacy
    /// ISO code for Hebrew.
    pub fn resolve(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if let Some(lang) = Self::from_code(tag) {
            return Some(lang);
        }

        let without_encoding = tag.split(['.', '@']).next().unwrap_or_default();
        let primary = without_encoding
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "he" | "iw" => Some(Language::Hebrew),
            "ru" => Some(Language::Russian),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Catalog backend used by the application.
///
/// Reads `load_path` under the resolved assets directory so shipped
/// catalogs can be replaced on disk, and falls back to the copies compiled
/// into the binary.
pub fn default_backend(config: &I18nConfig) -> Box<dyn TranslationBackend> {
    let root = config.resolved_assets_dir();
    tracing::debug!("Looking for translation catalogs under {:?}", root);

    Box::new(FallbackBackend::new(
        Box::new(FsBackend::new(root, config.load_path.clone())),
        Box::new(MemoryBackend::bundled()),
    ))
}

/// Detect the startup language, persist it and build the translator.
///
/// Must be called exactly once, before the UI is created. The detected
/// language is written to `cache` when the config lists `localStorage`
/// among its caches.
pub fn init_translator(
    config: &I18nConfig,
    inputs: &DetectionInputs,
    backend: Box<dyn TranslationBackend>,
    cache: &mut dyn LanguageCache,
) -> (Arc<Translator>, Detection) {
    let detector = LanguageDetector::new(config.detection_order.clone(), config.fallback_language);
    let detection = detector.detect(inputs);

    match detection.source {
        Some(source) => tracing::info!(
            "Detected language {} from {:?}",
            detection.language,
            source
        ),
        None => tracing::info!(
            "No supported language detected, falling back to {}",
            detection.language
        ),
    }

    if config.caches.contains(&DetectionSource::LocalStorage) {
        cache.cache_language(detection.language);
    }

    let translator = Translator::new(backend, detection.language, config.fallback_language)
        .with_debug(config.debug);

    (Arc::new(translator), detection)
}
