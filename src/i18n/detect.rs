//! Startup language detection
//!
//! Mirrors the browser detector chain the intake form was originally
//! configured with: a persisted `i18nextLng` entry, the user's system
//! locale, and finally the document language attribute.

use super::Language;
use serde::{Deserialize, Serialize};

/// A place a language candidate can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionSource {
    /// The persisted `i18nextLng` entry in the app state file
    #[serde(rename = "localStorage")]
    LocalStorage,
    /// The operating system locale list
    #[serde(rename = "navigator")]
    Navigator,
    /// The configured document language
    #[serde(rename = "htmlTag")]
    HtmlTag,
}

impl DetectionSource {
    /// Default detection order
    pub fn default_order() -> Vec<DetectionSource> {
        vec![
            DetectionSource::LocalStorage,
            DetectionSource::Navigator,
            DetectionSource::HtmlTag,
        ]
    }
}

/// Storage for the last detected or selected language
pub trait LanguageCache {
    /// The raw persisted language code, if any
    fn cached_language(&self) -> Option<String>;

    /// Persist a language choice
    fn cache_language(&mut self, language: Language);
}

/// Raw candidates gathered from every detection source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionInputs {
    pub local_storage: Option<String>,
    pub navigator: Vec<String>,
    pub html_tag: Option<String>,
}

impl DetectionInputs {
    /// Gather candidates from the language cache, the OS locale list and
    /// the configured document language.
    pub fn gather(cache: &dyn LanguageCache, document_language: Option<&str>) -> Self {
        Self {
            local_storage: cache.cached_language(),
            navigator: system_locales(),
            html_tag: document_language.map(str::to_string),
        }
    }

    fn candidates(&self, source: DetectionSource) -> Vec<&str> {
        match source {
            DetectionSource::LocalStorage => self.local_storage.as_deref().into_iter().collect(),
            DetectionSource::Navigator => self.navigator.iter().map(String::as_str).collect(),
            DetectionSource::HtmlTag => self.html_tag.as_deref().into_iter().collect(),
        }
    }
}

/// Outcome of language detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub language: Language,
    /// Source that produced the match; `None` when the fallback was used
    pub source: Option<DetectionSource>,
}

/// Resolves the startup language from an ordered list of sources
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    order: Vec<DetectionSource>,
    fallback: Language,
}

impl LanguageDetector {
    pub fn new(order: Vec<DetectionSource>, fallback: Language) -> Self {
        Self { order, fallback }
    }

    /// First candidate (in source order) that resolves to a supported
    /// language, or the fallback.
    pub fn detect(&self, inputs: &DetectionInputs) -> Detection {
        for source in &self.order {
            for candidate in inputs.candidates(*source) {
                if let Some(language) = Language::resolve(candidate) {
                    return Detection {
                        language,
                        source: Some(*source),
                    };
                }
                tracing::trace!("Ignoring unsupported language {:?} from {:?}", candidate, source);
            }
        }

        Detection {
            language: self.fallback,
            source: None,
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(DetectionSource::default_order(), Language::default())
    }
}

/// Preferred locales of the current user, most preferred first.
///
/// Read from the OS (user language list on Windows and macOS, the POSIX
/// locale variables elsewhere).
pub fn system_locales() -> Vec<String> {
    sys_locale::get_locales().collect()
}
