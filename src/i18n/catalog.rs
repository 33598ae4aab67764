//! Translation catalogs and the backends that load them

use super::Language;
use crate::error::{IntakeError, Result, ResultExt};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default load path template, relative to the assets directory
pub const DEFAULT_LOAD_PATH: &str = "locales/{{lng}}/translation.json";

/// Namespace substituted for `{{ns}}` in load path templates
pub const DEFAULT_NAMESPACE: &str = "translation";

/// Separator between nested key segments (`ticketForm.name`)
pub const KEY_SEPARATOR: char = '.';

/// Expand a load path template for a language code
pub fn expand_load_path(template: &str, language_code: &str) -> String {
    template
        .replace("{{lng}}", language_code)
        .replace("{{ns}}", DEFAULT_NAMESPACE)
}

/// A parsed translation resource for one language
#[derive(Debug, Clone)]
pub struct Catalog {
    language: Language,
    root: Value,
}

impl Catalog {
    /// Parse a catalog from JSON. The document must be an object.
    pub fn from_json_str(language: Language, json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)
            .map_err(|e| IntakeError::translation(language.code(), e.to_string()))?;

        if !root.is_object() {
            return Err(IntakeError::translation(
                language.code(),
                "catalog root must be a JSON object",
            ));
        }

        Ok(Self { language, root })
    }

    /// A catalog with no entries
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            root: Value::Object(Default::default()),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up a dotted key. Only string leaves count as translations.
    pub fn get(&self, key: &str) -> Option<&str> {
        key.split(KEY_SEPARATOR)
            .try_fold(&self.root, |node, segment| node.get(segment))
            .and_then(Value::as_str)
    }

    /// Number of string leaves in the catalog
    pub fn len(&self) -> usize {
        fn count(value: &Value) -> usize {
            match value {
                Value::String(_) => 1,
                Value::Object(map) => map.values().map(count).sum(),
                _ => 0,
            }
        }
        count(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Source of translation catalogs
pub trait TranslationBackend: Send + Sync {
    /// Load the catalog for a language
    fn load(&self, language: Language) -> Result<Catalog>;
}

/// Loads catalogs from the filesystem using a load path template
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
    load_path: String,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>, load_path: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            load_path: load_path.into(),
        }
    }

    /// Backend using [`DEFAULT_LOAD_PATH`] under `root`
    pub fn with_default_layout(root: impl AsRef<Path>) -> Self {
        Self::new(root.as_ref(), DEFAULT_LOAD_PATH)
    }

    /// Resolved file path for a language
    pub fn path_for(&self, language: Language) -> PathBuf {
        self.root
            .join(expand_load_path(&self.load_path, language.code()))
    }
}

impl TranslationBackend for FsBackend {
    fn load(&self, language: Language) -> Result<Catalog> {
        let path = self.path_for(language);
        tracing::debug!("Loading {} translations from {:?}", language, path);

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog {:?}", path))?;

        Catalog::from_json_str(language, &content)
    }
}

/// Holds catalog sources in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    sources: HashMap<Language, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the JSON source for a language
    pub fn with_catalog(mut self, language: Language, json: impl Into<String>) -> Self {
        self.sources.insert(language, json.into());
        self
    }
}

impl TranslationBackend for MemoryBackend {
    fn load(&self, language: Language) -> Result<Catalog> {
        let json = self.sources.get(&language).ok_or_else(|| {
            IntakeError::translation(language.code(), "no catalog registered")
        })?;
        Catalog::from_json_str(language, json)
    }
}

/// Catalogs compiled into the binary from `locales/`
const BUNDLED_CATALOGS: &[(Language, &str)] = &[
    (
        Language::Hebrew,
        include_str!("../../locales/he/translation.json"),
    ),
    (
        Language::Russian,
        include_str!("../../locales/ru/translation.json"),
    ),
];

impl MemoryBackend {
    /// Backend serving the catalogs shipped with the application
    pub fn bundled() -> Self {
        BUNDLED_CATALOGS
            .iter()
            .fold(Self::new(), |backend, (language, json)| {
                backend.with_catalog(*language, *json)
            })
    }
}

/// Tries `primary` first and falls back to `secondary` when it fails
pub struct FallbackBackend {
    primary: Box<dyn TranslationBackend>,
    secondary: Box<dyn TranslationBackend>,
}

impl FallbackBackend {
    pub fn new(primary: Box<dyn TranslationBackend>, secondary: Box<dyn TranslationBackend>) -> Self {
        Self { primary, secondary }
    }
}

impl TranslationBackend for FallbackBackend {
    fn load(&self, language: Language) -> Result<Catalog> {
        self.primary.load(language).or_else(|e| {
            tracing::debug!("Using bundled {} translations ({})", language, e);
            self.secondary.load(language)
        })
    }
}
