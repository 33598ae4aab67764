//! Translation lookup service
//!
//! A [`Translator`] is created once by [`super::init_translator`] and
//! shared as `Arc<Translator>`. Catalogs are loaded on first use and cached
//! for the lifetime of the service; a catalog that fails to load is
//! remembered as failed so the lookup path does not hit the disk every
//! frame.

use super::catalog::{Catalog, TranslationBackend};
use super::Language;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

enum CatalogSlot {
    Loaded(Arc<Catalog>),
    Failed,
}

/// Maps a key and the active language to display text
pub struct Translator {
    backend: Box<dyn TranslationBackend>,
    fallback: Language,
    active: RwLock<Language>,
    catalogs: RwLock<HashMap<Language, CatalogSlot>>,
    debug: bool,
}

impl Translator {
    pub fn new(backend: Box<dyn TranslationBackend>, initial: Language, fallback: Language) -> Self {
        Self {
            backend,
            fallback,
            active: RwLock::new(initial),
            catalogs: RwLock::new(HashMap::new()),
            debug: false,
        }
    }

    /// Report missing keys at `warn` instead of `trace`
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The active language
    pub fn language(&self) -> Language {
        *self.active.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn fallback_language(&self) -> Language {
        self.fallback
    }

    /// Switch the active language. Its catalog is loaded eagerly so the
    /// next frame renders in the new language.
    ///
    /// Returns false when the catalog is unavailable; lookups then go
    /// through the fallback language.
    pub fn change_language(&self, language: Language) -> bool {
        let previous = {
            let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *active, language)
        };

        if previous != language {
            tracing::info!("Language changed from {} to {}", previous, language);
        }

        let available = self.catalog(language).is_some();
        if !available {
            tracing::warn!(
                "No catalog for {}, labels will use {} translations",
                language,
                self.fallback
            );
        }
        available
    }

    /// Whether a catalog for `language` has been loaded successfully
    pub fn is_loaded(&self, language: Language) -> bool {
        matches!(
            self.catalogs
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(&language),
            Some(CatalogSlot::Loaded(_))
        )
    }

    /// Translate `key` in the active language.
    ///
    /// Falls back to the fallback language's catalog and finally returns
    /// the key itself.
    pub fn t(&self, key: &str) -> String {
        let active = self.language();
        self.lookup(active, key)
            .or_else(|| {
                if active == self.fallback {
                    None
                } else {
                    self.lookup(self.fallback, key)
                }
            })
            .unwrap_or_else(|| {
                if self.debug {
                    tracing::warn!("Missing translation for {:?} in {}", key, active);
                } else {
                    tracing::trace!("Missing translation for {:?} in {}", key, active);
                }
                key.to_string()
            })
    }

    /// Translate `key` and substitute `{{name}}` placeholders
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), args)
    }

    fn lookup(&self, language: Language, key: &str) -> Option<String> {
        self.catalog(language)
            .and_then(|catalog| catalog.get(key).map(str::to_string))
    }

    fn catalog(&self, language: Language) -> Option<Arc<Catalog>> {
        {
            let catalogs = self.catalogs.read().unwrap_or_else(PoisonError::into_inner);
            match catalogs.get(&language) {
                Some(CatalogSlot::Loaded(catalog)) => return Some(Arc::clone(catalog)),
                Some(CatalogSlot::Failed) => return None,
                None => {}
            }
        }

        let mut catalogs = self.catalogs.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have loaded it between the two locks
        if let Some(slot) = catalogs.get(&language) {
            return match slot {
                CatalogSlot::Loaded(catalog) => Some(Arc::clone(catalog)),
                CatalogSlot::Failed => None,
            };
        }

        match self.backend.load(language) {
            Ok(catalog) => {
                tracing::debug!("Loaded {} translations for {}", catalog.len(), language);
                let catalog = Arc::new(catalog);
                catalogs.insert(language, CatalogSlot::Loaded(Arc::clone(&catalog)));
                Some(catalog)
            }
            Err(e) => {
                tracing::warn!("Failed to load translations for {}: {}", language, e);
                catalogs.insert(language, CatalogSlot::Failed);
                None
            }
        }
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("active", &self.language())
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// Replace `{{name}}` (whitespace inside the braces allowed) with values.
/// Unknown placeholders are left untouched.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after[..end].trim();
        match args.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{IntakeError, Result};
    use crate::i18n::MemoryBackend;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const HE: &str = r#"{"ticketForm":{"name":"שם מלא","greeting":"שלום {{name}}"},"only":{"he":"רק"}}"#;
    const RU: &str = r#"{"ticketForm":{"name":"Полное имя","greeting":"Привет, {{ name }}"}}"#;

    fn translator(initial: Language) -> Translator {
        let backend = MemoryBackend::new()
            .with_catalog(Language::Hebrew, HE)
            .with_catalog(Language::Russian, RU);
        Translator::new(Box::new(backend), initial, Language::Hebrew)
    }

    struct CountingBackend {
        loads: Arc<AtomicUsize>,
    }

    impl TranslationBackend for CountingBackend {
        fn load(&self, language: Language) -> Result<Catalog> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Err(IntakeError::translation(language.code(), "offline"))
        }
    }

    #[test]
    fn test_translate_active_language() {
        let t = translator(Language::Russian);
        assert_eq!(t.t("ticketForm.name"), "Полное имя");
    }

    #[test]
    fn test_falls_back_to_fallback_language_then_key() {
        let t = translator(Language::Russian);
        assert_eq!(t.t("only.he"), "רק");
        assert_eq!(t.t("does.not.exist"), "does.not.exist");
    }

    #[test]
    fn test_change_language_switches_lookups() {
        let t = translator(Language::Hebrew);
        assert_eq!(t.t("ticketForm.name"), "שם מלא");
        assert!(!t.is_loaded(Language::Russian));

        assert!(t.change_language(Language::Russian));
        assert!(t.is_loaded(Language::Russian));
        assert_eq!(t.language(), Language::Russian);
        assert_eq!(t.t("ticketForm.name"), "Полное имя");
    }

    #[test]
    fn test_catalogs_load_lazily() {
        let t = translator(Language::Hebrew);
        assert!(!t.is_loaded(Language::Hebrew));
        let _ = t.t("ticketForm.name");
        assert!(t.is_loaded(Language::Hebrew));
        assert!(!t.is_loaded(Language::Russian));
    }

    #[test]
    fn test_failed_load_is_not_retried() {
        let loads = Arc::new(AtomicUsize::new(0));
        let t = Translator::new(
            Box::new(CountingBackend {
                loads: Arc::clone(&loads),
            }),
            Language::Hebrew,
            Language::Hebrew,
        );

        assert_eq!(t.t("header.title"), "header.title");
        assert_eq!(t.t("header.login"), "header.login");
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(!t.is_loaded(Language::Hebrew));
    }

    #[test]
    fn test_change_to_missing_catalog_reports_and_falls_back() {
        let backend = MemoryBackend::new().with_catalog(Language::Hebrew, HE);
        let t = Translator::new(Box::new(backend), Language::Hebrew, Language::Hebrew);

        assert!(!t.change_language(Language::Russian));
        assert_eq!(t.language(), Language::Russian);
        assert!(!t.is_loaded(Language::Russian));
        assert_eq!(t.t("ticketForm.name"), "שם מלא");
    }

    #[test]
    fn test_interpolation() {
        let t = translator(Language::Hebrew);
        assert_eq!(t.t_with("ticketForm.greeting", &[("name", "Dana")]), "שלום Dana");
        t.change_language(Language::Russian);
        assert_eq!(t.t_with("ticketForm.greeting", &[("name", "Dana")]), "Привет, Dana");
    }

    #[test]
    fn test_interpolate_edge_cases() {
        assert_eq!(interpolate("{{a}}-{{b}}", &[("a", "1")]), "1-{{b}}");
        assert_eq!(interpolate("open {{a", &[("a", "1")]), "open {{a");
        assert_eq!(interpolate("no placeholders", &[]), "no placeholders");
    }
}
