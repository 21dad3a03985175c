use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use kalima_types::Language;

use crate::lexicon::LanguageLexicon;
use crate::store::DictionaryStore;

/// Identifies one loadable word list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictionaryKey {
    pub language: Language,
    pub category: String,
}

impl DictionaryKey {
    pub fn new(language: Language, category: impl Into<String>) -> Self {
        Self {
            language,
            category: category.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no lexicon registered for language '{0}'")]
    NoLexicon(Language),

    #[error("no word list for language '{language}', category '{category}'")]
    NoWordList {
        language: Language,
        category: String,
    },

    #[error("overlay word list read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Load-once cache of dictionary stores, one per (language, category).
///
/// Stores live for the catalog's lifetime; dictionaries are small,
/// bounded sets, so there is no eviction.
pub struct DictionaryCatalog {
    lexicons: HashMap<Language, Box<dyn LanguageLexicon>>,
    overlay_dir: Option<PathBuf>,
    stores: HashMap<DictionaryKey, Arc<DictionaryStore>>,
}

impl DictionaryCatalog {
    pub fn new() -> Self {
        Self {
            lexicons: HashMap::new(),
            overlay_dir: None,
            stores: HashMap::new(),
        }
    }

    /// Point the catalog at a directory of `<lang>/<category>.txt`
    /// overlay word lists, merged after the embedded lists
    pub fn with_overlay_dir(mut self, dir: Option<impl Into<PathBuf>>) -> Self {
        self.overlay_dir = dir.map(Into::into);
        self
    }

    /// Register a lexicon; replaces any existing one for the language
    pub fn register(&mut self, lexicon: Box<dyn LanguageLexicon>) {
        tracing::debug!(language = %lexicon.language(), "lexicon registered");
        self.lexicons.insert(lexicon.language(), lexicon);
    }

    pub fn lexicon(&self, language: Language) -> Option<&dyn LanguageLexicon> {
        self.lexicons.get(&language).map(|l| l.as_ref())
    }

    /// Get the store for a key, building it on first use.
    ///
    /// Loading is idempotent: repeated calls for the same key return
    /// the already-built store.
    pub fn get_or_load(&mut self, key: &DictionaryKey) -> Result<Arc<DictionaryStore>, LoadError> {
        if let Some(store) = self.stores.get(key) {
            return Ok(store.clone());
        }

        let lexicon = self
            .lexicons
            .get(&key.language)
            .ok_or(LoadError::NoLexicon(key.language))?;

        let embedded = lexicon.word_list(&key.category);
        let overlay = self.read_overlay(key)?;

        if embedded.is_none() && overlay.is_none() {
            return Err(LoadError::NoWordList {
                language: key.language,
                category: key.category.clone(),
            });
        }

        let mut lines: Vec<&str> = Vec::new();
        if let Some(text) = embedded {
            lines.extend(text.lines());
        }
        if let Some(text) = overlay.as_deref() {
            lines.extend(text.lines());
        }

        let store = Arc::new(DictionaryStore::build(lexicon.as_ref(), lines));
        tracing::info!(
            language = %key.language,
            category = %key.category,
            words = store.len(),
            "dictionary loaded"
        );

        self.stores.insert(key.clone(), store.clone());
        Ok(store)
    }

    fn read_overlay(&self, key: &DictionaryKey) -> Result<Option<String>, LoadError> {
        let Some(dir) = &self.overlay_dir else {
            return Ok(None);
        };

        let path = dir
            .join(key.language.code())
            .join(format!("{}.txt", key.category));
        if !path.exists() {
            return Ok(None);
        }

        tracing::info!("loading overlay word list from {}", path.display());
        Ok(Some(std::fs::read_to_string(path)?))
    }
}

impl Default for DictionaryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLexicon {
        words: &'static str,
    }

    impl LanguageLexicon for FixedLexicon {
        fn language(&self) -> Language {
            Language::En
        }

        fn fold_letter(&self, c: char) -> Option<char> {
            c.is_ascii_alphabetic().then(|| c.to_ascii_lowercase())
        }

        fn word_list(&self, category: &str) -> Option<&'static str> {
            (category == "general").then_some(self.words)
        }

        fn categories(&self) -> Vec<&'static str> {
            vec!["general"]
        }
    }

    fn catalog() -> DictionaryCatalog {
        let mut catalog = DictionaryCatalog::new();
        catalog.register(Box::new(FixedLexicon {
            words: "cat\ndog\nbird",
        }));
        catalog
    }

    #[test]
    fn load_is_idempotent_and_returns_the_same_store() {
        let mut catalog = catalog();
        let key = DictionaryKey::new(Language::En, "general");

        let first = catalog.get_or_load(&key).unwrap();
        let second = catalog.get_or_load(&key).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn missing_category_fails_with_no_word_list() {
        let mut catalog = catalog();
        let key = DictionaryKey::new(Language::En, "vehicles");

        assert!(matches!(
            catalog.get_or_load(&key),
            Err(LoadError::NoWordList { .. })
        ));
    }

    #[test]
    fn missing_language_fails_with_no_lexicon() {
        let mut catalog = catalog();
        let key = DictionaryKey::new(Language::Ar, "general");

        assert!(matches!(
            catalog.get_or_load(&key),
            Err(LoadError::NoLexicon(Language::Ar))
        ));
    }

    #[test]
    fn overlay_words_are_appended_after_embedded_ones() {
        let dir = tempfile::tempdir().unwrap();
        let lang_dir = dir.path().join("en");
        std::fs::create_dir_all(&lang_dir).unwrap();
        std::fs::write(lang_dir.join("general.txt"), "dog\nfox").unwrap();

        let mut catalog = catalog().with_overlay_dir(Some(dir.path()));
        let key = DictionaryKey::new(Language::En, "general");
        let store = catalog.get_or_load(&key).unwrap();

        let words: Vec<&str> = store.records().iter().map(|r| r.word.as_str()).collect();
        // "dog" already embedded, so only "fox" is new
        assert_eq!(words, vec!["cat", "dog", "bird", "fox"]);
    }

    #[test]
    fn overlay_only_category_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let lang_dir = dir.path().join("en");
        std::fs::create_dir_all(&lang_dir).unwrap();
        std::fs::write(lang_dir.join("custom.txt"), "one\ntwo").unwrap();

        let mut catalog = catalog().with_overlay_dir(Some(dir.path()));
        let key = DictionaryKey::new(Language::En, "custom");

        assert_eq!(catalog.get_or_load(&key).unwrap().len(), 2);
    }
}
