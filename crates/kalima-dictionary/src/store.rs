use std::collections::{HashMap, HashSet};

use crate::lexicon::LanguageLexicon;
use crate::signature::Signature;

/// One dictionary word plus its precomputed signature, built once at
/// load time and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct WordRecord {
    pub word: String,
    pub signature: Signature,
}

/// The word list for one (language, category), indexed for multiset
/// matching.
///
/// Records keep their load order; the length index lets the matcher
/// discard out-of-range words in O(1) before any signature work.
pub struct DictionaryStore {
    records: Vec<WordRecord>,
    /// word length -> indices into `records`, ascending
    by_len: HashMap<usize, Vec<u32>>,
}

impl DictionaryStore {
    /// Build a store from raw word lines.
    ///
    /// Each line is folded through the lexicon; lines that fold to
    /// nothing are skipped, and duplicates (after folding) keep their
    /// first occurrence only.
    pub fn build<'a, I>(lexicon: &dyn LanguageLexicon, raw_words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut records: Vec<WordRecord> = Vec::new();
        let mut by_len: HashMap<usize, Vec<u32>> = HashMap::new();
        let mut seen: HashSet<String> = HashSet::new();

        for raw in raw_words {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let Some(word) = lexicon.fold_word(raw) else {
                continue;
            };
            if !seen.insert(word.clone()) {
                continue;
            }

            let signature = Signature::of_word(&word);
            let idx = records.len() as u32;
            by_len.entry(signature.len()).or_default().push(idx);
            records.push(WordRecord { word, signature });
        }

        Self { records, by_len }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    /// Indices of records whose length falls in `[min_len, max_len]`,
    /// restored to load order
    pub(crate) fn indices_in_range(&self, min_len: usize, max_len: usize) -> Vec<u32> {
        let mut indices: Vec<u32> = Vec::new();
        for (len, idxs) in &self.by_len {
            if *len >= min_len && *len <= max_len {
                indices.extend_from_slice(idxs);
            }
        }
        indices.sort_unstable();
        indices
    }
}
