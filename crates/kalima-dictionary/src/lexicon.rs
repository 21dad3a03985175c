use kalima_types::Language;

/// Per-language folding rules and bundled word lists.
///
/// Folding decides, once per language, which symbols participate in
/// matching and what their canonical form is. The same rule is applied
/// to dictionary words at load time and to incoming letter bags, so the
/// two sides always compare in the same alphabet.
pub trait LanguageLexicon: Send + Sync {
    /// Language this lexicon serves
    fn language(&self) -> Language;

    /// Fold one raw symbol into its canonical matching form.
    ///
    /// Returns `None` for symbols that do not participate in matching
    /// (punctuation, digits, diacritics); those are dropped, never
    /// treated as wildcards.
    fn fold_letter(&self, c: char) -> Option<char>;

    /// Raw newline-separated word list bundled for a category
    fn word_list(&self, category: &str) -> Option<&'static str>;

    /// Categories this lexicon ships word lists for
    fn categories(&self) -> Vec<&'static str>;

    /// Fold a whole word; `None` when nothing survives folding
    fn fold_word(&self, raw: &str) -> Option<String> {
        let folded: String = raw.chars().filter_map(|c| self.fold_letter(c)).collect();
        if folded.is_empty() { None } else { Some(folded) }
    }
}
