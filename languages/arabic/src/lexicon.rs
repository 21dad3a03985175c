use kalima_dictionary::lexicon::LanguageLexicon;
use kalima_types::Language;
use unicode_normalization::UnicodeNormalization;

const TATWEEL: char = '\u{0640}';

/// Harakat and other combining marks that never count as letters
fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

/// Arabic lexicon.
///
/// Folding strips diacritics and tatweel, merges the hamza-seated alef
/// variants into bare alef, and folds alef maqsura / ta marbuta into
/// their base letters, so "مَدْرَسَة" and "مدرسه" land on the same bag.
pub struct ArabicLexicon;

impl ArabicLexicon {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArabicLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageLexicon for ArabicLexicon {
    fn language(&self) -> Language {
        Language::Ar
    }

    fn fold_letter(&self, c: char) -> Option<char> {
        if is_diacritic(c) || c == TATWEEL {
            return None;
        }
        match c {
            'أ' | 'إ' | 'آ' | 'ٱ' => Some('ا'),
            'ى' => Some('ي'),
            'ة' => Some('ه'),
            c if ('\u{0621}'..='\u{064A}').contains(&c) => Some(c),
            _ => None,
        }
    }

    /// Recompose first (NFC) so decomposed alef + madda sequences fold
    /// the same way as their precomposed forms
    fn fold_word(&self, raw: &str) -> Option<String> {
        let folded: String = raw
            .nfc()
            .filter_map(|c| self.fold_letter(c))
            .collect();
        if folded.is_empty() { None } else { Some(folded) }
    }

    fn word_list(&self, category: &str) -> Option<&'static str> {
        match category {
            "general" => Some(include_str!("../data/general.txt")),
            "animals" => Some(include_str!("../data/animals.txt")),
            _ => None,
        }
    }

    fn categories(&self) -> Vec<&'static str> {
        vec!["general", "animals"]
    }
}
