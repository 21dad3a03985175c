use kalima_dictionary::lexicon::LanguageLexicon;
use kalima_types::Language;

/// English lexicon: ASCII lowercase folding, embedded category lists
pub struct EnglishLexicon;

impl EnglishLexicon {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnglishLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageLexicon for EnglishLexicon {
    fn language(&self) -> Language {
        Language::En
    }

    fn fold_letter(&self, c: char) -> Option<char> {
        c.is_ascii_alphabetic().then(|| c.to_ascii_lowercase())
    }

    fn word_list(&self, category: &str) -> Option<&'static str> {
        match category {
            "general" => Some(include_str!("../data/general.txt")),
            "animals" => Some(include_str!("../data/animals.txt")),
            "food" => Some(include_str!("../data/food.txt")),
            _ => None,
        }
    }

    fn categories(&self) -> Vec<&'static str> {
        vec!["general", "animals", "food"]
    }
}
