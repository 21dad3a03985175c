use kalima_dictionary::catalog::DictionaryCatalog;
use kalima_dictionary::lexicon::LanguageLexicon;
use kalima_types::Language;


/// Small fixed lexicon so tests do not depend on the shipped lists
struct FixedLexicon;

impl LanguageLexicon for FixedLexicon {
    fn language(&self) -> Language {
        Language::En
    }

    fn fold_letter(&self, c: char) -> Option<char> {
        c.is_ascii_alphabetic().then(|| c.to_ascii_lowercase())
    }

    fn word_list(&self, category: &str) -> Option<&'static str> {
        match category {
            "general" => Some("let\ntree\nlet\nrel"),
            "pairs" => Some("aa\nab\nabb"),
            _ => None,
        }
    }

    fn categories(&self) -> Vec<&'static str> {
        vec!["general", "pairs"]
    }
}

fn fixed_catalog() -> DictionaryCatalog {
    let mut catalog = DictionaryCatalog::new();
    catalog.register(Box::new(FixedLexicon));
    catalog
}

fn letters(s: &str) -> Vec<String> {
    s.chars().map(String::from).collect()
}
