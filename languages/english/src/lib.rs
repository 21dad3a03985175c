pub mod lexicon;

pub use lexicon::EnglishLexicon;
