pub mod lexicon;

pub use lexicon::ArabicLexicon;
