pub mod catalog;
pub mod lexicon;
pub mod matcher;
pub mod signature;
pub mod store;
