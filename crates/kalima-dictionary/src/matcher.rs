use crate::signature::LetterBag;
use crate::store::DictionaryStore;

/// Every stored word whose signature fits inside the bag and that is at
/// least `min_len` letters long, in dictionary load order.
///
/// Cost after length pruning is O(candidates x distinct letters); the
/// caller is expected to run this off the interactive path.
pub fn find_words(store: &DictionaryStore, bag: &LetterBag, min_len: usize) -> Vec<String> {
    if bag.is_empty() || min_len > bag.total() {
        return Vec::new();
    }

    let records = store.records();
    store
        .indices_in_range(min_len.max(1), bag.total())
        .into_iter()
        .map(|i| &records[i as usize])
        .filter(|record| record.signature.fits_in(bag))
        .map(|record| record.word.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LanguageLexicon;
    use kalima_types::Language;

    struct AsciiLexicon;

    impl LanguageLexicon for AsciiLexicon {
        fn language(&self) -> Language {
            Language::En
        }

        fn fold_letter(&self, c: char) -> Option<char> {
            c.is_ascii_alphabetic().then(|| c.to_ascii_lowercase())
        }

        fn word_list(&self, _category: &str) -> Option<&'static str> {
            None
        }

        fn categories(&self) -> Vec<&'static str> {
            vec![]
        }
    }

    fn store(words: &[&'static str]) -> DictionaryStore {
        DictionaryStore::build(&AsciiLexicon, words.iter().copied())
    }

    #[test]
    fn subset_matching_with_dedupe() {
        // duplicate "let" must not produce a duplicate result
        let store = store(&["let", "tree", "let", "rel"]);
        let bag = LetterBag::from_letters("letr".chars());

        assert_eq!(find_words(&store, &bag, 3), vec!["let", "rel"]);
    }

    #[test]
    fn words_needing_more_copies_are_rejected() {
        let store = store(&["aa", "ab", "abb"]);
        let bag = LetterBag::from_letters("aab".chars());

        // "abb" needs b:2 but only one b is available
        assert_eq!(find_words(&store, &bag, 2), vec!["aa", "ab"]);
    }

    #[test]
    fn min_len_prunes_short_words() {
        let store = store(&["a", "an", "ant"]);
        let bag = LetterBag::from_letters("antz".chars());

        assert_eq!(find_words(&store, &bag, 2), vec!["an", "ant"]);
    }

    #[test]
    fn words_longer_than_the_bag_never_match() {
        let store = store(&["abcde"]);
        let bag = LetterBag::from_letters("abc".chars());

        assert!(find_words(&store, &bag, 1).is_empty());
    }

    #[test]
    fn results_preserve_load_order_across_runs() {
        let store = store(&["tab", "bat", "at", "tabs"]);
        let bag = LetterBag::from_letters("bats".chars());

        let first = find_words(&store, &bag, 2);
        let second = find_words(&store, &bag, 2);
        assert_eq!(first, vec!["tab", "bat", "at", "tabs"]);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_bag_yields_empty_result() {
        let store = store(&["a"]);
        assert!(find_words(&store, &LetterBag::new(), 1).is_empty());
    }
}
