use std::collections::HashMap;

/// Letter-frequency signature of one dictionary word.
///
/// Counts are kept sorted by letter so a fits-in-bag check touches each
/// distinct letter once, independent of word length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    counts: Vec<(char, u8)>,
    len: usize,
}

impl Signature {
    /// Derive the signature of an already-folded word
    pub fn of_word(word: &str) -> Self {
        let mut counts: Vec<(char, u8)> = Vec::new();
        let mut len = 0;

        for c in word.chars() {
            len += 1;
            match counts.binary_search_by_key(&c, |&(letter, _)| letter) {
                Ok(i) => counts[i].1 = counts[i].1.saturating_add(1),
                Err(i) => counts.insert(i, (c, 1)),
            }
        }

        Self { counts, len }
    }

    /// Word length in letters; equals the sum of the counts
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Required count for a letter; 0 when the word does not use it
    pub fn count(&self, c: char) -> u8 {
        self.counts
            .binary_search_by_key(&c, |&(letter, _)| letter)
            .map(|i| self.counts[i].1)
            .unwrap_or(0)
    }

    /// True when the bag covers every letter the word needs.
    /// Leftover bag letters are allowed; this is subset containment,
    /// not anagram equality.
    pub fn fits_in(&self, bag: &LetterBag) -> bool {
        self.counts.iter().all(|&(c, n)| bag.count(c) >= n)
    }
}

/// Multiset of available letters; only counts matter, never order.
/// A letter absent from the bag has count 0.
#[derive(Debug, Clone, Default)]
pub struct LetterBag {
    counts: HashMap<char, u8>,
    total: usize,
}

impl LetterBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bag from already-folded letters
    pub fn from_letters<I>(letters: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut bag = Self::new();
        for c in letters {
            bag.add(c);
        }
        bag
    }

    pub fn add(&mut self, c: char) {
        let slot = self.counts.entry(c).or_insert(0);
        *slot = slot.saturating_add(1);
        self.total += 1;
    }

    pub fn count(&self, c: char) -> u8 {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Total number of letters in the bag
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
