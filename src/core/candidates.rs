//! Ordered, duplicate-free sets of candidate words

use super::Word;
use rustc_hash::FxHashSet;

/// Words still consistent with every feedback observed so far
///
/// Insertion order is preserved so that order-based guess policies and
/// tie-breaking stay reproducible; duplicates are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Build a set from words, keeping the first occurrence of each
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();
        Self { words }
    }

    /// Wrap words the caller already knows to be unique (a subset of a set)
    pub(crate) const fn from_unique(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    /// Check that every member of `self` is also in `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        let other: FxHashSet<&Word> = other.iter().collect();
        self.words.iter().all(|word| other.contains(word))
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn duplicates_are_dropped_keeping_first_occurrence() {
        let set = CandidateSet::new(words(&["crane", "slate", "CRANE", "irate", "slate"]));
        let texts: Vec<&str> = set.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn empty_set() {
        let set = CandidateSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.first().is_none());
    }

    #[test]
    fn subset_check() {
        let all: CandidateSet = words(&["crane", "slate", "irate"]).into_iter().collect();
        let some: CandidateSet = words(&["irate", "crane"]).into_iter().collect();
        let other: CandidateSet = words(&["grate"]).into_iter().collect();

        assert!(some.is_subset(&all));
        assert!(all.is_subset(&all));
        assert!(!other.is_subset(&all));
        assert!(CandidateSet::default().is_subset(&other));
    }

    #[test]
    fn members_keep_insertion_order() {
        let set = CandidateSet::new(words(&["slate", "aback", "crane"]));
        assert_eq!(set.first().unwrap().text(), "SLATE");
        assert_eq!(set.as_slice().last().unwrap().text(), "CRANE");
        assert!(set.contains(&Word::new("aback").unwrap()));
    }
}
