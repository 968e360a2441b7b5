//! Scanning operations over a built [`Automaton`].
//!
//! All query forms share one forward pass. The scan cursor advances over
//! every character exactly once, following failure links only to locate the
//! next transition, never to re-read input. Because each state's result set
//! already holds the closure over its failure chain, reporting matches costs
//! no extra traversal.

use smallvec::SmallVec;

use super::automaton::Automaton;
use super::char_trait::{AhoChar, IntoChars};
use super::node::{StateId, ROOT};

/// A single occurrence of a keyword in a scanned text.
///
/// Positions are offsets in label units from the start of the text; for
/// `&str` input that means **character** (not byte) indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match<'a, C: AhoChar> {
    position: usize,
    keyword: &'a [C],
    hit_index: usize,
}

impl<'a, C: AhoChar> Match<'a, C> {
    /// Offset of the first character of the match.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Offset one past the last character of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.position + self.keyword.len()
    }

    /// The matched keyword's exact labels.
    #[inline]
    pub fn keyword(&self) -> &'a [C] {
        self.keyword
    }

    /// 0-based position of the keyword in the construction-time input list.
    ///
    /// For a keyword that was supplied more than once, this is the position
    /// of its first occurrence.
    #[inline]
    pub fn hit_index(&self) -> usize {
        self.hit_index
    }
}

/// A lazy iterator over every match in a text, in scan order.
///
/// Created by [`Automaton::find_iter`]. Matches ending at the same position
/// are yielded in trie insertion order.
pub struct FindIter<'a, C: AhoChar> {
    automaton: &'a Automaton<C>,
    text: SmallVec<[C; 32]>,
    /// Current state after consuming `text[..at]`.
    state: StateId,
    /// Next text index to consume.
    at: usize,
    /// Results already yielded at the current state.
    emitted: usize,
}

impl<'a, C: AhoChar> Iterator for FindIter<'a, C> {
    type Item = Match<'a, C>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let results = &self.automaton.state(self.state).results;
            if let Some(&id) = results.get(self.emitted) {
                self.emitted += 1;
                let keyword = self.automaton.keyword(id);
                // The match ends on the most recently consumed character,
                // at index `at - 1`.
                return Some(Match {
                    position: self.at - keyword.chars.len(),
                    keyword: &keyword.chars[..],
                    hit_index: keyword.hit_index,
                });
            }

            let ch = *self.text.get(self.at)?;
            self.state = self.automaton.next_state(self.state, ch);
            self.at += 1;
            self.emitted = 0;
        }
    }
}

impl<C: AhoChar> std::iter::FusedIterator for FindIter<'_, C> {}

impl<C: AhoChar> Automaton<C> {
    /// Returns an iterator over every match in `text`, in scan order.
    ///
    /// # Examples
    ///
    /// ```
    /// use libaho::aho::builder::build_automaton;
    ///
    /// let ac = build_automaton(["ab", "b"]).unwrap();
    /// let ends: Vec<usize> = ac.find_iter("abab").map(|m| m.end()).collect();
    /// assert_eq!(ends, [2, 2, 4, 4]);
    /// ```
    pub fn find_iter(&self, text: impl IntoChars<C>) -> FindIter<'_, C> {
        self.find_iter_at(text, 0)
    }

    /// Like [`find_iter`](Automaton::find_iter), but scanning begins at
    /// offset `start`. Only matches contained entirely in `text[start..]`
    /// are reported; positions stay relative to the start of `text`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is greater than the text length.
    pub fn find_iter_at(&self, text: impl IntoChars<C>, start: usize) -> FindIter<'_, C> {
        let text = text.collect_chars();
        assert!(
            start <= text.len(),
            "scan start {start} out of bounds for text of length {}",
            text.len()
        );
        FindIter {
            automaton: self,
            text,
            state: ROOT,
            at: start,
            emitted: 0,
        }
    }

    /// Returns every match in `text`, in scan order.
    ///
    /// The empty vector means no keyword occurs anywhere in `text`. Matches
    /// ending at the same position are reported in trie insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use libaho::aho::builder::build_automaton;
    ///
    /// let ac = build_automaton(["he", "she"]).unwrap();
    ///
    /// let matches = ac.find_all("she said");
    /// assert_eq!(matches.len(), 2);
    /// assert_eq!(matches[0].position(), 0);
    /// assert_eq!(matches[1].position(), 1);
    ///
    /// assert!(ac.find_all("nothing here").is_empty());
    /// ```
    pub fn find_all(&self, text: impl IntoChars<C>) -> Vec<Match<'_, C>> {
        self.find_iter(text).collect()
    }

    /// Like [`find_all`](Automaton::find_all), but scanning begins at offset
    /// `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is greater than the text length.
    pub fn find_all_at(&self, text: impl IntoChars<C>, start: usize) -> Vec<Match<'_, C>> {
        self.find_iter_at(text, start).collect()
    }

    /// Returns the first match encountered while scanning left to right, or
    /// `None` if no keyword occurs in `text`.
    ///
    /// Scanning stops as soon as a match is found. Among matches ending at
    /// the same position, the first in trie insertion order is returned; it
    /// is the earliest-*ending* match, which for suffix-nested keywords need
    /// not be the earliest-starting one.
    ///
    /// # Examples
    ///
    /// ```
    /// use libaho::aho::builder::build_automaton;
    ///
    /// let ac = build_automaton(["his", "hers"]).unwrap();
    /// let first = ac.find_first("ahishers").unwrap();
    /// assert_eq!((first.position(), first.hit_index()), (1, 0));
    /// assert!(ac.find_first("nope").is_none());
    /// ```
    pub fn find_first(&self, text: impl IntoChars<C>) -> Option<Match<'_, C>> {
        self.find_iter(text).next()
    }

    /// Like [`find_first`](Automaton::find_first), but scanning begins at
    /// offset `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is greater than the text length.
    pub fn find_first_at(&self, text: impl IntoChars<C>, start: usize) -> Option<Match<'_, C>> {
        self.find_iter_at(text, start).next()
    }

    /// Returns `true` if any keyword occurs in `text`.
    ///
    /// Scanning stops at the first match.
    ///
    /// # Examples
    ///
    /// ```
    /// use libaho::aho::builder::build_automaton;
    ///
    /// let ac = build_automaton(["rot", "gz"]).unwrap();
    /// assert!(ac.contains_any("archive.tar.gz"));
    /// assert!(!ac.contains_any("archive.tar"));
    /// ```
    pub fn contains_any(&self, text: impl IntoChars<C>) -> bool {
        self.find_first(text).is_some()
    }

    /// Like [`contains_any`](Automaton::contains_any), but scanning begins
    /// at offset `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is greater than the text length.
    pub fn contains_any_at(&self, text: impl IntoChars<C>, start: usize) -> bool {
        self.find_first_at(text, start).is_some()
    }

    /// Advances one character: follows failure links until a transition on
    /// `ch` exists, or settles on the root when none does. The text cursor
    /// never moves backwards.
    fn next_state(&self, mut state: StateId, ch: C) -> StateId {
        loop {
            if let Some(next) = self.state(state).children.find(ch) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.state(state).failure;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aho::builder::build_automaton;

    fn hits(matches: &[Match<'_, char>]) -> Vec<(usize, String)> {
        matches
            .iter()
            .map(|m| (m.position(), m.keyword().iter().collect()))
            .collect()
    }

    #[test]
    fn overlapping_and_nested_matches() {
        let ac = build_automaton(["he", "she", "his", "hers"]).unwrap();
        let matches = ac.find_all("ahishers");
        assert_eq!(
            hits(&matches),
            [
                (1, "his".to_string()),
                (3, "she".to_string()),
                (4, "he".to_string()),
                (4, "hers".to_string()),
            ]
        );
        assert_eq!(
            matches.iter().map(|m| m.hit_index()).collect::<Vec<_>>(),
            [2, 1, 0, 3]
        );
    }

    #[test]
    fn find_first_returns_earliest_ending_match() {
        let ac = build_automaton(["he", "she", "his", "hers"]).unwrap();
        let first = ac.find_first("ahishers").unwrap();
        assert_eq!((first.position(), first.keyword()), (1, &['h', 'i', 's'][..]));
    }

    #[test]
    fn contains_any_agrees_with_find_all() {
        let ac = build_automaton(["needle"]).unwrap();
        assert!(ac.contains_any("haystack with a needle in it"));
        assert!(!ac.contains_any("haystack without one"));
        assert_eq!(ac.contains_any("abc"), !ac.find_all("abc").is_empty());
    }

    #[test]
    fn no_match_is_an_empty_vec() {
        let ac = build_automaton(["xyz"]).unwrap();
        assert!(ac.find_all("abcdefg").is_empty());
        assert!(ac.find_first("abcdefg").is_none());
    }

    #[test]
    fn empty_keyword_set_never_matches() {
        let ac = build_automaton::<char, &str>([]).unwrap();
        assert!(ac.find_all("anything at all").is_empty());
        assert!(!ac.contains_any("anything at all"));
    }

    #[test]
    fn empty_text_never_matches() {
        let ac = build_automaton(["a"]).unwrap();
        assert!(ac.find_all("").is_empty());
        assert!(!ac.contains_any(""));
    }

    #[test]
    fn nested_keyword_chain() {
        let ac = build_automaton(["a", "aa", "aaa"]).unwrap();
        // Every substring of "aaaa" drawn from the keyword set, in scan
        // order: longest keyword first at each end position's state, then
        // the inherited shorter suffixes.
        assert_eq!(
            hits(&ac.find_all("aaaa")),
            [
                (0, "a".to_string()),
                (0, "aa".to_string()),
                (1, "a".to_string()),
                (0, "aaa".to_string()),
                (1, "aa".to_string()),
                (2, "a".to_string()),
                (1, "aaa".to_string()),
                (2, "aa".to_string()),
                (3, "a".to_string()),
            ]
        );
    }

    #[test]
    fn keyword_overlapping_itself() {
        let ac = build_automaton(["aba"]).unwrap();
        assert_eq!(
            hits(&ac.find_all("ababa")),
            [(0, "aba".to_string()), (2, "aba".to_string())]
        );
    }

    #[test]
    fn scan_start_offset_skips_earlier_matches() {
        let ac = build_automaton(["he", "she", "his", "hers"]).unwrap();
        assert_eq!(
            hits(&ac.find_all_at("ahishers", 2)),
            [
                (3, "she".to_string()),
                (4, "he".to_string()),
                (4, "hers".to_string()),
            ]
        );
        assert!(ac.find_all_at("ahishers", 8).is_empty());
    }

    #[test]
    fn matches_straddling_the_start_offset_are_not_reported() {
        let ac = build_automaton(["his"]).unwrap();
        assert!(ac.find_all_at("ahis", 2).is_empty());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn scan_start_beyond_text_length_panics() {
        let ac = build_automaton(["a"]).unwrap();
        ac.find_all_at("abc", 4);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let ac = build_automaton(["He"]).unwrap();
        assert!(!ac.contains_any("he said"));
        assert!(ac.contains_any("He said"));
    }

    #[test]
    fn positions_are_character_indices() {
        let ac = build_automaton(["鱼"]).unwrap();
        let matches = ac.find_all("授人以鱼");
        assert_eq!(matches[0].position(), 3);
        assert_eq!(matches[0].end(), 4);
    }

    #[test]
    fn scans_byte_sequences() {
        let ac = build_automaton([vec![1u8, 2, 3], vec![2, 3]]).unwrap();
        let matches = ac.find_all(&[0u8, 1, 2, 3, 4][..]);
        assert_eq!(
            matches
                .iter()
                .map(|m| (m.position(), m.keyword().to_vec()))
                .collect::<Vec<_>>(),
            [(1, vec![1, 2, 3]), (2, vec![2, 3])]
        );
    }

    #[test]
    fn repeated_scans_are_deterministic() {
        let ac = build_automaton(["ab", "ba"]).unwrap();
        let first = hits(&ac.find_all("abab"));
        for _ in 0..3 {
            assert_eq!(hits(&ac.find_all("abab")), first);
        }
    }

    #[test]
    fn find_iter_is_fused() {
        let ac = build_automaton(["a"]).unwrap();
        let mut it = ac.find_iter("aa");
        assert_eq!(it.next().map(|m| m.position()), Some(0));
        assert_eq!(it.next().map(|m| m.position()), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn match_accessors() {
        let ac = build_automaton(["bc"]).unwrap();
        let m = ac.find_first("abcd").unwrap();
        assert_eq!(m.position(), 1);
        assert_eq!(m.end(), 3);
        assert_eq!(m.keyword(), &['b', 'c'][..]);
        assert_eq!(m.hit_index(), 0);
    }
}
