use super::char_trait::{AhoChar, IntoChars};
use super::node::{AhoNode, KeywordId, StateId, ROOT};

/// One entry of the automaton's keyword table.
#[derive(Clone, Debug)]
pub(crate) struct Keyword<C> {
    /// The keyword's labels.
    pub(crate) chars: Box<[C]>,
    /// 0-based position of this keyword's first occurrence in the
    /// construction-time input list.
    pub(crate) hit_index: usize,
}

/// An immutable multi-pattern matcher built from a set of keywords.
///
/// Constructed once via [`Builder`](super::builder::Builder) or
/// [`build_automaton`](super::builder::build_automaton). Scanning never
/// mutates the automaton, so a single instance can serve any number of
/// concurrent scans over the same or different texts.
///
/// # Examples
///
/// ```
/// use libaho::aho::builder::build_automaton;
///
/// let ac = build_automaton(["BAKE", "CAKE"]).unwrap();
/// assert!(ac.contains_any("PANCAKES"));
/// assert!(!ac.contains_any("WAFFLES"));
/// ```
pub struct Automaton<C: AhoChar> {
    /// All states; slot 0 is the root.
    states: Vec<AhoNode<C>>,
    /// Unique keywords, in first-added order.
    keywords: Vec<Keyword<C>>,
}

impl<C: AhoChar> Automaton<C> {
    pub(crate) fn from_parts(states: Vec<AhoNode<C>>, keywords: Vec<Keyword<C>>) -> Self {
        Automaton { states, keywords }
    }

    #[inline]
    pub(crate) fn state(&self, id: StateId) -> &AhoNode<C> {
        &self.states[id as usize]
    }

    #[inline]
    pub(crate) fn keyword(&self, id: KeywordId) -> &Keyword<C> {
        &self.keywords[id as usize]
    }

    /// Returns the number of states in the automaton, including the root.
    pub fn node_count(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of unique keywords the automaton recognizes.
    ///
    /// Duplicate keywords supplied at construction count once.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Returns `true` if the automaton was built from an empty keyword set.
    ///
    /// An empty automaton never matches anything.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Returns `true` if `keyword` is one of the keywords the automaton was
    /// built from.
    ///
    /// This checks exact set membership, not occurrence in a text; use
    /// [`contains_any`](Automaton::contains_any) to scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use libaho::aho::builder::build_automaton;
    ///
    /// let ac = build_automaton(["he", "hers"]).unwrap();
    /// assert!(ac.contains_keyword("hers"));
    /// assert!(!ac.contains_keyword("her"));
    /// ```
    pub fn contains_keyword(&self, keyword: impl IntoChars<C>) -> bool {
        let chars = keyword.collect_chars();
        let mut state = ROOT;
        for &ch in chars.iter() {
            match self.state(state).children.find(ch) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.state(state)
            .results
            .iter()
            .any(|&id| *self.keyword(id).chars == *chars)
    }
}

impl<C: AhoChar> std::fmt::Debug for Automaton<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("node_count", &self.node_count())
            .field("keyword_count", &self.keyword_count())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aho::builder::build_automaton;

    #[test]
    fn node_count_counts_shared_prefixes_once() {
        // root + h + e + r + s
        let ac = build_automaton(["he", "hers"]).unwrap();
        assert_eq!(ac.node_count(), 5);
    }

    #[test]
    fn keyword_count_ignores_duplicates() {
        let ac = build_automaton(["ab", "cd", "ab"]).unwrap();
        assert_eq!(ac.keyword_count(), 2);
    }

    #[test]
    fn empty_automaton() {
        let ac = build_automaton::<char, &str>([]).unwrap();
        assert!(ac.is_empty());
        assert_eq!(ac.node_count(), 1);
        assert_eq!(ac.keyword_count(), 0);
    }

    #[test]
    fn contains_keyword_is_exact_membership() {
        let ac = build_automaton(["he", "she"]).unwrap();
        assert!(ac.contains_keyword("he"));
        assert!(ac.contains_keyword("she"));
        // Prefixes and extensions of keywords are not members.
        assert!(!ac.contains_keyword("h"));
        assert!(!ac.contains_keyword("shed"));
    }

    #[test]
    fn contains_keyword_distinguishes_suffix_keywords() {
        // "he" is a proper suffix of "she"; membership must not confuse the
        // two paths.
        let ac = build_automaton(["she", "he"]).unwrap();
        assert!(ac.contains_keyword("he"));
        assert!(!ac.contains_keyword("e"));
        assert!(!ac.contains_keyword("sh"));
    }

    #[test]
    fn debug_reports_counts() {
        let ac = build_automaton(["ab"]).unwrap();
        let dbg = format!("{ac:?}");
        assert!(dbg.contains("node_count"));
        assert!(dbg.contains("keyword_count"));
    }

    #[test]
    fn automaton_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Automaton<char>>();
        assert_send_sync::<Automaton<u8>>();
    }
}
