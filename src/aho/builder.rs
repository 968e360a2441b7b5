use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};

use hashbrown::HashMap;

use super::automaton::{Automaton, Keyword};
use super::char_trait::{AhoChar, IntoChars};
use super::node::{AhoNode, KeywordId, StateId, ROOT};

/// An incremental builder for an [`Automaton`].
///
/// Keywords may be added in any order; duplicates are allowed and collapse
/// onto their first occurrence. [`build`](Builder::build) consumes the
/// builder, computes every failure link in breadth-first order, and returns
/// the finished, immutable automaton.
///
/// # Examples
///
/// ```
/// use libaho::aho::builder::Builder;
///
/// let mut builder = Builder::new();
/// builder.add_keyword("he").unwrap();
/// builder.add_keyword("she").unwrap();
/// let ac = builder.build();
/// assert!(ac.contains_any("shell"));
/// ```
pub struct Builder<C: AhoChar> {
    states: Vec<AhoNode<C>>,
    keywords: Vec<Keyword<C>>,
    /// Keyword text → slot in `keywords`; collapses duplicate keywords.
    seen: HashMap<Box<[C]>, KeywordId>,
    /// Running position in the input list, counting duplicates.
    input_index: usize,
}

impl<C: AhoChar> Builder<C> {
    /// Creates a builder holding only the root state.
    pub fn new() -> Self {
        Builder {
            states: vec![AhoNode::root()],
            keywords: Vec::new(),
            seen: HashMap::new(),
            input_index: 0,
        }
    }

    /// Adds a keyword to the automaton being constructed.
    ///
    /// The keyword can be any type that implements [`IntoChars`], including
    /// `&str`, `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays.
    ///
    /// Adding a keyword that is already present keeps the hit index of its
    /// first occurrence; the later occurrence still advances the running
    /// input position.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::Empty`] if the keyword has no characters.
    pub fn add_keyword(&mut self, keyword: impl IntoChars<C>) -> Result<(), BuilderError> {
        let chars = keyword.collect_chars();
        if chars.is_empty() {
            return Err(BuilderError::Empty);
        }

        let hit_index = self.input_index;
        self.input_index += 1;

        let id = match self.seen.get(chars.as_slice()) {
            // The first occurrence's hit index wins.
            Some(&id) => id,
            None => {
                let text: Box<[C]> = chars.as_slice().into();
                let id = self.keywords.len() as KeywordId;
                self.keywords.push(Keyword {
                    chars: text.clone(),
                    hit_index,
                });
                self.seen.insert(text, id);
                id
            }
        };

        let mut state = ROOT;
        for &ch in chars.iter() {
            state = self.child_or_insert(state, ch);
        }
        let terminal = &mut self.states[state as usize];
        if !terminal.results.contains(&id) {
            terminal.results.push(id);
        }
        Ok(())
    }

    /// Reuses the transition from `parent` over `ch` if present, otherwise
    /// creates a new state and links it in.
    fn child_or_insert(&mut self, parent: StateId, ch: C) -> StateId {
        if let Some(existing) = self.states[parent as usize].children.find(ch) {
            return existing;
        }
        let id = self.states.len() as StateId;
        self.states.push(AhoNode::new(ch, parent));
        self.states[parent as usize].children.insert(ch, id);
        id
    }

    /// Finalizes construction: computes every failure link in breadth-first
    /// order and merges each state's result set with its failure target's.
    ///
    /// Consumes the builder and returns the immutable automaton.
    pub fn build(mut self) -> Automaton<C> {
        // States at depth d must be final (failure link and merged results)
        // before any state at depth d + 1 is processed.
        let mut queue: VecDeque<StateId> = self.states[ROOT as usize]
            .children
            .iter()
            .map(|(_, id)| id)
            .collect();

        while let Some(id) = queue.pop_front() {
            let (parent, ch) = {
                let node = &self.states[id as usize];
                (node.parent, node.ch)
            };

            // Depth 1: the only proper suffix is the root's empty path.
            let failure = if parent == ROOT {
                ROOT
            } else {
                let mut r = self.states[parent as usize].failure;
                loop {
                    if let Some(next) = self.states[r as usize].children.find(ch) {
                        break next;
                    }
                    if r == ROOT {
                        break ROOT;
                    }
                    r = self.states[r as usize].failure;
                }
            };

            // The failure target is strictly shallower, so its results are
            // already the full closure over its own failure chain.
            let inherited = self.states[failure as usize].results.clone();
            let node = &mut self.states[id as usize];
            node.failure = failure;
            for keyword in inherited {
                if !node.results.contains(&keyword) {
                    node.results.push(keyword);
                }
            }

            queue.extend(
                self.states[id as usize]
                    .children
                    .iter()
                    .map(|(_, child)| child),
            );
        }

        Automaton::from_parts(self.states, self.keywords)
    }
}

impl<C: AhoChar> Default for Builder<C> {
    fn default() -> Self {
        Builder::new()
    }
}

/// Errors that can occur when building an automaton.
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// An empty keyword was supplied.
    ///
    /// The empty string would match before every position, so it is rejected
    /// as invalid input rather than given a surprising positional meaning.
    Empty,
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderError::Empty => {
                write!(f, "EmptyError - keywords must contain at least one character")
            }
        }
    }
}

impl Error for BuilderError {}

/// Builds an automaton from an iterator of keywords.
///
/// Each keyword must implement [`IntoChars`], allowing this function to
/// accept `&str`, `String`, slices, vectors, arrays, or any other supported
/// input type. Keywords may be given in any order; duplicates collapse onto
/// their first occurrence.
///
/// # Examples
///
/// Searching text for string keywords:
///
/// ```
/// use libaho::aho::builder::build_automaton;
///
/// let ac = build_automaton(["his", "hers"]).unwrap();
/// let matches = ac.find_all("ahishers");
/// assert_eq!(matches.len(), 2);
/// ```
///
/// Byte sequences work the same way:
///
/// ```
/// use libaho::aho::builder::build_automaton;
///
/// let ac = build_automaton([vec![1u8, 2], vec![2, 3]]).unwrap();
/// assert!(ac.contains_any(&[0u8, 1, 2, 3][..]));
/// ```
pub fn build_automaton<C, W>(
    keywords: impl IntoIterator<Item = W>,
) -> Result<Automaton<C>, BuilderError>
where
    C: AhoChar,
    W: IntoChars<C>,
{
    let mut builder = Builder::new();
    for keyword in keywords {
        builder.add_keyword(keyword)?;
    }
    Ok(builder.build())
}

/// Builds an automaton from a keyword file.
///
/// Reads keywords from a text file (one keyword per line). Lines starting
/// with '#' are treated as comments and ignored. Empty lines are skipped.
///
/// # Examples
///
/// ```no_run
/// use libaho::aho::builder::build_automaton_from_file;
///
/// let ac = build_automaton_from_file("keywords.txt").unwrap();
/// ```
pub fn build_automaton_from_file(filename: &str) -> Result<Automaton<char>, Box<dyn Error>> {
    let mut builder = Builder::new();
    let file = File::open(filename)?;
    let mut reader = BufReader::new(file);

    // Calling read_line repeatedly reuses one buffer instead of allocating a
    // fresh string per line.
    let mut buf = String::with_capacity(80);
    loop {
        let bytes_read = reader.read_line(&mut buf);
        match bytes_read {
            Ok(0) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        let keyword = buf.trim_end();
        if !keyword.is_empty() && !is_comment(keyword) {
            builder.add_keyword(keyword)?;
        }
        buf.clear();
    }
    Ok(builder.build())
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
