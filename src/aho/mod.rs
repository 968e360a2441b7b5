/// The built automaton and its keyword table.
pub mod automaton;
/// Automaton construction: trie insertion and the breadth-first failure pass.
pub mod builder;
/// Traits for transition labels and keyword/text conversion.
pub mod char_trait;
/// Internal state storage: compact transition maps and state records.
pub(crate) mod node;
/// Scanning: match reporting over a built automaton.
pub mod search;

pub use automaton::Automaton;
pub use builder::{build_automaton, Builder, BuilderError};
pub use char_trait::{AhoChar, IntoChars};
pub use search::{FindIter, Match};
