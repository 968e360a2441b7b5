use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

/// Trait for types that can serve as transition labels in the automaton.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: transitions store labels by value
/// - `Eq + Ord`: matching labels and keeping a state's children sorted
/// - `Hash`: keyword deduplication during construction
/// - `Debug`: debug printing of states
/// - `Default`: sentinel label for the root state
pub trait AhoChar: Copy + Eq + Ord + Hash + Debug + Default {}

impl<T: Copy + Eq + Ord + Hash + Debug + Default> AhoChar for T {}

/// Trait for types usable as a keyword or as a text to scan.
///
/// Implemented for common string and sequence types so that
/// [`Builder::add_keyword`](super::builder::Builder::add_keyword) and the
/// scan operations accept them directly without manual conversion.
///
/// For `&str` inputs the labels are `char`s, so every position the scanner
/// reports is a **character** (not byte) index.
pub trait IntoChars<C: AhoChar> {
    /// Collects this input into a label buffer.
    fn collect_chars(self) -> SmallVec<[C; 32]>;
}

// String types → char

impl IntoChars<char> for &str {
    fn collect_chars(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoChars<char> for &&str {
    fn collect_chars(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoChars<char> for String {
    fn collect_chars(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoChars<char> for &String {
    fn collect_chars(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: AhoChar> IntoChars<C> for &[C] {
    fn collect_chars(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: AhoChar> IntoChars<C> for Vec<C> {
    fn collect_chars(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: AhoChar> IntoChars<C> for &Vec<C> {
    fn collect_chars(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: AhoChar, const N: usize> IntoChars<C> for [C; N] {
    fn collect_chars(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: AhoChar, const N: usize> IntoChars<C> for &[C; N] {
    fn collect_chars(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}
