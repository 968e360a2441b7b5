//! # libaho
//!
//! A fast multi-pattern string search library for Rust, built on an
//! [Aho–Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm)
//! automaton.
//!
//! Given a fixed set of keywords, the automaton scans a text in a single
//! left-to-right pass and reports every occurrence of every keyword,
//! including overlapping and nested occurrences. Scan time is linear in the
//! text length plus the number of matches, no matter how many keywords were
//! supplied or how much they overlap.
//!
//! ## Features
//!
//! - **Generic over label type**: works with `char`, `u8`, `u16`, or any type
//!   implementing [`AhoChar`](aho::AhoChar)
//! - **One pass**: the scan cursor never moves backwards, no matter how the
//!   keywords overlap as prefixes or suffixes of each other
//! - **Build once, scan anywhere**: a built [`Automaton`](aho::Automaton) is
//!   immutable and `Send + Sync`, so any number of threads may scan it
//!   concurrently without locking
//!
//! ## Quick Start
//!
//! ```
//! use libaho::aho::builder::build_automaton;
//!
//! let ac = build_automaton(["he", "she", "his", "hers"]).unwrap();
//!
//! assert!(ac.contains_any("ahishers"));
//!
//! let matches = ac.find_all("ahishers");
//! let hits: Vec<(usize, usize)> = matches
//!     .iter()
//!     .map(|m| (m.position(), m.hit_index()))
//!     .collect();
//! assert_eq!(hits, [(1, 2), (3, 1), (4, 0), (4, 3)]);
//! ```
//!
//! Matches can also be consumed lazily, in scan order, through
//! [`find_iter`](aho::Automaton::find_iter):
//!
//! ```
//! use libaho::aho::builder::build_automaton;
//!
//! let ac = build_automaton(["ab", "b"]).unwrap();
//! let mut it = ac.find_iter("abab");
//! let first = it.next().unwrap();
//! assert_eq!((first.position(), first.keyword()), (0, &['a', 'b'][..]));
//! ```
//!
//! ## Generic Usage
//!
//! The automaton is generic over the transition label type:
//!
//! ```
//! use libaho::aho::builder::build_automaton;
//!
//! let ac = build_automaton([vec![1u8, 2, 3], vec![2, 3]]).unwrap();
//! let matches = ac.find_all(&[0u8, 1, 2, 3][..]);
//! assert_eq!(matches.len(), 2);
//! ```

#![warn(missing_docs)]

/// Core automaton: builder, scanner, state storage, and label traits.
pub mod aho;
