//! Example: scanning text against a fixed keyword set.
//!
//! This shows the three query forms over one built automaton: listing every
//! occurrence, grabbing the first hit, and a boolean containment check.
//!
//! Run with: cargo run --example keywords

use libaho::aho::builder::build_automaton;

fn main() {
    let keywords = ["rust", "trust", "crust", "us"];
    let ac = build_automaton(keywords).unwrap();

    let text = "in rust we trust, said the crustacean";

    println!("Every occurrence:");
    for m in ac.find_iter(text) {
        let keyword: String = m.keyword().iter().collect();
        println!(
            "  {:>2}..{:<2} {keyword} (keyword #{})",
            m.position(),
            m.end(),
            m.hit_index()
        );
    }

    println!("\nFirst hit:");
    if let Some(m) = ac.find_first(text) {
        let keyword: String = m.keyword().iter().collect();
        println!("  {keyword} at {}", m.position());
    }

    println!("\nContainment:");
    for probe in ["trustworthy", "flour"] {
        let answer = if ac.contains_any(probe) { "yes" } else { "no" };
        println!("  {probe:?}: {answer}");
    }
}
