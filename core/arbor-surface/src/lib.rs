#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::string::String;
use alloc::vec::Vec;

use arbor_protocol::{Clause, Element, NounPhrase, PrepositionalPhrase, VerbPhrase};

use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RealizeError {
    /// The clause has no word to realize.
    EmptyClause,
    /// An external engine rejected the structure.
    Engine(String),
}

impl fmt::Display for RealizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RealizeError::EmptyClause => write!(f, "Clause has nothing to realize"),
            RealizeError::Engine(msg) => write!(f, "Realization engine failed: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RealizeError {}

/// Turns a finished clause into surface text.
pub trait Realizer {
    fn realize(&self, clause: &Clause) -> Result<String, RealizeError>;
}

impl<R: Realizer + ?Sized> Realizer for &R {
    fn realize(&self, clause: &Clause) -> Result<String, RealizeError> {
        (**self).realize(clause)
    }
}

/// Deterministic realizer: words in constituent order, no inflection.
///
/// Clause order is subject, verb, object, complements. Number, gender, tense
/// and aspect are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearRealizer;

impl Realizer for LinearRealizer {
    fn realize(&self, clause: &Clause) -> Result<String, RealizeError> {
        let mut words = Vec::new();

        let slots = [&clause.subject, &clause.verb, &clause.object];
        for element in slots.into_iter().flatten().chain(clause.complements.iter()) {
            push_element(element, &mut words);
        }

        if words.is_empty() {
            return Err(RealizeError::EmptyClause);
        }

        Ok(format!("{}.", capitalize(&words.join(" "))))
    }
}

fn push_element<'a>(element: &'a Element, words: &mut Vec<&'a str>) {
    match element {
        Element::Literal(text) => push_word(text, words),
        Element::Noun(np) => push_noun(np, words),
        Element::Verb(vp) => push_verb(vp, words),
        Element::Prepositional(pp) => push_prepositional(pp, words),
    }
}

fn push_noun<'a>(np: &'a NounPhrase, words: &mut Vec<&'a str>) {
    if let Some(spec) = &np.specifier {
        push_word(spec, words);
    }
    if let Some(noun) = &np.noun {
        push_word(noun, words);
    }
    for modifier in &np.modifiers {
        push_word(modifier, words);
    }
}

fn push_verb<'a>(vp: &'a VerbPhrase, words: &mut Vec<&'a str>) {
    if let Some(verb) = &vp.verb {
        push_word(verb, words);
    }
    for complement in &vp.complements {
        push_word(complement, words);
    }
}

fn push_prepositional<'a>(pp: &'a PrepositionalPhrase, words: &mut Vec<&'a str>) {
    if let Some(prep) = &pp.preposition {
        push_word(prep, words);
    }
    if let Some(complement) = &pp.complement {
        push_element(complement, words);
    }
}

fn push_word<'a>(word: &'a str, words: &mut Vec<&'a str>) {
    let word = word.trim();
    if !word.is_empty() {
        words.push(word);
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
