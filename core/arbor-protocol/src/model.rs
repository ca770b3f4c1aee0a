use crate::morphology::{Aspect, Gender, Number, Tense};
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct NounPhrase {
    pub specifier: Option<String>,
    pub noun: Option<String>,
    /// `None` until a feature sets it; the realizer picks its own default.
    pub gender: Option<Gender>,
    pub number: Option<Number>,
    pub modifiers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct VerbPhrase {
    pub verb: Option<String>,
    pub complements: Vec<String>,
    pub tense: Option<Tense>,
    pub aspect: Aspect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PrepositionalPhrase {
    pub preposition: Option<String>,
    pub complement: Option<Box<Element>>,
}

/// Anything that can fill a clause slot or a prepositional complement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Element {
    Literal(String),
    Noun(NounPhrase),
    Verb(VerbPhrase),
    Prepositional(PrepositionalPhrase),
}

impl Element {
    pub fn literal(text: impl Into<String>) -> Self {
        Element::Literal(text.into())
    }

    pub fn as_noun(&self) -> Option<&NounPhrase> {
        match self {
            Element::Noun(np) => Some(np),
            _ => None,
        }
    }

    pub fn as_verb(&self) -> Option<&VerbPhrase> {
        match self {
            Element::Verb(vp) => Some(vp),
            _ => None,
        }
    }

    pub fn as_prepositional(&self) -> Option<&PrepositionalPhrase> {
        match self {
            Element::Prepositional(pp) => Some(pp),
            _ => None,
        }
    }
}

/// The sentence-level constituent handed to a realizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Clause {
    pub subject: Option<Element>,
    pub object: Option<Element>,
    pub verb: Option<Element>,
    pub complements: Vec<Element>,
    pub aspect: Aspect,
}

impl Clause {
    /// Marks the clause as a gerund: progressive on, perfect off.
    pub fn make_progressive(&mut self) {
        self.aspect.insert(Aspect::PROGRESSIVE);
        self.aspect.remove(Aspect::PERFECT);
    }

    pub fn is_progressive(&self) -> bool {
        self.aspect.contains(Aspect::PROGRESSIVE)
    }

    pub fn is_perfect(&self) -> bool {
        self.aspect.contains(Aspect::PERFECT)
    }
}
