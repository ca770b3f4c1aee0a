#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[repr(u8)]
pub enum Gender {
    Masculine = 0,
    Feminine = 1,
}

impl Gender {
    /// Decodes a `gen` feature value. Anything but `f` is masculine.
    pub fn from_feature(value: &str) -> Self {
        if value == "f" {
            Gender::Feminine
        } else {
            Gender::Masculine
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[repr(u8)]
pub enum Number {
    Singular = 0,
    Plural = 1,
}

impl Number {
    /// Decodes a `number` feature value. Anything but `pl` is singular.
    pub fn from_feature(value: &str) -> Self {
        if value == "pl" {
            Number::Plural
        } else {
            Number::Singular
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[repr(u8)]
pub enum Tense {
    Present = 0,
    Past = 1,
    Future = 2,
}

bitflags! {
    /// Aspect marking carried by clauses and verb phrases.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
    pub struct Aspect: u8 {
        const PROGRESSIVE = 1;
        const PERFECT = 2;
    }
}
