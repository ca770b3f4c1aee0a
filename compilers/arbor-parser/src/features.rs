use std::collections::BTreeMap;
use std::fmt;

use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::rest,
    sequence::separated_pair,
    IResult,
};

use crate::error::FeatureError;

/// Decoded grammatical features of a node, e.g. `number -> pl`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features(BTreeMap<String, String>);

impl Features {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the features back into the `{key: value, ...}` notation.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Features {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// `key:value`, split on the first ':'.
fn pair(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till(|c: char| c == ':'), char(':'), rest)(input)
}

/// Decodes the producer's informal dictionary notation.
///
/// Quotes and braces are stripped wholesale, so neither nesting nor escaped
/// delimiters survive. Keys and values are trimmed; a repeated key keeps its
/// last value.
pub fn decode(raw: &str) -> Result<Features, FeatureError> {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '"' | '\'' | '{' | '}'))
        .collect();

    if stripped.trim().is_empty() {
        return Err(FeatureError::Empty { raw: raw.to_string() });
    }

    let mut features = Features::new();
    for chunk in stripped.split(',') {
        match pair(chunk) {
            Ok((_, (key, value))) => features.insert(key.trim(), value.trim()),
            Err(_) => {
                return Err(FeatureError::MissingSeparator {
                    raw: raw.to_string(),
                    pair: chunk.trim().to_string(),
                })
            }
        }
    }

    Ok(features)
}

/// Like [`decode`], but an absent or blank string simply has no features.
pub fn decode_optional(raw: Option<&str>) -> Result<Features, FeatureError> {
    match raw {
        Some(text) if !text.trim().is_empty() => decode(text),
        _ => Ok(Features::new()),
    }
}
