#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a noun's `gen` feature interacts with its grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize), serde(rename_all = "kebab-case"))]
pub enum GenderNumberPolicy {
    /// `gen` sets gender only.
    #[default]
    Independent,
    /// `gen` also overwrites number: plural iff its value is `pl`.
    /// Kept to reproduce sentences realized under the old attachment rules.
    GenderOverridesNumber,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize), serde(default))]
pub struct AssemblerConfig {
    pub gender_number: GenderNumberPolicy,
}

impl AssemblerConfig {
    pub fn with_gender_number(mut self, policy: GenderNumberPolicy) -> Self {
        self.gender_number = policy;
        self
    }
}
