use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    #[default]
    Relaxing,
    Adventurous,
    Celebratory,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    #[default]
    Family,
    Friends,
    Colleagues,
}

/// One of the interest checkboxes on the planner form.
///
/// Variants are declared in canonical order; recommendations always follow
/// it, whatever order the boxes were ticked in.
#[derive(
    EnumString,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
#[serde(rename_all = "camelCase")]
pub enum InterestFlag {
    Hiking,
    Swimming,
    Market,
    FestiveParty,
    RelaxedPicnic,
}

impl InterestFlag {
    pub const CANONICAL_ORDER: &'static [InterestFlag] = Self::VARIANTS;

    /// Name shown to visitors, used in the plan summary.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hiking => "Hiking",
            Self::Swimming => "Swimming",
            Self::Market => "Market",
            Self::FestiveParty => "Festive Party",
            Self::RelaxedPicnic => "Relaxed Picnic",
        }
    }

    /// Form field carrying this checkbox.
    pub fn field(self) -> &'static str {
        match self {
            Self::Hiking => "hiking",
            Self::Swimming => "swimming",
            Self::Market => "market",
            Self::FestiveParty => "festiveParty",
            Self::RelaxedPicnic => "relaxedPicnic",
        }
    }
}

/// Set of selected interests. Iterates in canonical order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Interests(BTreeSet<InterestFlag>);

impl Interests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flag: InterestFlag) -> bool {
        self.0.insert(flag)
    }

    pub fn contains(&self, flag: InterestFlag) -> bool {
        self.0.contains(&flag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = InterestFlag> + '_ {
        InterestFlag::CANONICAL_ORDER
            .iter()
            .copied()
            .filter(|flag| self.contains(*flag))
    }
}

impl FromIterator<InterestFlag> for Interests {
    fn from_iter<I: IntoIterator<Item = InterestFlag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[InterestFlag; N]> for Interests {
    fn from(value: [InterestFlag; N]) -> Self {
        value.into_iter().collect()
    }
}

/// A single planner submission, already normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreferenceInput {
    /// Display only; never consulted when selecting.
    pub name: String,
    pub vibe: Vibe,
    pub group: Group,
    pub interests: Interests,
}
