use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::{InterestFlag, Interests, PreferenceInput};

/// Planner form as posted by the browser.
///
/// Checkboxes are only sent when ticked, so every field is optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PreferenceForm {
    pub name: Option<String>,
    pub vibe: Option<String>,
    pub group: Option<String>,
    pub hiking: Option<String>,
    pub swimming: Option<String>,
    pub market: Option<String>,
    #[serde(rename = "festiveParty")]
    pub festive_party: Option<String>,
    #[serde(rename = "relaxedPicnic")]
    pub relaxed_picnic: Option<String>,
}

impl PreferenceForm {
    /// Collects raw `key=value` pairs into a form.
    ///
    /// When a field repeats the first value wins. Unknown keys are dropped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut form.name,
                "vibe" => &mut form.vibe,
                "group" => &mut form.group,
                "hiking" => &mut form.hiking,
                "swimming" => &mut form.swimming,
                "market" => &mut form.market,
                "festiveParty" => &mut form.festive_party,
                "relaxedPicnic" => &mut form.relaxed_picnic,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        form
    }

    fn checkbox(&self, flag: InterestFlag) -> Option<&str> {
        match flag {
            InterestFlag::Hiking => self.hiking.as_deref(),
            InterestFlag::Swimming => self.swimming.as_deref(),
            InterestFlag::Market => self.market.as_deref(),
            InterestFlag::FestiveParty => self.festive_party.as_deref(),
            InterestFlag::RelaxedPicnic => self.relaxed_picnic.as_deref(),
        }
    }
}

/// JSON body accepted by the planner API.
///
/// Values of the wrong JSON type are read as absent, so a tampered body still
/// yields a plan.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct PreferenceRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub vibe: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub group: Option<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub interests: Vec<String>,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        _ => None,
    })
}

// a bare string counts as a one-item list
fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => vec![value],
        Value::Array(values) => values
            .into_iter()
            .filter_map(|value| match value {
                Value::String(value) => Some(value),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

pub fn normalize_form(form: &PreferenceForm) -> PreferenceInput {
    let interests = InterestFlag::CANONICAL_ORDER
        .iter()
        .copied()
        .filter(|flag| is_checked(form.checkbox(*flag)))
        .collect();

    PreferenceInput {
        name: normalize_name(form.name.as_deref()),
        vibe: parse_or_default(form.vibe.as_deref()),
        group: parse_or_default(form.group.as_deref()),
        interests,
    }
}

pub fn normalize_request(request: &PreferenceRequest) -> PreferenceInput {
    let interests = request
        .interests
        .iter()
        .filter_map(|value| InterestFlag::from_str(value.trim()).ok())
        .collect::<Interests>();

    PreferenceInput {
        name: normalize_name(request.name.as_deref()),
        vibe: parse_or_default(request.vibe.as_deref()),
        group: parse_or_default(request.group.as_deref()),
        interests,
    }
}

fn normalize_name(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_owned()
}

fn is_checked(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn parse_or_default<T: FromStr + Default>(value: Option<&str>) -> T {
    value
        .and_then(|v| T::from_str(v.trim()).ok())
        .unwrap_or_default()
}
