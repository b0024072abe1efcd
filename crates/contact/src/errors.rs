use std::collections::BTreeMap;

use serde::Serialize;
use validator::ValidationErrors;

/// First error message per form field, ready to show next to the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errors)| {
                let error = errors.first()?;
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                };

                Some((field.to_string(), message))
            })
            .collect();

        Self(fields)
    }
}
