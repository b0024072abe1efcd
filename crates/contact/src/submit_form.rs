use std::{borrow::Cow, str::FromStr};

use meadowbrook_shared::{Error, Result, bail};
use serde::Deserialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use ulid::Ulid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{ContactSettings, Subject};

/// Contact form exactly as posted; nothing trimmed or checked yet.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Validate)]
pub struct SubmitFormInput {
    #[validate(
        length(min = 1, message = "Please tell us your name"),
        custom(function = "validate_name_length")
    )]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(max = 30, message = "Phone number is too long"))]
    pub phone: Option<String>,
    pub subject: Subject,
    #[validate(length(min = 1, max = 2000, message = "Please write a message (up to 2000 characters)"))]
    pub message: String,
}

const MAX_NAME_CHARS: usize = 100;

fn validate_name_length(name: &str) -> std::result::Result<(), ValidationError> {
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::new("name_length")
            .with_message(Cow::Borrowed("Please keep your name under 100 characters")));
    }

    Ok(())
}

impl TryFrom<ContactForm> for SubmitFormInput {
    type Error = Error;

    fn try_from(form: ContactForm) -> Result<Self> {
        let subject = match form.subject.as_deref().map(str::trim) {
            None | Some("") => Ok(Subject::default()),
            Some(value) => Subject::from_str(value),
        };

        let input = Self {
            name: form.name.trim().to_owned(),
            email: form.email.trim().to_owned(),
            phone: form
                .phone
                .map(|phone| phone.trim().to_owned())
                .filter(|phone| !phone.is_empty()),
            subject: subject.clone().unwrap_or_default(),
            message: form.message.trim().to_owned(),
        };

        let mut errors = match input.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if subject.is_err() {
            errors.add(
                "subject",
                ValidationError::new("subject")
                    .with_message(Cow::Borrowed("Please choose a subject from the list")),
            );
        }

        if errors.errors().is_empty() {
            Ok(input)
        } else {
            Err(Error::Validate(errors))
        }
    }
}

/// A logged submission and the reference handed back to the visitor.
#[derive(Debug, Clone)]
pub struct Submission {
    pub reference: String,
    pub received_at: String,
    pub input: SubmitFormInput,
}

pub fn submit_form(input: SubmitFormInput, settings: &ContactSettings) -> Result<Submission> {
    input.validate()?;

    let reference = Ulid::new().to_string();
    let received_at = match OffsetDateTime::now_utc().format(&Rfc3339) {
        Ok(received_at) => received_at,
        Err(err) => bail!("failed to timestamp contact submission: {err}"),
    };

    tracing::info!(
        reference = %reference,
        received_at = %received_at,
        to = %settings.inbox_address,
        name = %input.name,
        email = %input.email,
        phone = input.phone.as_deref().unwrap_or("-"),
        subject = %input.subject,
        message = %input.message,
        "contact form submitted"
    );

    Ok(Submission {
        reference,
        received_at,
        input,
    })
}
