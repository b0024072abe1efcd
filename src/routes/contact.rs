use axum::{
    Json,
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meadowbrook_contact::{
    ContactForm, ContactSettings, FieldErrors, Subject, Submission, SubmitFormInput, submit_form,
};
use meadowbrook_shared::Error;
use serde_json::json;
use strum::VariantArray;

use crate::{
    routes::AppState,
    template::{ServerTemplate, Template, filters},
};

const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub subjects: &'static [Subject],
    pub errors: FieldErrors,
}

impl ContactTemplate {
    fn new(form: ContactForm, errors: FieldErrors) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone.unwrap_or_default(),
            subject: form.subject.unwrap_or_default(),
            message: form.message,
            subjects: Subject::VARIANTS,
            errors,
        }
    }

    fn is_subject(&self, subject: &Subject) -> bool {
        self.subject == subject.as_ref()
    }
}

#[derive(askama::Template)]
#[template(path = "contact-sent.html")]
pub struct ContactSentTemplate {
    pub name: String,
    pub reference: String,
}

fn submit(form: ContactForm, settings: &ContactSettings) -> meadowbrook_shared::Result<Submission> {
    let input = SubmitFormInput::try_from(form)?;

    submit_form(input, settings)
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate::new(
        ContactForm::default(),
        FieldErrors::default(),
    ))
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Response {
    let settings = ContactSettings::from(&app_state.config.contact);

    match submit(form.clone(), &settings) {
        Ok(submission) => template.render(ContactSentTemplate {
            name: submission.input.name,
            reference: submission.reference,
        }),
        Err(Error::Validate(errors)) => template.render_with_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactTemplate::new(form, FieldErrors::from(&errors)),
        ),
        Err(err) => {
            tracing::error!("{err}");

            template.render_with_status(StatusCode::INTERNAL_SERVER_ERROR, ServerTemplate)
        }
    }
}

pub async fn api(State(app_state): State<AppState>, Json(form): Json<ContactForm>) -> Response {
    let settings = ContactSettings::from(&app_state.config.contact);

    match submit(form, &settings) {
        Ok(submission) => Json(json!({
            "success": true,
            "reference": submission.reference,
            "receivedAt": submission.received_at,
        }))
        .into_response(),
        Err(Error::Validate(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "success": false,
                "errors": FieldErrors::from(&errors),
            })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("{err}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": SERVER_ERROR_MESSAGE,
                })),
            )
                .into_response()
        }
    }
}
