mod errors;
mod submit_form;
mod types;

pub use errors::FieldErrors;
pub use submit_form::*;
pub use types::*;
