//! Contact form: field rules, validation and the submitted payload

mod field;
mod form;
mod payload;

pub use field::{
  value_satisfies, ChoiceKind, ChoiceOption, Constraints, Control, Field, FieldStatus, InputKind,
};
pub use form::ContactForm;
pub use payload::{build_payload, INTERESTS_FIELD};

use crate::error::SiteError;

pub const INVALID_FORM_ALERT: &str = "Por favor, complete correctamente todos los campos.";
pub const SUBMIT_OK_ALERT: &str = "Formulario enviado con éxito!";
pub const SUBMIT_ERROR_ALERT: &str = "Hubo un error al enviar.";

/// Alert shown once the submission settles
pub fn submit_alert<T>(result: &Result<T, SiteError>) -> &'static str {
  match result {
    Ok(_) => SUBMIT_OK_ALERT,
    Err(_) => SUBMIT_ERROR_ALERT,
  }
}
