use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown form: {0}")]
    UnknownForm(String),

    #[error("unknown field '{field}' for form '{form_id}'")]
    UnknownField { form_id: String, field: String },
}
