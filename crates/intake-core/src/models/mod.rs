pub mod field;
pub mod progress;
pub mod validation;
