//! intake-core
//!
//! Pure domain types shared by the intake forms: field descriptors, field
//! value access, progress and validation results, and date helpers.
//! No DOM or host dependency. This is the shared vocabulary of the
//! intake controller.

pub mod dates;
pub mod error;
pub mod models;
pub mod values;
