//! intake-controller
//!
//! Binds one intake form to a host page: progress tracking, conditional
//! sections, the dynamic children list, and the submit-time validation
//! pass. The page itself sits behind [`host::FormHost`]; [`memory::MemoryHost`]
//! is an in-process implementation used by the checker binary and tests.

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod memory;
pub mod state;

pub use controller::{FormController, FormEvent, Regeneration, SubmitOutcome};
