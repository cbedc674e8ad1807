//! `shopkeep-workflow` — the request workflow controller.
//!
//! One operation per (record kind x action), each running the same shape:
//! validate -> decide (reject with errors / redirect to existing / persist
//! and redirect). Outcomes are explicit tagged types rather than thrown
//! errors; the presentation layer matches on them to choose a response.

pub mod catalog;
pub mod error;
pub mod outcome;

pub use catalog::{Catalog, Overview};
pub use error::{WorkflowError, WorkflowResult};
pub use outcome::{CategoryDeleteOutcome, FormOutcome};
