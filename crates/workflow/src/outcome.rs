//! Explicit outcome types for mutating operations.
//!
//! These replace control-flow-by-exception: every branch a handler can take
//! is a variant the presentation layer matches on.

use shopkeep_catalog::{Category, FieldError, Item};
use shopkeep_core::RecordId;

/// Result of a create or update form submission.
#[derive(Debug, Clone)]
pub enum FormOutcome<D> {
    /// Validation failed. The caller re-renders the form with the
    /// operator's (normalized) input and the collected messages, at
    /// HTTP 200 rather than a 4xx.
    Rejected { draft: D, errors: Vec<FieldError> },

    /// The submission landed on a record (newly persisted, or an existing
    /// one with the same name on the create path); redirect to its
    /// detail page.
    Redirect { id: RecordId },
}

/// Result of a category delete request.
#[derive(Debug, Clone)]
pub enum CategoryDeleteOutcome {
    /// Items still reference the category; the delete is refused and the
    /// caller renders a normal view listing the blockers.
    Blocked {
        category: Category,
        blocking_items: Vec<Item>,
    },

    /// Category removed; redirect to the category list.
    Deleted,
}
