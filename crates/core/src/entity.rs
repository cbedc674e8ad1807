//! Record trait: what every persisted catalog entity has in common.

use crate::id::RecordId;

/// Minimal interface shared by persisted catalog records.
///
/// Both entity kinds carry a store-generated [`RecordId`] and a `name`
/// that is unique within the kind and drives list ordering.
pub trait Entity {
    /// Returns the record identifier.
    fn id(&self) -> RecordId;

    /// Returns the unique, normalized display name.
    fn name(&self) -> &str;
}
