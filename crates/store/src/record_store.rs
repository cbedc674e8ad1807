//! Record store trait: document-style persistence for categories and items.

use std::sync::Arc;

use thiserror::Error;

use shopkeep_catalog::{Category, CategoryDraft, Item, ItemDraft};
use shopkeep_core::RecordId;

/// Record store operation error.
///
/// These are **infrastructure errors** (bad documents, backend failure) as
/// opposed to domain errors (validation, missing records). A missing record
/// is not an error at this layer; lookups return `Option`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A draft could not be coerced into a well-formed document
    /// (e.g. a non-numeric or below-minimum price).
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// The backend itself failed (poisoned lock, I/O, connection loss).
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Document-style persistence for the two catalog record kinds.
///
/// The store is the sole owner of persisted state and the sole arbiter of
/// consistency: last-write-wins on concurrent replaces of the same id, no
/// optimistic-concurrency token. It generates ids on insert and coerces the
/// numeric item fields (`price`, `stock`) from their draft strings,
/// enforcing the >= 1 minimums. It does **not** enforce name uniqueness or
/// category references; those checks belong to the workflow.
///
/// List operations return records ordered by `name` ascending.
pub trait RecordStore: Send + Sync {
    fn insert_category(&self, draft: CategoryDraft) -> Result<Category, StoreError>;
    fn category(&self, id: RecordId) -> Result<Option<Category>, StoreError>;
    fn categories(&self) -> Result<Vec<Category>, StoreError>;
    fn category_by_name(&self, name: &str) -> Result<Option<Category>, StoreError>;
    /// Full replace at `id`, preserving the id. `None` if the id is unknown.
    fn replace_category(
        &self,
        id: RecordId,
        draft: CategoryDraft,
    ) -> Result<Option<Category>, StoreError>;
    /// Returns whether a record existed at `id`.
    fn delete_category(&self, id: RecordId) -> Result<bool, StoreError>;
    fn category_count(&self) -> Result<usize, StoreError>;

    fn insert_item(&self, draft: ItemDraft) -> Result<Item, StoreError>;
    fn item(&self, id: RecordId) -> Result<Option<Item>, StoreError>;
    fn items(&self) -> Result<Vec<Item>, StoreError>;
    fn item_by_name(&self, name: &str) -> Result<Option<Item>, StoreError>;
    fn replace_item(&self, id: RecordId, draft: ItemDraft) -> Result<Option<Item>, StoreError>;
    fn delete_item(&self, id: RecordId) -> Result<bool, StoreError>;
    fn item_count(&self) -> Result<usize, StoreError>;

    /// All items whose `category` field references `category_id`,
    /// name-ascending.
    fn items_in_category(&self, category_id: RecordId) -> Result<Vec<Item>, StoreError>;
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn insert_category(&self, draft: CategoryDraft) -> Result<Category, StoreError> {
        (**self).insert_category(draft)
    }

    fn category(&self, id: RecordId) -> Result<Option<Category>, StoreError> {
        (**self).category(id)
    }

    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        (**self).categories()
    }

    fn category_by_name(&self, name: &str) -> Result<Option<Category>, StoreError> {
        (**self).category_by_name(name)
    }

    fn replace_category(
        &self,
        id: RecordId,
        draft: CategoryDraft,
    ) -> Result<Option<Category>, StoreError> {
        (**self).replace_category(id, draft)
    }

    fn delete_category(&self, id: RecordId) -> Result<bool, StoreError> {
        (**self).delete_category(id)
    }

    fn category_count(&self) -> Result<usize, StoreError> {
        (**self).category_count()
    }

    fn insert_item(&self, draft: ItemDraft) -> Result<Item, StoreError> {
        (**self).insert_item(draft)
    }

    fn item(&self, id: RecordId) -> Result<Option<Item>, StoreError> {
        (**self).item(id)
    }

    fn items(&self) -> Result<Vec<Item>, StoreError> {
        (**self).items()
    }

    fn item_by_name(&self, name: &str) -> Result<Option<Item>, StoreError> {
        (**self).item_by_name(name)
    }

    fn replace_item(&self, id: RecordId, draft: ItemDraft) -> Result<Option<Item>, StoreError> {
        (**self).replace_item(id, draft)
    }

    fn delete_item(&self, id: RecordId) -> Result<bool, StoreError> {
        (**self).delete_item(id)
    }

    fn item_count(&self) -> Result<usize, StoreError> {
        (**self).item_count()
    }

    fn items_in_category(&self, category_id: RecordId) -> Result<Vec<Item>, StoreError> {
        (**self).items_in_category(category_id)
    }
}

/// Coerce an item draft's numeric strings, enforcing the schema minimums.
///
/// Lives here so every [`RecordStore`] backend applies the same document
/// rules (mirrors a schema-level `min: 1` in a document database).
pub(crate) fn coerce_numeric(draft: &ItemDraft) -> Result<(f64, i64), StoreError> {
    let price: f64 = draft
        .price
        .parse()
        .map_err(|_| StoreError::InvalidDocument(format!("price is not a number: {:?}", draft.price)))?;
    if !price.is_finite() || price < 1.0 {
        return Err(StoreError::InvalidDocument(format!(
            "price must be at least 1, got {price}"
        )));
    }

    let stock: i64 = draft
        .stock
        .parse()
        .map_err(|_| StoreError::InvalidDocument(format!("stock is not a number: {:?}", draft.stock)))?;
    if stock < 1 {
        return Err(StoreError::InvalidDocument(format!(
            "stock must be at least 1, got {stock}"
        )));
    }

    Ok((price, stock))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(price: &str, stock: &str) -> ItemDraft {
        ItemDraft {
            name: "Sapphire Ring".into(),
            description: "A ring with a sapphire set in it".into(),
            category: RecordId::new().to_string(),
            price: price.into(),
            stock: stock.into(),
        }
    }

    #[test]
    fn coerces_well_formed_numbers() {
        let (price, stock) = coerce_numeric(&draft("12.5", "3")).unwrap();
        assert_eq!(price, 12.5);
        assert_eq!(stock, 3);
    }

    #[test]
    fn rejects_non_numeric_price() {
        let err = coerce_numeric(&draft("a lot", "3")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidDocument(_)));
    }

    #[test]
    fn rejects_below_minimum_values() {
        assert!(coerce_numeric(&draft("0.5", "3")).is_err());
        assert!(coerce_numeric(&draft("2", "0")).is_err());
        assert!(coerce_numeric(&draft("2", "-1")).is_err());
    }

    #[test]
    fn rejects_non_finite_price() {
        assert!(coerce_numeric(&draft("NaN", "1")).is_err());
        assert!(coerce_numeric(&draft("inf", "1")).is_err());
    }
}
