//! The catalog workflow controller.

use std::collections::HashMap;
use std::sync::Arc;

use shopkeep_catalog::{
    validate, Category, CategoryDraft, FieldError, Item, ItemDraft, CATEGORY_RULES, ITEM_RULES,
};
use shopkeep_core::RecordId;
use shopkeep_store::RecordStore;

use crate::error::{WorkflowError, WorkflowResult};
use crate::outcome::{CategoryDeleteOutcome, FormOutcome};

/// Counts shown on the index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overview {
    pub item_count: usize,
    pub category_count: usize,
}

/// The workflow controller: one method per (record kind x action).
///
/// Holds the injected store handle for its whole lifetime; constructed once
/// at process start and shared across requests. The only state it touches
/// outside the store is the transient draft of the request in flight.
pub struct Catalog {
    store: Arc<dyn RecordStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn overview(&self) -> WorkflowResult<Overview> {
        Ok(Overview {
            item_count: self.store.item_count()?,
            category_count: self.store.category_count()?,
        })
    }

    // ---- categories ----

    pub fn category_list(&self) -> WorkflowResult<Vec<Category>> {
        Ok(self.store.categories()?)
    }

    /// The category plus every item referencing it. Both reads must succeed
    /// before anything renders.
    pub fn category_detail(&self, id: RecordId) -> WorkflowResult<(Category, Vec<Item>)> {
        let category = self.store.category(id)?.ok_or(WorkflowError::NotFound)?;
        let items = self.store.items_in_category(id)?;
        Ok((category, items))
    }

    pub fn category_create(
        &self,
        fields: &HashMap<String, String>,
    ) -> WorkflowResult<FormOutcome<CategoryDraft>> {
        let v = validate(fields, CATEGORY_RULES);
        let draft = CategoryDraft::from_fields(&v.fields);
        if !v.is_clean() {
            return Ok(FormOutcome::Rejected {
                draft,
                errors: v.errors,
            });
        }

        // Name is a natural key: a duplicate create is de-duplication, not
        // an error. Logged so the silent merge is at least observable.
        if let Some(existing) = self.store.category_by_name(&draft.name)? {
            tracing::info!(id = %existing.id, name = %existing.name, "category already exists, redirecting");
            return Ok(FormOutcome::Redirect { id: existing.id });
        }

        let saved = self.store.insert_category(draft)?;
        tracing::info!(id = %saved.id, name = %saved.name, "category created");
        Ok(FormOutcome::Redirect { id: saved.id })
    }

    /// Full overwrite at `id`, preserving the id. No uniqueness
    /// short-circuit on the update path.
    pub fn category_update(
        &self,
        id: RecordId,
        fields: &HashMap<String, String>,
    ) -> WorkflowResult<FormOutcome<CategoryDraft>> {
        let v = validate(fields, CATEGORY_RULES);
        let draft = CategoryDraft::from_fields(&v.fields);
        if !v.is_clean() {
            return Ok(FormOutcome::Rejected {
                draft,
                errors: v.errors,
            });
        }

        let saved = self
            .store
            .replace_category(id, draft)?
            .ok_or(WorkflowError::NotFound)?;
        tracing::info!(id = %saved.id, "category updated");
        Ok(FormOutcome::Redirect { id: saved.id })
    }

    /// Data for the delete-confirmation page. A missing id short-circuits
    /// as NotFound here rather than degrading to a redirect.
    pub fn category_delete_view(&self, id: RecordId) -> WorkflowResult<(Category, Vec<Item>)> {
        self.category_detail(id)
    }

    pub fn category_delete(&self, id: RecordId) -> WorkflowResult<CategoryDeleteOutcome> {
        let category = self.store.category(id)?.ok_or(WorkflowError::NotFound)?;
        let blocking_items = self.store.items_in_category(id)?;
        if !blocking_items.is_empty() {
            tracing::info!(
                id = %category.id,
                blockers = blocking_items.len(),
                "category delete refused, items still reference it"
            );
            return Ok(CategoryDeleteOutcome::Blocked {
                category,
                blocking_items,
            });
        }

        self.store.delete_category(id)?;
        tracing::info!(id = %category.id, "category deleted");
        Ok(CategoryDeleteOutcome::Deleted)
    }

    // ---- items ----

    pub fn item_list(&self) -> WorkflowResult<Vec<Item>> {
        Ok(self.store.items()?)
    }

    /// The item with its category resolved and embedded.
    pub fn item_detail(&self, id: RecordId) -> WorkflowResult<(Item, Category)> {
        let item = self.store.item(id)?.ok_or(WorkflowError::NotFound)?;
        let category = self
            .store
            .category(item.category)?
            .ok_or(WorkflowError::NotFound)?;
        Ok((item, category))
    }

    pub fn item_create(
        &self,
        fields: &HashMap<String, String>,
    ) -> WorkflowResult<FormOutcome<ItemDraft>> {
        let v = validate(fields, ITEM_RULES);
        let draft = ItemDraft::from_fields(&v.fields);
        let mut errors = v.errors;
        self.check_category_reference(&draft, &mut errors)?;
        if !errors.is_empty() {
            return Ok(FormOutcome::Rejected { draft, errors });
        }

        if let Some(existing) = self.store.item_by_name(&draft.name)? {
            tracing::info!(id = %existing.id, name = %existing.name, "item already exists, redirecting");
            return Ok(FormOutcome::Redirect { id: existing.id });
        }

        let saved = self.store.insert_item(draft)?;
        tracing::info!(id = %saved.id, name = %saved.name, "item created");
        Ok(FormOutcome::Redirect { id: saved.id })
    }

    pub fn item_update(
        &self,
        id: RecordId,
        fields: &HashMap<String, String>,
    ) -> WorkflowResult<FormOutcome<ItemDraft>> {
        let v = validate(fields, ITEM_RULES);
        let draft = ItemDraft::from_fields(&v.fields);
        let mut errors = v.errors;
        self.check_category_reference(&draft, &mut errors)?;
        if !errors.is_empty() {
            return Ok(FormOutcome::Rejected { draft, errors });
        }

        let saved = self
            .store
            .replace_item(id, draft)?
            .ok_or(WorkflowError::NotFound)?;
        tracing::info!(id = %saved.id, "item updated");
        Ok(FormOutcome::Redirect { id: saved.id })
    }

    /// Data for the item delete-confirmation page. `None` means the id did
    /// not resolve and the caller should fall back to the list (the
    /// item-side silent-miss policy).
    pub fn item_delete_view(&self, id: RecordId) -> WorkflowResult<Option<Item>> {
        Ok(self.store.item(id)?)
    }

    /// Unconditional delete. Deleting an id that no longer exists is a
    /// silent no-op, not an error.
    pub fn item_delete(&self, id: RecordId) -> WorkflowResult<()> {
        let existed = self.store.delete_item(id)?;
        if existed {
            tracing::info!(%id, "item deleted");
        } else {
            tracing::warn!(%id, "item delete ignored, id does not exist");
        }
        Ok(())
    }

    /// Referential-integrity guard: the submitted category id must resolve
    /// to an existing category. A dangling reference is a field error (the
    /// form re-renders), never a server error. Skipped when the field
    /// already failed its presence rule.
    fn check_category_reference(
        &self,
        draft: &ItemDraft,
        errors: &mut Vec<FieldError>,
    ) -> WorkflowResult<()> {
        if errors.iter().any(|e| e.field == "category") {
            return Ok(());
        }
        let resolved = match draft.category.parse::<RecordId>() {
            Ok(id) => self.store.category(id)?,
            Err(_) => None,
        };
        if resolved.is_none() {
            errors.push(FieldError {
                field: "category",
                message: "Item category must reference an existing category".to_string(),
            });
        }
        Ok(())
    }
}
