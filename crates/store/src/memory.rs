use std::collections::HashMap;
use std::sync::RwLock;

use shopkeep_catalog::{Category, CategoryDraft, Item, ItemDraft};
use shopkeep_core::{Entity, RecordId};

use crate::record_store::{coerce_numeric, RecordStore, StoreError};

/// In-memory document store.
///
/// Two independent collections keyed by id, like a document database with a
/// `categories` and an `items` collection. Intended for tests/dev and small
/// single-process deployments; list order is computed at read time.
#[derive(Debug, Default)]
pub struct MemoryStore {
    categories: RwLock<HashMap<RecordId, Category>>,
    items: RwLock<HashMap<RecordId, Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn item_from_draft(id: RecordId, draft: ItemDraft) -> Result<Item, StoreError> {
        let (price, stock) = coerce_numeric(&draft)?;
        let category: RecordId = draft
            .category
            .parse()
            .map_err(|e| StoreError::InvalidDocument(format!("category reference: {e}")))?;
        Ok(Item {
            id,
            name: draft.name,
            description: draft.description,
            category,
            price,
            stock,
        })
    }
}

fn poisoned(_: impl std::fmt::Debug) -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

/// Document collections have no index; list order is computed per read.
fn sorted_by_name<T: Entity>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = values.collect();
    out.sort_by(|a, b| a.name().cmp(b.name()));
    out
}

impl RecordStore for MemoryStore {
    fn insert_category(&self, draft: CategoryDraft) -> Result<Category, StoreError> {
        let category = Category {
            id: RecordId::new(),
            name: draft.name,
            description: draft.description,
        };
        let mut categories = self.categories.write().map_err(poisoned)?;
        categories.insert(category.id, category.clone());
        Ok(category)
    }

    fn category(&self, id: RecordId) -> Result<Option<Category>, StoreError> {
        let categories = self.categories.read().map_err(poisoned)?;
        Ok(categories.get(&id).cloned())
    }

    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = self.categories.read().map_err(poisoned)?;
        Ok(sorted_by_name(categories.values().cloned()))
    }

    fn category_by_name(&self, name: &str) -> Result<Option<Category>, StoreError> {
        let categories = self.categories.read().map_err(poisoned)?;
        Ok(categories.values().find(|c| c.name == name).cloned())
    }

    fn replace_category(
        &self,
        id: RecordId,
        draft: CategoryDraft,
    ) -> Result<Option<Category>, StoreError> {
        let mut categories = self.categories.write().map_err(poisoned)?;
        if !categories.contains_key(&id) {
            return Ok(None);
        }
        let category = Category {
            id,
            name: draft.name,
            description: draft.description,
        };
        categories.insert(id, category.clone());
        Ok(Some(category))
    }

    fn delete_category(&self, id: RecordId) -> Result<bool, StoreError> {
        let mut categories = self.categories.write().map_err(poisoned)?;
        Ok(categories.remove(&id).is_some())
    }

    fn category_count(&self) -> Result<usize, StoreError> {
        let categories = self.categories.read().map_err(poisoned)?;
        Ok(categories.len())
    }

    fn insert_item(&self, draft: ItemDraft) -> Result<Item, StoreError> {
        let item = Self::item_from_draft(RecordId::new(), draft)?;
        let mut items = self.items.write().map_err(poisoned)?;
        items.insert(item.id, item.clone());
        Ok(item)
    }

    fn item(&self, id: RecordId) -> Result<Option<Item>, StoreError> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.get(&id).cloned())
    }

    fn items(&self) -> Result<Vec<Item>, StoreError> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(sorted_by_name(items.values().cloned()))
    }

    fn item_by_name(&self, name: &str) -> Result<Option<Item>, StoreError> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.values().find(|i| i.name == name).cloned())
    }

    fn replace_item(&self, id: RecordId, draft: ItemDraft) -> Result<Option<Item>, StoreError> {
        let mut items = self.items.write().map_err(poisoned)?;
        // A miss wins over a bad draft: callers map it to their own
        // not-found handling rather than a document error.
        if !items.contains_key(&id) {
            return Ok(None);
        }
        let item = Self::item_from_draft(id, draft)?;
        items.insert(id, item.clone());
        Ok(Some(item))
    }

    fn delete_item(&self, id: RecordId) -> Result<bool, StoreError> {
        let mut items = self.items.write().map_err(poisoned)?;
        Ok(items.remove(&id).is_some())
    }

    fn item_count(&self) -> Result<usize, StoreError> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(items.len())
    }

    fn items_in_category(&self, category_id: RecordId) -> Result<Vec<Item>, StoreError> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(sorted_by_name(
            items.values().filter(|i| i.category == category_id).cloned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_draft(name: &str) -> CategoryDraft {
        CategoryDraft {
            name: name.to_string(),
            description: "A fine description".to_string(),
        }
    }

    fn item_draft(name: &str, category: RecordId) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            description: "A fine description".to_string(),
            category: category.to_string(),
            price: "10".to_string(),
            stock: "2".to_string(),
        }
    }

    #[test]
    fn insert_then_find_by_id_and_name() {
        let store = MemoryStore::new();
        let saved = store.insert_category(category_draft("Rings")).unwrap();

        assert_eq!(store.category(saved.id).unwrap().unwrap(), saved);
        assert_eq!(store.category_by_name("Rings").unwrap().unwrap().id, saved.id);
        assert!(store.category_by_name("Amulets").unwrap().is_none());
    }

    #[test]
    fn lists_are_name_ascending() {
        let store = MemoryStore::new();
        for name in ["Wands", "Amulets", "Rings"] {
            store.insert_category(category_draft(name)).unwrap();
        }
        let names: Vec<_> = store.categories().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Amulets", "Rings", "Wands"]);
    }

    #[test]
    fn replace_preserves_id_and_misses_return_none() {
        let store = MemoryStore::new();
        let saved = store.insert_category(category_draft("Rings")).unwrap();

        let replaced = store
            .replace_category(saved.id, category_draft("Amulets"))
            .unwrap()
            .unwrap();
        assert_eq!(replaced.id, saved.id);
        assert_eq!(replaced.name, "Amulets");

        assert!(store
            .replace_category(RecordId::new(), category_draft("Wands"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn delete_reports_whether_record_existed() {
        let store = MemoryStore::new();
        let saved = store.insert_category(category_draft("Rings")).unwrap();

        assert!(store.delete_category(saved.id).unwrap());
        assert!(!store.delete_category(saved.id).unwrap());
        assert_eq!(store.category_count().unwrap(), 0);
    }

    #[test]
    fn item_insert_coerces_numeric_fields() {
        let store = MemoryStore::new();
        let category = store.insert_category(category_draft("Rings")).unwrap();
        let item = store.insert_item(item_draft("Sapphire Ring", category.id)).unwrap();

        assert_eq!(item.price, 10.0);
        assert_eq!(item.stock, 2);
        assert_eq!(item.category, category.id);
    }

    #[test]
    fn item_insert_rejects_bad_numbers_without_writing() {
        let store = MemoryStore::new();
        let category = store.insert_category(category_draft("Rings")).unwrap();
        let mut draft = item_draft("Sapphire Ring", category.id);
        draft.price = "free".to_string();

        assert!(matches!(
            store.insert_item(draft).unwrap_err(),
            StoreError::InvalidDocument(_)
        ));
        assert_eq!(store.item_count().unwrap(), 0);
    }

    #[test]
    fn item_replace_of_unknown_id_misses_even_with_bad_numbers() {
        let store = MemoryStore::new();
        let category = store.insert_category(category_draft("Rings")).unwrap();
        let mut draft = item_draft("Sapphire Ring", category.id);
        draft.price = "free".to_string();

        assert!(store.replace_item(RecordId::new(), draft).unwrap().is_none());
        assert_eq!(store.item_count().unwrap(), 0);
    }

    #[test]
    fn items_in_category_filters_and_sorts() {
        let store = MemoryStore::new();
        let rings = store.insert_category(category_draft("Rings")).unwrap();
        let wands = store.insert_category(category_draft("Wands")).unwrap();

        store.insert_item(item_draft("Sapphire Ring", rings.id)).unwrap();
        store.insert_item(item_draft("Amber Ring", rings.id)).unwrap();
        store.insert_item(item_draft("Oak Wand", wands.id)).unwrap();

        let names: Vec<_> = store
            .items_in_category(rings.id)
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Amber Ring", "Sapphire Ring"]);
    }
}
