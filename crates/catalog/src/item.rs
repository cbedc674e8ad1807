//! Item: a sellable thing belonging to exactly one category.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use shopkeep_core::{Entity, RecordId};

use crate::validate::{FieldRule, RuleKind};

/// Rule table for item form submissions.
///
/// `category`, `price` and `stock` are only presence-checked here; numeric
/// coercion (and the >= 1 minimums) belongs to the store, and category
/// resolution to the workflow.
pub const ITEM_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        label: "Item name",
        kind: RuleKind::Length { min: 5, max: 50 },
    },
    FieldRule {
        field: "description",
        label: "Item description",
        kind: RuleKind::Length { min: 5, max: 200 },
    },
    FieldRule {
        field: "category",
        label: "Item category",
        kind: RuleKind::Required,
    },
    FieldRule {
        field: "price",
        label: "Item price",
        kind: RuleKind::Required,
    },
    FieldRule {
        field: "stock",
        label: "Item stock",
        kind: RuleKind::Required,
    },
];

/// A persisted item record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    /// Id of the owning [`crate::Category`]. Referential integrity is
    /// enforced at write time by the workflow, not by the store.
    pub category: RecordId,
    pub price: f64,
    pub stock: i64,
}

impl Item {
    /// Canonical URL of this item's detail page.
    pub fn url(&self) -> String {
        format!("/item/{}", self.id)
    }
}

impl Entity for Item {
    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A validated, not-yet-persisted item.
///
/// `category`, `price` and `stock` stay as the submitted strings: the draft
/// is what the form re-renders on rejection, and coercion happens later
/// (category in the workflow, numbers in the store).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub stock: String,
}

impl ItemDraft {
    /// Build a draft from the validation engine's normalized field map.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |k: &str| fields.get(k).cloned().unwrap_or_default();
        Self {
            name: get("name"),
            description: get("description"),
            category: get("category"),
            price: get("price"),
            stock: get("stock"),
        }
    }
}

/// Pre-populating an update form with the stored record.
impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            category: item.category.to_string(),
            price: item.price.to_string(),
            stock: item.stock.to_string(),
        }
    }
}
