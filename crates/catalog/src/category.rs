//! Category: a named grouping that items belong to.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use shopkeep_core::{Entity, RecordId};

use crate::validate::{FieldRule, RuleKind};

/// Rule table for category form submissions.
pub const CATEGORY_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        label: "Category name",
        kind: RuleKind::Length { min: 5, max: 50 },
    },
    FieldRule {
        field: "description",
        label: "Category description",
        kind: RuleKind::Length { min: 5, max: 200 },
    },
];

/// A persisted category record.
///
/// `name` is unique across categories and was trimmed + markup-escaped by
/// the validation engine before it ever reached the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

impl Category {
    /// Canonical URL of this category's detail page.
    pub fn url(&self) -> String {
        format!("/category/{}", self.id)
    }
}

impl Entity for Category {
    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A validated, not-yet-persisted category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl CategoryDraft {
    /// Build a draft from the validation engine's normalized field map.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        Self {
            name: fields.get("name").cloned().unwrap_or_default(),
            description: fields.get("description").cloned().unwrap_or_default(),
        }
    }
}

/// Pre-populating an update form with the stored record.
impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }
}
