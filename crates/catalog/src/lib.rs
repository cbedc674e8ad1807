//! `shopkeep-catalog` — catalog entities and the validation engine.
//!
//! Two record kinds (categories and items), their in-memory drafts, and the
//! declarative field-rule table that turns raw form input into a normalized
//! draft or a list of field errors.

pub mod category;
pub mod item;
pub mod validate;

pub use category::{Category, CategoryDraft, CATEGORY_RULES};
pub use item::{Item, ItemDraft, ITEM_RULES};
pub use validate::{validate, FieldError, FieldRule, RuleKind, Validated};
