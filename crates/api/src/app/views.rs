//! Server-rendered HTML pages.
//!
//! Plain string building, no template engine. Record fields were trimmed
//! and markup-escaped by the validation engine before they were stored, so
//! they are safe to interpolate; ids render through their UUID `Display`.

use shopkeep_catalog::{Category, CategoryDraft, FieldError, Item, ItemDraft};
use shopkeep_workflow::Overview;

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n\
         <nav><a href=\"/\">Home</a> | <a href=\"/categories\">Categories</a> | <a href=\"/items\">Items</a></nav>\n\
         <h1>{title}</h1>\n{body}\n</body>\n</html>\n"
    )
}

fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|e| format!("<li>{}</li>", e.message))
        .collect();
    format!("<ul class=\"errors\">{items}</ul>\n")
}

pub fn index(overview: &Overview) -> String {
    let body = format!(
        "<p>The shop currently holds {} items across {} categories.</p>\n\
         <ul><li><a href=\"/items\">All items</a></li><li><a href=\"/categories\">All categories</a></li></ul>",
        overview.item_count, overview.category_count
    );
    page("ARPG Shop Home", &body)
}

pub fn category_list(categories: &[Category]) -> String {
    let rows: String = categories
        .iter()
        .map(|c| format!("<li><a href=\"{}\">{}</a></li>", c.url(), c.name))
        .collect();
    let body = format!(
        "<ul>{rows}</ul>\n<p><a href=\"/category/create\">Create a new category</a></p>"
    );
    page("All Categories", &body)
}

pub fn category_detail(category: &Category, items: &[Item]) -> String {
    let item_rows: String = items
        .iter()
        .map(|i| format!("<li><a href=\"{}\">{}</a> — {}</li>", i.url(), i.name, i.description))
        .collect();
    let items_block = if items.is_empty() {
        "<p>This category has no items.</p>".to_string()
    } else {
        format!("<ul>{item_rows}</ul>")
    };
    let body = format!(
        "<p>{}</p>\n<h2>Items in this category</h2>\n{items_block}\n\
         <p><a href=\"{url}/update\">Update</a> | <a href=\"{url}/delete\">Delete</a></p>",
        category.description,
        url = category.url()
    );
    page("Category Specifics", &body)
}

pub fn category_form(title: &str, action: &str, draft: &CategoryDraft, errors: &[FieldError]) -> String {
    let body = format!(
        "{errors}<form method=\"post\" action=\"{action}\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label><br>\n\
         <label>Description <textarea name=\"description\">{description}</textarea></label><br>\n\
         <button type=\"submit\">Submit</button>\n</form>",
        errors = error_list(errors),
        name = draft.name,
        description = draft.description,
    );
    page(title, &body)
}

/// Delete-confirmation page; doubles as the blocked view when items still
/// reference the category.
pub fn category_delete(category: &Category, blocking_items: &[Item]) -> String {
    let body = if blocking_items.is_empty() {
        format!(
            "<p>Delete category <strong>{}</strong>?</p>\n\
             <form method=\"post\" action=\"{}/delete\">\n\
             <button type=\"submit\">Delete</button>\n</form>",
            category.name,
            category.url()
        )
    } else {
        let rows: String = blocking_items
            .iter()
            .map(|i| format!("<li><a href=\"{}\">{}</a></li>", i.url(), i.name))
            .collect();
        format!(
            "<p>Category <strong>{}</strong> cannot be deleted while the following items reference it:</p>\n\
             <ul>{rows}</ul>\n<p>Delete those items first.</p>",
            category.name
        )
    };
    page("Delete Category", &body)
}

pub fn item_list(items: &[Item]) -> String {
    let rows: String = items
        .iter()
        .map(|i| format!("<li><a href=\"{}\">{}</a></li>", i.url(), i.name))
        .collect();
    let body = format!("<ul>{rows}</ul>\n<p><a href=\"/item/create\">Create a new item</a></p>");
    page("Item List", &body)
}

pub fn item_detail(item: &Item, category: &Category) -> String {
    let body = format!(
        "<p>{}</p>\n\
         <p>Category: <a href=\"{}\">{}</a></p>\n\
         <p>Price: {} | In stock: {}</p>\n\
         <p><a href=\"{url}/update\">Update</a> | <a href=\"{url}/delete\">Delete</a></p>",
        item.description,
        category.url(),
        category.name,
        item.price,
        item.stock,
        url = item.url()
    );
    page("Item Details", &body)
}

pub fn item_form(
    title: &str,
    action: &str,
    draft: &ItemDraft,
    categories: &[Category],
    errors: &[FieldError],
) -> String {
    let options: String = categories
        .iter()
        .map(|c| {
            let selected = if draft.category == c.id.to_string() {
                " selected"
            } else {
                ""
            };
            format!("<option value=\"{}\"{selected}>{}</option>", c.id, c.name)
        })
        .collect();
    let body = format!(
        "{errors}<form method=\"post\" action=\"{action}\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label><br>\n\
         <label>Description <textarea name=\"description\">{description}</textarea></label><br>\n\
         <label>Category <select name=\"category\"><option value=\"\"></option>{options}</select></label><br>\n\
         <label>Price <input type=\"text\" name=\"price\" value=\"{price}\"></label><br>\n\
         <label>Stock <input type=\"text\" name=\"stock\" value=\"{stock}\"></label><br>\n\
         <button type=\"submit\">Submit</button>\n</form>",
        errors = error_list(errors),
        name = draft.name,
        description = draft.description,
        price = draft.price,
        stock = draft.stock,
    );
    page(title, &body)
}

pub fn item_delete(item: &Item) -> String {
    let body = format!(
        "<p>Delete item <strong>{}</strong>?</p>\n\
         <form method=\"post\" action=\"{}/delete\">\n\
         <button type=\"submit\">Delete</button>\n</form>",
        item.name,
        item.url()
    );
    page("Delete Item", &body)
}

pub fn not_found() -> String {
    page("Not Found", "<p>The requested record does not exist.</p>")
}

pub fn server_error() -> String {
    page("Server Error", "<p>Something went wrong. Try again later.</p>")
}
