//! Snippet expansion
//!
//! A snippet's template is handed to the client byte-for-byte. Placeholder
//! syntax is interpreted by the client's snippet engine, not here.

use tower_lsp::lsp_types::{CompletionItem, InsertTextFormat};

use super::builder::{category_data, sort_text};
use crate::catalog::{Category, SnippetEntry};

pub fn expand_snippet(entry: &SnippetEntry, sort_order: usize) -> CompletionItem {
    CompletionItem {
        label: entry.label.to_string(),
        kind: Some(Category::Snippet.completion_kind()),
        detail: Some(entry.detail.to_string()),
        insert_text: Some(entry.template.to_string()),
        insert_text_format: Some(InsertTextFormat::SNIPPET),
        sort_text: Some(sort_text(sort_order)),
        data: Some(category_data(Category::Snippet)),
        ..Default::default()
    }
}
