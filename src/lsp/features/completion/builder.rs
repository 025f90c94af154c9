//! Conversion of vocabulary entries into LSP completion items

use serde_json::json;
use tower_lsp::lsp_types::{CompletionItem, Documentation, MarkupContent, MarkupKind};

use crate::catalog::{Category, VocabularyEntry};

/// Convert a keyword, type, or literal entry into a `CompletionItem`.
///
/// `sort_order` is the entry's position in the full completion list; it is
/// written to `sort_text` so hosts that sort lexically keep catalog order.
pub fn build_vocabulary_item(category: Category, entry: &VocabularyEntry, sort_order: usize) -> CompletionItem {
    let mut item = CompletionItem {
        label: entry.label.to_string(),
        kind: Some(category.completion_kind()),
        detail: Some(entry.detail.to_string()),
        sort_text: Some(sort_text(sort_order)),
        data: Some(category_data(category)),
        ..Default::default()
    };

    if let Some(doc) = entry.documentation {
        item.documentation = Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value: doc.to_string(),
        }));
    }

    item
}

pub(super) fn sort_text(sort_order: usize) -> String {
    format!("{:04}", sort_order)
}

/// Payload attached to every item so the category survives a round trip
/// through the client.
pub(super) fn category_data(category: Category) -> serde_json::Value {
    json!({ "category": category })
}

/// Reads the category back out of an item produced by this module.
pub fn item_category(item: &CompletionItem) -> Option<Category> {
    let value = item.data.as_ref()?.get("category")?;
    serde_json::from_value(value.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::lsp_types::CompletionItemKind;

    #[test]
    fn test_keyword_item_shape() {
        let entry = VocabularyEntry::new("jisa", "Condicional if");
        let item = build_vocabulary_item(Category::Keyword, &entry, 5);

        assert_eq!(item.label, "jisa");
        assert_eq!(item.detail.as_deref(), Some("Condicional if"));
        assert_eq!(item.kind, Some(CompletionItemKind::KEYWORD));
        assert_eq!(item.sort_text.as_deref(), Some("0005"));
        assert_eq!(item.documentation, None);
        assert_eq!(item.insert_text, None);
        assert_eq!(item_category(&item), Some(Category::Keyword));
    }

    #[test]
    fn test_type_and_literal_kinds() {
        let ty = build_vocabulary_item(Category::Type, &VocabularyEntry::new("aru", "Tipo cadena"), 0);
        let lit = build_vocabulary_item(Category::Literal, &VocabularyEntry::new("utji", "Literal verdadero (true)"), 1);

        assert_eq!(ty.kind, Some(CompletionItemKind::TYPE_PARAMETER));
        assert_eq!(lit.kind, Some(CompletionItemKind::VALUE));
        assert_eq!(item_category(&lit), Some(Category::Literal));
    }

    #[test]
    fn test_documentation_is_markdown() {
        let entry = VocabularyEntry::new("kasta", "Declarar clase")
            .with_documentation("Declara una clase:\n\n```aym\nkasta Nombre { }\n```");
        let item = build_vocabulary_item(Category::Keyword, &entry, 0);

        match item.documentation {
            Some(Documentation::MarkupContent(content)) => {
                assert_eq!(content.kind, MarkupKind::Markdown);
                assert!(content.value.starts_with("Declara una clase"));
            }
            other => panic!("Expected markdown documentation, got {:?}", other),
        }
    }

    #[test]
    fn test_item_category_ignores_foreign_data() {
        let item = CompletionItem {
            label: "x".to_string(),
            data: Some(json!({ "category": "operator" })),
            ..Default::default()
        };
        assert_eq!(item_category(&item), None);
        assert_eq!(item_category(&CompletionItem::default()), None);
    }
}
