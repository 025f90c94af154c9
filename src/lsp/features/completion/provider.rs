//! Completion providers
//!
//! A provider turns a completion request into items. Providers are stateless
//! with respect to requests: the same request twice yields the same items.

use std::sync::Arc;

use tower_lsp::lsp_types::{CompletionItem, Position, Url};
use tracing::{debug, warn};

use super::builder::build_vocabulary_item;
use super::snippet::expand_snippet;
use crate::catalog::{Catalog, Category, CatalogEntry};

/// The context a host passes along with a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub uri: Url,
    pub position: Position,
    pub trigger_character: Option<String>,
}

/// Common interface for everything the host can ask for completions.
pub trait CompletionItemProvider: Send + Sync {
    /// Must not panic and must not block; an empty list is always valid.
    fn provide_completion_items(&self, request: &CompletionRequest) -> Vec<CompletionItem>;

    /// Human-readable provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}

/// Serves the whole catalog on every request, unfiltered.
///
/// Prefix matching and ranking are left to the client, which already does
/// fuzzy matching over the list it receives.
#[derive(Debug, Clone, Default)]
pub struct CatalogCompletionProvider {
    catalog: Arc<Catalog>,
}

impl CatalogCompletionProvider {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Keywords, types, literals, then snippets, each in catalog order.
    ///
    /// Entries with a blank label are skipped and logged.
    pub fn items(&self) -> Vec<CompletionItem> {
        let mut items = Vec::with_capacity(self.catalog.len());

        for category in Category::ALL {
            for entry in self.catalog.entries_for(category) {
                if entry.label().trim().is_empty() {
                    warn!(
                        "Skipping {} entry with empty label (detail: {:?})",
                        category,
                        entry.detail()
                    );
                    continue;
                }

                let sort_order = items.len();
                let item = match entry {
                    CatalogEntry::Vocabulary(vocabulary) => {
                        build_vocabulary_item(category, vocabulary, sort_order)
                    }
                    CatalogEntry::Snippet(snippet) => expand_snippet(snippet, sort_order),
                };
                items.push(item);
            }
        }

        items
    }
}

impl CompletionItemProvider for CatalogCompletionProvider {
    fn provide_completion_items(&self, request: &CompletionRequest) -> Vec<CompletionItem> {
        debug!(
            "Catalog completion for URI={} at {}:{} (trigger={:?})",
            request.uri, request.position.line, request.position.character, request.trigger_character
        );
        self.items()
    }

    fn provider_name(&self) -> &'static str {
        "aym-catalog"
    }
}
