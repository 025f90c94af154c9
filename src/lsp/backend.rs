use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::Client;
use tower_lsp::lsp_types::{CompletionItem, Url};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::lsp::extension::Extension;
use crate::lsp::features::completion::CompletionRequest;
use crate::lsp::host::ProviderRegistry;

mod handlers;
mod state;
mod utils;

pub use state::AymaraBackend;

impl AymaraBackend {
    /// Creates the backend and activates the aym extension against its
    /// provider registry.
    pub fn new(client: Client, catalog: Arc<Catalog>, client_process_id: Option<u32>) -> Self {
        let issues = catalog.validate();
        for issue in &issues {
            warn!("Catalog issue: {}", issue);
        }
        info!(
            "Loaded catalog with {} entries ({} issues)",
            catalog.len(),
            issues.len()
        );

        let registry = ProviderRegistry::new();
        let extension = Arc::new(Extension::activate(&registry, Arc::clone(&catalog)));

        AymaraBackend {
            client,
            catalog,
            registry,
            extension,
            documents_by_uri: Arc::new(RwLock::new(HashMap::new())),
            client_process_id: Arc::new(parking_lot::Mutex::new(client_process_id)),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn client_process_id(&self) -> Option<u32> {
        *self.client_process_id.lock()
    }

    /// Language a document is served as, if it is known or recognizable by
    /// its extension.
    pub async fn language_of(&self, uri: &Url) -> Option<String> {
        if let Some(document) = self.documents_by_uri.read().await.get(uri) {
            return Some(document.language_id.clone());
        }
        utils::has_aym_extension(uri).then(|| crate::lsp::extension::LANGUAGE_ID.to_string())
    }

    /// Collects items from every provider registered for the document's
    /// language. `None` when no provider applies.
    pub async fn completion_items(&self, request: &CompletionRequest) -> Option<Vec<CompletionItem>> {
        let Some(language_id) = self.language_of(&request.uri).await else {
            debug!("No language known for URI={}, skipping completion", request.uri);
            return None;
        };

        let providers = self.registry.providers_for(&language_id);
        if providers.is_empty() {
            debug!("No completion providers registered for language '{}'", language_id);
            return None;
        }

        let items: Vec<CompletionItem> = providers
            .iter()
            .flat_map(|provider| provider.provide_completion_items(request))
            .collect();
        debug!("Returning {} completion items for URI={}", items.len(), request.uri);
        Some(items)
    }
}
