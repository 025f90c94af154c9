//! Extension lifecycle: activation registers the catalog provider with the
//! host, deactivation releases every registration taken on activation.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use super::features::completion::CatalogCompletionProvider;
use super::host::{CompletionHost, Disposable, Registration};
use crate::catalog::Catalog;

/// Language id the completion provider is registered under.
pub const LANGUAGE_ID: &str = "aym";

/// File extension of aym sources.
pub const FILE_EXTENSION: &str = "aym";

#[derive(Debug)]
pub struct Extension {
    subscriptions: Mutex<Vec<Registration>>,
}

impl Extension {
    pub fn activate(host: &dyn CompletionHost, catalog: Arc<Catalog>) -> Self {
        info!("Activating aym completion ({} catalog entries)", catalog.len());
        let provider = Arc::new(CatalogCompletionProvider::new(catalog));
        let registration = host.register_completion_provider(LANGUAGE_ID, provider);
        Self {
            subscriptions: Mutex::new(vec![registration]),
        }
    }

    /// Releases all subscriptions. Safe to call repeatedly.
    pub fn deactivate(&self) {
        let subscriptions: Vec<Registration> = self.subscriptions.lock().drain(..).collect();
        if subscriptions.is_empty() {
            return;
        }
        info!("Deactivating aym completion ({} subscriptions)", subscriptions.len());
        for subscription in &subscriptions {
            subscription.release();
        }
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lsp::host::ProviderRegistry;

    #[test]
    fn test_activate_registers_one_provider() {
        let registry = ProviderRegistry::new();
        let extension = Extension::activate(&registry, Catalog::shared());

        assert_eq!(extension.subscription_count(), 1);
        let providers = registry.providers_for(LANGUAGE_ID);
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].provider_name(), "aym-catalog");
    }

    #[test]
    fn test_deactivate_twice() {
        let registry = ProviderRegistry::new();
        let extension = Extension::activate(&registry, Catalog::shared());

        extension.deactivate();
        assert_eq!(extension.subscription_count(), 0);
        assert!(registry.providers_for(LANGUAGE_ID).is_empty());

        extension.deactivate();
        assert_eq!(registry.provider_count(), 0);
    }

    #[test]
    fn test_dropping_extension_unregisters() {
        let registry = ProviderRegistry::new();
        drop(Extension::activate(&registry, Catalog::shared()));
        assert!(registry.providers_for(LANGUAGE_ID).is_empty());
    }
}
