//! Host-side capabilities consumed by the completion core
//!
//! The core needs exactly two things from its host:
//! - a way to register a completion provider for a language id
//! - a disposable handle that unregisters it again
//!
//! `ProviderRegistry` is the in-process host used by the language server.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info};

use super::features::completion::CompletionItemProvider;

/// A scoped resource whose release must happen exactly once.
pub trait Disposable {
    /// Release the resource. Calling this more than once is a no-op.
    fn release(&self);

    fn is_released(&self) -> bool;
}

/// Registration side of a completion host.
pub trait CompletionHost {
    fn register_completion_provider(
        &self,
        language_id: &str,
        provider: Arc<dyn CompletionItemProvider>,
    ) -> Registration;
}

type ReleaseFn = Box<dyn FnOnce() + Send>;

/// Handle returned by `CompletionHost::register_completion_provider`.
///
/// Dropping the handle releases it, so a registration cannot outlive its owner.
pub struct Registration {
    language_id: String,
    on_release: Mutex<Option<ReleaseFn>>,
}

impl Registration {
    pub fn new(language_id: impl Into<String>, on_release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            language_id: language_id.into(),
            on_release: Mutex::new(Some(Box::new(on_release))),
        }
    }

    pub fn language_id(&self) -> &str {
        &self.language_id
    }
}

impl Disposable for Registration {
    fn release(&self) {
        let on_release = self.on_release.lock().take();
        if let Some(on_release) = on_release {
            debug!("Releasing completion registration for language '{}'", self.language_id);
            on_release();
        }
    }

    fn is_released(&self) -> bool {
        self.on_release.lock().is_none()
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("language_id", &self.language_id)
            .field("released", &self.is_released())
            .finish()
    }
}

type ProviderTable = HashMap<String, Vec<(u64, Arc<dyn CompletionItemProvider>)>>;

/// Language-keyed table of completion providers.
///
/// Cloning shares the same table.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: Arc<RwLock<ProviderTable>>,
    next_id: Arc<AtomicU64>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Providers registered for `language_id`, in registration order.
    pub fn providers_for(&self, language_id: &str) -> Vec<Arc<dyn CompletionItemProvider>> {
        self.providers
            .read()
            .get(language_id)
            .map(|entries| entries.iter().map(|(_, p)| Arc::clone(p)).collect())
            .unwrap_or_default()
    }

    pub fn provider_count(&self) -> usize {
        self.providers.read().values().map(Vec::len).sum()
    }

    fn unregister(providers: &Weak<RwLock<ProviderTable>>, language_id: &str, id: u64) {
        // The registry may already be gone at shutdown
        let Some(providers) = providers.upgrade() else { return };
        let mut table = providers.write();
        if let Some(entries) = table.get_mut(language_id) {
            entries.retain(|(entry_id, _)| *entry_id != id);
            if entries.is_empty() {
                table.remove(language_id);
            }
        }
    }
}

impl CompletionHost for ProviderRegistry {
    fn register_completion_provider(
        &self,
        language_id: &str,
        provider: Arc<dyn CompletionItemProvider>,
    ) -> Registration {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        info!(
            "Registering completion provider '{}' for language '{}' (id={})",
            provider.provider_name(),
            language_id,
            id
        );
        self.providers
            .write()
            .entry(language_id.to_string())
            .or_default()
            .push((id, provider));

        let providers = Arc::downgrade(&self.providers);
        let language = language_id.to_string();
        Registration::new(language_id, move || {
            ProviderRegistry::unregister(&providers, &language, id);
        })
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.providers.read();
        let languages: Vec<(&String, usize)> = table.iter().map(|(k, v)| (k, v.len())).collect();
        f.debug_struct("ProviderRegistry")
            .field("languages", &languages)
            .finish()
    }
}
