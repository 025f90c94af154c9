//! Backend state management
//!
//! This module defines the AymaraBackend struct, which holds the provider
//! registry, the extension's registrations, and the open-document table used
//! to route completion requests by language.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::Client;
use tower_lsp::lsp_types::Url;

use crate::catalog::Catalog;
use crate::lsp::extension::Extension;
use crate::lsp::host::ProviderRegistry;
use crate::lsp::models::OpenDocument;

/// The aym completion server backend.
#[derive(Clone)]
pub struct AymaraBackend {
    pub(super) client: Client,
    pub(super) catalog: Arc<Catalog>,
    pub(super) registry: ProviderRegistry,
    /// Taken on construction, deactivated on shutdown
    pub(super) extension: Arc<Extension>,
    pub(super) documents_by_uri: Arc<RwLock<HashMap<Url, Arc<OpenDocument>>>>,
    pub(super) client_process_id: Arc<parking_lot::Mutex<Option<u32>>>,
}
