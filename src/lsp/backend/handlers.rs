//! LSP protocol handler implementations
//!
//! This module contains the `tower_lsp::LanguageServer` implementation for the
//! aym backend:
//! - Lifecycle handlers (initialize, initialized, shutdown)
//! - Document lifecycle (did_open, did_change, did_close)
//! - Completion

use std::sync::Arc;

use tower_lsp::{LanguageServer, jsonrpc};
use tower_lsp::lsp_types::{
    CompletionOptions, CompletionOptionsCompletionItem, CompletionParams, CompletionResponse,
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    InitializeParams, InitializeResult, InitializedParams, MessageType, ServerCapabilities,
    ServerInfo, TextDocumentSyncCapability, TextDocumentSyncKind,
};
use tracing::{debug, info, warn};

use super::state::AymaraBackend;
use super::utils::resolve_language;
use crate::lsp::features::completion::CompletionRequest;
use crate::lsp::models::OpenDocument;

#[tower_lsp::async_trait]
impl LanguageServer for AymaraBackend {
    /// Handles the LSP initialize request, advertising completion support.
    async fn initialize(&self, params: InitializeParams) -> jsonrpc::Result<InitializeResult> {
        info!("Received initialize: process_id={:?}", params.process_id);

        // Update client process ID if provided
        if let Some(client_pid) = params.process_id {
            let mut locked_pid = self.client_process_id.lock();
            if let Some(cmdline_pid) = *locked_pid {
                if cmdline_pid != client_pid {
                    warn!(
                        "Client process ID from command line ({}) differs from LSP initialize process ID ({})",
                        cmdline_pid, client_pid
                    );
                }
            }
            *locked_pid = Some(client_pid);
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: None,
                    all_commit_characters: None,
                    resolve_provider: Some(false),
                    completion_item: Some(CompletionOptionsCompletionItem {
                        label_details_support: Some(false),
                    }),
                    work_done_progress_options: Default::default(),
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            ..Default::default()
        })
    }

    async fn initialized(&self, params: InitializedParams) {
        info!("Initialized: {:?}", params);
        self.client
            .log_message(
                MessageType::INFO,
                format!("aym completion ready ({} entries)", self.catalog.len()),
            )
            .await;
    }

    async fn shutdown(&self) -> jsonrpc::Result<()> {
        info!("Received shutdown request");
        self.extension.deactivate();
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let language_id = resolve_language(&params.text_document.language_id, &uri);

        info!(
            "Opened document: URI={}, version={}, language={}",
            uri, params.text_document.version, language_id
        );
        let document = Arc::new(OpenDocument { language_id });
        self.documents_by_uri.write().await.insert(uri, document);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // Full sync is advertised only so that open/close are delivered;
        // edits never change how a document is routed.
        let uri = params.text_document.uri;
        if self.documents_by_uri.read().await.contains_key(&uri) {
            debug!("Document changed: URI={}, version={}", uri, params.text_document.version);
        } else {
            warn!("Failed to find document with URI={}", uri);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        if let Some(document) = self.documents_by_uri.write().await.remove(&uri) {
            info!("Closed document: {} (language={})", uri, document.language_id);
        } else {
            warn!("Failed to find document with URI={}", uri);
        }
    }

    async fn completion(&self, params: CompletionParams) -> jsonrpc::Result<Option<CompletionResponse>> {
        let position_params = params.text_document_position;
        let request = CompletionRequest {
            uri: position_params.text_document.uri,
            position: position_params.position,
            trigger_character: params.context.and_then(|context| context.trigger_character),
        };
        debug!(
            "Completion request: URI={}, position={:?}",
            request.uri, request.position
        );

        Ok(self
            .completion_items(&request)
            .await
            .map(CompletionResponse::Array))
    }
}
