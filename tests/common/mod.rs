//! In-process helpers for driving the backend through its `LanguageServer`
//! implementation without a transport.

#![allow(dead_code)]

use tower_lsp::lsp_types::{
    CompletionContext, CompletionItem, CompletionParams, CompletionResponse,
    CompletionTriggerKind, DidChangeTextDocumentParams, DidCloseTextDocumentParams,
    DidOpenTextDocumentParams, Position, TextDocumentContentChangeEvent, TextDocumentIdentifier,
    TextDocumentItem, TextDocumentPositionParams, Url, VersionedTextDocumentIdentifier,
};
use tower_lsp::{ClientSocket, LanguageServer, LspService};

use aymara_language_server::catalog::Catalog;
use aymara_language_server::lsp::backend::AymaraBackend;

pub struct TestServer {
    service: LspService<AymaraBackend>,
    _socket: ClientSocket,
}

impl TestServer {
    pub fn new() -> Self {
        let (service, socket) =
            LspService::new(|client| AymaraBackend::new(client, Catalog::shared(), None));
        TestServer { service, _socket: socket }
    }

    pub fn backend(&self) -> &AymaraBackend {
        self.service.inner()
    }

    pub async fn open(&self, path: &str, language_id: &str, text: &str) -> Url {
        let uri = Url::parse(&format!("file://{}", path)).unwrap();
        self.backend()
            .did_open(DidOpenTextDocumentParams {
                text_document: TextDocumentItem {
                    uri: uri.clone(),
                    language_id: language_id.to_string(),
                    version: 1,
                    text: text.to_string(),
                },
            })
            .await;
        uri
    }

    /// Sends a full-text change for `uri`.
    pub async fn change(&self, uri: &Url, version: i32, text: &str) {
        self.backend()
            .did_change(DidChangeTextDocumentParams {
                text_document: VersionedTextDocumentIdentifier { uri: uri.clone(), version },
                content_changes: vec![TextDocumentContentChangeEvent {
                    range: None,
                    range_length: None,
                    text: text.to_string(),
                }],
            })
            .await;
    }

    pub async fn close(&self, uri: &Url) {
        self.backend()
            .did_close(DidCloseTextDocumentParams {
                text_document: TextDocumentIdentifier { uri: uri.clone() },
            })
            .await;
    }

    pub async fn completion(&self, uri: &Url, position: Position) -> Option<CompletionResponse> {
        self.completion_with_trigger(uri, position, None).await
    }

    pub async fn completion_with_trigger(
        &self,
        uri: &Url,
        position: Position,
        trigger_character: Option<&str>,
    ) -> Option<CompletionResponse> {
        let context = trigger_character.map(|c| CompletionContext {
            trigger_kind: CompletionTriggerKind::TRIGGER_CHARACTER,
            trigger_character: Some(c.to_string()),
        });
        self.backend()
            .completion(CompletionParams {
                text_document_position: TextDocumentPositionParams {
                    text_document: TextDocumentIdentifier { uri: uri.clone() },
                    position,
                },
                work_done_progress_params: Default::default(),
                partial_result_params: Default::default(),
                context,
            })
            .await
            .expect("completion never returns a JSON-RPC error")
    }

    /// Completion items, panicking if the server returned no response.
    pub async fn items(&self, uri: &Url, position: Position) -> Vec<CompletionItem> {
        into_items(self.completion(uri, position).await)
    }
}

pub fn into_items(response: Option<CompletionResponse>) -> Vec<CompletionItem> {
    match response {
        Some(CompletionResponse::Array(items)) => items,
        Some(CompletionResponse::List(list)) => list.items,
        None => panic!("Expected completion results"),
    }
}
