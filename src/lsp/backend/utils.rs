//! Utility functions for the LSP backend

use tower_lsp::lsp_types::Url;

use crate::lsp::extension::{FILE_EXTENSION, LANGUAGE_ID};

/// Resolve the language a document should be served as.
///
/// Files with the `.aym` extension are always aym, whatever the client
/// reported. Otherwise the client's language id is used as given.
pub(super) fn resolve_language(client_language_id: &str, uri: &Url) -> String {
    if has_aym_extension(uri) {
        LANGUAGE_ID.to_string()
    } else {
        client_language_id.to_string()
    }
}

pub(super) fn has_aym_extension(uri: &Url) -> bool {
    uri.path()
        .rsplit('/')
        .next()
        .and_then(|name| name.rsplit_once('.'))
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case(FILE_EXTENSION))
}
