//! Code completion for aym documents
//!
//! This module provides:
//! - Conversion of catalog vocabulary into LSP completion items
//! - Snippet items carrying their templates verbatim
//! - The provider the host calls on every completion request

pub mod builder;
pub mod provider;
pub mod snippet;

pub use builder::{build_vocabulary_item, item_category};
pub use provider::{CatalogCompletionProvider, CompletionItemProvider, CompletionRequest};
pub use snippet::expand_snippet;
