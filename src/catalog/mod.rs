//! Completion catalog for the aym language
//!
//! The catalog is an immutable registry of four fixed categories:
//! - Keywords (statements, modifiers, control flow)
//! - Type names
//! - Boolean literals
//! - Snippet templates with LSP tab-stop placeholders
//!
//! Entries are kept in declaration order; nothing mutates a catalog after it
//! has been constructed. The built-in catalog is created once per process and
//! shared through an `Arc`.

pub mod tab_stops;
pub mod validation;
mod vocabulary;

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tower_lsp::lsp_types::CompletionItemKind;

pub use tab_stops::{TabStop, tab_stops};
pub use validation::CatalogIssue;

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(Catalog::builtin()));

/// The fixed partitions of the catalog, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Keyword,
    Type,
    Literal,
    Snippet,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Keyword,
        Category::Type,
        Category::Literal,
        Category::Snippet,
    ];

    /// LSP kind used when rendering entries of this category.
    pub fn completion_kind(self) -> CompletionItemKind {
        match self {
            Category::Keyword => CompletionItemKind::KEYWORD,
            Category::Type => CompletionItemKind::TYPE_PARAMETER,
            Category::Literal => CompletionItemKind::VALUE,
            Category::Snippet => CompletionItemKind::SNIPPET,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Type => "type",
            Category::Literal => "literal",
            Category::Snippet => "snippet",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One keyword, type name, or literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyEntry {
    /// Exact surface token
    pub label: &'static str,
    /// Short description shown next to the label
    pub detail: &'static str,
    /// Optional extended text, rendered as Markdown
    pub documentation: Option<&'static str>,
}

impl VocabularyEntry {
    pub const fn new(label: &'static str, detail: &'static str) -> Self {
        Self { label, detail, documentation: None }
    }

    pub const fn with_documentation(mut self, documentation: &'static str) -> Self {
        self.documentation = Some(documentation);
        self
    }
}

/// One multi-line statement template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetEntry {
    pub label: &'static str,
    pub detail: &'static str,
    /// Snippet body in LSP snippet syntax. Literal tabs are indentation.
    pub template: &'static str,
}

impl SnippetEntry {
    pub const fn new(label: &'static str, detail: &'static str, template: &'static str) -> Self {
        Self { label, detail, template }
    }
}

/// A borrowed view of any catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEntry<'a> {
    Vocabulary(&'a VocabularyEntry),
    Snippet(&'a SnippetEntry),
}

impl CatalogEntry<'_> {
    pub fn label(&self) -> &'static str {
        match self {
            CatalogEntry::Vocabulary(entry) => entry.label,
            CatalogEntry::Snippet(entry) => entry.label,
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            CatalogEntry::Vocabulary(entry) => entry.detail,
            CatalogEntry::Snippet(entry) => entry.detail,
        }
    }
}

/// Immutable registry of completion entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    keywords: Vec<VocabularyEntry>,
    types: Vec<VocabularyEntry>,
    literals: Vec<VocabularyEntry>,
    snippets: Vec<SnippetEntry>,
}

impl Catalog {
    pub fn new(
        keywords: Vec<VocabularyEntry>,
        types: Vec<VocabularyEntry>,
        literals: Vec<VocabularyEntry>,
        snippets: Vec<SnippetEntry>,
    ) -> Self {
        Self { keywords, types, literals, snippets }
    }

    /// The aym vocabulary.
    pub fn builtin() -> Self {
        Self::new(
            vocabulary::KEYWORDS.to_vec(),
            vocabulary::TYPES.to_vec(),
            vocabulary::LITERALS.to_vec(),
            vocabulary::SNIPPETS.to_vec(),
        )
    }

    /// Process-wide handle to the built-in catalog, constructed on first use.
    pub fn shared() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    /// Vocabulary entries of a keyword, type, or literal category.
    ///
    /// Snippets are not vocabulary; asking for them is a caller bug and yields
    /// an empty slice in release builds.
    pub fn vocabulary(&self, category: Category) -> &[VocabularyEntry] {
        debug_assert!(
            category != Category::Snippet,
            "snippets are not vocabulary entries; use Catalog::snippets"
        );
        match category {
            Category::Keyword => &self.keywords,
            Category::Type => &self.types,
            Category::Literal => &self.literals,
            Category::Snippet => &[],
        }
    }

    pub fn snippets(&self) -> &[SnippetEntry] {
        &self.snippets
    }

    /// Entries of `category` in declaration order.
    pub fn entries_for(&self, category: Category) -> Vec<CatalogEntry<'_>> {
        match category {
            Category::Snippet => self.snippets.iter().map(CatalogEntry::Snippet).collect(),
            _ => self.vocabulary(category).iter().map(CatalogEntry::Vocabulary).collect(),
        }
    }

    pub fn category_len(&self, category: Category) -> usize {
        match category {
            Category::Keyword => self.keywords.len(),
            Category::Type => self.types.len(),
            Category::Literal => self.literals.len(),
            Category::Snippet => self.snippets.len(),
        }
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.category_len(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
