//! Consistency checks over a catalog
//!
//! Findings are reported, never enforced: the completion path skips entries it
//! cannot render and otherwise emits the catalog as declared.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::tab_stops::tab_stops;
use super::{Catalog, Category};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIssue {
    #[error("{category} entry #{position} has an empty label")]
    EmptyLabel { category: Category, position: usize },

    #[error("{category} label '{label}' is declared {count} times")]
    DuplicateLabel {
        category: Category,
        label: &'static str,
        count: usize,
    },

    #[error("snippet '{label}' has no tab stops")]
    MissingTabStops { label: &'static str },

    #[error("snippet '{label}' gives tab stop ${index} conflicting default texts")]
    ConflictingDefaults { label: &'static str, index: u32 },
}

impl Catalog {
    /// Checks the catalog for entries a host would render poorly.
    ///
    /// Issues are returned in category order, then declaration order.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for category in Category::ALL {
            let labels: Vec<&'static str> = match category {
                Category::Snippet => self.snippets().iter().map(|s| s.label).collect(),
                _ => self.vocabulary(category).iter().map(|e| e.label).collect(),
            };
            check_labels(category, &labels, &mut issues);
        }

        for snippet in self.snippets() {
            let stops = tab_stops(snippet.template);
            if stops.is_empty() {
                issues.push(CatalogIssue::MissingTabStops { label: snippet.label });
                continue;
            }

            let mut defaults: HashMap<u32, &str> = HashMap::new();
            let mut reported = HashSet::new();
            for stop in &stops {
                let Some(text) = stop.default_text.as_deref() else { continue };
                match defaults.get(&stop.index) {
                    Some(previous) if *previous != text => {
                        if reported.insert(stop.index) {
                            issues.push(CatalogIssue::ConflictingDefaults {
                                label: snippet.label,
                                index: stop.index,
                            });
                        }
                    }
                    Some(_) => {}
                    None => {
                        defaults.insert(stop.index, text);
                    }
                }
            }
        }

        issues
    }
}

fn check_labels(category: Category, labels: &[&'static str], issues: &mut Vec<CatalogIssue>) {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for (position, label) in labels.iter().enumerate() {
        if label.trim().is_empty() {
            issues.push(CatalogIssue::EmptyLabel { category, position });
            continue;
        }
        *counts.entry(*label).or_default() += 1;
    }

    let mut seen = HashSet::new();
    for label in labels {
        let count = counts.get(label).copied().unwrap_or(0);
        if count > 1 && seen.insert(*label) {
            issues.push(CatalogIssue::DuplicateLabel { category, label: *label, count });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{SnippetEntry, VocabularyEntry};

    #[test]
    fn test_builtin_catalog_is_clean() {
        assert_eq!(Catalog::builtin().validate(), Vec::new());
    }

    #[test]
    fn test_duplicate_and_empty_labels() {
        let catalog = Catalog::new(
            vec![
                VocabularyEntry::new("jisa", "Condicional if"),
                VocabularyEntry::new("", "sin etiqueta"),
                VocabularyEntry::new("jisa", "Condicional if (otra vez)"),
            ],
            vec![VocabularyEntry::new("jisa", "mismo texto, otra categoría")],
            Vec::new(),
            Vec::new(),
        );

        let issues = catalog.validate();
        assert_eq!(
            issues,
            vec![
                CatalogIssue::EmptyLabel { category: Category::Keyword, position: 1 },
                CatalogIssue::DuplicateLabel { category: Category::Keyword, label: "jisa", count: 2 },
            ]
        );
        assert_eq!(issues[1].to_string(), "keyword label 'jisa' is declared 2 times");
    }

    #[test]
    fn test_snippet_template_checks() {
        let catalog = Catalog::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            vec![
                SnippetEntry::new("plain", "sin marcadores", "qallta tukuya"),
                SnippetEntry::new("twice", "misma parada", "${1:a} $0 ${1:b}"),
                SnippetEntry::new("mirror", "espejo", "${1:a} ${1:a} $0"),
            ],
        );

        assert_eq!(
            catalog.validate(),
            vec![
                CatalogIssue::MissingTabStops { label: "plain" },
                CatalogIssue::ConflictingDefaults { label: "twice", index: 1 },
            ]
        );
    }
}
