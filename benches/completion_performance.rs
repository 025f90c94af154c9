//! Benchmark suite for the completion path
//!
//! This benchmark measures:
//! - Rendering the full catalog into completion items
//! - Provider dispatch through the registry
//! - Catalog validation at startup

use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tower_lsp::lsp_types::{Position, Url};

use aymara_language_server::catalog::Catalog;
use aymara_language_server::lsp::extension::{Extension, LANGUAGE_ID};
use aymara_language_server::lsp::features::completion::{
    CatalogCompletionProvider, CompletionItemProvider, CompletionRequest,
};
use aymara_language_server::lsp::host::ProviderRegistry;

fn request() -> CompletionRequest {
    CompletionRequest {
        uri: Url::parse("file:///bench/programa.aym").unwrap(),
        position: Position::new(10, 4),
        trigger_character: None,
    }
}

fn bench_catalog_items(c: &mut Criterion) {
    let provider = CatalogCompletionProvider::new(Catalog::shared());
    let request = request();

    c.bench_function("catalog_items", |b| {
        b.iter(|| black_box(provider.provide_completion_items(black_box(&request))))
    });
}

fn bench_registry_dispatch(c: &mut Criterion) {
    let registry = ProviderRegistry::new();
    let _extension = Extension::activate(&registry, Catalog::shared());
    let request = request();

    c.bench_function("registry_dispatch", |b| {
        b.iter(|| {
            let items: Vec<_> = registry
                .providers_for(black_box(LANGUAGE_ID))
                .iter()
                .flat_map(|p| p.provide_completion_items(&request))
                .collect();
            black_box(items)
        })
    });
}

fn bench_validation(c: &mut Criterion) {
    let catalog = Arc::new(Catalog::builtin());
    c.bench_function("catalog_validate", |b| b.iter(|| black_box(catalog.validate())));
}

criterion_group!(benches, bench_catalog_items, bench_registry_dispatch, bench_validation);
criterion_main!(benches);
