pub mod catalog;
pub mod error;
pub mod logging;
pub mod lsp;

pub use catalog::{Catalog, Category};
pub use error::ServerError;
pub use lsp::backend::AymaraBackend;
