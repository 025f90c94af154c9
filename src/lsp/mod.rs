pub mod backend;
pub mod extension;
pub mod features;
pub mod host;
pub mod models;
