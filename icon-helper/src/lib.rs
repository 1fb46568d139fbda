//! Generates the application icon and the store listing assets.

pub mod catalog;
pub mod config;
pub mod export;
pub mod logger;

pub use config::Config;
pub use export::{ExportContext, Exporter, IconExporter, StoreExporter};
