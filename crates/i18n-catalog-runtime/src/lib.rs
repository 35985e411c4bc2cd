#![forbid(unsafe_code)]

mod config;
mod document;
mod error;
mod source;
mod store;
mod translator;

pub use crate::config::{CatalogConfig, LocaleConfig, load_config, load_config_or_default};
pub use crate::document::Document;
pub use crate::error::{RuntimeError, RuntimeResult};
pub use crate::source::{ReaderSource, Source};
pub use crate::store::LocaleStore;
pub use crate::translator::Translator;

#[cfg(test)]
mod property_tests;
