#![forbid(unsafe_code)]

pub use i18n_catalog_core::{
    Args, CoreError, CoreResult, LanguageTag, NumberSymbols, PluralCategory, PluralMessage,
    PluralOptions, Value,
};
pub use i18n_catalog_runtime::{
    CatalogConfig, Document, LocaleConfig, LocaleStore, ReaderSource, RuntimeError,
    RuntimeResult, Source, Translator, load_config, load_config_or_default,
};
