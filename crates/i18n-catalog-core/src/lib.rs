#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod args;
mod error;
mod format;
mod interpolate;
mod language_tag;
mod plural;

pub use args::{Args, Value};
pub use error::{CoreError, CoreResult};
pub use format::{NumberSymbols, format_float, format_integer, format_value};
pub use interpolate::interpolate;
pub use language_tag::LanguageTag;
pub use plural::{
    PluralCategory, PluralMessage, PluralOptions, PluralVariants, select_variant,
};
