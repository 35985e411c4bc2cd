use std::collections::HashMap;

use i18n_catalog_core::{Args, LanguageTag, PluralMessage, interpolate};
use tracing::{trace, warn};

use crate::document::Document;

/// Messages and documents for one locale.
///
/// Registered messages shadow document entries with the same key; documents
/// are searched in the order they were loaded.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    tag: LanguageTag,
    documents: Vec<Document>,
    messages: HashMap<String, PluralMessage>,
}

impl LocaleStore {
    pub fn new(tag: LanguageTag) -> Self {
        Self {
            tag,
            documents: Vec::new(),
            messages: HashMap::new(),
        }
    }

    /// Appends `bytes` as a document; malformed input is dropped.
    pub fn load(&mut self, bytes: &[u8]) -> bool {
        match Document::parse(bytes) {
            Ok(document) => {
                self.documents.push(document);
                true
            }
            Err(err) => {
                warn!(tag = %self.tag, error = %err, "dropping malformed document");
                false
            }
        }
    }

    pub fn add_message(&mut self, key: impl Into<String>, message: PluralMessage) {
        self.messages.insert(key.into(), message);
    }

    /// Returns the rendered message, or `""` when no entry has `key`.
    pub fn translate(&self, key: &str, count: Option<i64>, args: &Args) -> String {
        if let Some(message) = self.messages.get(key) {
            let text = message.resolve(count);
            if text.is_empty() {
                return String::new();
            }
            return interpolate(&self.tag, text, args);
        }

        for document in &self.documents {
            if let Some(text) = document.translate(&self.tag, key, count, args) {
                return text;
            }
        }

        trace!(tag = %self.tag, key, "no entry for key");
        String::new()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}
