use std::collections::HashMap;
use std::path::Path;

use i18n_catalog_core::{Args, LanguageTag, PluralMessage, PluralOptions};
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::error::{RuntimeError, RuntimeResult};
use crate::source::Source;
use crate::store::LocaleStore;

/// The translation catalog.
///
/// Every locale store lives behind one reader/writer lock: registration and
/// loading take it exclusively, lookups share it. Source reads in
/// [`Translator::load_sources`] happen while the write lock is held.
///
/// Lookups never fail. An empty or unknown locale id resolves to the default
/// locale, and a key missing from a non-default locale is retried against the
/// default locale before `""` is returned.
#[derive(Debug)]
pub struct Translator {
    default_locale: String,
    default_tag: LanguageTag,
    locales: RwLock<HashMap<String, LocaleStore>>,
}

impl Translator {
    pub fn new(default_locale: impl Into<String>, default_tag: LanguageTag) -> Self {
        let default_locale = default_locale.into();
        let mut locales = HashMap::new();
        locales.insert(default_locale.clone(), LocaleStore::new(default_tag.clone()));
        Self {
            default_locale,
            default_tag,
            locales: RwLock::new(locales),
        }
    }

    /// Builds a catalog from configuration, reading every listed source.
    ///
    /// Relative source paths are resolved against `base_dir`.
    pub fn from_config(config: &CatalogConfig, base_dir: &Path) -> RuntimeResult<Self> {
        let default_tag = LanguageTag::parse(config.default_tag())?;
        let translator = Self::new(config.default_locale.clone(), default_tag);
        for locale in &config.locales {
            if locale.id != translator.default_locale {
                let tag = locale.tag.as_deref().map(LanguageTag::parse).transpose()?;
                translator.add_locale(locale.id.clone(), tag);
            } else if let Some(tag) = &locale.tag {
                warn!(
                    locale = %locale.id,
                    tag = %tag,
                    "tag on the default locale entry is ignored; set default_tag instead"
                );
            }
            let sources = locale.sources.iter().map(|path| base_dir.join(path));
            translator.load_sources(&locale.id, sources)?;
        }
        Ok(translator)
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn default_tag(&self) -> &LanguageTag {
        &self.default_tag
    }

    /// Registers `id`, replacing any existing store for it wholesale.
    ///
    /// Without a tag the default locale's tag is used.
    pub fn add_locale(&self, id: impl Into<String>, tag: Option<LanguageTag>) {
        let id = id.into();
        let tag = tag.unwrap_or_else(|| self.default_tag.clone());
        let mut locales = self.locales.write();
        debug!(locale = %id, tag = %tag, "registering locale");
        if locales.insert(id.clone(), LocaleStore::new(tag)).is_some() {
            debug!(locale = %id, "replaced existing locale store");
        }
    }

    /// Loads JSON documents into a locale. Malformed documents are skipped.
    pub fn load_bytes<I, B>(&self, locale: &str, contents: I)
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut locales = self.locales.write();
        let Some(store) = self.resolve_mut(&mut locales, locale) else {
            warn!(locale, "load for unknown locale ignored");
            return;
        };
        for content in contents {
            store.load(content.as_ref());
        }
        debug!(locale, documents = store.document_count(), "loaded documents");
    }

    /// Reads each source and loads it into a locale.
    ///
    /// Stops at the first unreadable source. Documents from earlier sources in
    /// the same call stay loaded.
    pub fn load_sources<I, S>(&self, locale: &str, sources: I) -> RuntimeResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Source,
    {
        let mut locales = self.locales.write();
        let Some(store) = self.resolve_mut(&mut locales, locale) else {
            warn!(locale, "load for unknown locale ignored");
            return Ok(());
        };
        for mut source in sources {
            let bytes = source.read_bytes().map_err(|err| RuntimeError::Source {
                name: source.name(),
                source: err,
            })?;
            if store.load(&bytes) {
                debug!(locale, source = %source.name(), "loaded source");
            }
        }
        Ok(())
    }

    pub fn load_files<I, P>(&self, locale: &str, paths: I) -> RuntimeResult<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.load_sources(
            locale,
            paths.into_iter().map(|path| path.as_ref().to_path_buf()),
        )
    }

    /// Registers a message, overwriting any previous one under `key`.
    ///
    /// The text is trimmed; blank text or an unknown locale is a no-op.
    pub fn add_message(
        &self,
        locale: &str,
        key: impl Into<String>,
        message: &str,
        options: PluralOptions,
    ) {
        let message = message.trim();
        if message.is_empty() {
            return;
        }
        let mut locales = self.locales.write();
        let Some(store) = self.resolve_mut(&mut locales, locale) else {
            warn!(locale, "message for unknown locale ignored");
            return;
        };
        let key = key.into();
        debug!(locale, key = %key, "registering message");
        store.add_message(key, PluralMessage::new(message, options));
    }

    pub fn translate(&self, locale: &str, key: &str, args: &Args) -> String {
        self.lookup(locale, key, None, args)
    }

    pub fn plural(&self, locale: &str, key: &str, count: i64, args: &Args) -> String {
        self.lookup(locale, key, Some(count), args)
    }

    pub fn has_locale(&self, id: &str) -> bool {
        self.locales.read().contains_key(id)
    }

    /// Registered locale ids, sorted.
    pub fn locales(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.locales.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    fn lookup(&self, locale: &str, key: &str, count: Option<i64>, args: &Args) -> String {
        let locales = self.locales.read();
        let requested = self.resolve_id(locale);
        let (id, store) = match locales.get_key_value(requested) {
            Some((id, store)) => (id.as_str(), store),
            None => match locales.get(&self.default_locale) {
                Some(store) => (self.default_locale.as_str(), store),
                None => return String::new(),
            },
        };

        let result = store.translate(key, count, args);
        if !result.is_empty() || id == self.default_locale {
            return result;
        }

        debug!(locale = id, key, "falling back to default locale");
        locales
            .get(&self.default_locale)
            .map(|store| store.translate(key, count, args))
            .unwrap_or_default()
    }

    fn resolve_id<'a>(&'a self, locale: &'a str) -> &'a str {
        if locale.is_empty() {
            &self.default_locale
        } else {
            locale
        }
    }

    fn resolve_mut<'a>(
        &self,
        locales: &'a mut HashMap<String, LocaleStore>,
        locale: &str,
    ) -> Option<&'a mut LocaleStore> {
        locales.get_mut(self.resolve_id(locale))
    }
}
