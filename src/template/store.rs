use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

/// Template sources compiled into the binary, keyed as `templates/<path>`.
#[derive(RustEmbed)]
#[folder = "templates/"]
#[prefix = "templates/"]
struct EmbeddedTemplates;

#[derive(Debug, Clone)]
enum Source {
    Embedded,
    Entries(HashMap<&'static str, &'static str>),
}

/// Read-only collection of template sources keyed by their path inside the
/// `templates/` directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    source: Source,
    removed: HashSet<String>,
}

impl TemplateStore {
    /// The store holding the templates embedded at build time.
    pub fn embedded() -> Self {
        Self { source: Source::Embedded, removed: HashSet::new() }
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        Self {
            source: Source::Entries(entries.into_iter().collect()),
            removed: HashSet::new(),
        }
    }

    /// Returns a copy of this store without the template stored under `name`.
    pub fn without(&self, name: &str) -> Self {
        let mut store = self.clone();
        store.removed.insert(name.to_string());
        store
    }

    /// Looks up the source text stored under `name`.
    pub fn lookup(&self, name: &str) -> Result<Cow<'static, str>> {
        let missing = || Error::TemplateLookupError { name: name.to_string() };
        if self.removed.contains(name) {
            return Err(missing());
        }

        match &self.source {
            Source::Entries(templates) => {
                templates.get(name).map(|text| Cow::Borrowed(*text)).ok_or_else(missing)
            }
            Source::Embedded => {
                let file = EmbeddedTemplates::get(name).ok_or_else(missing)?;
                decode(name, file.data)
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().iter().any(|n| n == name)
    }

    /// Keys of every template in the store, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = match &self.source {
            Source::Entries(templates) => {
                templates.keys().map(|k| k.to_string()).collect()
            }
            Source::Embedded => {
                EmbeddedTemplates::iter().map(|k| k.into_owned()).collect()
            }
        };
        names.retain(|n| !self.removed.contains(n));
        names.sort();
        names
    }
}

impl Default for TemplateStore {
    /// An empty store.
    fn default() -> Self {
        Self::from_entries([])
    }
}

fn decode(name: &str, data: Cow<'static, [u8]>) -> Result<Cow<'static, str>> {
    let encoding_error =
        |source| Error::TemplateEncodingError { name: name.to_string(), source };
    match data {
        Cow::Borrowed(bytes) => {
            std::str::from_utf8(bytes).map(Cow::Borrowed).map_err(encoding_error)
        }
        Cow::Owned(bytes) => String::from_utf8(bytes)
            .map(Cow::Owned)
            .map_err(|e| encoding_error(e.utf8_error())),
    }
}
