//! Language entries and the per-page catalog they form.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A single language example page: its display title and link.
///
/// An empty `href` marks a language with no page yet; it is still listed but
/// rendered without a navigable link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct LanguageEntry {
    title: String,
    href: String,
}

/// Wire shape of an entry before validation.
#[derive(Deserialize)]
struct RawEntry {
    title: String,
    #[serde(default, alias = "link")]
    href: String,
}

impl TryFrom<RawEntry> for LanguageEntry {
    type Error = CoreError;

    fn try_from(raw: RawEntry) -> Result<Self> {
        Self::new(raw.title, raw.href)
    }
}

impl LanguageEntry {
    /// Create a new entry. Fails if the title is empty.
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Result<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(CoreError::invalid_entry("title cannot be empty"));
        }

        Ok(Self {
            title,
            href: href.into(),
        })
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Link target; empty when the language has no page.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Whether this entry links somewhere.
    pub fn is_navigable(&self) -> bool {
        !self.href.is_empty()
    }
}

/// Ordered, immutable list of language entries available on a page.
///
/// Serialized as a plain JSON array of `{ "title", "href" }` objects, which is
/// the form embedded into rendered pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
}

impl LanguageCatalog {
    /// Create a catalog preserving the given order.
    pub fn new(entries: Vec<LanguageEntry>) -> Self {
        Self { entries }
    }

    /// Parse a catalog from its embedded JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        tracing::debug!(entries = catalog.len(), "parsed language catalog");
        Ok(catalog)
    }

    /// Serialize the catalog to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    /// Iterate entries in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, LanguageEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<LanguageEntry> for LanguageCatalog {
    fn from_iter<I: IntoIterator<Item = LanguageEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LanguageCatalog {
    type Item = &'a LanguageEntry;
    type IntoIter = std::slice::Iter<'a, LanguageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
