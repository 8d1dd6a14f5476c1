//! Case-insensitive substring filtering of a language catalog.
//!
//! [`filter_catalog`] is the whole of the widget's logic: a total, pure
//! function from `(catalog, filter text, cap)` to the list to display. DOM
//! concerns live in the UI crate and the generator's sidebar renderer, which
//! both consume [`FilteredList::items`].

use serde::Serialize;

use crate::catalog::{LanguageCatalog, LanguageEntry};

/// Display cap used by the sidebar widget.
pub const DEFAULT_MAX_RESULTS: usize = 15;

/// Label of the trailing item shown when matches exceed the cap.
pub const TRUNCATION_MARKER: &str = "...";

/// One item of the rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListItem {
    /// A navigable link to a language page.
    Link { title: String, href: String },
    /// A language without a page; shown but not navigable.
    Placeholder { title: String },
    /// Marks that more matches exist than are shown.
    TruncationMarker,
}

impl ListItem {
    /// Visible label of the item.
    pub fn label(&self) -> &str {
        match self {
            Self::Link { title, .. } | Self::Placeholder { title } => title,
            Self::TruncationMarker => TRUNCATION_MARKER,
        }
    }

    /// CSS classes of the item's `<li>`, shared by every renderer.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Link { .. } => "language-filter-item",
            Self::Placeholder { .. } => "language-filter-item language-filter-placeholder",
            Self::TruncationMarker => "language-filter-item language-filter-truncated",
        }
    }
}

impl From<&LanguageEntry> for ListItem {
    fn from(entry: &LanguageEntry) -> Self {
        if entry.is_navigable() {
            Self::Link {
                title: entry.title().to_string(),
                href: entry.href().to_string(),
            }
        } else {
            Self::Placeholder {
                title: entry.title().to_string(),
            }
        }
    }
}

/// Result of a filter pass: matches in catalog order, capped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredList<'a> {
    matches: Vec<&'a LanguageEntry>,
    truncated: bool,
}

impl<'a> FilteredList<'a> {
    /// Shown matches, at most `max_results` of them.
    pub fn matches(&self) -> &[&'a LanguageEntry] {
        &self.matches
    }

    /// Number of shown matches (excluding the truncation marker).
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Whether matches were dropped because of the cap.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Items to display, with the truncation marker last when truncated.
    pub fn items(&self) -> Vec<ListItem> {
        let mut items: Vec<ListItem> = self.matches.iter().map(|e| ListItem::from(*e)).collect();
        if self.truncated {
            items.push(ListItem::TruncationMarker);
        }
        items
    }
}

/// Filter `catalog` by case-insensitive substring match on titles.
///
/// An empty `filter_text` matches every entry. Order is preserved. When more
/// than `max_results` entries match, only the first `max_results` are kept and
/// the result is marked truncated.
pub fn filter_catalog<'a>(
    catalog: &'a LanguageCatalog,
    filter_text: &str,
    max_results: usize,
) -> FilteredList<'a> {
    let needle = filter_text.to_lowercase();

    let mut matches = Vec::with_capacity(max_results.min(catalog.len()));
    let mut truncated = false;

    for entry in catalog
        .iter()
        .filter(|e| needle.is_empty() || e.title().to_lowercase().contains(&needle))
    {
        if matches.len() == max_results {
            truncated = true;
            break;
        }
        matches.push(entry);
    }

    FilteredList { matches, truncated }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(titles: &[&str]) -> LanguageCatalog {
        titles
            .iter()
            .map(|t| LanguageEntry::new(*t, format!("/{}", t.to_lowercase())).unwrap())
            .collect()
    }

    fn numbered(n: usize) -> LanguageCatalog {
        (0..n)
            .map(|i| LanguageEntry::new(format!("Lang {i}"), format!("/lang-{i}")).unwrap())
            .collect()
    }

    fn titles<'a>(list: &FilteredList<'a>) -> Vec<&'a str> {
        list.matches().iter().map(|e| e.title()).collect()
    }

    #[test]
    fn test_empty_filter_returns_catalog_in_order() {
        let cat = catalog(&["Python", "Go", "C", "Java"]);
        let list = filter_catalog(&cat, "", DEFAULT_MAX_RESULTS);

        assert_eq!(titles(&list), vec!["Python", "Go", "C", "Java"]);
        assert!(!list.is_truncated());
    }

    #[test]
    fn test_concrete_scenario() {
        let cat = LanguageCatalog::new(vec![
            LanguageEntry::new("Go", "/go").unwrap(),
            LanguageEntry::new("Java", "/java").unwrap(),
            LanguageEntry::new("Rust", "").unwrap(),
        ]);

        // "Rust" has no "a", so only "Java" survives.
        let items = filter_catalog(&cat, "a", 15).items();
        assert_eq!(
            items,
            vec![ListItem::Link {
                title: "Java".to_string(),
                href: "/java".to_string()
            }]
        );

        let items = filter_catalog(&cat, "", 15).items();
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[2],
            ListItem::Placeholder {
                title: "Rust".to_string()
            }
        );
    }

    #[test]
    fn test_case_insensitive() {
        let cat = catalog(&["Go", "Java"]);
        assert_eq!(titles(&filter_catalog(&cat, "GO", 15)), vec!["Go"]);
        assert_eq!(titles(&filter_catalog(&cat, "jAvA", 15)), vec!["Java"]);
    }

    #[test]
    fn test_case_insensitive_non_ascii() {
        let cat = catalog(&["Élixir", "Go"]);
        assert_eq!(titles(&filter_catalog(&cat, "éLIX", 15)), vec!["Élixir"]);
    }

    #[test]
    fn test_no_matches_is_empty_without_placeholder() {
        let cat = catalog(&["Go", "Java"]);
        let list = filter_catalog(&cat, "haskell", 15);

        assert!(list.is_empty());
        assert!(!list.is_truncated());
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let cat = LanguageCatalog::default();
        assert!(filter_catalog(&cat, "", 15).items().is_empty());
        assert!(filter_catalog(&cat, "go", 15).items().is_empty());
    }

    #[test]
    fn test_truncation_with_twenty_entries() {
        let cat = numbered(20);
        let list = filter_catalog(&cat, "", 15);
        let items = list.items();

        assert_eq!(items.len(), 16);
        assert_eq!(items[0].label(), "Lang 0");
        assert_eq!(items[14].label(), "Lang 14");
        assert_eq!(items[15], ListItem::TruncationMarker);
        assert_eq!(items[15].label(), "...");
    }

    #[test]
    fn test_truncation_max_plus_five() {
        let max = 7;
        let cat = numbered(max + 5);
        let items = filter_catalog(&cat, "lang", max).items();

        let links = items
            .iter()
            .filter(|i| matches!(i, ListItem::Link { .. }))
            .count();
        assert_eq!(links, max);
        assert_eq!(items.len(), max + 1);
        assert_eq!(items.last(), Some(&ListItem::TruncationMarker));
    }

    #[test]
    fn test_exactly_max_matches_not_truncated() {
        let cat = numbered(15);
        let list = filter_catalog(&cat, "", 15);

        assert_eq!(list.len(), 15);
        assert!(!list.is_truncated());
        assert!(!list.items().contains(&ListItem::TruncationMarker));
    }

    #[test]
    fn test_truncation_counts_only_matches() {
        let mut entries: Vec<_> = (0..10)
            .map(|i| LanguageEntry::new(format!("Other {i}"), "").unwrap())
            .collect();
        entries.extend((0..3).map(|i| LanguageEntry::new(format!("Script {i}"), "").unwrap()));
        let cat = LanguageCatalog::new(entries);

        let list = filter_catalog(&cat, "script", 3);
        assert_eq!(list.len(), 3);
        assert!(!list.is_truncated());
    }

    #[test]
    fn test_every_output_matches_and_every_match_is_output() {
        let cat = catalog(&[
            "Go", "Java", "JavaScript", "Kotlin", "Scala", "Haskell", "C", "C++", "C#", "TypeScript",
        ]);

        for needle in ["", "a", "SCRIPT", "c", "++", "zz", "k"] {
            let list = filter_catalog(&cat, needle, 15);
            let lowered = needle.to_lowercase();

            for entry in list.matches() {
                assert!(entry.title().to_lowercase().contains(&lowered));
            }

            let expected: Vec<_> = cat
                .iter()
                .filter(|e| e.title().to_lowercase().contains(&lowered))
                .map(LanguageEntry::title)
                .collect();
            assert_eq!(titles(&list), expected, "filter {needle:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        let cat = numbered(30);
        let first = filter_catalog(&cat, "1", 5).items();
        let second = filter_catalog(&cat, "1", 5).items();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_cap_only_marks_truncation() {
        let cat = catalog(&["Go"]);
        assert_eq!(
            filter_catalog(&cat, "", 0).items(),
            vec![ListItem::TruncationMarker]
        );
        assert!(filter_catalog(&cat, "x", 0).items().is_empty());
    }

    #[test]
    fn test_list_item_serialization() {
        let json = serde_json::to_string(&ListItem::TruncationMarker).unwrap();
        assert_eq!(json, r#"{"kind":"truncation_marker"}"#);

        let json = serde_json::to_string(&ListItem::Placeholder {
            title: "Rust".to_string(),
        })
        .unwrap();
        assert!(json.contains(r#""kind":"placeholder""#));
    }
}
