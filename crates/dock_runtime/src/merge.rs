//! Catalog merge: locale prioritization, deduplication, and resolution of
//! the persisted pinned order against what the catalog still offers.

use std::collections::HashSet;

use portal_host::{AppId, CatalogEntry, PageLanguage};

use crate::model::DockItem;

/// Outcome of merging a raw catalog with a user's persisted pinned ids.
#[derive(Debug, Clone, PartialEq)]
pub struct MergePlan {
    /// Resolved pinned list, in persisted order, catalog-backed ids only.
    pub pinned: Vec<DockItem>,
    /// Remaining catalog after dedup, minus everything pinned.
    pub catalog: Vec<DockItem>,
    /// `Some(full filtered id list)` when persisted ids were dropped and
    /// the stored record needs a repair write.
    pub healed_ids: Option<Vec<AppId>>,
}

/// Stable partition: entries in the active locale come first, everything
/// else keeps its original relative order behind them.
pub fn locale_priority_sort(entries: &mut [CatalogEntry], language: &PageLanguage) {
    let active = language.dashed().to_string();
    entries.sort_by_key(|entry| entry.locale != active);
}

/// Keeps the first occurrence of each id.
///
/// Run after [`locale_priority_sort`] so a `Default` translation is
/// suppressed whenever a locale-matching entry for the same id exists.
pub fn dedupe_catalog(entries: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.id.clone()))
        .collect()
}

/// Resolves the raw catalog and the persisted pinned ids into a
/// [`MergePlan`].
///
/// Persisted ids missing from the deduplicated catalog are dropped; when
/// that happens the plan carries the filtered list so the caller can issue
/// the asynchronous repair write.
pub fn merge_catalog(
    mut raw: Vec<CatalogEntry>,
    language: &PageLanguage,
    persisted: &[AppId],
) -> MergePlan {
    locale_priority_sort(&mut raw, language);
    let deduped = dedupe_catalog(raw);

    let kept: Vec<AppId> = persisted
        .iter()
        .filter(|id| deduped.iter().any(|entry| entry.id == **id))
        .cloned()
        .collect();
    let healed_ids = (kept.len() != persisted.len()).then(|| kept.clone());

    let pinned: Vec<DockItem> = kept
        .iter()
        .filter_map(|id| deduped.iter().find(|entry| entry.id == *id))
        .cloned()
        .map(DockItem::from_entry)
        .collect();
    let catalog: Vec<DockItem> = deduped
        .into_iter()
        .filter(|entry| !kept.contains(&entry.id))
        .map(DockItem::from_entry)
        .collect();

    MergePlan {
        pinned,
        catalog,
        healed_ids,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use portal_host::DEFAULT_LOCALE;

    use super::*;

    fn entry(id: &str, locale: &str) -> CatalogEntry {
        CatalogEntry {
            id: AppId::from(id),
            title: format!("{id} ({locale})"),
            description: None,
            url: None,
            locale: locale.to_string(),
            sort_order: None,
        }
    }

    fn ids(items: &[DockItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn locale_sort_is_a_stable_partition() {
        let mut entries = vec![
            entry("a", DEFAULT_LOCALE),
            entry("b", "en-US"),
            entry("c", DEFAULT_LOCALE),
            entry("d", "en-US"),
        ];
        locale_priority_sort(&mut entries, &PageLanguage::new("en-US"));

        let order: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.id.as_str(), e.locale.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("b", "en-US"),
                ("d", "en-US"),
                ("a", DEFAULT_LOCALE),
                ("c", DEFAULT_LOCALE),
            ]
        );
    }

    #[test]
    fn default_duplicate_is_suppressed_by_locale_match() {
        let raw = vec![
            entry("A", "en-US"),
            entry("A", DEFAULT_LOCALE),
            entry("B", "fr-FR"),
        ];
        let plan = merge_catalog(raw, &PageLanguage::new("en-US"), &[]);

        assert_eq!(ids(&plan.catalog), vec!["A", "B"]);
        assert_eq!(plan.catalog[0].name, "A (en-US)");
        assert_eq!(plan.pinned, Vec::new());
        assert_eq!(plan.healed_ids, None);
    }

    #[test]
    fn merged_catalog_never_contains_duplicate_ids() {
        let raw = vec![
            entry("x", DEFAULT_LOCALE),
            entry("x", "de-DE"),
            entry("y", "de-DE"),
            entry("y", DEFAULT_LOCALE),
            entry("x", "fr-FR"),
        ];
        let plan = merge_catalog(raw, &PageLanguage::new("de-DE"), &[]);

        let mut seen = std::collections::HashSet::new();
        assert!(plan.catalog.iter().all(|item| seen.insert(item.id.clone())));
        assert_eq!(plan.catalog.len(), 2);
    }

    #[test]
    fn pinned_resolution_follows_persisted_order() {
        let raw = vec![
            entry("1", DEFAULT_LOCALE),
            entry("2", DEFAULT_LOCALE),
            entry("3", DEFAULT_LOCALE),
        ];
        let persisted = vec![AppId::from("3"), AppId::from("1")];
        let plan = merge_catalog(raw, &PageLanguage::fallback(), &persisted);

        assert_eq!(ids(&plan.pinned), vec!["3", "1"]);
        assert_eq!(ids(&plan.catalog), vec!["2"]);
        assert_eq!(plan.healed_ids, None);
    }

    #[test]
    fn stale_persisted_ids_are_dropped_and_scheduled_for_repair() {
        let raw = vec![entry("1", DEFAULT_LOCALE), entry("3", DEFAULT_LOCALE)];
        let persisted = vec![AppId::from("1"), AppId::from("2"), AppId::from("3")];
        let plan = merge_catalog(raw, &PageLanguage::fallback(), &persisted);

        assert_eq!(ids(&plan.pinned), vec!["1", "3"]);
        assert_eq!(
            plan.healed_ids,
            Some(vec![AppId::from("1"), AppId::from("3")])
        );
    }

    #[test]
    fn pinned_and_catalog_stay_disjoint() {
        let raw = vec![
            entry("a", "en-US"),
            entry("a", DEFAULT_LOCALE),
            entry("b", DEFAULT_LOCALE),
            entry("c", DEFAULT_LOCALE),
        ];
        let persisted = vec![AppId::from("a")];
        let plan = merge_catalog(raw, &PageLanguage::new("en-US"), &persisted);

        assert_eq!(ids(&plan.pinned), vec!["a"]);
        assert_eq!(ids(&plan.catalog), vec!["b", "c"]);
        assert!(plan
            .pinned
            .iter()
            .all(|p| plan.catalog.iter().all(|c| c.id != p.id)));
    }
}
