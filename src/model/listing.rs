//! Filtering, ordering and grouping of the entry list
//!
//! These are the only transformations between the API snapshot and what the
//! screen shows. All of them are total and borrow from the snapshot.

use super::entry::ConfigEntry;
use std::cmp::Ordering;

/// Group key for entries without a category
pub const OTHER_GROUP: &str = "Other";

/// A named cluster of entries, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigGroup<'a> {
    pub name: String,
    pub entries: Vec<&'a ConfigEntry>,
}

/// Whether an entry matches a filter string.
///
/// Plain case-sensitive substring match against the name or the value.
pub fn matches_filter(entry: &ConfigEntry, filter: &str) -> bool {
    entry.name.contains(filter) || entry.value_str().contains(filter)
}

/// Keep the entries matching `filter`, in their original order
pub fn filter_entries<'a>(entries: &'a [ConfigEntry], filter: &str) -> Vec<&'a ConfigEntry> {
    entries
        .iter()
        .filter(|entry| matches_filter(entry, filter))
        .collect()
}

/// Ordering used for the entry list: retention settings first, then cleanup
/// settings, everything else keeps its relative position.
pub fn compare_entries(a: &ConfigEntry, b: &ConfigEntry) -> Ordering {
    let rank = |entry: &ConfigEntry| {
        (
            !entry.name.contains("retention"),
            !entry.name.contains("cleanup"),
        )
    };
    let (a_retention, a_cleanup) = rank(a);
    let (b_retention, b_cleanup) = rank(b);
    a_retention
        .cmp(&b_retention)
        .then(a_cleanup.cmp(&b_cleanup))
}

/// Stable sort by [`compare_entries`]
pub fn sort_entries(entries: &mut [&ConfigEntry]) {
    entries.sort_by(|a, b| compare_entries(a, b));
}

/// The category an entry is grouped under
pub fn group_key(entry: &ConfigEntry) -> &str {
    match entry.category.as_deref() {
        Some(category) if !category.is_empty() => category,
        _ => OTHER_GROUP,
    }
}

/// Partition entries by category, groups ordered by first appearance
pub fn group_entries<'a>(entries: &[&'a ConfigEntry]) -> Vec<ConfigGroup<'a>> {
    let mut groups: Vec<ConfigGroup<'a>> = Vec::new();
    for &entry in entries {
        let key = group_key(entry);
        match groups.iter_mut().find(|group| group.name == key) {
            Some(group) => group.entries.push(entry),
            None => groups.push(ConfigGroup {
                name: key.to_string(),
                entries: vec![entry],
            }),
        }
    }
    groups
}

/// Filter, sort and group in one go, the way the screen consumes the list
pub fn build_groups<'a>(entries: &'a [ConfigEntry], filter: &str) -> Vec<ConfigGroup<'a>> {
    let mut visible = filter_entries(entries, filter);
    sort_entries(&mut visible);
    group_entries(&visible)
}
