//! Derived, read-only views over the board used by the picker and the dashboard.

use super::board::contains_widget;
use super::model::{Category, Widget};
use crate::shared::search::{normalize_query, Searchable};

/// Catalog widgets to list in the picker for `active_category`.
///
/// A blank query lists untagged widgets plus those tagged for the active tab.
/// A non-blank query searches name and text across the whole catalog and
/// ignores tags. The query is matched as typed, surrounding spaces included.
/// Catalog order is kept.
pub fn filter_catalog<'a>(
    catalog: &'a [Widget],
    active_category: &str,
    query: &str,
) -> Vec<&'a Widget> {
    if query.trim().is_empty() {
        return catalog
            .iter()
            .filter(|w| w.is_listed_under(active_category))
            .collect();
    }

    let needle = normalize_query(query);
    catalog
        .iter()
        .filter(|w| w.matches_normalized(&needle))
        .collect()
}

/// Board view for a dashboard search.
///
/// The query is used as typed, so only a truly empty string disables filtering.
/// Categories without a matching widget are dropped.
pub fn search_categories(categories: &[Category], query: &str) -> Vec<Category> {
    if query.is_empty() {
        return categories.to_vec();
    }

    let needle = normalize_query(query);
    categories
        .iter()
        .filter_map(|category| {
            let widgets: Vec<Widget> = category
                .widgets
                .iter()
                .filter(|w| w.matches_normalized(&needle))
                .cloned()
                .collect();
            if widgets.is_empty() {
                None
            } else {
                Some(Category {
                    widgets,
                    ..category.clone()
                })
            }
        })
        .collect()
}

/// Total number of widget placements, used for the "N results found" counter
pub fn count_widgets(categories: &[Category]) -> usize {
    categories.iter().map(|c| c.widgets.len()).sum()
}

/// One row of the picker list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub widget: Widget,
    /// Widget is currently placed in the active category
    pub selected: bool,
}

/// Picker rows with their membership state in `active_category`
pub fn picker_entries(
    catalog: &[Widget],
    categories: &[Category],
    active_category: &str,
    query: &str,
) -> Vec<PickerEntry> {
    filter_catalog(catalog, active_category, query)
        .into_iter()
        .map(|widget| PickerEntry {
            selected: contains_widget(categories, active_category, &widget.id),
            widget: widget.clone(),
        })
        .collect()
}
