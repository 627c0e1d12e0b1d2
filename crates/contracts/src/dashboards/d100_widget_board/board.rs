//! Board mutations as functional updates.
//!
//! Every `with_*` function returns `Some(next)` with a whole new category
//! collection when something changed and `None` for a no-op, so a caller can
//! swap the collection in one step or skip notifying observers. Unknown ids are
//! never an error.

use super::dataset::DashboardData;
use super::model::{Category, Widget};

/// Append `widget` to `category_id` unless it is already placed there
pub fn with_widget_added(
    categories: &[Category],
    category_id: &str,
    widget: &Widget,
) -> Option<Vec<Category>> {
    let target = categories.iter().find(|c| c.id == category_id)?;
    if target.contains(&widget.id) {
        return None;
    }

    Some(
        categories
            .iter()
            .map(|category| {
                if category.id == category_id {
                    let mut widgets = category.widgets.clone();
                    widgets.push(widget.clone());
                    Category {
                        widgets,
                        ..category.clone()
                    }
                } else {
                    category.clone()
                }
            })
            .collect(),
    )
}

pub fn with_widget_removed(
    categories: &[Category],
    category_id: &str,
    widget_id: &str,
) -> Option<Vec<Category>> {
    let target = categories.iter().find(|c| c.id == category_id)?;
    if !target.contains(widget_id) {
        return None;
    }

    Some(
        categories
            .iter()
            .map(|category| {
                if category.id == category_id {
                    Category {
                        widgets: category
                            .widgets
                            .iter()
                            .filter(|w| w.id != widget_id)
                            .cloned()
                            .collect(),
                        ..category.clone()
                    }
                } else {
                    category.clone()
                }
            })
            .collect(),
    )
}

/// Remove the widget if placed, otherwise add it from `catalog`.
///
/// Ids missing from both the category and the catalog are a no-op, which is
/// the case for a custom widget after it has been removed.
pub fn with_widget_toggled(
    categories: &[Category],
    catalog: &[Widget],
    category_id: &str,
    widget_id: &str,
) -> Option<Vec<Category>> {
    let target = categories.iter().find(|c| c.id == category_id)?;
    if target.contains(widget_id) {
        return with_widget_removed(categories, category_id, widget_id);
    }

    let widget = catalog.iter().find(|w| w.id == widget_id)?;
    with_widget_added(categories, category_id, widget)
}

/// False for unknown category ids
pub fn contains_widget(categories: &[Category], category_id: &str, widget_id: &str) -> bool {
    categories
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| c.contains(widget_id))
        .unwrap_or(false)
}

/// Non-reactive owner of a board: categories plus the read-only catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetBoard {
    categories: Vec<Category>,
    available_widgets: Vec<Widget>,
}

impl WidgetBoard {
    pub fn new(data: DashboardData) -> Self {
        Self {
            categories: data.categories,
            available_widgets: data.available_widgets,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn available_widgets(&self) -> &[Widget] {
        &self.available_widgets
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// Returns true when the board changed
    pub fn add_widget(&mut self, category_id: &str, widget: Widget) -> bool {
        self.replace(with_widget_added(&self.categories, category_id, &widget))
    }

    pub fn remove_widget(&mut self, category_id: &str, widget_id: &str) -> bool {
        self.replace(with_widget_removed(&self.categories, category_id, widget_id))
    }

    pub fn toggle_widget_in_category(&mut self, category_id: &str, widget_id: &str) -> bool {
        self.replace(with_widget_toggled(
            &self.categories,
            &self.available_widgets,
            category_id,
            widget_id,
        ))
    }

    pub fn is_widget_in_category(&self, category_id: &str, widget_id: &str) -> bool {
        contains_widget(&self.categories, category_id, widget_id)
    }

    /// Place a new user-authored widget. Input is not validated here.
    ///
    /// Returns the generated id; the widget is not added to the catalog.
    pub fn add_custom_widget(&mut self, category_id: &str, name: &str, text: &str) -> String {
        let widget = Widget::custom(name, text);
        let id = widget.id.clone();
        self.add_widget(category_id, widget);
        id
    }

    fn replace(&mut self, next: Option<Vec<Category>>) -> bool {
        match next {
            Some(categories) => {
                self.categories = categories;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> WidgetBoard {
        let mut cspm = Category::new("cspm-executive", "CSPM Executive Dashboard");
        cspm.widgets.push(Widget::new("w1", "Cloud Accounts", "2 total"));
        let cwpp = Category::new("cwpp", "CWPP Dashboard");

        WidgetBoard::new(DashboardData {
            categories: vec![cspm, cwpp],
            available_widgets: vec![
                Widget::new("w1", "Cloud Accounts", "2 total").with_tag("cspm-executive"),
                Widget::new("w2", "Workload Alerts", "No data").with_tag("cwpp"),
                Widget::new("w3", "Recent Activity", "Latest changes"),
            ],
        })
    }

    #[test]
    fn test_add_then_contains() {
        let mut board = sample_board();
        let widget = Widget::new("w9", "New", "text");
        assert!(board.add_widget("cwpp", widget));
        assert!(board.is_widget_in_category("cwpp", "w9"));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut once = sample_board();
        once.add_widget("cwpp", Widget::new("w9", "New", "text"));

        let mut twice = sample_board();
        twice.add_widget("cwpp", Widget::new("w9", "New", "text"));
        assert!(!twice.add_widget("cwpp", Widget::new("w9", "New", "text")));

        assert_eq!(once.categories(), twice.categories());
        assert_eq!(twice.category("cwpp").unwrap().widget_count(), 1);
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut board = sample_board();
        board.add_widget("cspm-executive", Widget::new("w3", "Recent Activity", "x"));
        let ids: Vec<&str> = board
            .category("cspm-executive")
            .unwrap()
            .widgets
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ids, vec!["w1", "w3"]);
    }

    #[test]
    fn test_same_widget_in_several_categories() {
        let mut board = sample_board();
        board.add_widget("cwpp", Widget::new("w1", "Cloud Accounts", "2 total"));
        assert!(board.is_widget_in_category("cspm-executive", "w1"));
        assert!(board.is_widget_in_category("cwpp", "w1"));

        board.remove_widget("cwpp", "w1");
        assert!(board.is_widget_in_category("cspm-executive", "w1"));
    }

    #[test]
    fn test_remove_restores_previous_state() {
        let mut board = sample_board();
        let before = board.categories().to_vec();
        board.add_widget("cwpp", Widget::new("w9", "New", "text"));
        board.remove_widget("cwpp", "w9");
        assert_eq!(board.categories(), before.as_slice());
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut board = sample_board();
        let before = board.categories().to_vec();

        assert!(!board.remove_widget("nonexistent-category", "w1"));
        assert!(!board.remove_widget("cwpp", "missing"));
        assert!(!board.add_widget("nonexistent-category", Widget::new("w9", "N", "t")));
        assert!(!board.toggle_widget_in_category("nonexistent-category", "w2"));
        assert!(!board.toggle_widget_in_category("cwpp", "not-in-catalog"));

        assert_eq!(board.categories(), before.as_slice());
        assert!(!board.is_widget_in_category("nonexistent-category", "w1"));
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut board = sample_board();
        let before = board.categories().to_vec();

        assert!(board.toggle_widget_in_category("cwpp", "w2"));
        assert!(board.is_widget_in_category("cwpp", "w2"));
        assert!(board.toggle_widget_in_category("cwpp", "w2"));
        assert!(!board.is_widget_in_category("cwpp", "w2"));
        assert_eq!(board.categories(), before.as_slice());

        assert!(board.toggle_widget_in_category("cspm-executive", "w1"));
        assert!(!board.is_widget_in_category("cspm-executive", "w1"));
        assert!(board.toggle_widget_in_category("cspm-executive", "w1"));
        assert!(board.is_widget_in_category("cspm-executive", "w1"));
    }

    #[test]
    fn test_toggle_adds_catalog_copy() {
        let mut board = sample_board();
        board.toggle_widget_in_category("cwpp", "w3");
        let placed = board.category("cwpp").unwrap().widgets.last().unwrap();
        assert_eq!(placed, &board.available_widgets()[2]);
    }

    #[test]
    fn test_custom_widget_placed_but_not_in_catalog() {
        let mut board = sample_board();
        let catalog_before = board.available_widgets().to_vec();

        let id = board.add_custom_widget("cwpp", "Team Notes", "Weekly review");
        let placed = board.category("cwpp").unwrap().widgets.last().unwrap();
        assert_eq!(placed.id, id);
        assert_eq!(placed.name, "Team Notes");
        assert!(placed.is_custom());
        assert_eq!(board.available_widgets(), catalog_before.as_slice());
    }

    #[test]
    fn test_removed_custom_widget_cannot_be_toggled_back() {
        let mut board = sample_board();
        let id = board.add_custom_widget("cwpp", "Team Notes", "Weekly review");

        assert!(board.toggle_widget_in_category("cwpp", &id));
        assert!(!board.is_widget_in_category("cwpp", &id));

        assert!(!board.toggle_widget_in_category("cwpp", &id));
        assert!(!board.is_widget_in_category("cwpp", &id));
    }

    #[test]
    fn test_mutation_leaves_other_categories_untouched() {
        let board = sample_board();
        let next = with_widget_added(board.categories(), "cwpp", &Widget::new("w9", "N", "t"))
            .unwrap();
        assert_eq!(next[0], board.categories()[0]);
        assert_eq!(next[1].widgets.len(), 1);
        assert!(board.categories()[1].widgets.is_empty());
    }
}
