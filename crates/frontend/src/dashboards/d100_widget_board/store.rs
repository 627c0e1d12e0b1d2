use contracts::dashboards::d100_widget_board::{Category, DashboardData, Widget, WidgetBoard};
use leptos::prelude::*;

/// Single owner of the board state, shared through context.
///
/// Every mutation is one `maybe_update` on the wrapped [`WidgetBoard`], so
/// readers see either the old or the new categories and no-ops notify nobody.
#[derive(Clone, Copy)]
pub struct DashboardStore {
    board: RwSignal<WidgetBoard>,
}

impl DashboardStore {
    pub fn new(data: DashboardData) -> Self {
        Self {
            board: RwSignal::new(WidgetBoard::new(data)),
        }
    }

    /// Tracked read of the whole board
    pub fn with_board<U>(&self, f: impl FnOnce(&WidgetBoard) -> U) -> U {
        self.board.with(|board| f(board))
    }

    /// Tracked read of the categories
    pub fn with_categories<U>(&self, f: impl FnOnce(&[Category]) -> U) -> U {
        self.board.with(|board| f(board.categories()))
    }

    pub fn add_widget(&self, category_id: &str, widget: Widget) {
        let widget_id = widget.id.clone();
        self.board.maybe_update(|board| {
            let changed = board.add_widget(category_id, widget);
            if changed {
                log::debug!("widget '{}' added to '{}'", widget_id, category_id);
            } else {
                log::debug!(
                    "add_widget no-op: '{}' already in '{}' or category unknown",
                    widget_id,
                    category_id
                );
            }
            changed
        });
    }

    pub fn remove_widget(&self, category_id: &str, widget_id: &str) {
        self.board.maybe_update(|board| {
            let changed = board.remove_widget(category_id, widget_id);
            if changed {
                log::debug!("widget '{}' removed from '{}'", widget_id, category_id);
            }
            changed
        });
    }

    pub fn toggle_widget_in_category(&self, category_id: &str, widget_id: &str) {
        self.board.maybe_update(|board| {
            let changed = board.toggle_widget_in_category(category_id, widget_id);
            if !changed {
                log::debug!(
                    "toggle no-op: '{}' not placed in '{}' and not in catalog",
                    widget_id,
                    category_id
                );
            }
            changed
        });
    }

    /// Tracked read; false for unknown category ids
    pub fn is_widget_in_category(&self, category_id: &str, widget_id: &str) -> bool {
        self.board
            .with(|board| board.is_widget_in_category(category_id, widget_id))
    }

    /// Place a new widget built from already validated input; returns its id
    pub fn add_custom_widget(&self, category_id: &str, name: &str, text: &str) -> String {
        let mut id = String::new();
        self.board.maybe_update(|board| {
            id = board.add_custom_widget(category_id, name, text);
            // Ids are fresh, so the widget is present only if it was placed
            board.is_widget_in_category(category_id, &id)
        });
        log::debug!("custom widget '{}' created for '{}'", id, category_id);
        id
    }
}

/// Create the store and provide it to the component tree
pub fn provide_dashboard_store(data: DashboardData) -> DashboardStore {
    let store = DashboardStore::new(data);
    provide_context(store);
    store
}

/// Store from context. Panics outside `provide_dashboard_store`: that is a
/// wiring bug, not a data condition.
pub fn use_dashboard() -> DashboardStore {
    use_context::<DashboardStore>().expect("DashboardStore not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> DashboardData {
        let mut cspm = Category::new("cspm-executive", "CSPM Executive Dashboard");
        cspm.widgets
            .push(Widget::new("w1", "Cloud Accounts", "2 total").with_tag("cspm-executive"));
        DashboardData {
            categories: vec![cspm, Category::new("cwpp", "CWPP Dashboard")],
            available_widgets: vec![
                Widget::new("w1", "Cloud Accounts", "2 total").with_tag("cspm-executive"),
                Widget::new("w2", "Workload Alerts", "No data").with_tag("cwpp"),
            ],
        }
    }

    #[test]
    fn test_store_round_trip_through_context() {
        let owner = Owner::new();
        owner.with(|| {
            provide_dashboard_store(sample_data());
            let store = use_dashboard();

            store.add_widget("cwpp", Widget::new("w9", "Notes", "text"));
            assert!(store.is_widget_in_category("cwpp", "w9"));

            store.remove_widget("cwpp", "w9");
            assert!(!store.is_widget_in_category("cwpp", "w9"));
        });
    }

    #[test]
    fn test_toggle_uses_catalog() {
        let owner = Owner::new();
        owner.with(|| {
            let store = DashboardStore::new(sample_data());
            store.toggle_widget_in_category("cwpp", "w2");
            assert!(store.is_widget_in_category("cwpp", "w2"));
            store.toggle_widget_in_category("cwpp", "w2");
            assert!(!store.is_widget_in_category("cwpp", "w2"));
        });
    }

    #[test]
    fn test_unknown_category_leaves_state_unchanged() {
        let owner = Owner::new();
        owner.with(|| {
            let store = DashboardStore::new(sample_data());
            let before = store.with_categories(|c| c.to_vec());
            store.remove_widget("nonexistent-category", "w1");
            store.toggle_widget_in_category("nonexistent-category", "w2");
            assert_eq!(store.with_categories(|c| c.to_vec()), before);
        });
    }

    #[test]
    fn test_custom_widget_stays_out_of_catalog() {
        let owner = Owner::new();
        owner.with(|| {
            let store = DashboardStore::new(sample_data());
            let id = store.add_custom_widget("cwpp", "Team Notes", "Weekly review");
            assert!(store.is_widget_in_category("cwpp", &id));
            assert_eq!(store.with_board(|b| b.available_widgets().len()), 2);

            store.toggle_widget_in_category("cwpp", &id);
            store.toggle_widget_in_category("cwpp", &id);
            assert!(!store.is_widget_in_category("cwpp", &id));
        });
    }

    #[test]
    fn test_add_twice_places_once() {
        let owner = Owner::new();
        owner.with(|| {
            let store = DashboardStore::new(sample_data());
            store.add_widget("cwpp", Widget::new("w9", "Notes", "text"));
            store.add_widget("cwpp", Widget::new("w9", "Notes", "text"));
            let placed = store.with_board(|b| b.category("cwpp").map(|c| c.widgets.len()));
            assert_eq!(placed, Some(1));
        });
    }

    #[test]
    fn test_independent_instances() {
        let owner = Owner::new();
        owner.with(|| {
            let a = DashboardStore::new(sample_data());
            let b = DashboardStore::new(sample_data());
            a.add_widget("cwpp", Widget::new("w9", "Notes", "text"));
            assert!(!b.is_widget_in_category("cwpp", "w9"));
        });
    }

    #[test]
    #[should_panic(expected = "DashboardStore not provided in context")]
    fn test_missing_context_panics() {
        let owner = Owner::new();
        owner.with(|| {
            use_dashboard();
        });
    }
}
