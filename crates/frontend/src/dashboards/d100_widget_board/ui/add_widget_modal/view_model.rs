use crate::dashboards::d100_widget_board::store::DashboardStore;
use contracts::dashboards::d100_widget_board::{picker_entries, CustomWidgetDraft, PickerEntry};
use leptos::prelude::*;

/// ViewModel for the widget picker drawer
#[derive(Clone, Copy)]
pub struct WidgetPickerViewModel {
    /// Category id the toggles apply to
    pub active_tab: RwSignal<String>,
    pub search_query: RwSignal<String>,
    pub custom_name: RwSignal<String>,
    pub custom_text: RwSignal<String>,
    pub show_custom_form: RwSignal<bool>,
}

impl WidgetPickerViewModel {
    pub fn new(initial_tab: String) -> Self {
        Self {
            active_tab: RwSignal::new(initial_tab),
            search_query: RwSignal::new(String::new()),
            custom_name: RwSignal::new(String::new()),
            custom_text: RwSignal::new(String::new()),
            show_custom_form: RwSignal::new(false),
        }
    }

    /// Reset for a fresh opening on `tab`
    pub fn open_on(&self, tab: String) {
        self.active_tab.set(tab);
        self.search_query.set(String::new());
        self.cancel_custom();
    }

    pub fn select_tab(&self, tab: &str) {
        self.active_tab.set(tab.to_string());
    }

    /// Rows to show for the current tab and query (tracked)
    pub fn entries(&self, store: &DashboardStore) -> Vec<PickerEntry> {
        let active = self.active_tab.get();
        let query = self.search_query.get();
        store.with_board(|board| {
            picker_entries(board.available_widgets(), board.categories(), &active, &query)
        })
    }

    pub fn toggle(&self, store: &DashboardStore, widget_id: &str) {
        let active = self.active_tab.get_untracked();
        store.toggle_widget_in_category(&active, widget_id);
    }

    pub fn draft(&self) -> CustomWidgetDraft {
        CustomWidgetDraft::new(self.custom_name.get(), self.custom_text.get())
    }

    pub fn can_submit_custom(&self) -> bool {
        self.draft().is_valid()
    }

    /// Place the custom widget in the active tab; returns its id.
    ///
    /// Blank name or text is rejected here and never reaches the store.
    pub fn submit_custom(&self, store: &DashboardStore) -> Option<String> {
        let draft = CustomWidgetDraft::new(
            self.custom_name.get_untracked(),
            self.custom_text.get_untracked(),
        );
        let Some((name, text)) = draft.validated() else {
            log::warn!("custom widget rejected: name and text are required");
            return None;
        };

        let active = self.active_tab.get_untracked();
        let id = store.add_custom_widget(&active, &name, &text);
        self.cancel_custom();
        Some(id)
    }

    /// Hide the custom form and clear its fields
    pub fn cancel_custom(&self) {
        self.custom_name.set(String::new());
        self.custom_text.set(String::new());
        self.show_custom_form.set(false);
    }
}
