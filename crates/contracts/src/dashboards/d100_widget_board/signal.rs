use crate::enums::LayoutType;
use serde::{Deserialize, Serialize};

/// Signals exchanged between the header, the category sections and the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DashboardSignal {
    /// Inline "Add Widget" card of a category
    OpenWidgetPickerForCategory { category_id: String },
    /// Header "Add Widget" button; picker starts on the first tab
    OpenWidgetPickerGlobal,
    LayoutChanged { layout: LayoutType },
    /// Debounced header search
    SearchChanged { query: String },
}

/// Each concern has at most one listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalConcern {
    Picker,
    Layout,
    Search,
}

impl DashboardSignal {
    /// Stable name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            DashboardSignal::OpenWidgetPickerForCategory { .. } => {
                "open-widget-picker-for-category"
            }
            DashboardSignal::OpenWidgetPickerGlobal => "open-widget-picker-global",
            DashboardSignal::LayoutChanged { .. } => "layout-changed",
            DashboardSignal::SearchChanged { .. } => "search-changed",
        }
    }

    pub fn concern(&self) -> SignalConcern {
        match self {
            DashboardSignal::OpenWidgetPickerForCategory { .. }
            | DashboardSignal::OpenWidgetPickerGlobal => SignalConcern::Picker,
            DashboardSignal::LayoutChanged { .. } => SignalConcern::Layout,
            DashboardSignal::SearchChanged { .. } => SignalConcern::Search,
        }
    }

    /// Category the picker should open on; `None` means the first tab
    pub fn picker_scope(&self) -> Option<&str> {
        match self {
            DashboardSignal::OpenWidgetPickerForCategory { category_id } => Some(category_id.as_str()),
            _ => None,
        }
    }
}
