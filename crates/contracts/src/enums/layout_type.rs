use serde::{Deserialize, Serialize};

/// Column layout of the dashboard board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    #[default]
    Grid,
    List,
}

impl LayoutType {
    pub fn code(&self) -> &'static str {
        match self {
            LayoutType::Grid => "grid",
            LayoutType::List => "list",
        }
    }

    /// The layout the header toggle switches to
    pub fn toggled(&self) -> Self {
        match self {
            LayoutType::Grid => LayoutType::List,
            LayoutType::List => LayoutType::Grid,
        }
    }

    /// CSS modifier for the widget grid of a category
    pub fn grid_class(&self) -> &'static str {
        match self {
            LayoutType::Grid => "widget-grid widget-grid--columns",
            LayoutType::List => "widget-grid widget-grid--single",
        }
    }
}
