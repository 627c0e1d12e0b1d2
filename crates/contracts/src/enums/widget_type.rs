use serde::{Deserialize, Serialize};

/// Visual kind of a widget card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetType {
    Donut,
    Bar,
    #[default]
    Default,
}

impl WidgetType {
    /// Code used in the dataset JSON and as a CSS modifier
    pub fn code(&self) -> &'static str {
        match self {
            WidgetType::Donut => "donut",
            WidgetType::Bar => "bar",
            WidgetType::Default => "default",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            WidgetType::Donut => "Donut chart",
            WidgetType::Bar => "Bar chart",
            WidgetType::Default => "Text",
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_matches_serde_name() {
        for kind in [WidgetType::Donut, WidgetType::Bar, WidgetType::Default] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.code()));
        }
    }

    #[test]
    fn test_missing_type_defaults() {
        assert_eq!(WidgetType::default(), WidgetType::Default);
        let parsed: WidgetType = serde_json::from_str("\"bar\"").unwrap();
        assert_eq!(parsed, WidgetType::Bar);
    }
}
