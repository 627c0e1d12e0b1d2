use crate::enums::WidgetType;
use crate::shared::search::Searchable;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix of ids generated for user-authored widgets
pub const CUSTOM_WIDGET_PREFIX: &str = "custom-";

/// A single dashboard widget, either from the catalog or user-authored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    /// Unique within the catalog
    pub id: String,
    pub name: String,
    /// Body text shown on the card
    pub text: String,
    #[serde(rename = "type", default)]
    pub widget_type: WidgetType,
    /// Picker tab this widget is suggested for; `None` shows it under every tab
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Widget {
    pub fn new(id: impl Into<String>, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            text: text.into(),
            widget_type: WidgetType::Default,
            category: None,
        }
    }

    pub fn with_tag(mut self, category_id: impl Into<String>) -> Self {
        self.category = Some(category_id.into());
        self
    }

    /// Build a user-authored widget with a freshly generated id
    pub fn custom(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(new_custom_widget_id(), name, text)
    }

    pub fn is_custom(&self) -> bool {
        self.id.starts_with(CUSTOM_WIDGET_PREFIX)
    }

    /// id, name and text are all non-empty
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && !self.text.is_empty()
    }

    /// Visible in the picker tab `category_id` when no search is active
    pub fn is_listed_under(&self, category_id: &str) -> bool {
        match &self.category {
            None => true,
            Some(tag) => tag == category_id,
        }
    }
}

impl Searchable for Widget {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.text.as_str()]
    }
}

/// Timestamp-based id; the uuid suffix keeps ids unique within one millisecond.
pub fn new_custom_widget_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}{}-{}", CUSTOM_WIDGET_PREFIX, millis, &suffix[..8])
}

/// A named group of widget placements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Insertion order, no duplicate ids
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            widgets: Vec::new(),
        }
    }

    pub fn contains(&self, widget_id: &str) -> bool {
        self.widgets.iter().any(|w| w.id == widget_id)
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// "1 widget", "3 widgets"
    pub fn count_label(&self) -> String {
        let count = self.widget_count();
        format!("{} widget{}", count, if count == 1 { "" } else { "s" })
    }
}

/// Input of the "Create Custom Widget" form before submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomWidgetDraft {
    pub name: String,
    pub text: String,
}

impl CustomWidgetDraft {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Trimmed `(name, text)` if both are non-empty after trimming
    pub fn validated(&self) -> Option<(String, String)> {
        let name = self.name.trim();
        let text = self.text.trim();
        if name.is_empty() || text.is_empty() {
            return None;
        }
        Some((name.to_string(), text.to_string()))
    }

    pub fn is_valid(&self) -> bool {
        self.validated().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_json_defaults() {
        let widget: Widget =
            serde_json::from_str(r#"{"id":"w1","name":"Cloud Accounts","text":"2 total"}"#)
                .unwrap();
        assert_eq!(widget.widget_type, WidgetType::Default);
        assert_eq!(widget.category, None);

        let json = serde_json::to_value(&Widget {
            widget_type: WidgetType::Donut,
            ..widget.clone()
        })
        .unwrap();
        assert_eq!(json["type"], "donut");
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_custom_ids_are_unique() {
        let a = Widget::custom("A", "a");
        let b = Widget::custom("A", "a");
        assert!(a.is_custom());
        assert!(a.id.starts_with(CUSTOM_WIDGET_PREFIX));
        assert_ne!(a.id, b.id);
        assert_eq!(a.widget_type, WidgetType::Default);
    }

    #[test]
    fn test_listed_under_tag() {
        let untagged = Widget::new("w2", "B", "t");
        let tagged = Widget::new("w1", "A", "t").with_tag("cspm-executive");
        assert!(untagged.is_listed_under("cwpp"));
        assert!(tagged.is_listed_under("cspm-executive"));
        assert!(!tagged.is_listed_under("cwpp"));
    }

    #[test]
    fn test_count_label() {
        let mut category = Category::new("c", "C");
        assert_eq!(category.count_label(), "0 widgets");
        category.widgets.push(Widget::new("w", "W", "t"));
        assert_eq!(category.count_label(), "1 widget");
    }

    #[test]
    fn test_draft_validation_trims() {
        assert_eq!(
            CustomWidgetDraft::new("  Name ", " body\n").validated(),
            Some(("Name".to_string(), "body".to_string()))
        );
        assert!(!CustomWidgetDraft::new("   ", "body").is_valid());
        assert!(!CustomWidgetDraft::new("Name", "").is_valid());
    }
}
