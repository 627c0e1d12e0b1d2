use super::error::DatasetError;
use super::model::{Category, Widget};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Seed document compiled into the binary
const BUNDLED_DATASET: &str = include_str!("../../../data/dashboard_data.json");

/// Initial board state: the categories and the reference catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub categories: Vec<Category>,
    #[serde(rename = "availableWidgets", default)]
    pub available_widgets: Vec<Widget>,
}

impl DashboardData {
    /// Parse and validate the dataset shipped with the application
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Parse and validate a dataset document
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let data: DashboardData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Check the board invariants on seed data
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(DatasetError::DuplicateCategory(category.id.clone()));
            }

            let mut placed = HashSet::new();
            for widget in &category.widgets {
                if !widget.is_complete() {
                    return Err(DatasetError::IncompleteWidget {
                        widget_id: widget.id.clone(),
                    });
                }
                if !placed.insert(widget.id.as_str()) {
                    return Err(DatasetError::DuplicatePlacement {
                        category_id: category.id.clone(),
                        widget_id: widget.id.clone(),
                    });
                }
            }
        }

        let mut catalog_ids = HashSet::new();
        for widget in &self.available_widgets {
            if !widget.is_complete() {
                return Err(DatasetError::IncompleteWidget {
                    widget_id: widget.id.clone(),
                });
            }
            if !catalog_ids.insert(widget.id.as_str()) {
                return Err(DatasetError::DuplicateCatalogWidget(widget.id.clone()));
            }
        }

        Ok(())
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::WidgetType;

    #[test]
    fn test_bundled_dataset_loads() {
        let data = DashboardData::bundled().unwrap();
        let ids: Vec<&str> = data.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["cspm-executive", "cwpp", "registry-scan", "ticket"]);
        assert!(!data.available_widgets.is_empty());

        let cspm = data.category("cspm-executive").unwrap();
        assert_eq!(cspm.widgets[0].widget_type, WidgetType::Donut);
        assert!(data.category("ticket").unwrap().widgets.is_empty());
    }

    #[test]
    fn test_untagged_catalog_widgets_present() {
        let data = DashboardData::bundled().unwrap();
        assert!(data.available_widgets.iter().any(|w| w.category.is_none()));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let json = r#"{
            "categories": [
                {"id": "a", "name": "A", "widgets": []},
                {"id": "a", "name": "A again", "widgets": []}
            ],
            "availableWidgets": []
        }"#;
        let err = DashboardData::from_json(json).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateCategory(id) if id == "a"));
    }

    #[test]
    fn test_duplicate_placement_rejected() {
        let json = r#"{
            "categories": [
                {"id": "a", "name": "A", "widgets": [
                    {"id": "1", "name": "One", "text": "x"},
                    {"id": "1", "name": "One", "text": "x"}
                ]}
            ],
            "availableWidgets": []
        }"#;
        let err = DashboardData::from_json(json).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicatePlacement { .. }));
    }

    #[test]
    fn test_incomplete_widget_rejected() {
        let json = r#"{
            "categories": [],
            "availableWidgets": [{"id": "w1", "name": "", "text": "x"}]
        }"#;
        let err = DashboardData::from_json(json).unwrap_err();
        assert_eq!(err.to_string(), "widget 'w1' has an empty id, name or text");
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            DashboardData::from_json("{").unwrap_err(),
            DatasetError::Parse(_)
        ));
    }
}
