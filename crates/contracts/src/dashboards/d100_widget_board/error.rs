use thiserror::Error;

/// Problems found while loading the seed dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate category id '{0}'")]
    DuplicateCategory(String),

    #[error("duplicate catalog widget id '{0}'")]
    DuplicateCatalogWidget(String),

    #[error("widget '{widget_id}' appears twice in category '{category_id}'")]
    DuplicatePlacement {
        category_id: String,
        widget_id: String,
    },

    #[error("widget '{widget_id}' has an empty id, name or text")]
    IncompleteWidget { widget_id: String },
}
