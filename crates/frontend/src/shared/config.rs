use contracts::enums::{LayoutType, TimeRange};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub search: SearchConfig,
    pub layout: LayoutConfig,
    pub header: HeaderConfig,
    pub picker: PickerConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Quiet period before the header search is broadcast
    pub debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LayoutConfig {
    #[serde(default)]
    pub default: LayoutType,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HeaderConfig {
    #[serde(default)]
    pub time_range: TimeRange,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PickerConfig {
    pub tabs: Vec<PickerTab>,
}

/// Tab of the widget picker; `id` is the category id it targets
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PickerTab {
    pub id: String,
    pub label: String,
}

impl PickerConfig {
    /// Tab to open the picker on: the requested category, else the first tab
    pub fn initial_tab(&self, scope: Option<&str>) -> String {
        match scope {
            Some(category_id) => category_id.to_string(),
            None => self
                .tabs
                .first()
                .map(|tab| tab.id.clone())
                .unwrap_or_default(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[search]
debounce_ms = 300

[layout]
default = "grid"

[header]
time_range = "2d"

[[picker.tabs]]
id = "cspm-executive"
label = "CSPM"

[[picker.tabs]]
id = "cwpp"
label = "CWPP"

[[picker.tabs]]
id = "registry-scan"
label = "Image"

[[picker.tabs]]
id = "ticket"
label = "Ticket"
"#;

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;

    if config.search.debounce_ms == 0 {
        anyhow::bail!("search.debounce_ms must be greater than zero");
    }
    if config.picker.tabs.is_empty() {
        anyhow::bail!("picker.tabs must contain at least one tab");
    }
    let mut seen = HashSet::new();
    for tab in &config.picker.tabs {
        if !seen.insert(tab.id.as_str()) {
            anyhow::bail!("duplicate picker tab '{}'", tab.id);
        }
    }

    log::debug!(
        "config loaded: debounce {}ms, {} picker tabs",
        config.search.debounce_ms,
        config.picker.tabs.len()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.layout.default, LayoutType::Grid);
        assert_eq!(config.header.time_range, TimeRange::Last2Days);
        let ids: Vec<&str> = config.picker.tabs.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["cspm-executive", "cwpp", "registry-scan", "ticket"]);
    }

    #[test]
    fn test_initial_tab() {
        let config = load_config().unwrap();
        assert_eq!(config.picker.initial_tab(None), "cspm-executive");
        assert_eq!(config.picker.initial_tab(Some("ticket")), "ticket");
    }

    #[test]
    fn test_rejects_empty_tabs() {
        let err = parse_config(
            r#"
            [search]
            debounce_ms = 300
            [layout]
            [header]
            [picker]
            tabs = []
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least one tab"));
    }

    #[test]
    fn test_rejects_duplicate_tabs() {
        let err = parse_config(
            r#"
            [search]
            debounce_ms = 150
            [layout]
            default = "list"
            [header]
            [[picker.tabs]]
            id = "cwpp"
            label = "CWPP"
            [[picker.tabs]]
            id = "cwpp"
            label = "Again"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate picker tab 'cwpp'");
    }
}
