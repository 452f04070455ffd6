use super::i18n::Locale;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub locale: LocaleConfig,
    pub search: SearchConfig,
    pub table: TableConfig,
    pub mock_api: MockApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LocaleConfig {
    pub default: Locale,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    pub default_sort: String,
    pub items_per_page: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    pub items_per_page: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MockApiConfig {
    /// Искусственная задержка «сетевых» запросов к моковым данным.
    pub latency_ms: u32,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[locale]
default = "en"

[search]
default_sort = "recommended"
items_per_page = 12

[table]
items_per_page = 10
page_size_options = [10, 25, 50]

[mock_api]
latency_ms = 400
"#;

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            locale: LocaleConfig { default: Locale::En },
            search: SearchConfig {
                default_sort: "recommended".to_string(),
                items_per_page: 12,
            },
            table: TableConfig {
                items_per_page: 10,
                page_size_options: vec![10, 25, 50],
            },
            mock_api: MockApiConfig { latency_ms: 400 },
        }
    }
}

/// Load configuration
///
/// Uses `override_toml` when given (e.g. text injected into the page),
/// falls back to the embedded default config.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<StorefrontConfig> {
    if let Some(text) = override_toml.filter(|t| !t.trim().is_empty()) {
        log::info!("Loading storefront config from override");
        let config: StorefrontConfig = toml::from_str(text)?;
        validate(&config)?;
        return Ok(config);
    }

    log::info!("Using default embedded configuration");
    let config: StorefrontConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn validate(config: &StorefrontConfig) -> anyhow::Result<()> {
    if config.search.items_per_page == 0 || config.table.items_per_page == 0 {
        anyhow::bail!("items_per_page must be positive");
    }
    if config.table.page_size_options.iter().any(|&n| n == 0) {
        anyhow::bail!("page_size_options must be positive");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_override_config() {
        let text = DEFAULT_CONFIG
            .replace("default = \"en\"", "default = \"ar\"")
            .replace("latency_ms = 400", "latency_ms = 0");
        let config = load_config(Some(&text)).unwrap();
        assert_eq!(config.locale.default, Locale::Ar);
        assert_eq!(config.mock_api.latency_ms, 0);
    }

    #[test]
    fn test_invalid_override_is_error() {
        assert!(load_config(Some("[locale]\ndefault = \"fr\"")).is_err());
        let zero = DEFAULT_CONFIG.replace("items_per_page = 12", "items_per_page = 0");
        assert!(load_config(Some(&zero)).is_err());
    }
}
