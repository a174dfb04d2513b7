use super::error::TabsError;
use serde::{Deserialize, Serialize};

/// Attribute holding per-container overrides as JSON.
pub const CONFIG_ATTRIBUTE: &str = "data-tabs-config";

/// Marker set on a container once it has been bound.
pub const INITIALIZED_ATTRIBUTE: &str = "data-tabs-initialized";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
{
    "selectors": {
        "container": ".tabs-container",
        "menu": ".tabs-menu",
        "panel": ".tab-content",
        "title_attr": "title",
        "current_class": "current"
    },
    "fade_ms": 400
}
"#;

/// Соглашения разметки: как найти группу, меню и панели
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsSelectors {
    pub container: String,
    pub menu: String,
    pub panel: String,
    pub title_attr: String,
    pub current_class: String,
}

impl Default for TabsSelectors {
    fn default() -> Self {
        Self {
            container: ".tabs-container".to_string(),
            menu: ".tabs-menu".to_string(),
            panel: ".tab-content".to_string(),
            title_attr: "title".to_string(),
            current_class: "current".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub selectors: TabsSelectors,
    /// Fade-in duration of the shown panel; 0 switches instantly.
    pub fade_ms: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            selectors: TabsSelectors::default(),
            fade_ms: 400,
        }
    }
}

/// Настройки, которые можно переопределить для отдельного контейнера
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetOverrides {
    pub fade_ms: Option<u32>,
    pub current_class: Option<String>,
}

impl WidgetConfig {
    /// Applies the JSON overrides found on a container.
    pub fn with_overrides(&self, raw: &str) -> Result<WidgetConfig, TabsError> {
        let overrides: WidgetOverrides = serde_json::from_str(raw)?;
        let mut config = self.clone();
        if let Some(fade_ms) = overrides.fade_ms {
            config.fade_ms = fade_ms;
        }
        if let Some(class) = overrides.current_class {
            config.selectors.current_class = class;
        }
        config.validate()?;
        Ok(config)
    }

    /// `current_class` goes into `classList.add`, which rejects empty
    /// tokens and tokens with whitespace.
    pub fn validate(&self) -> Result<(), TabsError> {
        let class = &self.selectors.current_class;
        if class.is_empty() || class.chars().any(char::is_whitespace) {
            return Err(TabsError::InvalidConfig(format!(
                "current_class '{}' must be a single non-empty class name",
                class
            )));
        }
        Ok(())
    }
}

/// Load widget configuration
///
/// Uses the supplied JSON when present, otherwise the embedded default.
/// Fields missing from the JSON keep their default values.
pub fn load_config(json: Option<&str>) -> Result<WidgetConfig, TabsError> {
    let source = json.unwrap_or(DEFAULT_CONFIG);
    let config: WidgetConfig = serde_json::from_str(source)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_matches_default_impl() {
        assert_eq!(load_config(None).unwrap(), WidgetConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = load_config(Some(r#"{"selectors": {"panel": ".pane"}}"#)).unwrap();
        assert_eq!(config.selectors.panel, ".pane");
        assert_eq!(config.selectors.menu, ".tabs-menu");
        assert_eq!(config.fade_ms, 400);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            load_config(Some("{not json")),
            Err(TabsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let base = WidgetConfig::default();
        let config = base
            .with_overrides(r#"{"fade_ms": 0, "current_class": "is-active"}"#)
            .unwrap();
        assert_eq!(config.fade_ms, 0);
        assert_eq!(config.selectors.current_class, "is-active");
        assert_eq!(config.selectors.container, base.selectors.container);
    }

    #[test]
    fn test_overrides_reject_unknown_and_empty() {
        let base = WidgetConfig::default();
        assert!(base.with_overrides(r#"{"panel": ".x"}"#).is_err());
        assert!(base.with_overrides(r#"{"current_class": "  "}"#).is_err());
        assert!(base.with_overrides(r#"{"current_class": ""}"#).is_err());
    }

    #[test]
    fn test_overrides_reject_class_with_whitespace() {
        let base = WidgetConfig::default();
        assert!(matches!(
            base.with_overrides(r#"{"current_class": "is active"}"#),
            Err(TabsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_config_validates_current_class() {
        assert!(matches!(
            load_config(Some(r#"{"selectors": {"current_class": ""}}"#)),
            Err(TabsError::InvalidConfig(_))
        ));
        assert!(matches!(
            load_config(Some(r#"{"selectors": {"current_class": "is\tactive"}}"#)),
            Err(TabsError::InvalidConfig(_))
        ));
        let config = load_config(Some(r#"{"selectors": {"current_class": "is-active"}}"#)).unwrap();
        assert_eq!(config.selectors.current_class, "is-active");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(WidgetConfig::default().validate(), Ok(()));
    }
}
