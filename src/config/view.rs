use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::model::{ColorStandard, FiberColor, OutOfRangePolicy};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SpliceError};
use crate::utils::validation::{validate_non_empty_sequence, Validate};

/// View configuration loaded from a TOML file. Everything is optional
/// except the view name; omitted sections fall back to the industry
/// defaults, so a file can override just the ring colors or just the
/// range policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    pub view: ViewMeta,
    pub colors: Option<ColorsConfig>,
    pub splices: Option<SplicesConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorsConfig {
    pub fiber_sequence: Option<Vec<FiberColor>>,
    pub tip_sequence: Option<Vec<FiberColor>>,
    pub ring_sequence: Option<Vec<FiberColor>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplicesConfig {
    pub range_policy: Option<OutOfRangePolicy>,
}

impl ViewConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SpliceError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SpliceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` references with environment values; unknown
    /// variables are left in place so parsing reports them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// The effective color standard: defaults with any configured
    /// sequences swapped in.
    pub fn color_standard(&self) -> ColorStandard {
        let mut standard = ColorStandard::default();
        if let Some(colors) = &self.colors {
            if let Some(fiber) = &colors.fiber_sequence {
                standard.fiber_sequence = fiber.clone();
            }
            if let Some(tips) = &colors.tip_sequence {
                standard.tip_sequence = tips.clone();
            }
            if let Some(rings) = &colors.ring_sequence {
                standard.ring_sequence = rings.clone();
            }
        }
        standard
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("view.name", &self.view.name)?;
        if let Some(colors) = &self.colors {
            if let Some(fiber) = &colors.fiber_sequence {
                validate_non_empty_sequence("colors.fiber_sequence", fiber.len())?;
            }
            if let Some(tips) = &colors.tip_sequence {
                validate_non_empty_sequence("colors.tip_sequence", tips.len())?;
            }
            if let Some(rings) = &colors.ring_sequence {
                validate_non_empty_sequence("colors.ring_sequence", rings.len())?;
            }
        }
        Ok(())
    }

    pub fn range_policy(&self) -> OutOfRangePolicy {
        self.splices
            .as_ref()
            .and_then(|s| s.range_policy)
            .unwrap_or_default()
    }
}

impl ConfigProvider for ViewConfig {
    fn data_dir(&self) -> &str {
        "./data"
    }

    fn cable_filter(&self) -> Option<&str> {
        None
    }

    fn color_standard(&self) -> ColorStandard {
        self.color_standard()
    }

    fn range_policy(&self) -> OutOfRangePolicy {
        self.range_policy()
    }
}

impl Validate for ViewConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_view_config() {
        let toml_content = r#"
[view]
name = "field-layout"
description = "Colors for the field crew"

[splices]
range_policy = "clamp"
"#;

        let config = ViewConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.view.name, "field-layout");
        assert_eq!(config.range_policy(), OutOfRangePolicy::Clamp);
        assert_eq!(config.color_standard(), ColorStandard::default());
    }

    #[test]
    fn test_color_overrides_apply() {
        let toml_content = r#"
[view]
name = "two-color"

[colors]
fiber_sequence = ["red", "green"]
"#;

        let config = ViewConfig::from_toml_str(toml_content).unwrap();
        let standard = config.color_standard();

        assert_eq!(
            standard.fiber_sequence,
            vec![FiberColor::Red, FiberColor::Green]
        );
        assert_eq!(standard.ring_sequence, ColorStandard::default().ring_sequence);
    }

    #[test]
    fn test_unknown_color_name_fails_to_parse() {
        let toml_content = r#"
[view]
name = "bad"

[colors]
fiber_sequence = ["chartreuse"]
"#;

        assert!(ViewConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_empty_sequence_fails_validation() {
        let toml_content = r#"
[view]
name = "empty"

[colors]
fiber_sequence = []
"#;

        let config = ViewConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_VIEW_NAME", "from-env");

        let toml_content = r#"
[view]
name = "${TEST_VIEW_NAME}"
"#;

        let config = ViewConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.view.name, "from-env");

        std::env::remove_var("TEST_VIEW_NAME");
    }

    #[test]
    fn test_unknown_range_policy_fails_to_parse() {
        let toml_content = r#"
[view]
name = "bad-policy"

[splices]
range_policy = "explode"
"#;

        assert!(ViewConfig::from_toml_str(toml_content).is_err());
    }
}
