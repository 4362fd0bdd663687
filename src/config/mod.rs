pub mod view;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
use crate::domain::model::{ColorStandard, OutOfRangePolicy};
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, Validate};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fiber-splice")]
#[command(about = "Render cable fiber colors and splice coverage from a local workspace")]
pub struct CliConfig {
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    #[arg(long, help = "Show a single cable, matched by id or name")]
    pub cable: Option<String>,

    #[arg(long, help = "Optional TOML view configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Write a session bundle (zip) under the given file name")]
    pub export: Option<String>,

    #[arg(long, default_value = "ignore", help = "Splice ranges past cable capacity: ignore, clamp or reject")]
    pub range_policy: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn cable_filter(&self) -> Option<&str> {
        self.cable.as_deref()
    }

    fn color_standard(&self) -> ColorStandard {
        ColorStandard::default()
    }

    fn range_policy(&self) -> OutOfRangePolicy {
        self.range_policy.parse().unwrap_or_default()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("data_dir", &self.data_dir)?;
        self.range_policy.parse::<OutOfRangePolicy>()?;
        if let Some(cable) = &self.cable {
            validate_non_empty_string("cable", cable)?;
        }
        Ok(())
    }
}
