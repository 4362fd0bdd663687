pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::view::ViewConfig;

pub use crate::adapters::store::LocalStore;
pub use crate::core::view::{build_cable_color_model, CableColorModel, ColorModelEngine};
pub use crate::core::{
    colors::resolve_color,
    groups::partition_groups,
    highlight::{resolve_highlighted_positions, resolve_highlighted_positions_bounded},
};
pub use crate::domain::model::{Cable, CableType, ColorStandard, OutOfRangePolicy, Splice, Workspace};
pub use crate::utils::error::{Result, SpliceError};
