use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::SpliceError;

/// A single fiber or copper-pair slot, numbered from 1 within its cable.
pub type Position = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CableType {
    Fiber,
    Copper,
}

impl fmt::Display for CableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CableType::Fiber => write!(f, "fiber"),
            CableType::Copper => write!(f, "copper"),
        }
    }
}

/// The twelve industry color names. Copper tip/ring colors draw from the
/// same namespace, so a single enum covers both cable types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FiberColor {
    Blue,
    Orange,
    Green,
    Brown,
    Slate,
    White,
    Red,
    Black,
    Yellow,
    Violet,
    Pink,
    Aqua,
}

impl fmt::Display for FiberColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FiberColor::Blue => "blue",
            FiberColor::Orange => "orange",
            FiberColor::Green => "green",
            FiberColor::Brown => "brown",
            FiberColor::Slate => "slate",
            FiberColor::White => "white",
            FiberColor::Red => "red",
            FiberColor::Black => "black",
            FiberColor::Yellow => "yellow",
            FiberColor::Violet => "violet",
            FiberColor::Pink => "pink",
            FiberColor::Aqua => "aqua",
        };
        write!(f, "{}", name)
    }
}

/// Tip and ring conductor colors of one copper pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub tip: FiberColor,
    pub ring: FiberColor,
}

impl fmt::Display for ColorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.tip, self.ring)
    }
}

/// Resolved color for one position: a single color on fiber cables, a
/// tip/ring pair on copper cables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionColor {
    Fiber(FiberColor),
    Pair(ColorPair),
}

impl fmt::Display for PositionColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionColor::Fiber(color) => write!(f, "{}", color),
            PositionColor::Pair(pair) => write!(f, "{}", pair),
        }
    }
}

/// Color sequences applied to positions. Injected into the engine so an
/// alternate standard can be swapped in from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStandard {
    pub fiber_sequence: Vec<FiberColor>,
    pub tip_sequence: Vec<FiberColor>,
    pub ring_sequence: Vec<FiberColor>,
}

impl Default for ColorStandard {
    /// TIA-598 fiber sequence and the 25-pair copper convention
    /// (tip advances every five pairs, ring cycles within them).
    fn default() -> Self {
        use FiberColor::*;
        Self {
            fiber_sequence: vec![
                Blue, Orange, Green, Brown, Slate, White, Red, Black, Yellow, Violet, Pink, Aqua,
            ],
            tip_sequence: vec![White, Red, Black, Yellow, Violet],
            ring_sequence: vec![Blue, Orange, Green, Brown, Slate],
        }
    }
}

impl ColorStandard {
    /// Pair count after which the copper sequence repeats (25 for the
    /// standard tables).
    pub fn copper_period(&self) -> usize {
        self.tip_sequence.len() * self.ring_sequence.len()
    }
}

/// How splice ranges reaching past a cable's declared position count are
/// treated during highlight resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Pass positions through untouched; nonexistent positions are inert.
    #[default]
    Ignore,
    /// Truncate ranges to `[1, fiber_count]`.
    Clamp,
    /// Fail with a position error naming the bound.
    Reject,
}

impl FromStr for OutOfRangePolicy {
    type Err = SpliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(OutOfRangePolicy::Ignore),
            "clamp" => Ok(OutOfRangePolicy::Clamp),
            "reject" => Ok(OutOfRangePolicy::Reject),
            other => Err(SpliceError::ConfigError {
                message: format!(
                    "Unknown range policy: {}. Valid policies: ignore, clamp, reject",
                    other
                ),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cable {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub cable_type: CableType,
    /// Total position count; reused as the pair count on copper cables.
    pub fiber_count: u32,
    /// Group size; reused as the binder size on copper cables.
    pub ribbon_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Splice {
    pub id: String,
    pub source_cable_id: String,
    pub destination_cable_id: String,
    pub source_start_fiber: u32,
    pub source_end_fiber: u32,
    pub destination_start_fiber: u32,
    pub destination_end_fiber: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pon_start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pon_end: Option<u32>,
}

impl Splice {
    pub fn references(&self, cable_id: &str) -> bool {
        self.source_cable_id == cable_id || self.destination_cable_id == cable_id
    }

    /// Range label for the side of this splice facing `cable_id`, e.g.
    /// `3-5`. The source side wins on a self-splice.
    pub fn range_label(&self, cable_id: &str) -> Option<String> {
        if self.source_cable_id == cable_id {
            Some(format!("{}-{}", self.source_start_fiber, self.source_end_fiber))
        } else if self.destination_cable_id == cable_id {
            Some(format!(
                "{}-{}",
                self.destination_start_fiber, self.destination_end_fiber
            ))
        } else {
            None
        }
    }

    /// PON label, e.g. `pon,1-32`, when both endpoints are recorded.
    pub fn pon_label(&self) -> Option<String> {
        match (self.pon_start, self.pon_end) {
            (Some(start), Some(end)) => Some(format!("pon,{}-{}", start, end)),
            _ => None,
        }
    }
}

/// A circuit assignment riding on a cable. Carried in the workspace
/// document for the surrounding application; the color engine does not
/// consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    pub id: String,
    pub cable_id: String,
    pub circuit_id: String,
    pub position: u32,
    pub fiber_start: u32,
    pub fiber_end: u32,
    pub is_spliced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_cable_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_fiber_start: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_fiber_end: Option<u32>,
}

/// The persisted document: everything the viewer works from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub cables: Vec<Cable>,
    pub splices: Vec<Splice>,
    #[serde(default)]
    pub circuits: Vec<Circuit>,
}

impl Workspace {
    pub fn cable(&self, id: &str) -> crate::utils::error::Result<&Cable> {
        self.cables
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| SpliceError::UnknownCable { id: id.to_string() })
    }

    /// Lookup by id or display name, for CLI filters.
    pub fn find_cable(&self, key: &str) -> Option<&Cable> {
        self.cables.iter().find(|c| c.id == key || c.name == key)
    }
}

/// A named snapshot of the whole workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Save {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub data: Workspace,
}

impl Save {
    pub fn new(name: &str, data: Workspace) -> Self {
        let created_at = Utc::now();
        Self {
            id: format!("{}-{}", name, created_at.format("%Y%m%d%H%M%S")),
            name: name.to_string(),
            created_at,
            data,
        }
    }
}
