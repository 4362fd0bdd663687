//! Position-to-color resolution.
//!
//! Colors depend only on a position's index within its group and cycle
//! through the injected sequences, so a position renders the same color on
//! every recomputation. Fiber positions map straight through the 12-color
//! sequence; copper pairs map through the tip/ring tables, tip advancing
//! once per full ring cycle (25-pair convention with the standard tables).

use crate::domain::model::{CableType, ColorPair, ColorStandard, PositionColor};
use crate::utils::error::{Result, SpliceError};

/// Resolve the color shown for the `position_in_group`-th slot of a group.
///
/// `group_size` does not influence the color (sequences cycle regardless of
/// grouping); a zero size is still rejected as a configuration fault.
pub fn resolve_color(
    position_in_group: u32,
    group_size: u32,
    cable_type: CableType,
    standard: &ColorStandard,
) -> Result<PositionColor> {
    if group_size == 0 {
        return Err(SpliceError::InvalidConfiguration {
            field: "group_size".to_string(),
            message: "group size must be >= 1".to_string(),
        });
    }
    if position_in_group == 0 {
        return Err(SpliceError::InvalidPosition { position: 0 });
    }

    match cable_type {
        CableType::Fiber => {
            let sequence = &standard.fiber_sequence;
            if sequence.is_empty() {
                return Err(SpliceError::InvalidConfiguration {
                    field: "colors.fiber_sequence".to_string(),
                    message: "sequence must hold at least one color".to_string(),
                });
            }
            let index = (position_in_group as usize - 1) % sequence.len();
            Ok(PositionColor::Fiber(sequence[index]))
        }
        CableType::Copper => {
            let tips = &standard.tip_sequence;
            let rings = &standard.ring_sequence;
            if tips.is_empty() || rings.is_empty() {
                return Err(SpliceError::InvalidConfiguration {
                    field: "colors.tip_sequence/ring_sequence".to_string(),
                    message: "sequence must hold at least one color".to_string(),
                });
            }
            let index = (position_in_group as usize - 1) % standard.copper_period();
            Ok(PositionColor::Pair(ColorPair {
                tip: tips[index / rings.len()],
                ring: rings[index % rings.len()],
            }))
        }
    }
}
