//! Splice-range resolution: which positions on a cable participate in a
//! recorded splice.
//!
//! Every splice naming the cable on either side contributes its inclusive
//! range for that side; a self-splice contributes both. Results are sets, so
//! overlapping ranges merge and the outcome is independent of splice order.

use std::collections::BTreeSet;

use crate::domain::model::{Cable, OutOfRangePolicy, Position, Splice};
use crate::utils::error::{Result, SpliceError};

/// Union of highlighted positions on `cable_id` across `splices`.
///
/// Positions past the cable's declared size pass through untouched here;
/// callers render only positions that exist, so excess entries are inert.
/// Use [`resolve_highlighted_positions_bounded`] to clamp or reject instead.
pub fn resolve_highlighted_positions(cable_id: &str, splices: &[Splice]) -> BTreeSet<Position> {
    let mut highlighted = BTreeSet::new();
    for splice in splices {
        if splice.source_cable_id == cable_id {
            highlighted.extend(splice.source_start_fiber..=splice.source_end_fiber);
        }
        if splice.destination_cable_id == cable_id {
            highlighted.extend(splice.destination_start_fiber..=splice.destination_end_fiber);
        }
    }
    highlighted
}

/// Like [`resolve_highlighted_positions`], with the cable's declared size
/// enforced according to `policy`.
pub fn resolve_highlighted_positions_bounded(
    cable: &Cable,
    splices: &[Splice],
    policy: OutOfRangePolicy,
) -> Result<BTreeSet<Position>> {
    let mut highlighted = BTreeSet::new();
    for splice in splices {
        if splice.source_cable_id == cable.id {
            add_range(
                &mut highlighted,
                splice.source_start_fiber,
                splice.source_end_fiber,
                cable.fiber_count,
                policy,
            )?;
        }
        if splice.destination_cable_id == cable.id {
            add_range(
                &mut highlighted,
                splice.destination_start_fiber,
                splice.destination_end_fiber,
                cable.fiber_count,
                policy,
            )?;
        }
    }
    Ok(highlighted)
}

fn add_range(
    highlighted: &mut BTreeSet<Position>,
    start: u32,
    end: u32,
    bound: u32,
    policy: OutOfRangePolicy,
) -> Result<()> {
    match policy {
        OutOfRangePolicy::Ignore => {
            highlighted.extend(start..=end);
        }
        OutOfRangePolicy::Clamp => {
            let clamped_start = start.max(1);
            let clamped_end = end.min(bound);
            if clamped_start <= clamped_end {
                highlighted.extend(clamped_start..=clamped_end);
            }
        }
        OutOfRangePolicy::Reject => {
            if start == 0 {
                return Err(SpliceError::InvalidPosition { position: 0 });
            }
            if end > bound {
                return Err(SpliceError::PositionOutOfBounds { position: end, bound });
            }
            highlighted.extend(start..=end);
        }
    }
    Ok(())
}
