//! Partitioning of a cable's positions into ribbons (fiber) or binders
//! (copper pairs).
//!
//! Groups are derived, never persisted: `group(p) = ceil(p / group_size)`,
//! 1-based throughout. The final group may be partial when the total is not
//! an exact multiple of the group size; its positions keep their raw cyclic
//! colors rather than being renumbered.

use crate::utils::error::{Result, SpliceError};

/// The contiguous position range one group covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpan {
    pub group_number: u32,
    pub start_position: u32,
    pub end_position: u32,
}

impl GroupSpan {
    pub fn position_count(&self) -> u32 {
        self.end_position - self.start_position + 1
    }
}

fn check_configuration(total_position_count: u32, group_size: u32) -> Result<()> {
    if total_position_count == 0 {
        return Err(SpliceError::InvalidConfiguration {
            field: "total_position_count".to_string(),
            message: "position count must be >= 1".to_string(),
        });
    }
    if group_size == 0 {
        return Err(SpliceError::InvalidConfiguration {
            field: "group_size".to_string(),
            message: "group size must be >= 1".to_string(),
        });
    }
    Ok(())
}

pub fn group_count(total_position_count: u32, group_size: u32) -> Result<u32> {
    check_configuration(total_position_count, group_size)?;
    Ok(total_position_count.div_ceil(group_size))
}

/// Ordered spans covering `[1, total_position_count]` with no gaps or
/// overlaps.
pub fn partition_groups(total_position_count: u32, group_size: u32) -> Result<Vec<GroupSpan>> {
    let count = group_count(total_position_count, group_size)?;
    let spans = (1..=count)
        .map(|group_number| GroupSpan {
            group_number,
            start_position: (group_number - 1) * group_size + 1,
            end_position: (group_number * group_size).min(total_position_count),
        })
        .collect();
    Ok(spans)
}

/// The 1-based group a position falls in.
pub fn group_of(position: u32, group_size: u32) -> Result<u32> {
    if group_size == 0 {
        return Err(SpliceError::InvalidConfiguration {
            field: "group_size".to_string(),
            message: "group size must be >= 1".to_string(),
        });
    }
    if position == 0 {
        return Err(SpliceError::InvalidPosition { position: 0 });
    }
    Ok(position.div_ceil(group_size))
}

/// A position's 1-based index within its own group.
pub fn position_in_group(position: u32, group_size: u32) -> Result<u32> {
    let group = group_of(position, group_size)?;
    Ok(position - (group - 1) * group_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple_partitions_evenly() {
        let spans = partition_groups(24, 12).unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], GroupSpan { group_number: 1, start_position: 1, end_position: 12 });
        assert_eq!(spans[1], GroupSpan { group_number: 2, start_position: 13, end_position: 24 });
    }

    #[test]
    fn test_final_group_may_be_partial() {
        let spans = partition_groups(25, 12).unwrap();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[2], GroupSpan { group_number: 3, start_position: 25, end_position: 25 });
        assert_eq!(spans[2].position_count(), 1);
    }

    #[test]
    fn test_partition_covers_every_position_once() {
        for (total, size) in [(1, 1), (7, 3), (24, 12), (25, 12), (100, 25), (12, 30)] {
            let spans = partition_groups(total, size).unwrap();
            let covered: u32 = spans.iter().map(GroupSpan::position_count).sum();
            assert_eq!(covered, total, "total {} size {}", total, size);
            for pair in spans.windows(2) {
                assert_eq!(pair[1].start_position, pair[0].end_position + 1);
            }
            assert_eq!(spans[0].start_position, 1);
            assert_eq!(spans.last().unwrap().end_position, total);
        }
    }

    #[test]
    fn test_group_of_matches_span_membership() {
        assert_eq!(group_of(1, 12).unwrap(), 1);
        assert_eq!(group_of(12, 12).unwrap(), 1);
        assert_eq!(group_of(13, 12).unwrap(), 2);
        assert_eq!(group_of(25, 12).unwrap(), 3);
    }

    #[test]
    fn test_position_in_group_is_one_based() {
        assert_eq!(position_in_group(1, 12).unwrap(), 1);
        assert_eq!(position_in_group(12, 12).unwrap(), 12);
        assert_eq!(position_in_group(13, 12).unwrap(), 1);
        assert_eq!(position_in_group(25, 12).unwrap(), 1);
    }

    #[test]
    fn test_zero_inputs_are_rejected() {
        assert!(partition_groups(0, 12).is_err());
        assert!(partition_groups(24, 0).is_err());
        assert!(group_of(0, 12).is_err());
        assert!(matches!(
            group_of(0, 12).unwrap_err(),
            SpliceError::InvalidPosition { position: 0 }
        ));
        assert!(position_in_group(5, 0).is_err());
    }
}
