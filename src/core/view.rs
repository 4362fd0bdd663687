//! The composed per-cable view: every group with its member positions, each
//! carrying a resolved color and a highlighted flag.
//!
//! The model is transient and fully re-derivable from `(Cable, Splice[])`;
//! the rendering layer recomputes it on every data change instead of
//! patching incrementally.

use std::fmt;

use crate::core::colors::resolve_color;
use crate::core::groups::{partition_groups, position_in_group};
use crate::core::highlight::resolve_highlighted_positions_bounded;
use crate::domain::model::{
    Cable, CableType, ColorStandard, OutOfRangePolicy, Position, PositionColor, Splice,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct PositionEntry {
    pub position: Position,
    pub color: PositionColor,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupColors {
    pub group_number: u32,
    pub positions: Vec<PositionEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CableColorModel {
    pub cable_id: String,
    pub cable_name: String,
    pub cable_type: CableType,
    pub groups: Vec<GroupColors>,
}

impl CableColorModel {
    pub fn position_count(&self) -> usize {
        self.groups.iter().map(|g| g.positions.len()).sum()
    }
}

/// Builds [`CableColorModel`]s from an injected color standard and
/// out-of-range policy.
pub struct ColorModelEngine {
    standard: ColorStandard,
    range_policy: OutOfRangePolicy,
}

impl Default for ColorModelEngine {
    fn default() -> Self {
        Self::new(ColorStandard::default())
    }
}

impl ColorModelEngine {
    pub fn new(standard: ColorStandard) -> Self {
        Self {
            standard,
            range_policy: OutOfRangePolicy::default(),
        }
    }

    pub fn with_range_policy(mut self, range_policy: OutOfRangePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }

    /// Engine configured from any [`ConfigProvider`] (CLI flags or a view
    /// configuration file).
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.color_standard()).with_range_policy(config.range_policy())
    }

    pub fn build(&self, cable: &Cable, splices: &[Splice]) -> Result<CableColorModel> {
        let spans = partition_groups(cable.fiber_count, cable.ribbon_size)?;
        let highlighted =
            resolve_highlighted_positions_bounded(cable, splices, self.range_policy)?;

        let mut groups = Vec::with_capacity(spans.len());
        for span in spans {
            let mut positions = Vec::with_capacity(span.position_count() as usize);
            for position in span.start_position..=span.end_position {
                let index_in_group = position_in_group(position, cable.ribbon_size)?;
                let color = resolve_color(
                    index_in_group,
                    cable.ribbon_size,
                    cable.cable_type,
                    &self.standard,
                )?;
                positions.push(PositionEntry {
                    position,
                    color,
                    highlighted: highlighted.contains(&position),
                });
            }
            groups.push(GroupColors {
                group_number: span.group_number,
                positions,
            });
        }

        Ok(CableColorModel {
            cable_id: cable.id.clone(),
            cable_name: cable.name.clone(),
            cable_type: cable.cable_type,
            groups,
        })
    }
}

/// Build a model with the industry-default color standard and the default
/// out-of-range policy.
pub fn build_cable_color_model(cable: &Cable, splices: &[Splice]) -> Result<CableColorModel> {
    ColorModelEngine::default().build(cable, splices)
}

impl fmt::Display for CableColorModel {
    /// One line per group: `R3   25:blue*  26:orange ...`, `*` marking
    /// spliced positions. Copper groups are prefixed `B` (binder).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({}, {} positions)",
            self.cable_name,
            self.cable_type,
            self.position_count()
        )?;
        let prefix = match self.cable_type {
            CableType::Fiber => 'R',
            CableType::Copper => 'B',
        };
        for group in &self.groups {
            write!(f, "{}{:<4}", prefix, group.group_number)?;
            for entry in &group.positions {
                let mark = if entry.highlighted { "*" } else { "" };
                write!(f, " {}:{}{}", entry.position, entry.color, mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ColorPair, FiberColor};

    fn cable_24() -> Cable {
        Cable {
            id: "A".to_string(),
            name: "Feeder A".to_string(),
            cable_type: CableType::Fiber,
            fiber_count: 24,
            ribbon_size: 12,
        }
    }

    fn splice_3_5() -> Splice {
        Splice {
            id: "s1".to_string(),
            source_cable_id: "A".to_string(),
            destination_cable_id: "B".to_string(),
            source_start_fiber: 3,
            source_end_fiber: 5,
            destination_start_fiber: 1,
            destination_end_fiber: 3,
            pon_start: None,
            pon_end: None,
        }
    }

    #[test]
    fn test_two_ribbons_of_twelve() {
        let model = build_cable_color_model(&cable_24(), &[]).unwrap();
        assert_eq!(model.groups.len(), 2);
        assert_eq!(model.groups[0].positions.len(), 12);
        assert_eq!(model.groups[1].positions.len(), 12);
        assert_eq!(model.groups[1].positions[0].position, 13);
        assert_eq!(model.position_count(), 24);
    }

    #[test]
    fn test_colors_repeat_across_ribbons() {
        let model = build_cable_color_model(&cable_24(), &[]).unwrap();
        let first = &model.groups[0].positions[0];
        let thirteenth = &model.groups[1].positions[0];
        assert_eq!(first.color, PositionColor::Fiber(FiberColor::Blue));
        assert_eq!(thirteenth.color, first.color);
    }

    #[test]
    fn test_spliced_positions_are_flagged() {
        let model = build_cable_color_model(&cable_24(), &[splice_3_5()]).unwrap();
        let flagged: Vec<u32> = model.groups[0]
            .positions
            .iter()
            .filter(|p| p.highlighted)
            .map(|p| p.position)
            .collect();
        assert_eq!(flagged, vec![3, 4, 5]);
        assert!(model.groups[1].positions.iter().all(|p| !p.highlighted));
    }

    #[test]
    fn test_partial_final_group_keeps_cyclic_colors() {
        let mut cable = cable_24();
        cable.fiber_count = 25;
        let model = build_cable_color_model(&cable, &[]).unwrap();
        assert_eq!(model.groups.len(), 3);
        let last = &model.groups[2];
        assert_eq!(last.positions.len(), 1);
        assert_eq!(last.positions[0].position, 25);
        // (25 - 1) mod 12 == 0: first sequence color again.
        assert_eq!(last.positions[0].color, PositionColor::Fiber(FiberColor::Blue));
    }

    #[test]
    fn test_copper_cable_yields_pairs() {
        let cable = Cable {
            id: "C".to_string(),
            name: "Copper C".to_string(),
            cable_type: CableType::Copper,
            fiber_count: 50,
            ribbon_size: 25,
        };
        let model = build_cable_color_model(&cable, &[]).unwrap();
        assert_eq!(model.groups.len(), 2);
        assert_eq!(
            model.groups[0].positions[0].color,
            PositionColor::Pair(ColorPair {
                tip: FiberColor::White,
                ring: FiberColor::Blue,
            })
        );
    }

    #[test]
    fn test_engine_honors_reject_policy() {
        let mut splice = splice_3_5();
        splice.source_end_fiber = 99;
        let engine = ColorModelEngine::default().with_range_policy(OutOfRangePolicy::Reject);
        assert!(engine.build(&cable_24(), &[splice]).is_err());
    }

    #[test]
    fn test_display_marks_highlights() {
        let model = build_cable_color_model(&cable_24(), &[splice_3_5()]).unwrap();
        let rendered = model.to_string();
        assert!(rendered.starts_with("Feeder A (fiber, 24 positions)"));
        assert!(rendered.contains("R1"));
        assert!(rendered.contains("3:green*"));
        assert!(rendered.contains("6:white"));
        assert!(!rendered.contains("6:white*"));
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let splices = vec![splice_3_5()];
        let a = build_cable_color_model(&cable_24(), &splices).unwrap();
        let b = build_cable_color_model(&cable_24(), &splices).unwrap();
        assert_eq!(a, b);
    }
}
