use crate::domain::model::{Cable, Circuit, ColorStandard, Splice, Workspace};
use crate::utils::error::{Result, SpliceError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive(field_name: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(SpliceError::InvalidConfiguration {
            field: field_name.to_string(),
            message: "value must be >= 1".to_string(),
        });
    }
    Ok(())
}

pub fn validate_ordered_range(field_name: &str, start: u32, end: u32) -> Result<()> {
    if start == 0 {
        return Err(SpliceError::InvalidConfiguration {
            field: field_name.to_string(),
            message: "range must start at 1 or above".to_string(),
        });
    }
    if start > end {
        return Err(SpliceError::InvalidConfiguration {
            field: field_name.to_string(),
            message: format!("range start {} is past its end {}", start, end),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SpliceError::InvalidConfiguration {
            field: field_name.to_string(),
            message: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_sequence(field_name: &str, len: usize) -> Result<()> {
    if len == 0 {
        return Err(SpliceError::InvalidConfiguration {
            field: field_name.to_string(),
            message: "sequence must hold at least one color".to_string(),
        });
    }
    Ok(())
}

impl Validate for Cable {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("cable.id", &self.id)?;
        validate_non_empty_string("cable.name", &self.name)?;
        validate_positive("cable.fiberCount", self.fiber_count)?;
        validate_positive("cable.ribbonSize", self.ribbon_size)?;
        Ok(())
    }
}

impl Validate for Splice {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("splice.id", &self.id)?;
        validate_non_empty_string("splice.sourceCableId", &self.source_cable_id)?;
        validate_non_empty_string("splice.destinationCableId", &self.destination_cable_id)?;
        validate_ordered_range(
            "splice.sourceFibers",
            self.source_start_fiber,
            self.source_end_fiber,
        )?;
        validate_ordered_range(
            "splice.destinationFibers",
            self.destination_start_fiber,
            self.destination_end_fiber,
        )?;
        if let (Some(start), Some(end)) = (self.pon_start, self.pon_end) {
            validate_ordered_range("splice.pon", start, end)?;
        }
        Ok(())
    }
}

impl Validate for Circuit {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("circuit.id", &self.id)?;
        validate_non_empty_string("circuit.cableId", &self.cable_id)?;
        validate_ordered_range("circuit.fibers", self.fiber_start, self.fiber_end)?;
        Ok(())
    }
}

impl Validate for Workspace {
    fn validate(&self) -> Result<()> {
        for cable in &self.cables {
            cable.validate()?;
        }
        for splice in &self.splices {
            splice.validate()?;
        }
        for circuit in &self.circuits {
            circuit.validate()?;
        }
        Ok(())
    }
}

impl Validate for ColorStandard {
    fn validate(&self) -> Result<()> {
        validate_non_empty_sequence("colors.fiber_sequence", self.fiber_sequence.len())?;
        validate_non_empty_sequence("colors.tip_sequence", self.tip_sequence.len())?;
        validate_non_empty_sequence("colors.ring_sequence", self.ring_sequence.len())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CableType;

    fn cable() -> Cable {
        Cable {
            id: "c1".to_string(),
            name: "Feeder".to_string(),
            cable_type: CableType::Fiber,
            fiber_count: 24,
            ribbon_size: 12,
        }
    }

    #[test]
    fn test_valid_cable_passes() {
        assert!(cable().validate().is_ok());
    }

    #[test]
    fn test_zero_ribbon_size_rejected() {
        let mut c = cable();
        c.ribbon_size = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_zero_fiber_count_rejected() {
        let mut c = cable();
        c.fiber_count = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_inverted_splice_range_rejected() {
        let splice = Splice {
            id: "s1".to_string(),
            source_cable_id: "c1".to_string(),
            destination_cable_id: "c2".to_string(),
            source_start_fiber: 5,
            source_end_fiber: 3,
            destination_start_fiber: 1,
            destination_end_fiber: 3,
            pon_start: None,
            pon_end: None,
        };
        assert!(splice.validate().is_err());
    }

    #[test]
    fn test_zero_based_splice_range_rejected() {
        assert!(validate_ordered_range("splice.sourceFibers", 0, 3).is_err());
    }

    #[test]
    fn test_empty_color_sequence_rejected() {
        let standard = ColorStandard {
            fiber_sequence: vec![],
            ..ColorStandard::default()
        };
        assert!(standard.validate().is_err());
    }
}
