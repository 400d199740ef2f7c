//! Operand rules of kernel launch control directives.

use crate::error::{ContractViolation, Error, decode};
use crate::ir::{DirectiveControl, Operand};
use crate::schema::enums::ControlDirective;
use crate::schema::types::TypeCode;

impl ControlDirective {
    pub fn from_raw(raw: u16) -> Result<Self, ContractViolation> {
        decode(raw)
    }

    /// Number of operands the directive takes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::RequireNoPartialWorkgroups => 0,
            Self::RequiredGridSize | Self::RequiredWorkgroupSize => 3,
            Self::EnableBreakExceptions
            | Self::EnableDetectExceptions
            | Self::MaxDynamicGroupSize
            | Self::MaxFlatGridSize
            | Self::MaxFlatWorkgroupSize
            | Self::RequiredDim => 1,
        }
    }

    /// Type of operand `index`, `None` past the directive's arity.
    #[must_use]
    pub fn operand_type(self, index: usize) -> Option<TypeCode> {
        if index >= self.arity() {
            return None;
        }
        match self {
            Self::EnableBreakExceptions
            | Self::EnableDetectExceptions
            | Self::MaxDynamicGroupSize
            | Self::MaxFlatWorkgroupSize
            | Self::RequiredDim
            | Self::RequiredWorkgroupSize => Some(TypeCode::U32),
            Self::MaxFlatGridSize | Self::RequiredGridSize => Some(TypeCode::U64),
            Self::RequireNoPartialWorkgroups => None,
        }
    }

    /// Check the value of operand `index`.
    pub fn validate_operand_bounds(self, index: usize, value: u64) -> Result<(), Error> {
        match self {
            Self::RequiredDim if !(1..=3).contains(&value) => {
                Err(reject(self, index, "Operand value must be in the range [1..3]"))
            }
            Self::MaxFlatGridSize
            | Self::MaxFlatWorkgroupSize
            | Self::RequiredGridSize
            | Self::RequiredWorkgroupSize
                if value == 0 =>
            {
                Err(reject(self, index, "Operand value must be greater than 0"))
            }
            _ => Ok(()),
        }
    }

    /// Returns true if the operands may be given as `WAVESIZE`.
    #[must_use]
    pub fn allows_wavesize(self) -> bool {
        match self {
            Self::RequiredGridSize
            | Self::RequiredWorkgroupSize
            | Self::MaxFlatWorkgroupSize
            | Self::MaxFlatGridSize => true,
            Self::EnableBreakExceptions
            | Self::EnableDetectExceptions
            | Self::MaxDynamicGroupSize
            | Self::RequiredDim
            | Self::RequireNoPartialWorkgroups => false,
        }
    }
}

fn reject(kind: ControlDirective, index: usize, reason: &'static str) -> Error {
    log::debug!("{kind:?} operand {index} rejected: {reason}");
    Error::Invalid(reason)
}

/// Check the operand list of a control directive.
pub fn validate_control(ctl: &DirectiveControl<'_>) -> Result<(), Error> {
    let kind = ctl.control;
    if ctl.operands.len() != kind.arity() {
        return Err(reject(kind, ctl.operands.len(), "Invalid number of operands"));
    }

    for (index, operand) in ctl.operands.iter().enumerate() {
        let expected = kind.operand_type(index);
        match operand {
            Operand::WaveSize if kind.allows_wavesize() => {}
            Operand::WaveSize => {
                return Err(reject(
                    kind,
                    index,
                    "WAVESIZE is not supported by this control directive",
                ));
            }
            Operand::ConstantBytes(cnst) if Some(cnst.ty) == expected => {
                let value = match cnst.ty {
                    TypeCode::U64 => cnst.as_u64()?,
                    _ => u64::from(cnst.as_u32(0)?),
                };
                kind.validate_operand_bounds(index, value)?;
            }
            Operand::ConstantBytes(_) => {
                return Err(reject(kind, index, "Invalid operand type"));
            }
            _ => {
                return Err(reject(
                    kind,
                    index,
                    "Control directive operands must be immediate values",
                ));
            }
        }
    }
    Ok(())
}
