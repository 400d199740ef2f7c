//! Packing controls of packed (SIMD within a register) arithmetic.

use crate::error::ContractViolation;
use crate::schema::enums::PackingMode;
use crate::schema::types::TypeCode;

/// Control string of an instruction without packing.
const NO_PACKING: &[u8; 2] = b"  ";

impl PackingMode {
    /// Returns true if the result saturates instead of wrapping.
    #[must_use]
    pub fn is_sat(self) -> bool {
        match self {
            Self::Pp | Self::Ps | Self::Sp | Self::Ss | Self::S | Self::P => false,
            Self::PpSat | Self::PsSat | Self::SpSat | Self::SsSat | Self::SSat | Self::PSat => {
                true
            }
        }
    }

    /// Returns true if the mode describes a single source operand.
    #[must_use]
    pub fn is_unary(self) -> bool {
        match self {
            Self::S | Self::P | Self::SSat | Self::PSat => true,
            Self::Pp
            | Self::Ps
            | Self::Sp
            | Self::Ss
            | Self::PpSat
            | Self::PsSat
            | Self::SpSat
            | Self::SsSat => false,
        }
    }

    #[must_use]
    pub fn is_binary(self) -> bool {
        !self.is_unary()
    }

    /// Per-source control characters: `p` for per-element, `s` for a
    /// broadcast of lane 0 and a space for an operand the mode does not
    /// describe.
    #[must_use]
    pub fn control(self) -> &'static [u8; 2] {
        match self {
            Self::P | Self::PSat => b"p ",
            Self::S | Self::SSat => b"s ",
            Self::Pp | Self::PpSat => b"pp",
            Self::Ps | Self::PsSat => b"ps",
            Self::Sp | Self::SpSat => b"sp",
            Self::Ss | Self::SsSat => b"ss",
        }
    }
}

/// Control character of source operand `slot` (0 or 1) under `packing`.
pub fn packing_control(slot: usize, packing: Option<PackingMode>) -> Result<char, ContractViolation> {
    let ctl = packing.map_or(NO_PACKING, PackingMode::control);
    ctl.get(slot)
        .map(|&c| char::from(c))
        .ok_or(ContractViolation::PackingSlot(slot))
}

/// Number of destination lanes written by a packed operation.
///
/// All lanes are written when any source is per-element, otherwise only
/// lane 0 is.
pub fn packed_dst_dim(ty: TypeCode, packing: Option<PackingMode>) -> Result<u32, ContractViolation> {
    if !ty.is_packed() {
        return Err(ContractViolation::UnsupportedType {
            op: "packed_dst_dim",
            ty,
        });
    }
    let per_element = packing_control(0, packing)? == 'p' || packing_control(1, packing)? == 'p';
    Ok(if per_element { ty.packed_dim() } else { 1 })
}
