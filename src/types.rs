//! Type taxonomy: category predicates, conversions and sizes of BRIG types.

use crate::error::{ContractViolation, decode};
use crate::ir::DirectiveVariable;
use crate::schema::enums::Alignment;
use crate::schema::types::{ARRAY_FLAG, TypeCode};

use TypeCode::*;

impl TypeCode {
    /// Decode a BRIG type code. `0` ("no type") is not a type.
    pub fn from_raw(raw: u16) -> Result<Self, ContractViolation> {
        decode(raw)
    }

    /// Signed or unsigned integer scalar.
    #[must_use]
    pub fn is_int(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    #[must_use]
    pub fn is_signed(self) -> bool {
        matches!(self, S8 | S16 | S32 | S64)
    }

    #[must_use]
    pub fn is_unsigned(self) -> bool {
        matches!(self, U8 | U16 | U32 | U64)
    }

    #[must_use]
    pub fn is_bit(self) -> bool {
        matches!(self, B1 | B8 | B16 | B32 | B64 | B128)
    }

    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, F16 | F32 | F64)
    }

    /// Image, sampler and signal handles.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        matches!(self, Samp | RoImg | WoImg | RwImg | Sig32 | Sig64)
    }

    /// Types that need the `IMAGE` extension.
    #[must_use]
    pub fn is_image_ext(self) -> bool {
        self.is_image() || self.is_sampler()
    }

    #[must_use]
    pub fn is_image(self) -> bool {
        matches!(self, RoImg | WoImg | RwImg)
    }

    #[must_use]
    pub fn is_sampler(self) -> bool {
        matches!(self, Samp)
    }

    #[must_use]
    pub fn is_signal(self) -> bool {
        matches!(self, Sig32 | Sig64)
    }

    /// Types the Base profile does not support.
    #[must_use]
    pub fn is_full_profile_only(self) -> bool {
        matches!(self, F64 | F64X2)
    }

    #[must_use]
    pub fn is_packed(self) -> bool {
        self.is_int_packed() || self.is_float_packed()
    }

    #[must_use]
    pub fn is_int_packed(self) -> bool {
        matches!(
            self,
            U8X4 | S8X4
                | U16X2
                | S16X2
                | U8X8
                | S8X8
                | U16X4
                | S16X4
                | U32X2
                | S32X2
                | U8X16
                | S8X16
                | U16X8
                | S16X8
                | U32X4
                | S32X4
                | U64X2
                | S64X2
        )
    }

    #[must_use]
    pub fn is_float_packed(self) -> bool {
        matches!(self, F16X2 | F16X4 | F32X2 | F16X8 | F32X4 | F64X2)
    }

    /// Number of lanes of a packed type, `0` for any other type.
    #[must_use]
    pub fn packed_dim(self) -> u32 {
        match self {
            U16X2 | S16X2 | F16X2 | U32X2 | S32X2 | F32X2 | U64X2 | S64X2 | F64X2 => 2,
            U8X4 | S8X4 | U16X4 | S16X4 | F16X4 | U32X4 | S32X4 | F32X4 => 4,
            U8X8 | S8X8 | U16X8 | S16X8 | F16X8 => 8,
            U8X16 | S8X16 => 16,
            _ => 0,
        }
    }

    /// Storage size in bits.
    #[must_use]
    pub fn num_bits(self) -> u32 {
        match self {
            B1 => 1,
            U8 | S8 | B8 => 8,
            U16 | S16 | F16 | B16 => 16,
            U32 | S32 | F32 | B32 => 32,
            U64 | S64 | F64 | B64 => 64,
            B128 => 128,
            // handles are 64 bits wide whatever the signal value size is
            Samp | RoImg | WoImg | RwImg | Sig32 | Sig64 => 64,
            U8X4 | S8X4 | U16X2 | S16X2 | F16X2 => 32,
            U8X8 | S8X8 | U16X4 | S16X4 | F16X4 | U32X2 | S32X2 | F32X2 => 64,
            U8X16 | S8X16 | U16X8 | S16X8 | F16X8 | U32X4 | S32X4 | F32X4 | U64X2 | S64X2
            | F64X2 => 128,
        }
    }

    /// Storage size in bytes. `b1` occupies one byte.
    #[must_use]
    pub fn num_bytes(self) -> u32 {
        self.num_bits().div_ceil(8)
    }

    /// Alignment equal to the storage size.
    #[must_use]
    pub fn natural_alignment(self) -> Alignment {
        match self.num_bytes() {
            1 => Alignment::A1,
            2 => Alignment::A2,
            4 => Alignment::A4,
            8 => Alignment::A8,
            _ => Alignment::A16,
        }
    }

    /// Unsigned type used to hold the value of a bit type.
    ///
    /// `b1` widens to `u8` and `b128` has no scalar counterpart, so it maps
    /// to `u8x16`.
    pub fn bit_type_to_utype(self) -> Result<TypeCode, ContractViolation> {
        match self {
            B1 | B8 => Ok(U8),
            B16 => Ok(U16),
            B32 => Ok(U32),
            B64 => Ok(U64),
            B128 => Ok(U8X16),
            ty => Err(unsupported("bit_type_to_utype", ty)),
        }
    }

    /// Bit type of the same storage size. Opaque handles are `b64`.
    #[must_use]
    pub fn to_bit_type(self) -> TypeCode {
        match self {
            B1 => B1,
            B8 | S8 | U8 => B8,
            B16 | S16 | U16 | F16 => B16,
            B32 | S32 | U32 | F32 => B32,
            B64 | S64 | U64 | F64 => B64,
            B128 => B128,
            U8X4 | S8X4 | U16X2 | S16X2 | F16X2 => B32,
            U8X8 | S8X8 | U16X4 | S16X4 | F16X4 | U32X2 | S32X2 | F32X2 => B64,
            U8X16 | S8X16 | U16X8 | S16X8 | F16X8 | U32X4 | S32X4 | F32X4 | U64X2 | S64X2
            | F64X2 => B128,
            Samp | RoImg | WoImg | RwImg | Sig32 | Sig64 => B64,
        }
    }

    /// Unsigned packed type with the same lane layout, `None` for
    /// non-packed types.
    #[must_use]
    pub fn packed_to_utype(self) -> Option<TypeCode> {
        match self {
            U8X4 | S8X4 => Some(U8X4),
            U16X2 | S16X2 | F16X2 => Some(U16X2),
            U8X8 | S8X8 => Some(U8X8),
            U16X4 | S16X4 | F16X4 => Some(U16X4),
            U32X2 | S32X2 | F32X2 => Some(U32X2),
            U8X16 | S8X16 => Some(U8X16),
            U16X8 | S16X8 | F16X8 => Some(U16X8),
            U32X4 | S32X4 | F32X4 => Some(U32X4),
            U64X2 | S64X2 | F64X2 => Some(U64X2),
            _ => None,
        }
    }

    /// Lane type of a packed type.
    pub fn packed_element_type(self) -> Result<TypeCode, ContractViolation> {
        match self {
            U8X4 | U8X8 | U8X16 => Ok(U8),
            U16X2 | U16X4 | U16X8 => Ok(U16),
            U32X2 | U32X4 => Ok(U32),
            U64X2 => Ok(U64),
            S8X4 | S8X8 | S8X16 => Ok(S8),
            S16X2 | S16X4 | S16X8 => Ok(S16),
            S32X2 | S32X4 => Ok(S32),
            S64X2 => Ok(S64),
            F16X2 | F16X4 | F16X8 => Ok(F16),
            F32X2 | F32X4 => Ok(F32),
            F64X2 => Ok(F64),
            ty => Err(unsupported("packed_element_type", ty)),
        }
    }

    /// Lane type of a packed type, widened to at least 32 bits.
    pub fn packed_base_type(self) -> Result<TypeCode, ContractViolation> {
        self.packed_element_type()?.expand_subword()
    }

    /// Widen 8- and 16-bit integer types to 32 bits; other types are
    /// returned unchanged.
    pub fn expand_subword(self) -> Result<TypeCode, ContractViolation> {
        match self {
            B1 => Err(unsupported("expand_subword", self)),
            B8 | B16 => Ok(B32),
            U8 | U16 => Ok(U32),
            S8 | S16 => Ok(S32),
            ty => Ok(ty),
        }
    }

    /// `b1` is only usable for registers and immediates, not variables.
    #[must_use]
    pub fn is_valid_var_type(self) -> bool {
        self != B1
    }

    /// Encoded type of an immediate holding a value of this type, or an
    /// array of such values. Bit types are stored as unsigned values.
    ///
    /// `None` for images and samplers, and for arrays of `b1`.
    #[must_use]
    pub fn imm_type(self, is_array: bool) -> Option<u16> {
        if !self.is_valid_imm_type() || (is_array && self == B1) {
            return None;
        }
        let ty = if self.is_bit() {
            self.bit_type_to_utype().ok()?
        } else {
            self
        };
        let raw = u16::from(ty);
        Some(if is_array { raw | ARRAY_FLAG } else { raw })
    }

    /// Image and sampler values cannot be written as immediates.
    #[must_use]
    pub fn is_valid_imm_type(self) -> bool {
        !self.is_image() && !self.is_sampler()
    }
}

fn unsupported(op: &'static str, ty: TypeCode) -> ContractViolation {
    log::warn!("`{op}` called on {ty:?}");
    ContractViolation::UnsupportedType { op, ty }
}

/// Bit type of the given width.
pub fn bit_type(width: u32) -> Result<TypeCode, ContractViolation> {
    match width {
        1 => Ok(B1),
        8 => Ok(B8),
        16 => Ok(B16),
        32 => Ok(B32),
        64 => Ok(B64),
        128 => Ok(B128),
        _ => Err(ContractViolation::UnsupportedWidth { kind: "bit", width }),
    }
}

/// Signed integer type of the given width.
pub fn signed_type(width: u32) -> Result<TypeCode, ContractViolation> {
    match width {
        8 => Ok(S8),
        16 => Ok(S16),
        32 => Ok(S32),
        64 => Ok(S64),
        _ => Err(ContractViolation::UnsupportedWidth {
            kind: "signed",
            width,
        }),
    }
}

/// Unsigned integer type of the given width.
pub fn unsigned_type(width: u32) -> Result<TypeCode, ContractViolation> {
    match width {
        8 => Ok(U8),
        16 => Ok(U16),
        32 => Ok(U32),
        64 => Ok(U64),
        _ => Err(ContractViolation::UnsupportedWidth {
            kind: "unsigned",
            width,
        }),
    }
}

/// Element type of an encoded type; non-array types are their own element.
pub fn array_element_type(raw: u16) -> Result<TypeCode, ContractViolation> {
    decode(raw & !ARRAY_FLAG)
}

/// Returns true if objects of type `ty` may be accessed with alignment `align`.
#[must_use]
pub fn is_valid_alignment(align: Alignment, ty: TypeCode) -> bool {
    ty.natural_alignment().bytes() <= align.bytes()
}

/// Effective alignment of a variable in bytes.
#[must_use]
pub fn variable_alignment(var: &DirectiveVariable<'_>) -> u32 {
    var.element_type
        .natural_alignment()
        .bytes()
        .max(var.align.bytes())
}

/// Storage size of a variable in bytes.
#[must_use]
pub fn variable_num_bytes(var: &DirectiveVariable<'_>) -> u64 {
    u64::from(var.element_type.num_bytes()) * var.dim.max(1)
}

/// Round `size` up to a multiple of `pow2`.
pub fn align_up(size: usize, pow2: usize) -> usize {
    debug_assert!(pow2.is_power_of_two());
    let mask = pow2 - 1;
    (size + mask) & !mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(0, 8), 0);
        assert_eq!(align_up(1, 8), 8);
        assert_eq!(align_up(8, 8), 8);
        assert_eq!(align_up(13, 4), 16);
    }

    #[test]
    fn test_sizes_follow_packing() {
        for ty in TypeCode::ALL {
            if ty.is_packed() {
                let lane = ty.packed_element_type().unwrap();
                assert_eq!(lane.num_bits() * ty.packed_dim(), ty.num_bits(), "{ty:?}");
            }
        }
    }
}
