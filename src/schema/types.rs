use num_enum::{IntoPrimitive, TryFromPrimitive};

const PACK_32: u16 = 1 << 5;
const PACK_64: u16 = 2 << 5;
const PACK_128: u16 = 3 << 5;

/// Set on an element type code to form the matching array type code.
pub const ARRAY_FLAG: u16 = 1 << 7;

/// BRIG type codes
///
/// The encoded value `0` means "no type" and is represented as
/// `Option::<TypeCode>::None` throughout the crate.
#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum TypeCode {
    U8 = 1,
    U16 = 2,
    U32 = 3,
    U64 = 4,
    S8 = 5,
    S16 = 6,
    S32 = 7,
    S64 = 8,
    F16 = 9,
    F32 = 10,
    F64 = 11,
    B1 = 12,
    B8 = 13,
    B16 = 14,
    B32 = 15,
    B64 = 16,
    B128 = 17,

    /// Sampler handle
    Samp = 18,
    /// Read-only image handle
    RoImg = 19,
    /// Write-only image handle
    WoImg = 20,
    /// Read-write image handle
    RwImg = 21,
    /// Signal handle with a 32-bit value, small machine model only
    Sig32 = 22,
    /// Signal handle with a 64-bit value, large machine model only
    Sig64 = 23,

    // 32-bit packed
    U8X4 = 1 | PACK_32,
    U16X2 = 2 | PACK_32,
    S8X4 = 5 | PACK_32,
    S16X2 = 6 | PACK_32,
    F16X2 = 9 | PACK_32,

    // 64-bit packed
    U8X8 = 1 | PACK_64,
    U16X4 = 2 | PACK_64,
    U32X2 = 3 | PACK_64,
    S8X8 = 5 | PACK_64,
    S16X4 = 6 | PACK_64,
    S32X2 = 7 | PACK_64,
    F16X4 = 9 | PACK_64,
    F32X2 = 10 | PACK_64,

    // 128-bit packed
    U8X16 = 1 | PACK_128,
    U16X8 = 2 | PACK_128,
    U32X4 = 3 | PACK_128,
    U64X2 = 4 | PACK_128,
    S8X16 = 5 | PACK_128,
    S16X8 = 6 | PACK_128,
    S32X4 = 7 | PACK_128,
    S64X2 = 8 | PACK_128,
    F16X8 = 9 | PACK_128,
    F32X4 = 10 | PACK_128,
    F64X2 = 11 | PACK_128,
}

impl TypeCode {
    /// Every type code, in encoding order.
    pub const ALL: [TypeCode; 47] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::S8,
        Self::S16,
        Self::S32,
        Self::S64,
        Self::F16,
        Self::F32,
        Self::F64,
        Self::B1,
        Self::B8,
        Self::B16,
        Self::B32,
        Self::B64,
        Self::B128,
        Self::Samp,
        Self::RoImg,
        Self::WoImg,
        Self::RwImg,
        Self::Sig32,
        Self::Sig64,
        Self::U8X4,
        Self::U16X2,
        Self::S8X4,
        Self::S16X2,
        Self::F16X2,
        Self::U8X8,
        Self::U16X4,
        Self::U32X2,
        Self::S8X8,
        Self::S16X4,
        Self::S32X2,
        Self::F16X4,
        Self::F32X2,
        Self::U8X16,
        Self::U16X8,
        Self::U32X4,
        Self::U64X2,
        Self::S8X16,
        Self::S16X8,
        Self::S32X4,
        Self::S64X2,
        Self::F16X8,
        Self::F32X4,
        Self::F64X2,
    ];
}
