use num_enum::TryFromPrimitive;

use crate::schema::types::TypeCode;

/// Broken caller invariant.
///
/// These are never caused by a user program being invalid for the target;
/// they mean the IR handed to this crate was malformed upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("unknown {what} code {value}")]
    UnknownCode { what: &'static str, value: u64 },
    #[error("`{op}` is not defined for type {ty:?}")]
    UnsupportedType { op: &'static str, ty: TypeCode },
    #[error("no {kind} type is {width} bits wide")]
    UnsupportedWidth { kind: &'static str, width: u32 },
    #[error("`{op}` is not defined for {what} directives")]
    UnsupportedDirective { op: &'static str, what: &'static str },
    #[error("`{op}` is not defined for {what} operands")]
    UnsupportedOperand { op: &'static str, what: &'static str },
    #[error("argument {index} is out of range ({count} input arguments)")]
    ArgumentIndex { index: usize, count: usize },
    #[error("source operand slot {0} has no packing control")]
    PackingSlot(usize),
    #[error("constant word {index} is past the end of a {len}-byte constant")]
    ConstantIndex { index: usize, len: usize },
    #[error("section index {index} is out of range (module has {count} sections)")]
    SectionIndex { index: u32, count: u32 },
    #[error("section offset {0:#x} does not fit in 32 bits")]
    SectionOffset(u64),
}

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value is well-formed but not legal for the target.
    #[error("{0}")]
    Invalid(&'static str),
    #[error("contract violation: {0}")]
    Contract(#[from] ContractViolation),
    #[error("not a BRIG module")]
    NotBrig,
    #[error("module buffer too short: {len} bytes needed at offset {offset}")]
    Truncated { offset: usize, len: usize },
}

impl Error {
    /// Returns true if this error reports a broken caller invariant rather
    /// than an illegal program.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Contract(_))
    }

    /// The human readable reason of a validation failure.
    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Invalid(reason) => Some(*reason),
            Self::Contract(_) | Self::NotBrig | Self::Truncated { .. } => None,
        }
    }
}

/// Decode a raw BRIG code into one of the closed enumerations.
pub(crate) fn decode<T>(raw: T::Primitive) -> Result<T, ContractViolation>
where
    T: TryFromPrimitive,
    T::Primitive: Into<u64>,
{
    T::try_from_primitive(raw).map_err(|_| {
        let value: u64 = raw.into();
        log::warn!("unknown {} code {}", T::NAME, value);
        ContractViolation::UnknownCode {
            what: T::NAME,
            value,
        }
    })
}

/// Like [`decode`], but maps the encoded "none" value `0` to `None`.
pub(crate) fn decode_optional<T>(raw: T::Primitive) -> Result<Option<T>, ContractViolation>
where
    T: TryFromPrimitive,
    T::Primitive: Into<u64>,
{
    let value: u64 = raw.into();
    if value == 0 {
        return Ok(None);
    }
    decode(raw).map(Some)
}

/// Narrow a property value to the primitive encoding of `T`.
pub(crate) fn narrow<T>(raw: u32) -> Result<T::Primitive, ContractViolation>
where
    T: TryFromPrimitive,
    T::Primitive: TryFrom<u32>,
{
    <T::Primitive as TryFrom<u32>>::try_from(raw).map_err(|_| ContractViolation::UnknownCode {
        what: T::NAME,
        value: u64::from(raw),
    })
}
