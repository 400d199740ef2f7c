use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::{Directive, DirectiveKind, OPERAND_KIND_BEGIN};
use crate::error::{ContractViolation, Error};
use crate::schema::enums::{Alignment, RegisterKind};
use crate::schema::types::TypeCode;

/// Operand formats
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum OperandKind {
    Address = OPERAND_KIND_BEGIN,
    Align,
    CodeList,
    CodeRef,
    ConstantBytes,
    Reserved,
    ConstantImage,
    ConstantOperandList,
    ConstantSampler,
    OperandList,
    Register,
    String,
    WaveSize,
}

/// Instruction or directive operand
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Address(OperandAddress<'a>),
    Align(Alignment),
    CodeList(&'a [&'a Directive<'a>]),
    CodeRef(&'a Directive<'a>),
    ConstantBytes(OperandConstantBytes<'a>),
    /// Image constant of the given image type
    ConstantImage(TypeCode),
    ConstantOperandList(&'a [Operand<'a>]),
    /// Sampler constant of the given sampler type
    ConstantSampler(TypeCode),
    OperandList(&'a [Operand<'a>]),
    Register(OperandRegister),
    String(&'a str),
    WaveSize,
}

impl<'a> Operand<'a> {
    #[must_use]
    pub fn kind(&self) -> OperandKind {
        match self {
            Self::Address(_) => OperandKind::Address,
            Self::Align(_) => OperandKind::Align,
            Self::CodeList(_) => OperandKind::CodeList,
            Self::CodeRef(_) => OperandKind::CodeRef,
            Self::ConstantBytes(_) => OperandKind::ConstantBytes,
            Self::ConstantImage(_) => OperandKind::ConstantImage,
            Self::ConstantOperandList(_) => OperandKind::ConstantOperandList,
            Self::ConstantSampler(_) => OperandKind::ConstantSampler,
            Self::OperandList(_) => OperandKind::OperandList,
            Self::Register(_) => OperandKind::Register,
            Self::String(_) => OperandKind::String,
            Self::WaveSize => OperandKind::WaveSize,
        }
    }

    /// If it is an address, returns it. Returns `None` otherwise.
    #[must_use]
    pub fn as_address(&self) -> Option<&OperandAddress<'a>> {
        match self {
            Self::Address(addr) => Some(addr),
            _ => None,
        }
    }

    /// If it is a register, returns it. Returns `None` otherwise.
    #[must_use]
    pub fn as_register(&self) -> Option<&OperandRegister> {
        match self {
            Self::Register(reg) => Some(reg),
            _ => None,
        }
    }

    /// If it is a byte constant, returns it. Returns `None` otherwise.
    #[must_use]
    pub fn as_constant_bytes(&self) -> Option<&OperandConstantBytes<'a>> {
        match self {
            Self::ConstantBytes(cnst) => Some(cnst),
            _ => None,
        }
    }

    /// If it is a code reference, returns the referenced directive.
    #[must_use]
    pub fn as_code_ref(&self) -> Option<&'a Directive<'a>> {
        match self {
            Self::CodeRef(target) => Some(target),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_wavesize(&self) -> bool {
        matches!(self, Self::WaveSize)
    }
}

/// Memory address: `[symbol][reg + offset]`
#[derive(Debug, Clone, Copy, Default)]
pub struct OperandAddress<'a> {
    pub symbol: Option<&'a Directive<'a>>,
    pub reg: Option<OperandRegister>,
    pub offset: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperandRegister {
    pub kind: RegisterKind,
    pub num: u16,
}

impl OperandRegister {
    /// Register width in bits.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.kind.bits()
    }

    /// Register name, e.g. `$s3`
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.num)
    }
}

/// Typed constant stored as little-endian bytes
#[derive(Debug, Clone, Copy)]
pub struct OperandConstantBytes<'a> {
    pub ty: TypeCode,
    pub bytes: &'a [u8],
}

impl OperandConstantBytes<'_> {
    /// Size of the constant data in bits.
    #[must_use]
    pub fn size_bits(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Returns true if this is a single byte holding 0 or 1.
    #[must_use]
    pub fn is_b1(&self) -> bool {
        matches!(self.bytes, [0] | [1])
    }

    /// The `index`th 32-bit word of the constant.
    pub fn as_u32(&self, index: usize) -> Result<u32, ContractViolation> {
        index
            .checked_mul(4)
            .and_then(|start| Some(start..start.checked_add(4)?))
            .and_then(|range| self.bytes.get(range))
            .and_then(|word| word.first_chunk::<4>())
            .map(|word| u32::from_le_bytes(*word))
            .ok_or(ContractViolation::ConstantIndex {
                index,
                len: self.bytes.len(),
            })
    }

    /// The first two 32-bit words of the constant as a 64-bit value.
    pub fn as_u64(&self) -> Result<u64, ContractViolation> {
        let lo = self.as_u32(0)?;
        let hi = self.as_u32(1)?;
        Ok(u64::from(lo) | (u64::from(hi) << 32))
    }
}

/// Returns true if `operand` is a code reference to a directive of `kind`.
#[must_use]
pub fn is_code_ref(operand: &Operand<'_>, kind: DirectiveKind) -> bool {
    operand
        .as_code_ref()
        .is_some_and(|target| target.kind() == kind)
}

/// Byte size of an aggregate constant, including alignment padding.
pub fn aggregate_num_bytes(elements: &[Operand<'_>]) -> Result<u64, Error> {
    let mut num_bytes = 0u64;
    for element in elements {
        match element {
            Operand::ConstantBytes(cnst) => num_bytes += cnst.bytes.len() as u64,
            Operand::ConstantImage(ty) | Operand::ConstantSampler(ty) => {
                num_bytes += u64::from(ty.num_bytes())
            }
            Operand::Align(align) => {
                let align = u64::from(align.bytes());
                if align > 1 && num_bytes % align != 0 {
                    num_bytes += align - num_bytes % align;
                }
            }
            other => {
                return Err(ContractViolation::UnsupportedOperand {
                    op: "aggregate_num_bytes",
                    what: other.kind().name(),
                }
                .into());
            }
        }
    }
    Ok(num_bytes)
}

impl OperandKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Align => "align",
            Self::CodeList => "code list",
            Self::CodeRef => "code reference",
            Self::ConstantBytes => "constant bytes",
            Self::Reserved => "reserved",
            Self::ConstantImage => "image constant",
            Self::ConstantOperandList => "constant list",
            Self::ConstantSampler => "sampler constant",
            Self::OperandList => "operand list",
            Self::Register => "register",
            Self::String => "string",
            Self::WaveSize => "wavesize",
        }
    }
}
