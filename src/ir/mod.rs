//! Read-only view of the BRIG object model.
//!
//! Items are produced and owned elsewhere; this crate only ever borrows them
//! for the duration of a query.

pub mod codes;
mod directive;
mod operand;

use num_enum::{IntoPrimitive, TryFromPrimitive};

pub use self::codes::Opcode;
pub use self::directive::{
    Directive, DirectiveControl, DirectiveExecutable, DirectiveFbarrier, DirectiveKind,
    DirectiveModule, DirectiveVariable, ExecutableKind,
};
pub use self::operand::{
    OperandAddress, OperandConstantBytes, OperandKind, OperandRegister, Operand,
    aggregate_num_bytes, is_code_ref,
};

/// Maximum number of operand slots of an instruction.
pub const MAX_OPERANDS_NUM: usize = 6;

const DIRECTIVE_KIND_BEGIN: u16 = 0x1000;
const DIRECTIVE_KIND_END: u16 = 0x100f;
const INST_KIND_BEGIN: u16 = 0x2000;
const INST_KIND_END: u16 = 0x2012;
const OPERAND_KIND_BEGIN: u16 = 0x3000;
const OPERAND_KIND_END: u16 = 0x300d;

/// Returns true if a raw item kind denotes a directive.
#[must_use]
pub fn is_directive_kind(kind: u16) -> bool {
    (DIRECTIVE_KIND_BEGIN..DIRECTIVE_KIND_END).contains(&kind)
}

/// Returns true if a raw item kind denotes an instruction.
#[must_use]
pub fn is_inst_kind(kind: u16) -> bool {
    (INST_KIND_BEGIN..INST_KIND_END).contains(&kind)
}

/// Returns true if a raw item kind denotes an operand.
#[must_use]
pub fn is_operand_kind(kind: u16) -> bool {
    (OPERAND_KIND_BEGIN..OPERAND_KIND_END).contains(&kind)
}

/// Instruction formats
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum InstKind {
    Addr = INST_KIND_BEGIN,
    Atomic,
    Basic,
    Br,
    Cmp,
    Cvt,
    Image,
    Lane,
    Mem,
    MemFence,
    Mod,
    QueryImage,
    QuerySampler,
    Queue,
    Seg,
    SegCvt,
    Signal,
    SourceType,
}

/// Named instruction attributes readable through [`Instruction::property`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PropertyId {
    Type,
    SourceType,
    CoordType,
    SignalType,
    ImageType,
    Segment,
    Pack,
    EquivClass,
    Round,
    Ftz,
    Width,
    GlobalSegmentMemoryScope,
    GroupSegmentMemoryScope,
    ImageSegmentMemoryScope,
}

impl PropertyId {
    /// Returns true if the property holds a [`TypeCode`](crate::schema::types::TypeCode).
    #[must_use]
    pub fn is_type(self) -> bool {
        matches!(
            self,
            Self::Type | Self::SourceType | Self::CoordType | Self::SignalType | Self::ImageType
        )
    }
}

/// Property access over an encoded instruction.
///
/// Implemented by the IR layer, usually with a generated table mapping each
/// instruction format to the fields it encodes.
pub trait Instruction {
    fn opcode(&self) -> Opcode;

    fn kind(&self) -> InstKind;

    /// Raw encoded value of `prop`, or `None` if this instruction does not
    /// carry that property.
    fn property(&self, prop: PropertyId) -> Option<u32>;

    /// Number of operand slots in use.
    fn operand_count(&self) -> usize;

    /// Operand in slot `index`, `None` for an empty slot.
    fn operand(&self, index: usize) -> Option<Operand<'_>>;

    /// Value of `prop`, or `default` if the instruction does not carry it.
    fn property_or(&self, prop: PropertyId, default: u32) -> u32 {
        self.property(prop).unwrap_or(default)
    }
}
