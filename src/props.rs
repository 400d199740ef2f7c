//! Typed access to instruction properties and opcode classification.

use num_enum::TryFromPrimitive;

use crate::error::{ContractViolation, decode_optional, narrow};
use crate::ir::{Instruction, Opcode, OperandAddress, PropertyId};
use crate::schema::enums::{MachineModel, MemoryScope, PackingMode, Segment};
use crate::schema::types::TypeCode;

fn type_prop<I: Instruction + ?Sized>(
    inst: &I,
    prop: PropertyId,
) -> Result<Option<TypeCode>, ContractViolation> {
    decode_optional(narrow::<TypeCode>(inst.property_or(prop, 0))?)
}

fn enum_prop<T, I>(inst: &I, prop: PropertyId) -> Result<Option<T>, ContractViolation>
where
    T: TryFromPrimitive,
    T::Primitive: TryFrom<u32> + Into<u64>,
    I: Instruction + ?Sized,
{
    decode_optional(narrow::<T>(inst.property_or(prop, 0))?)
}

/// Result type, `None` if the instruction has none.
pub fn get_type<I: Instruction + ?Sized>(inst: &I) -> Result<Option<TypeCode>, ContractViolation> {
    type_prop(inst, PropertyId::Type)
}

pub fn get_src_type<I: Instruction + ?Sized>(
    inst: &I,
) -> Result<Option<TypeCode>, ContractViolation> {
    type_prop(inst, PropertyId::SourceType)
}

/// Coordinate type of an image instruction.
pub fn get_crd_type<I: Instruction + ?Sized>(
    inst: &I,
) -> Result<Option<TypeCode>, ContractViolation> {
    type_prop(inst, PropertyId::CoordType)
}

pub fn get_sig_type<I: Instruction + ?Sized>(
    inst: &I,
) -> Result<Option<TypeCode>, ContractViolation> {
    type_prop(inst, PropertyId::SignalType)
}

pub fn get_img_type<I: Instruction + ?Sized>(
    inst: &I,
) -> Result<Option<TypeCode>, ContractViolation> {
    type_prop(inst, PropertyId::ImageType)
}

pub fn get_segment<I: Instruction + ?Sized>(inst: &I) -> Result<Option<Segment>, ContractViolation> {
    enum_prop(inst, PropertyId::Segment)
}

pub fn get_packing<I: Instruction + ?Sized>(
    inst: &I,
) -> Result<Option<PackingMode>, ContractViolation> {
    enum_prop(inst, PropertyId::Pack)
}

pub fn get_image_segment_memory_scope<I: Instruction + ?Sized>(
    inst: &I,
) -> Result<Option<MemoryScope>, ContractViolation> {
    enum_prop(inst, PropertyId::ImageSegmentMemoryScope)
}

/// Equivalence class of a memory instruction, `0` if it has none.
pub fn get_eq_class<I: Instruction + ?Sized>(inst: &I) -> u32 {
    inst.property_or(PropertyId::EquivClass, 0)
}

pub fn get_operands_num<I: Instruction + ?Sized>(inst: &I) -> usize {
    inst.operand_count()
}

impl Opcode {
    /// Image access and query instructions, including the AMD image
    /// extension opcodes.
    #[must_use]
    pub fn is_image(self) -> bool {
        matches!(
            self,
            Self::RdImage
                | Self::LdImage
                | Self::StImage
                | Self::AmdRdImageLod
                | Self::AmdRdImageGrad
                | Self::AmdLdImageMip
                | Self::AmdStImageMip
                | Self::QueryImage
                | Self::QuerySampler
        )
    }

    #[must_use]
    pub fn is_call(self) -> bool {
        matches!(self, Self::Call | Self::Scall | Self::Icall)
    }

    #[must_use]
    pub fn is_branch(self) -> bool {
        matches!(self, Self::Br | Self::Cbr | Self::Sbr)
    }

    /// Instructions that end a basic block unconditionally.
    #[must_use]
    pub fn is_term(self) -> bool {
        matches!(self, Self::Br | Self::Sbr | Self::Ret)
    }

    #[must_use]
    pub fn is_int_arith(self) -> bool {
        matches!(
            self,
            Self::Abs
                | Self::Add
                | Self::Borrow
                | Self::Carry
                | Self::Div
                | Self::Max
                | Self::Min
                | Self::Mul
                | Self::MulHi
                | Self::Neg
                | Self::Rem
                | Self::Sub
        )
    }

    #[must_use]
    pub fn is_int_shift(self) -> bool {
        matches!(self, Self::Shl | Self::Shr)
    }

    #[must_use]
    pub fn is_bit_arith(self) -> bool {
        matches!(
            self,
            Self::And | Self::Or | Self::Xor | Self::Not | Self::PopCount
        )
    }
}

/// Width in bits of an address operand, `0` if it could be either.
pub fn addr_size(addr: &OperandAddress<'_>, model: MachineModel) -> Result<u32, ContractViolation> {
    if let Some(reg) = &addr.reg {
        return Ok(reg.size());
    }
    if let Some(symbol) = addr.symbol {
        return Ok(seg_addr_size(Some(symbol.segment()?), model));
    }
    Ok(0)
}

/// Width in bits of an address into `segment`.
#[must_use]
pub fn seg_addr_size(segment: Option<Segment>, model: MachineModel) -> u32 {
    match segment {
        Some(Segment::Flat | Segment::Global | Segment::Readonly | Segment::Kernarg) => {
            model.address_bits()
        }
        _ => 32,
    }
}

/// Segments whose variables can have their address taken.
#[must_use]
pub fn is_addressable_segment(segment: Segment) -> bool {
    !matches!(segment, Segment::Arg | Segment::Spill)
}
