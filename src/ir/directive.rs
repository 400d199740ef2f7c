use num_enum::{IntoPrimitive, TryFromPrimitive};

use super::{DIRECTIVE_KIND_BEGIN, Operand};
use crate::error::ContractViolation;
use crate::schema::enums::{
    Alignment, ControlDirective, Linkage, MachineModel, Profile, Round, Segment,
};
use crate::schema::types::{ARRAY_FLAG, TypeCode};

/// Directive formats
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum DirectiveKind {
    ArgBlockEnd = DIRECTIVE_KIND_BEGIN,
    ArgBlockStart,
    Comment,
    Control,
    Extension,
    Fbarrier,
    Function,
    IndirectFunction,
    Kernel,
    Label,
    Loc,
    Module,
    Pragma,
    Signature,
    Variable,
}

/// Top-level and in-body declarations
#[derive(Debug, Clone, Copy)]
pub enum Directive<'a> {
    ArgBlockEnd,
    ArgBlockStart,
    Comment(&'a str),
    Control(DirectiveControl<'a>),
    Extension(&'a str),
    Fbarrier(DirectiveFbarrier<'a>),
    Executable(DirectiveExecutable<'a>),
    Label(&'a str),
    Loc { line: u32, column: u32, filename: &'a str },
    Module(DirectiveModule<'a>),
    Pragma(&'a [Operand<'a>]),
    Signature(DirectiveExecutable<'a>),
    Variable(DirectiveVariable<'a>),
}

#[derive(Debug, Clone, Copy)]
pub struct DirectiveModule<'a> {
    pub name: &'a str,
    pub major: u32,
    pub minor: u32,
    pub profile: Profile,
    pub model: MachineModel,
    pub default_float_round: Round,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ExecutableKind {
    Kernel,
    Function,
    IndirectFunction,
}

/// Kernel, function, indirect function or signature
#[derive(Debug, Clone, Copy)]
pub struct DirectiveExecutable<'a> {
    pub kind: ExecutableKind,
    pub name: &'a str,
    pub linkage: Linkage,
    pub is_definition: bool,
    pub out_args: &'a [DirectiveVariable<'a>],
    pub in_args: &'a [DirectiveVariable<'a>],
}

impl<'a> DirectiveExecutable<'a> {
    /// The `index`th input argument.
    pub fn input_arg(&self, index: usize) -> Result<&'a DirectiveVariable<'a>, ContractViolation> {
        self.in_args
            .get(index)
            .ok_or(ContractViolation::ArgumentIndex {
                index,
                count: self.in_args.len(),
            })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DirectiveVariable<'a> {
    pub name: &'a str,
    /// Element type; see [`DirectiveVariable::is_array`].
    pub element_type: TypeCode,
    pub is_array: bool,
    /// Number of array elements, `0` for a scalar or an array of unspecified size.
    pub dim: u64,
    pub segment: Segment,
    pub linkage: Linkage,
    /// Alignment requested on the declaration.
    pub align: Alignment,
    pub is_definition: bool,
}

impl DirectiveVariable<'_> {
    /// Encoded BRIG type of the variable, with the array bit set for arrays.
    #[must_use]
    pub fn raw_type(&self) -> u16 {
        let ty = u16::from(self.element_type);
        if self.is_array { ty | ARRAY_FLAG } else { ty }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DirectiveFbarrier<'a> {
    pub name: &'a str,
    pub linkage: Linkage,
    pub is_definition: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct DirectiveControl<'a> {
    pub control: ControlDirective,
    pub operands: &'a [Operand<'a>],
}

impl<'a> Directive<'a> {
    #[must_use]
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Self::ArgBlockEnd => DirectiveKind::ArgBlockEnd,
            Self::ArgBlockStart => DirectiveKind::ArgBlockStart,
            Self::Comment(_) => DirectiveKind::Comment,
            Self::Control(_) => DirectiveKind::Control,
            Self::Extension(_) => DirectiveKind::Extension,
            Self::Fbarrier(_) => DirectiveKind::Fbarrier,
            Self::Executable(exec) => match exec.kind {
                ExecutableKind::Kernel => DirectiveKind::Kernel,
                ExecutableKind::Function => DirectiveKind::Function,
                ExecutableKind::IndirectFunction => DirectiveKind::IndirectFunction,
            },
            Self::Label(_) => DirectiveKind::Label,
            Self::Loc { .. } => DirectiveKind::Loc,
            Self::Module(_) => DirectiveKind::Module,
            Self::Pragma(_) => DirectiveKind::Pragma,
            Self::Signature(_) => DirectiveKind::Signature,
            Self::Variable(_) => DirectiveKind::Variable,
        }
    }

    /// If it is a variable, returns it. Returns `None` otherwise.
    #[must_use]
    pub fn as_variable(&self) -> Option<&DirectiveVariable<'a>> {
        match self {
            Self::Variable(var) => Some(var),
            _ => None,
        }
    }

    /// If it is a kernel or function, returns it. Returns `None` otherwise.
    #[must_use]
    pub fn as_executable(&self) -> Option<&DirectiveExecutable<'a>> {
        match self {
            Self::Executable(exec) => Some(exec),
            _ => None,
        }
    }

    /// If it is a control directive, returns it. Returns `None` otherwise.
    #[must_use]
    pub fn as_control(&self) -> Option<&DirectiveControl<'a>> {
        match self {
            Self::Control(ctl) => Some(ctl),
            _ => None,
        }
    }

    pub fn name(&self) -> Result<&'a str, ContractViolation> {
        match self {
            Self::Module(module) => Ok(module.name),
            Self::Executable(exec) | Self::Signature(exec) => Ok(exec.name),
            Self::Variable(var) => Ok(var.name),
            Self::Label(name) => Ok(*name),
            Self::Fbarrier(fbar) => Ok(fbar.name),
            _ => Err(self.unsupported("name")),
        }
    }

    /// Segment a symbol lives in. Fbarriers are always group memory.
    pub fn segment(&self) -> Result<Segment, ContractViolation> {
        match self {
            Self::Variable(var) => Ok(var.segment),
            Self::Fbarrier(_) => Ok(Segment::Group),
            _ => Err(self.unsupported("segment")),
        }
    }

    pub fn linkage(&self) -> Result<Linkage, ContractViolation> {
        match self {
            Self::Variable(var) => Ok(var.linkage),
            Self::Executable(exec) => Ok(exec.linkage),
            Self::Fbarrier(fbar) => Ok(fbar.linkage),
            _ => Err(self.unsupported("linkage")),
        }
    }

    pub fn is_definition(&self) -> Result<bool, ContractViolation> {
        match self {
            Self::Variable(var) => Ok(var.is_definition),
            Self::Fbarrier(fbar) => Ok(fbar.is_definition),
            Self::Executable(exec) => Ok(exec.is_definition),
            _ => Err(self.unsupported("is_definition")),
        }
    }

    pub fn is_declaration(&self) -> Result<bool, ContractViolation> {
        self.is_definition().map(|def| !def)
    }

    fn unsupported(&self, op: &'static str) -> ContractViolation {
        ContractViolation::UnsupportedDirective {
            op,
            what: self.kind().name(),
        }
    }
}

impl DirectiveKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ArgBlockEnd => "arg block end",
            Self::ArgBlockStart => "arg block start",
            Self::Comment => "comment",
            Self::Control => "control",
            Self::Extension => "extension",
            Self::Fbarrier => "fbarrier",
            Self::Function => "function",
            Self::IndirectFunction => "indirect function",
            Self::Kernel => "kernel",
            Self::Label => "label",
            Self::Loc => "loc",
            Self::Module => "module",
            Self::Pragma => "pragma",
            Self::Signature => "signature",
            Self::Variable => "variable",
        }
    }
}
