#![allow(dead_code)]

use hsail_brig::ir::{InstKind, Instruction, Opcode, Operand, PropertyId};

/// Instruction backed by a plain property list
pub struct FakeInst<'a> {
    pub opcode: Opcode,
    pub kind: InstKind,
    pub props: Vec<(PropertyId, u32)>,
    pub operands: Vec<Option<Operand<'a>>>,
}

impl<'a> FakeInst<'a> {
    pub fn new(opcode: Opcode, kind: InstKind) -> Self {
        Self {
            opcode,
            kind,
            props: Vec::new(),
            operands: Vec::new(),
        }
    }

    pub fn with(mut self, prop: PropertyId, value: impl Into<u32>) -> Self {
        self.props.push((prop, value.into()));
        self
    }

    pub fn with_operand(mut self, operand: Operand<'a>) -> Self {
        self.operands.push(Some(operand));
        self
    }
}

impl Instruction for FakeInst<'_> {
    fn opcode(&self) -> Opcode {
        self.opcode
    }

    fn kind(&self) -> InstKind {
        self.kind
    }

    fn property(&self, prop: PropertyId) -> Option<u32> {
        self.props
            .iter()
            .find(|(id, _)| *id == prop)
            .map(|&(_, value)| value)
    }

    fn operand_count(&self) -> usize {
        self.operands.len()
    }

    fn operand(&self, index: usize) -> Option<Operand<'_>> {
        self.operands.get(index).copied().flatten()
    }
}
