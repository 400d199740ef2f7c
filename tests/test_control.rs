use hsail_brig::control::validate_control;
use hsail_brig::ir::{DirectiveControl, Operand, OperandConstantBytes, OperandRegister};
use hsail_brig::schema::enums::{ControlDirective, RegisterKind};
use hsail_brig::{ContractViolation, Error, TypeCode};
use pretty_assertions::assert_eq;

const ALL_CONTROLS: [ControlDirective; 9] = [
    ControlDirective::EnableBreakExceptions,
    ControlDirective::EnableDetectExceptions,
    ControlDirective::MaxDynamicGroupSize,
    ControlDirective::MaxFlatGridSize,
    ControlDirective::MaxFlatWorkgroupSize,
    ControlDirective::RequiredDim,
    ControlDirective::RequiredGridSize,
    ControlDirective::RequiredWorkgroupSize,
    ControlDirective::RequireNoPartialWorkgroups,
];

fn u32_imm(bytes: &[u8; 4]) -> Operand<'_> {
    Operand::ConstantBytes(OperandConstantBytes {
        ty: TypeCode::U32,
        bytes,
    })
}

fn u64_imm(bytes: &[u8; 8]) -> Operand<'_> {
    Operand::ConstantBytes(OperandConstantBytes {
        ty: TypeCode::U64,
        bytes,
    })
}

#[test]
fn test_operand_types() {
    let table: Vec<(ControlDirective, usize, Option<TypeCode>)> = ALL_CONTROLS
        .into_iter()
        .map(|ctl| (ctl, ctl.arity(), ctl.operand_type(0)))
        .collect();
    assert_eq!(
        table,
        vec![
            (ControlDirective::EnableBreakExceptions, 1, Some(TypeCode::U32)),
            (ControlDirective::EnableDetectExceptions, 1, Some(TypeCode::U32)),
            (ControlDirective::MaxDynamicGroupSize, 1, Some(TypeCode::U32)),
            (ControlDirective::MaxFlatGridSize, 1, Some(TypeCode::U64)),
            (ControlDirective::MaxFlatWorkgroupSize, 1, Some(TypeCode::U32)),
            (ControlDirective::RequiredDim, 1, Some(TypeCode::U32)),
            (ControlDirective::RequiredGridSize, 3, Some(TypeCode::U64)),
            (ControlDirective::RequiredWorkgroupSize, 3, Some(TypeCode::U32)),
            (ControlDirective::RequireNoPartialWorkgroups, 0, None),
        ]
    );
    assert_eq!(
        ControlDirective::RequiredGridSize.operand_type(2),
        Some(TypeCode::U64)
    );
    assert_eq!(ControlDirective::RequiredGridSize.operand_type(3), None);
    assert_eq!(ControlDirective::MaxFlatGridSize.operand_type(1), None);
}

#[test]
fn test_operand_bounds() {
    let dim = ControlDirective::RequiredDim;
    assert_eq!(
        dim.validate_operand_bounds(0, 0),
        Err(Error::Invalid("Operand value must be in the range [1..3]"))
    );
    assert_eq!(dim.validate_operand_bounds(0, 1), Ok(()));
    assert_eq!(dim.validate_operand_bounds(0, 3), Ok(()));
    assert!(dim.validate_operand_bounds(0, 4).is_err());

    for ctl in [
        ControlDirective::MaxFlatGridSize,
        ControlDirective::MaxFlatWorkgroupSize,
        ControlDirective::RequiredGridSize,
        ControlDirective::RequiredWorkgroupSize,
    ] {
        assert_eq!(
            ctl.validate_operand_bounds(0, 0),
            Err(Error::Invalid("Operand value must be greater than 0")),
            "{ctl:?}"
        );
        assert_eq!(ctl.validate_operand_bounds(0, 1), Ok(()));
    }

    assert_eq!(
        ControlDirective::MaxDynamicGroupSize.validate_operand_bounds(0, 0),
        Ok(())
    );
    assert_eq!(
        ControlDirective::EnableBreakExceptions.validate_operand_bounds(0, 0),
        Ok(())
    );
}

#[test]
fn test_wavesize_support() {
    let allowed: Vec<ControlDirective> = ALL_CONTROLS
        .into_iter()
        .filter(|ctl| ctl.allows_wavesize())
        .collect();
    assert_eq!(
        allowed,
        vec![
            ControlDirective::MaxFlatGridSize,
            ControlDirective::MaxFlatWorkgroupSize,
            ControlDirective::RequiredGridSize,
            ControlDirective::RequiredWorkgroupSize,
        ]
    );
}

#[test]
fn test_validate_control() {
    let one = [1, 0, 0, 0];
    let zero = [0, 0, 0, 0];
    let big = [0, 0, 0, 0, 1, 0, 0, 0];

    let operands = [u32_imm(&one), Operand::WaveSize, u32_imm(&one)];
    let ctl = DirectiveControl {
        control: ControlDirective::RequiredWorkgroupSize,
        operands: &operands,
    };
    assert_eq!(validate_control(&ctl), Ok(()));

    let operands = [u64_imm(&big), u64_imm(&big), u64_imm(&big)];
    let ctl = DirectiveControl {
        control: ControlDirective::RequiredGridSize,
        operands: &operands,
    };
    assert_eq!(validate_control(&ctl), Ok(()));

    let ctl = DirectiveControl {
        control: ControlDirective::RequireNoPartialWorkgroups,
        operands: &[],
    };
    assert_eq!(validate_control(&ctl), Ok(()));

    let operands = [u32_imm(&one), u32_imm(&one)];
    let ctl = DirectiveControl {
        control: ControlDirective::RequiredDim,
        operands: &operands,
    };
    assert_eq!(
        validate_control(&ctl),
        Err(Error::Invalid("Invalid number of operands"))
    );

    let operands = [Operand::WaveSize];
    let ctl = DirectiveControl {
        control: ControlDirective::MaxDynamicGroupSize,
        operands: &operands,
    };
    assert_eq!(
        validate_control(&ctl),
        Err(Error::Invalid(
            "WAVESIZE is not supported by this control directive"
        ))
    );

    let operands = [u64_imm(&big)];
    let ctl = DirectiveControl {
        control: ControlDirective::MaxFlatWorkgroupSize,
        operands: &operands,
    };
    assert_eq!(validate_control(&ctl), Err(Error::Invalid("Invalid operand type")));

    let operands = [u32_imm(&zero)];
    let ctl = DirectiveControl {
        control: ControlDirective::MaxFlatWorkgroupSize,
        operands: &operands,
    };
    assert_eq!(
        validate_control(&ctl),
        Err(Error::Invalid("Operand value must be greater than 0"))
    );

    let operands = [Operand::Register(OperandRegister {
        kind: RegisterKind::Single,
        num: 0,
    })];
    let ctl = DirectiveControl {
        control: ControlDirective::RequiredDim,
        operands: &operands,
    };
    assert_eq!(
        validate_control(&ctl),
        Err(Error::Invalid(
            "Control directive operands must be immediate values"
        ))
    );
}

#[test]
fn test_short_constant_is_contract_violation() {
    let short = [1, 0];
    let operands = [Operand::ConstantBytes(OperandConstantBytes {
        ty: TypeCode::U32,
        bytes: &short,
    })];
    let ctl = DirectiveControl {
        control: ControlDirective::RequiredDim,
        operands: &operands,
    };
    assert!(validate_control(&ctl).unwrap_err().is_contract_violation());
}

#[test]
fn test_decode_control_kind() {
    assert_eq!(
        ControlDirective::from_raw(7),
        Ok(ControlDirective::RequiredGridSize)
    );
    for raw in [0, 10, 0xffff] {
        assert_eq!(
            ControlDirective::from_raw(raw),
            Err(ContractViolation::UnknownCode {
                what: "ControlDirective",
                value: u64::from(raw)
            })
        );
    }
}
