mod common;

use common::FakeInst;
use hsail_brig::ir::{
    Directive, DirectiveModule, DirectiveVariable, InstKind, Opcode, Operand, OperandAddress,
    PropertyId,
};
use hsail_brig::schema::enums::{Alignment, Linkage, MemoryScope, Round, Segment};
use hsail_brig::validate::{
    has_image_ext_props, validate_inst_prop, validate_prop, validate_prop_values,
};
use hsail_brig::{ContractViolation, Error, Extensions, MachineModel, Profile, Target, TypeCode};
use pretty_assertions::assert_eq;

const BASE_SMALL: Target = Target {
    model: MachineModel::Small,
    profile: Profile::Base,
    extensions: Extensions::empty(),
};
const BASE_LARGE: Target = Target {
    model: MachineModel::Large,
    profile: Profile::Base,
    extensions: Extensions::empty(),
};

fn code(ty: TypeCode) -> u32 {
    u32::from(u16::from(ty))
}

fn round(round: Round) -> u32 {
    u32::from(u8::from(round))
}

fn reason(result: Result<(), Error>) -> Option<&'static str> {
    result.err().and_then(|err| err.reason())
}

#[test]
fn test_target() {
    let target = Target::from_raw(1, 0).unwrap();
    assert_eq!(target, BASE_LARGE);
    assert!(!target.has_image_ext());
    assert!(target.with_extensions(Extensions::IMAGE).has_image_ext());
    assert_eq!(
        Target::from_raw(2, 0),
        Err(ContractViolation::UnknownCode {
            what: "MachineModel",
            value: 2
        })
    );
    assert!(Target::from_raw(0, 7).is_err());

    let module = DirectiveModule {
        name: "&m",
        major: 1,
        minor: 0,
        profile: Profile::Full,
        model: MachineModel::Large,
        default_float_round: Round::FloatDefault,
    };
    assert_eq!(
        Target::from_module(&module),
        Target::new(MachineModel::Large, Profile::Full)
    );
}

#[test]
fn test_f64_needs_full_profile() {
    let f64_msg = Some("f64 and f64x2 types are not supported by the Base profile");
    for target in [BASE_SMALL, BASE_LARGE] {
        assert_eq!(reason(validate_prop(PropertyId::Type, code(TypeCode::F64), &target)), f64_msg);
        assert_eq!(
            reason(validate_prop(PropertyId::SourceType, code(TypeCode::F64X2), &target)),
            f64_msg
        );
        assert_eq!(validate_prop(PropertyId::Type, code(TypeCode::F32), &target), Ok(()));
    }

    for model in [MachineModel::Small, MachineModel::Large] {
        let full = Target::new(model, Profile::Full);
        assert_eq!(validate_prop(PropertyId::Type, code(TypeCode::F64), &full), Ok(()));
    }
}

#[test]
fn test_signal_types_follow_model() {
    assert_eq!(
        reason(validate_prop(PropertyId::SignalType, code(TypeCode::Sig64), &BASE_SMALL)),
        Some("sig64 type is not supported by the small machine model")
    );
    assert_eq!(
        reason(validate_prop(PropertyId::SignalType, code(TypeCode::Sig32), &BASE_LARGE)),
        Some("sig32 type is not supported by the large machine model")
    );
    assert_eq!(
        validate_prop(PropertyId::SignalType, code(TypeCode::Sig64), &BASE_LARGE),
        Ok(())
    );
    assert_eq!(
        validate_prop(PropertyId::SignalType, code(TypeCode::Sig32), &BASE_SMALL),
        Ok(())
    );
    let full = Target::new(MachineModel::Small, Profile::Full);
    assert_eq!(validate_prop(PropertyId::Type, code(TypeCode::Sig64), &full), Ok(()));
}

#[test]
fn test_image_types_need_extension() {
    let msg = Some(
        "Image and sampler types are only supported if the IMAGE extension has been specified",
    );
    assert_eq!(reason(validate_prop(PropertyId::ImageType, code(TypeCode::RoImg), &BASE_SMALL)), msg);
    assert_eq!(reason(validate_prop(PropertyId::Type, code(TypeCode::Samp), &BASE_LARGE)), msg);

    let target = BASE_SMALL.with_extensions(Extensions::IMAGE);
    assert_eq!(validate_prop(PropertyId::ImageType, code(TypeCode::RoImg), &target), Ok(()));
    assert_eq!(validate_prop(PropertyId::CoordType, code(TypeCode::Samp), &target), Ok(()));
}

#[test]
fn test_image_segment_scope() {
    let scope = u32::from(u8::from(MemoryScope::WorkGroup));
    assert_eq!(
        reason(validate_prop(PropertyId::ImageSegmentMemoryScope, scope, &BASE_SMALL)),
        Some("Image segment is only allowed if the IMAGE extension has been specified")
    );
    assert_eq!(
        validate_prop(PropertyId::ImageSegmentMemoryScope, 0, &BASE_SMALL),
        Ok(())
    );
    let target = BASE_SMALL.with_extensions(Extensions::IMAGE);
    assert_eq!(
        validate_prop(PropertyId::ImageSegmentMemoryScope, scope, &target),
        Ok(())
    );
    // other scopes are not subject to the extension
    assert_eq!(
        validate_prop(PropertyId::GlobalSegmentMemoryScope, scope, &BASE_SMALL),
        Ok(())
    );
}

#[test]
fn test_missing_and_unknown_values() {
    assert_eq!(validate_prop(PropertyId::Type, 0, &BASE_SMALL), Ok(()));
    assert_eq!(validate_prop(PropertyId::Segment, 999, &BASE_SMALL), Ok(()));

    let err = validate_prop(PropertyId::Type, 0xffff, &BASE_SMALL).unwrap_err();
    assert!(err.is_contract_violation());
    assert_eq!(err.reason(), None);

    let err = validate_prop(PropertyId::Type, 0x1_0000, &BASE_SMALL).unwrap_err();
    assert!(err.is_contract_violation());

    let err = validate_prop(PropertyId::ImageSegmentMemoryScope, 6, &BASE_SMALL).unwrap_err();
    assert!(err.is_contract_violation());
}

#[test]
fn test_ftz() {
    assert_eq!(
        reason(validate_prop_values(PropertyId::Ftz, 0, &[0, 1], &BASE_SMALL)),
        Some("Base profile requires ftz modifier to be specified")
    );
    assert_eq!(validate_prop_values(PropertyId::Ftz, 1, &[0, 1], &BASE_SMALL), Ok(()));
    assert_eq!(validate_prop_values(PropertyId::Ftz, 0, &[0], &BASE_SMALL), Ok(()));

    let full = Target::new(MachineModel::Small, Profile::Full);
    assert_eq!(validate_prop_values(PropertyId::Ftz, 0, &[0, 1], &full), Ok(()));
}

#[test]
fn test_rounding() {
    let accepted = [
        Round::None,
        Round::FloatDefault,
        Round::IntegerZero,
        Round::IntegerZeroSat,
        Round::IntegerSignalingZero,
        Round::IntegerSignalingZeroSat,
    ];
    for mode in accepted {
        assert_eq!(
            validate_prop_values(PropertyId::Round, round(mode), &[], &BASE_SMALL),
            Ok(()),
            "{mode:?}"
        );
    }

    assert!(Round::IntegerNearEven.is_integer());
    assert!(!Round::FloatZero.is_integer());
    assert!(!Round::None.is_integer());

    let float_msg = Some("Base profile only supports default floating-point rounding mode");
    for mode in [
        Round::FloatNearEven,
        Round::FloatZero,
        Round::FloatPlusInfinity,
        Round::FloatMinusInfinity,
    ] {
        assert_eq!(
            reason(validate_prop_values(PropertyId::Round, round(mode), &[], &BASE_LARGE)),
            float_msg
        );
    }

    let int_msg = Some(
        "Base profile only supports 'zeroi', 'zeroi_sat', 'szeroi' and 'szeroi_sat' integer rounding modes",
    );
    for mode in [
        Round::IntegerNearEven,
        Round::IntegerPlusInfinitySat,
        Round::IntegerSignalingMinusInfinity,
    ] {
        assert_eq!(
            reason(validate_prop_values(PropertyId::Round, round(mode), &[], &BASE_LARGE)),
            int_msg
        );
    }

    let full = Target::new(MachineModel::Large, Profile::Full);
    assert_eq!(
        validate_prop_values(PropertyId::Round, round(Round::FloatZero), &[], &full),
        Ok(())
    );

    let err = validate_prop_values(PropertyId::Round, 22, &[], &BASE_LARGE).unwrap_err();
    assert_eq!(
        err,
        Error::Contract(ContractViolation::UnknownCode {
            what: "Round",
            value: 22
        })
    );
}

#[test]
fn test_validate_inst_prop() {
    let inst = FakeInst::new(Opcode::Add, InstKind::Basic)
        .with(PropertyId::Type, u16::from(TypeCode::F64))
        .with(PropertyId::Round, u8::from(Round::FloatZero));

    assert_eq!(
        reason(validate_inst_prop(&inst, PropertyId::Type, &BASE_SMALL)),
        Some("f64 and f64x2 types are not supported by the Base profile")
    );
    // rounding needs the legal value set, so it is not checked here
    assert_eq!(validate_inst_prop(&inst, PropertyId::Round, &BASE_SMALL), Ok(()));
    // absent properties read as "none"
    assert_eq!(validate_inst_prop(&inst, PropertyId::SourceType, &BASE_SMALL), Ok(()));
}

#[test]
fn test_has_image_ext_props() {
    let rdimage = FakeInst::new(Opcode::RdImage, InstKind::Image);
    assert_eq!(has_image_ext_props(&rdimage), Ok(true));

    let amd = FakeInst::new(Opcode::AmdLdImageMip, InstKind::Image);
    assert_eq!(has_image_ext_props(&amd), Ok(true));

    let add = FakeInst::new(Opcode::Add, InstKind::Basic)
        .with(PropertyId::Type, u16::from(TypeCode::F32));
    assert_eq!(has_image_ext_props(&add), Ok(false));

    let mov = FakeInst::new(Opcode::Mov, InstKind::Basic)
        .with(PropertyId::Type, u16::from(TypeCode::RoImg));
    assert_eq!(has_image_ext_props(&mov), Ok(true));

    let fence = FakeInst::new(Opcode::MemFence, InstKind::MemFence)
        .with(PropertyId::ImageSegmentMemoryScope, u8::from(MemoryScope::Agent));
    assert_eq!(has_image_ext_props(&fence), Ok(true));

    let fence = FakeInst::new(Opcode::MemFence, InstKind::MemFence)
        .with(PropertyId::GlobalSegmentMemoryScope, u8::from(MemoryScope::Agent));
    assert_eq!(has_image_ext_props(&fence), Ok(false));

    let bad = FakeInst::new(Opcode::Mov, InstKind::Basic).with(PropertyId::Type, 0x7fu32);
    assert!(has_image_ext_props(&bad).is_err());
}

#[test]
fn test_image_variable_operand() {
    let image = Directive::Variable(DirectiveVariable {
        name: "&img",
        element_type: TypeCode::RwImg,
        is_array: false,
        dim: 0,
        segment: Segment::Global,
        linkage: Linkage::Module,
        align: Alignment::A8,
        is_definition: true,
    });
    let addr = OperandAddress {
        symbol: Some(&image),
        ..Default::default()
    };
    let ld = FakeInst::new(Opcode::Ld, InstKind::Mem)
        .with(PropertyId::Type, u16::from(TypeCode::B64))
        .with_operand(Operand::WaveSize)
        .with_operand(Operand::Address(addr));
    assert_eq!(has_image_ext_props(&ld), Ok(true));

    let scalar = Directive::Variable(DirectiveVariable {
        element_type: TypeCode::U64,
        ..*image.as_variable().unwrap()
    });
    let addr = OperandAddress {
        symbol: Some(&scalar),
        ..Default::default()
    };
    let ld = FakeInst::new(Opcode::Ld, InstKind::Mem)
        .with(PropertyId::Type, u16::from(TypeCode::U64))
        .with_operand(Operand::Address(addr));
    assert_eq!(has_image_ext_props(&ld), Ok(false));
}
