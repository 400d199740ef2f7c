//! Profile and machine model legality of property values.
//!
//! Every check returns `Ok(())` when the value is legal, `Err(Error::Invalid)`
//! with a human readable reason when the program is not legal for the
//! target, and `Err(Error::Contract)` when the value itself is malformed.

use bitflags::bitflags;

use crate::error::{ContractViolation, Error, decode, decode_optional, narrow};
use crate::ir::{Directive, DirectiveModule, InstKind, Instruction, MAX_OPERANDS_NUM, Operand, PropertyId};
use crate::props::{get_image_segment_memory_scope, get_img_type, get_src_type, get_type};
use crate::schema::enums::{MachineModel, MemoryScope, Profile, Round};
use crate::schema::types::TypeCode;

bitflags! {
    /// Extensions enabled for a module
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Extensions: u32 {
        /// Images, samplers and the image segment
        const IMAGE = 1 << 0;
    }
}

/// What the code is being validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub model: MachineModel,
    pub profile: Profile,
    pub extensions: Extensions,
}

impl Target {
    /// Target without any extension enabled.
    #[must_use]
    pub fn new(model: MachineModel, profile: Profile) -> Self {
        Self {
            model,
            profile,
            extensions: Extensions::empty(),
        }
    }

    /// Target from BRIG-encoded machine model and profile codes.
    pub fn from_raw(model: u8, profile: u8) -> Result<Self, ContractViolation> {
        Ok(Self::new(decode(model)?, decode(profile)?))
    }

    /// Target declared by a module directive.
    #[must_use]
    pub fn from_module(module: &DirectiveModule<'_>) -> Self {
        Self::new(module.model, module.profile)
    }

    #[must_use]
    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions |= extensions;
        self
    }

    #[must_use]
    pub fn has_image_ext(&self) -> bool {
        self.extensions.contains(Extensions::IMAGE)
    }
}

const IMAGE_TYPES_NEED_EXT: &str =
    "Image and sampler types are only supported if the IMAGE extension has been specified";
const F64_NEEDS_FULL: &str = "f64 and f64x2 types are not supported by the Base profile";
const SIG64_NEEDS_LARGE: &str = "sig64 type is not supported by the small machine model";
const SIG32_NEEDS_SMALL: &str = "sig32 type is not supported by the large machine model";
const IMAGE_SEGMENT_NEEDS_EXT: &str =
    "Image segment is only allowed if the IMAGE extension has been specified";
const FTZ_REQUIRED: &str = "Base profile requires ftz modifier to be specified";
const FLOAT_ROUNDING: &str = "Base profile only supports default floating-point rounding mode";
const INTEGER_ROUNDING: &str = "Base profile only supports 'zeroi', 'zeroi_sat', 'szeroi' and 'szeroi_sat' integer rounding modes";

fn reject(prop: PropertyId, value: u32, reason: &'static str) -> Error {
    log::debug!("{prop:?} = {value} rejected: {reason}");
    Error::Invalid(reason)
}

/// Check a type or image segment memory scope value against the target.
///
/// The full profile accepts every value. Other properties always pass.
pub fn validate_prop(prop: PropertyId, value: u32, target: &Target) -> Result<(), Error> {
    if target.profile == Profile::Full {
        return Ok(());
    }

    if prop.is_type() {
        let Some(ty) = decode_optional::<TypeCode>(narrow::<TypeCode>(value)?)? else {
            return Ok(());
        };
        if ty.is_image_ext() && !target.has_image_ext() {
            return Err(reject(prop, value, IMAGE_TYPES_NEED_EXT));
        }
        if ty.is_full_profile_only() {
            return Err(reject(prop, value, F64_NEEDS_FULL));
        }
        if ty == TypeCode::Sig64 && target.model != MachineModel::Large {
            return Err(reject(prop, value, SIG64_NEEDS_LARGE));
        }
        if ty == TypeCode::Sig32 && target.model != MachineModel::Small {
            return Err(reject(prop, value, SIG32_NEEDS_SMALL));
        }
    } else if prop == PropertyId::ImageSegmentMemoryScope {
        let scope = decode_optional::<MemoryScope>(narrow::<MemoryScope>(value)?)?;
        if scope.is_some() && !target.has_image_ext() {
            return Err(reject(prop, value, IMAGE_SEGMENT_NEEDS_EXT));
        }
    }

    Ok(())
}

/// Check an ftz or rounding value against the values `legal` for the
/// instruction it appears on.
///
/// Other properties always pass.
pub fn validate_prop_values(
    prop: PropertyId,
    value: u32,
    legal: &[u32],
    target: &Target,
) -> Result<(), Error> {
    if target.profile == Profile::Full {
        return Ok(());
    }

    match prop {
        // An instruction with a single legal ftz value does not support ftz;
        // a mismatch there is reported by the operand checks.
        PropertyId::Ftz if value == 0 && legal.len() > 1 => {
            Err(reject(prop, value, FTZ_REQUIRED))
        }
        PropertyId::Round => {
            let round = decode::<Round>(narrow::<Round>(value)?)?;
            match round {
                Round::None
                | Round::FloatDefault
                | Round::IntegerZero
                | Round::IntegerZeroSat
                | Round::IntegerSignalingZero
                | Round::IntegerSignalingZeroSat => Ok(()),
                round if round.is_integer() => Err(reject(prop, value, INTEGER_ROUNDING)),
                _ => Err(reject(prop, value, FLOAT_ROUNDING)),
            }
        }
        _ => Ok(()),
    }
}

/// Check the current value of `prop` on `inst`.
///
/// Only type properties and the image segment memory scope are checked.
pub fn validate_inst_prop<I: Instruction + ?Sized>(
    inst: &I,
    prop: PropertyId,
    target: &Target,
) -> Result<(), Error> {
    if prop == PropertyId::ImageSegmentMemoryScope || prop.is_type() {
        return validate_prop(prop, inst.property_or(prop, 0), target);
    }
    Ok(())
}

/// Returns true if `inst` uses anything that needs the `IMAGE` extension.
pub fn has_image_ext_props<I: Instruction + ?Sized>(inst: &I) -> Result<bool, ContractViolation> {
    if inst.opcode().is_image() {
        return Ok(true);
    }

    let types = [get_type(inst)?, get_src_type(inst)?, get_img_type(inst)?];
    if types.into_iter().flatten().any(TypeCode::is_image_ext) {
        return Ok(true);
    }

    if inst.kind() == InstKind::MemFence && get_image_segment_memory_scope(inst)?.is_some() {
        return Ok(true);
    }

    let uses_image_var = (0..MAX_OPERANDS_NUM).any(|i| {
        inst.operand(i)
            .as_ref()
            .and_then(Operand::as_address)
            .and_then(|addr| addr.symbol)
            .and_then(Directive::as_variable)
            .is_some_and(|var| var.element_type.is_image_ext())
    });
    Ok(uses_image_var)
}
