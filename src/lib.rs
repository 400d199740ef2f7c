//! Classification and profile validation for HSAIL BRIG modules.
//!
//! The crate answers two kinds of questions about an already parsed BRIG
//! item: which category a type, opcode or directive belongs to, and whether
//! a value is legal for a [`Target`] profile and machine model.

pub mod bytes;
pub mod control;
pub mod error;
pub mod ir;
pub mod module;
pub mod packing;
pub mod props;
pub mod types;
pub mod validate;

pub mod schema {
    pub mod enums;
    pub mod types;
}

pub use self::error::{ContractViolation, Error};
pub use self::module::{BrigModule, ModuleHeader, SectionHeader};
pub use self::schema::enums::{MachineModel, PackingMode, Profile};
pub use self::schema::types::TypeCode;
pub use self::validate::{Extensions, Target};
