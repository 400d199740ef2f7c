use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Conformance profile
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Profile {
    /// Restricted profile: no f64, no non-default float rounding.
    Base = 0,
    Full = 1,
}

/// Addressing width of the target
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum MachineModel {
    /// 32-bit addressing
    Small = 0,
    /// 64-bit addressing
    Large = 1,
}

impl MachineModel {
    /// Width in bits of a flat address.
    #[must_use]
    pub fn address_bits(self) -> u32 {
        match self {
            Self::Small => 32,
            Self::Large => 64,
        }
    }
}

/// Memory segments. `0` (no segment) is `Option::None`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Segment {
    Flat = 1,
    Global = 2,
    Readonly = 3,
    Kernarg = 4,
    Group = 5,
    Private = 6,
    Spill = 7,
    Arg = 8,
}

/// Rounding modes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Round {
    None = 0,
    FloatDefault = 1,
    FloatNearEven = 2,
    FloatZero = 3,
    FloatPlusInfinity = 4,
    FloatMinusInfinity = 5,
    IntegerNearEven = 6,
    /// `zeroi`
    IntegerZero = 7,
    IntegerPlusInfinity = 8,
    IntegerMinusInfinity = 9,
    IntegerNearEvenSat = 10,
    /// `zeroi_sat`
    IntegerZeroSat = 11,
    IntegerPlusInfinitySat = 12,
    IntegerMinusInfinitySat = 13,
    IntegerSignalingNearEven = 14,
    /// `szeroi`
    IntegerSignalingZero = 15,
    IntegerSignalingPlusInfinity = 16,
    IntegerSignalingMinusInfinity = 17,
    IntegerSignalingNearEvenSat = 18,
    /// `szeroi_sat`
    IntegerSignalingZeroSat = 19,
    IntegerSignalingPlusInfinitySat = 20,
    IntegerSignalingMinusInfinitySat = 21,
}

impl Round {
    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(
            self,
            Self::FloatDefault
                | Self::FloatNearEven
                | Self::FloatZero
                | Self::FloatPlusInfinity
                | Self::FloatMinusInfinity
        )
    }

    #[must_use]
    pub fn is_integer(self) -> bool {
        !matches!(self, Self::None) && !self.is_float()
    }
}

/// Memory scopes. `0` (no scope) is `Option::None`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum MemoryScope {
    WorkItem = 1,
    Wavefront = 2,
    WorkGroup = 3,
    Agent = 4,
    System = 5,
}

/// Packing modes of packed arithmetic. `0` (no packing) is `Option::None`.
///
/// The first letter describes the first source operand, the second letter
/// the second one: `p` is per-element, `s` broadcasts lane 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum PackingMode {
    Pp = 1,
    Ps = 2,
    Sp = 3,
    Ss = 4,
    S = 5,
    P = 6,
    PpSat = 7,
    PsSat = 8,
    SpSat = 9,
    SsSat = 10,
    SSat = 11,
    PSat = 12,
}

/// Kernel launch control directives
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum ControlDirective {
    EnableBreakExceptions = 1,
    EnableDetectExceptions = 2,
    MaxDynamicGroupSize = 3,
    MaxFlatGridSize = 4,
    MaxFlatWorkgroupSize = 5,
    RequiredDim = 6,
    RequiredGridSize = 7,
    RequiredWorkgroupSize = 8,
    RequireNoPartialWorkgroups = 9,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Linkage {
    None = 0,
    Program = 1,
    Module = 2,
    Function = 3,
    Arg = 4,
}

/// Encoded power-of-two alignment
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Alignment {
    None = 0,
    A1 = 1,
    A2 = 2,
    A4 = 3,
    A8 = 4,
    A16 = 5,
    A32 = 6,
    A64 = 7,
    A128 = 8,
    A256 = 9,
}

impl Alignment {
    pub const MAX: Alignment = Alignment::A256;

    /// Alignment in bytes, `0` for `None`.
    #[must_use]
    pub fn bytes(self) -> u32 {
        match self {
            Self::None => 0,
            other => 1 << (u8::from(other) - 1),
        }
    }

    /// Inverse of [`Alignment::bytes`]; `None` unless `bytes` is a power of
    /// two no larger than [`Alignment::MAX`].
    #[must_use]
    pub fn from_bytes(bytes: u32) -> Option<Self> {
        if !bytes.is_power_of_two() {
            return None;
        }
        let encoded = u8::try_from(bytes.trailing_zeros() + 1).ok()?;
        Self::try_from_primitive(encoded).ok()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum RegisterKind {
    /// `$c` registers
    Control = 0,
    /// `$s` registers
    Single = 1,
    /// `$d` registers
    Double = 2,
    /// `$q` registers
    Quad = 3,
}

impl RegisterKind {
    #[must_use]
    pub fn bits(self) -> u32 {
        match self {
            Self::Control => 1,
            Self::Single => 32,
            Self::Double => 64,
            Self::Quad => 128,
        }
    }

    /// Register name prefix, e.g. `$s`
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Control => "$c",
            Self::Single => "$s",
            Self::Double => "$d",
            Self::Quad => "$q",
        }
    }

    /// Kind of a register named like `$d4`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.as_bytes() {
            [b'$', b'c', ..] => Some(Self::Control),
            [b'$', b's', ..] => Some(Self::Single),
            [b'$', b'd', ..] => Some(Self::Double),
            [b'$', b'q', ..] => Some(Self::Quad),
            _ => None,
        }
    }
}

/// Lane grouping width of cross-lane and branch instructions
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Width {
    None = 0,
    W1 = 1,
    W2 = 2,
    W4 = 3,
    W8 = 4,
    W16 = 5,
    W32 = 6,
    W64 = 7,
    W128 = 8,
    W256 = 9,
    W512 = 10,
    W1024 = 11,
    W2048 = 12,
    W4096 = 13,
    W8192 = 14,
    W16384 = 15,
    W32768 = 16,
    W65536 = 17,
    W131072 = 18,
    W262144 = 19,
    W524288 = 20,
    W1048576 = 21,
    W2097152 = 22,
    W4194304 = 23,
    W8388608 = 24,
    W16777216 = 25,
    W33554432 = 26,
    W67108864 = 27,
    W134217728 = 28,
    W268435456 = 29,
    W536870912 = 30,
    W1073741824 = 31,
    W2147483648 = 32,
    WaveSize = 33,
    All = 34,
}

impl Width {
    /// Number of lanes for the numeric widths.
    #[must_use]
    pub fn lanes(self) -> Option<u64> {
        match self {
            Self::None | Self::WaveSize | Self::All => None,
            other => Some(1 << (u8::from(other) - 1)),
        }
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::WaveSize => write!(f, "width(WAVESIZE)"),
            Self::All => write!(f, "width(all)"),
            other => match other.lanes() {
                Some(lanes) => write!(f, "width({lanes})"),
                None => Ok(()),
            },
        }
    }
}

/// Indices of the standard module sections
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum SectionIndex {
    /// `hsa_data`
    Data = 0,
    /// `hsa_code`
    Code = 1,
    /// `hsa_operand`
    Operand = 2,
}
