use num_enum::{IntoPrimitive, TryFromPrimitive};

/// First opcode value available to vendor extensions.
pub const FIRST_USER_DEFINED_OPCODE: u16 = 1 << 15;

/// Core BRIG opcodes and the AMD image extension opcodes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum Opcode {
    Nop = 0,
    Abs = 1,
    Add = 2,
    Borrow = 3,
    Carry = 4,
    Ceil = 5,
    CopySign = 6,
    Div = 7,
    Floor = 8,
    Fma = 9,
    Fract = 10,
    Mad = 11,
    Max = 12,
    Min = 13,
    Mul = 14,
    MulHi = 15,
    Neg = 16,
    Rem = 17,
    Rint = 18,
    Sqrt = 19,
    Sub = 20,
    Trunc = 21,
    Mad24 = 22,
    Mad24Hi = 23,
    Mul24 = 24,
    Mul24Hi = 25,
    Shl = 26,
    Shr = 27,
    And = 28,
    Or = 29,
    Xor = 30,
    Not = 31,
    BitExtract = 32,
    BitInsert = 33,
    BitMask = 34,
    BitRev = 35,
    BitSelect = 36,
    FirstBit = 37,
    LastBit = 38,
    PopCount = 39,
    Combine = 40,
    Expand = 41,
    Lda = 42,
    Mov = 43,
    Shuffle = 44,
    UnpackHi = 45,
    UnpackLo = 46,
    Pack = 47,
    Unpack = 48,
    Cmov = 49,
    Class = 50,
    NCos = 51,
    NExp2 = 52,
    NFma = 53,
    NLog2 = 54,
    NRcp = 55,
    NRsqrt = 56,
    NSin = 57,
    NSqrt = 58,
    BitAlign = 59,
    ByteAlign = 60,
    PackCvt = 61,
    UnpackCvt = 62,
    Lerp = 63,
    Sad = 64,
    SadHi = 65,
    SegmentP = 66,
    FtoS = 67,
    StoF = 68,
    Cmp = 69,
    Cvt = 70,
    Ld = 71,
    St = 72,
    Atomic = 73,
    AtomicNoRet = 74,
    Signal = 75,
    SignalNoRet = 76,
    MemFence = 77,
    RdImage = 78,
    LdImage = 79,
    StImage = 80,
    ImageFence = 81,
    QueryImage = 82,
    QuerySampler = 83,
    Cbr = 84,
    Br = 85,
    Sbr = 86,
    Barrier = 87,
    WaveBarrier = 88,
    ArriveFbar = 89,
    InitFbar = 90,
    JoinFbar = 91,
    LeaveFbar = 92,
    ReleaseFbar = 93,
    WaitFbar = 94,
    Ldf = 95,
    ActiveLaneCount = 96,
    ActiveLaneId = 97,
    ActiveLaneMask = 98,
    ActiveLanePermute = 99,
    Call = 100,
    Scall = 101,
    Icall = 102,
    Ret = 103,
    Alloca = 104,
    CurrentWorkgroupSize = 105,
    CurrentWorkitemFlatId = 106,
    Dim = 107,
    GridGroups = 108,
    GridSize = 109,
    PacketCompletionSig = 110,
    PacketId = 111,
    WorkgroupId = 112,
    WorkgroupSize = 113,
    WorkitemAbsId = 114,
    WorkitemFlatAbsId = 115,
    WorkitemFlatId = 116,
    WorkitemId = 117,
    ClearDetectExcept = 118,
    GetDetectExcept = 119,
    SetDetectExcept = 120,
    AddQueueWriteIndex = 121,
    CasQueueWriteIndex = 122,
    LdQueueReadIndex = 123,
    LdQueueWriteIndex = 124,
    StQueueReadIndex = 125,
    StQueueWriteIndex = 126,
    Clock = 127,
    CuId = 128,
    DebugTrap = 129,
    GroupBasePtr = 130,
    KernargBasePtr = 131,
    LaneId = 132,
    MaxCuId = 133,
    MaxWaveId = 134,
    NullPtr = 135,
    WaveId = 136,

    // AMD image extension
    AmdRdImageLod = FIRST_USER_DEFINED_OPCODE,
    AmdRdImageGrad,
    AmdLdImageMip,
    AmdStImageMip,
}
