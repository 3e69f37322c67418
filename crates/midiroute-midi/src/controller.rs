//! Control Change controller table (MIDI 1.0, controller numbers 0-127).

use crate::category::MessageCategory::{self, *};

/// Category for every controller number, indexed by `data1` of a `0xBn` message.
///
/// Numbers without an assigned meaning map to [`MessageCategory::Undefined`].
#[rustfmt::skip]
pub const CONTROLLER_TABLE: [MessageCategory; 128] = [
    // 0-7
    BankSelectMsb, Modulation, BreathController, Undefined,
    FootController, PortamentoTime, DataEntry, ChannelVolume,
    // 8-15
    Balance, Undefined, Pan, Expression,
    EffectControl1, EffectControl2, Undefined, Undefined,
    // 16-23
    GeneralPurposeController1, GeneralPurposeController2, GeneralPurposeController3, GeneralPurposeController4,
    Undefined, Undefined, Undefined, Undefined,
    // 24-31
    Undefined, Undefined, Undefined, Undefined,
    Undefined, Undefined, Undefined, Undefined,
    // 32-39
    BankSelectLsb, ModulationLsb, BreathControllerLsb, Undefined,
    FootControllerLsb, PortamentoTimeLsb, DataEntryLsb, ChannelVolumeLsb,
    // 40-47
    BalanceLsb, Undefined, PanLsb, ExpressionLsb,
    EffectControl1Lsb, EffectControl2Lsb, Undefined, Undefined,
    // 48-55
    GeneralPurposeController1Lsb, GeneralPurposeController2Lsb, GeneralPurposeController3Lsb, GeneralPurposeController4Lsb,
    Undefined, Undefined, Undefined, Undefined,
    // 56-63
    Undefined, Undefined, Undefined, Undefined,
    Undefined, Undefined, Undefined, Undefined,
    // 64-71
    Hold1, Portamento, Sostenuto, SoftPedal,
    LegatoFootswitch, Hold2, SoundVariation, HarmonicIntensity,
    // 72-79
    ReleaseTime, AttackTime, Brightness, DecayTime,
    VibratoRate, VibratoDepth, VibratoDecay, Undefined,
    // 80-87
    GeneralPurposeController5, GeneralPurposeController6, GeneralPurposeController7, GeneralPurposeController8,
    PortamentoControl, Undefined, Undefined, Undefined,
    // 88-95
    Undefined, Undefined, Undefined, Effect1Depth,
    Effect2Depth, Effect3Depth, Effect4Depth, Effect5Depth,
    // 96-103
    DataIncrement, DataDecrement, NrpnLsb, NrpnMsb,
    RpnLsb, RpnMsb, Undefined, Undefined,
    // 104-111
    Undefined, Undefined, Undefined, Undefined,
    Undefined, Undefined, Undefined, Undefined,
    // 112-119
    Undefined, Undefined, Undefined, Undefined,
    Undefined, Undefined, Undefined, Undefined,
    // 120-127 (channel mode)
    AllSoundOff, ResetAllControllers, LocalControl, AllNoteOff,
    OmniOff, OmniOn, MonoOn, PolyOn,
];

/// Category of a controller number. Values outside 0-127 are not valid data
/// bytes and yield [`MessageCategory::Unknown`].
#[inline]
pub fn controller_category(cc: u8) -> MessageCategory {
    CONTROLLER_TABLE
        .get(cc as usize)
        .copied()
        .unwrap_or(Unknown)
}
