//! Closed set of MIDI message categories.
//!
//! Every decoded message maps to exactly one [`MessageCategory`]. The numeric
//! value (`category as u8`) is stable and is what diagnostics print.

use core::fmt;
use serde::{Deserialize, Serialize};

macro_rules! message_categories {
    ($( $(#[$meta:meta])* $variant:ident ),+ $(,)?) => {
        /// Semantic category of a 3-byte MIDI message.
        ///
        /// Channel voice messages get one tag each (`NoteOn`, `NoteOff`,
        /// `PitchBend`). Control Change messages get one tag per controller
        /// meaning, with `Undefined` shared by every controller number that has
        /// no assigned meaning. System real-time bytes get one tag each.
        /// `Unknown` is the fallback for everything else.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum MessageCategory {
            $( $(#[$meta])* $variant, )+
        }

        impl MessageCategory {
            /// Every category, ordered by numeric value.
            pub const ALL: &'static [MessageCategory] = &[$(MessageCategory::$variant),+];

            #[inline]
            pub const fn name(self) -> &'static str {
                match self {
                    $( MessageCategory::$variant => stringify!($variant), )+
                }
            }
        }
    };
}

message_categories! {
    // Channel voice
    NoteOn,
    NoteOff,
    /// Reserved: the classifier always resolves a concrete controller tag.
    ControlChange,
    PitchBend,
    /// Reserved: the classifier always resolves a concrete system tag.
    System,

    // Control Change (MSB / single-byte controllers and their LSB pairs)
    BankSelectMsb,
    BankSelectLsb,
    Modulation,
    ModulationLsb,
    BreathController,
    BreathControllerLsb,
    FootController,
    FootControllerLsb,
    PortamentoTime,
    PortamentoTimeLsb,
    DataEntry,
    DataEntryLsb,
    ChannelVolume,
    ChannelVolumeLsb,
    Balance,
    BalanceLsb,
    Pan,
    PanLsb,
    Expression,
    ExpressionLsb,
    EffectControl1,
    EffectControl1Lsb,
    EffectControl2,
    EffectControl2Lsb,
    GeneralPurposeController1,
    GeneralPurposeController2,
    GeneralPurposeController3,
    GeneralPurposeController4,
    GeneralPurposeController5,
    GeneralPurposeController6,
    GeneralPurposeController7,
    GeneralPurposeController8,
    GeneralPurposeController1Lsb,
    GeneralPurposeController2Lsb,
    GeneralPurposeController3Lsb,
    GeneralPurposeController4Lsb,

    // Switches and sound controllers
    Hold1,
    Portamento,
    Sostenuto,
    SoftPedal,
    LegatoFootswitch,
    Hold2,
    SoundVariation,
    HarmonicIntensity,
    ReleaseTime,
    AttackTime,
    Brightness,
    DecayTime,
    VibratoRate,
    VibratoDepth,
    VibratoDecay,
    PortamentoControl,

    // Effects depth
    Effect1Depth,
    Effect2Depth,
    Effect3Depth,
    Effect4Depth,
    Effect5Depth,

    // Parameter numbers
    DataIncrement,
    DataDecrement,
    NrpnLsb,
    NrpnMsb,
    RpnLsb,
    RpnMsb,

    // Channel mode
    AllSoundOff,
    ResetAllControllers,
    LocalControl,
    AllNoteOff,
    OmniOff,
    OmniOn,
    MonoOn,
    PolyOn,

    /// Controller number with no assigned meaning.
    Undefined,

    // System common (reserved, never produced by the classifier)
    MtcQuarterFrame,
    SongPositionPointer,
    SongSelect,
    TuneRequest,
    EndOfExclusive,

    // System real-time
    TimingClock,
    Start,
    Continue,
    Stop,
    ActiveSensing,
    SystemReset,

    /// Fallback for any message no other tier recognizes.
    Unknown,
}

impl MessageCategory {
    pub const COUNT: usize = Self::ALL.len();

    /// Look up a category by its numeric value.
    #[inline]
    pub fn from_repr(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Tags that exist for callers to register against but that
    /// [`classify`](crate::classify()) never returns.
    pub const fn is_reserved(self) -> bool {
        matches!(
            self,
            MessageCategory::ControlChange
                | MessageCategory::System
                | MessageCategory::MtcQuarterFrame
                | MessageCategory::SongPositionPointer
                | MessageCategory::SongSelect
                | MessageCategory::TuneRequest
                | MessageCategory::EndOfExclusive
        )
    }

    pub const fn is_realtime(self) -> bool {
        matches!(
            self,
            MessageCategory::TimingClock
                | MessageCategory::Start
                | MessageCategory::Continue
                | MessageCategory::Stop
                | MessageCategory::ActiveSensing
                | MessageCategory::SystemReset
        )
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
