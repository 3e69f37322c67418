//! Status-byte classifier.
//!
//! Three tiers, evaluated in order:
//! 1. System messages (`status >= 0xF0`) resolve through the real-time byte set.
//! 2. Channel messages resolve on the upper nibble of `status`; Control Change
//!    goes through [`CONTROLLER_TABLE`](crate::CONTROLLER_TABLE).
//! 3. Note On with velocity 0 is rewritten to Note Off.

use tracing::debug;

use crate::category::MessageCategory;
use crate::controller::controller_category;

pub const NOTE_OFF: u8 = 0x80;
pub const NOTE_ON: u8 = 0x90;
pub const CONTROL_CHANGE: u8 = 0xB0;
pub const PITCH_BEND: u8 = 0xE0;
pub const SYSTEM: u8 = 0xF0;

/// Classify a raw 3-byte message. Total: every input yields a category.
pub fn classify(status: u8, data1: u8, data2: u8) -> MessageCategory {
    let category = if status >= SYSTEM {
        classify_system(status, data1, data2)
    } else {
        classify_channel(status, data1, data2)
    };

    // Velocity 0 depends on data2, so it stays out of the lookup tiers.
    if category == MessageCategory::NoteOn && data2 == 0 {
        MessageCategory::NoteOff
    } else {
        category
    }
}

/// Real-time category for a single system byte.
#[inline]
pub fn system_category(byte: u8) -> Option<MessageCategory> {
    match byte {
        0xF8 => Some(MessageCategory::TimingClock),
        0xFA => Some(MessageCategory::Start),
        0xFB => Some(MessageCategory::Continue),
        0xFC => Some(MessageCategory::Stop),
        0xFE => Some(MessageCategory::ActiveSensing),
        0xFF => Some(MessageCategory::SystemReset),
        _ => None,
    }
}

fn classify_system(status: u8, data1: u8, data2: u8) -> MessageCategory {
    // The real-time byte travels in data1; a bare real-time status byte is the fallback.
    match system_category(data1).or_else(|| system_category(status)) {
        Some(category) => category,
        None => {
            debug!(
                "System msg: {:#04X} (data1={}, data2={})",
                status, data1, data2
            );
            MessageCategory::Unknown
        }
    }
}

fn classify_channel(status: u8, data1: u8, data2: u8) -> MessageCategory {
    match status & 0xF0 {
        NOTE_OFF => MessageCategory::NoteOff,
        NOTE_ON => MessageCategory::NoteOn,
        CONTROL_CHANGE => controller_category(data1),
        PITCH_BEND => MessageCategory::PitchBend,
        _ => {
            debug!(
                "Unknown MIDI msg: status={:#04X}, data1={}, data2={}",
                status, data1, data2
            );
            MessageCategory::Unknown
        }
    }
}
