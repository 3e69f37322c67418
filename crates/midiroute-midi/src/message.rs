//! Raw 3-byte MIDI wire message.

use midi_msg::MidiMsg;
use serde::{Deserialize, Serialize};

use crate::category::MessageCategory;
use crate::classify::classify;
use crate::error::{Error, Result};

/// Number of bytes a message must carry to be classified.
pub const MESSAGE_LEN: usize = 3;

/// Three bytes as received: status in byte 0, data bytes in 1-2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawMessage {
    pub status: u8,
    pub data1: u8,
    pub data2: u8,
}

impl RawMessage {
    #[inline]
    pub const fn new(status: u8, data1: u8, data2: u8) -> Self {
        Self {
            status,
            data1,
            data2,
        }
    }

    /// Frame the first three bytes of `bytes`. Extra bytes are ignored.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        match *bytes {
            [status, data1, data2, ..] => Ok(Self::new(status, data1, data2)),
            _ => Err(Error::ShortMessage { len: bytes.len() }),
        }
    }

    #[inline]
    pub const fn bytes(&self) -> [u8; MESSAGE_LEN] {
        [self.status, self.data1, self.data2]
    }

    /// Upper nibble of the status byte (`0x80`, `0x90`, ...).
    #[inline]
    pub const fn message_type(&self) -> u8 {
        self.status & 0xF0
    }

    /// Lower nibble of the status byte (0-15). Meaningless for system messages.
    #[inline]
    pub const fn channel(&self) -> u8 {
        self.status & 0x0F
    }

    #[inline]
    pub fn category(&self) -> MessageCategory {
        classify(self.status, self.data1, self.data2)
    }

    /// Typed view of the message through `midi-msg`, for handlers that want
    /// structured fields instead of raw bytes.
    pub fn decode(&self) -> Result<MidiMsg> {
        let (msg, _len) = MidiMsg::from_midi(&self.bytes())?;
        Ok(msg)
    }
}

impl From<[u8; MESSAGE_LEN]> for RawMessage {
    fn from(bytes: [u8; MESSAGE_LEN]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl TryFrom<&[u8]> for RawMessage {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use midi_msg::{Channel, ChannelVoiceMsg};

    #[test]
    fn test_from_slice_exact() {
        let msg = RawMessage::from_slice(&[0x91, 60, 100]).unwrap();
        assert_eq!(msg, RawMessage::new(0x91, 60, 100));
        assert_eq!(msg.channel(), 1);
        assert_eq!(msg.message_type(), 0x90);
    }

    #[test]
    fn test_from_slice_ignores_trailing_bytes() {
        let msg = RawMessage::from_slice(&[0xB0, 10, 64, 0xAA]).unwrap();
        assert_eq!(msg.bytes(), [0xB0, 10, 64]);
    }

    #[test]
    fn test_from_slice_short() {
        assert_eq!(
            RawMessage::from_slice(&[0x90, 60]),
            Err(Error::ShortMessage { len: 2 })
        );
        assert_eq!(
            RawMessage::try_from(&[] as &[u8]),
            Err(Error::ShortMessage { len: 0 })
        );
    }

    #[test]
    fn test_category_applies_velocity_rewrite() {
        assert_eq!(
            RawMessage::new(0x90, 60, 0).category(),
            MessageCategory::NoteOff
        );
        assert_eq!(
            RawMessage::from([0x90, 60, 1]).category(),
            MessageCategory::NoteOn
        );
    }

    #[test]
    fn test_decode_note_on() {
        let msg = RawMessage::new(0x91, 60, 100).decode().unwrap();
        match msg {
            MidiMsg::ChannelVoice { channel, msg } => {
                assert_eq!(channel, Channel::Ch2);
                assert_eq!(
                    msg,
                    ChannelVoiceMsg::NoteOn {
                        note: 60,
                        velocity: 100
                    }
                );
            }
            _ => panic!("Expected ChannelVoice"),
        }
    }

    #[test]
    fn test_decode_pitch_bend() {
        let msg = RawMessage::new(0xE0, 0, 64).decode().unwrap();
        match msg {
            MidiMsg::ChannelVoice {
                msg: ChannelVoiceMsg::PitchBend { bend },
                ..
            } => assert_eq!(bend, 8192),
            _ => panic!("Expected PitchBend"),
        }
    }
}
