//! Framing for messages arriving from OS MIDI APIs.
//!
//! Host APIs hand over variable-length messages. A lone real-time byte is
//! zero-padded to the 3-byte shape the router classifies, as USB-MIDI event
//! packets do. Every other message keeps its real length, so a 1-2 byte channel
//! or system common message reaches the router short and is ignored there.

use midiroute_midi::{RawMessage, MESSAGE_LEN};

use crate::error::Result;

/// Up to three message bytes plus how many of them are real.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MidiPacket {
    bytes: [u8; MESSAGE_LEN],
    len: usize,
}

impl MidiPacket {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packet as a classifiable message. Fails for short packets.
    pub fn to_message(&self) -> Result<RawMessage> {
        Ok(RawMessage::from_slice(self.as_bytes())?)
    }
}

/// Frame one incoming message. Empty input yields `None`.
///
/// Real-time bytes (`0xF8..=0xFF`) are padded to three bytes. Longer messages
/// such as SysEx are truncated to their first three bytes.
pub fn frame_packet(message: &[u8]) -> Option<MidiPacket> {
    let mut bytes = [0u8; MESSAGE_LEN];
    let len = match *message {
        [] => return None,
        [status @ 0xF8..=0xFF] => {
            bytes[0] = status;
            MESSAGE_LEN
        }
        _ => {
            let len = message.len().min(MESSAGE_LEN);
            bytes[..len].copy_from_slice(&message[..len]);
            len
        }
    };
    Some(MidiPacket { bytes, len })
}
