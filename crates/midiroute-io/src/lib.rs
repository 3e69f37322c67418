//! MIDI transport glue for midiroute.
//!
//! Feeds messages from OS MIDI ports into a [`midiroute_midi::MidiRouter`].
//! Transport callbacks frame each message into a [`MidiPacket`] and queue it on a
//! bounded channel; the dispatch loop polls the other end as a
//! [`MessageSource`].
//!
//! Feature gates: `midi-io` (hardware input via midir).

pub mod error;
pub use error::{Error, Result};

mod framing;
pub use framing::{frame_packet, MidiPacket};

mod channel;
pub use channel::{packet_channel, ChannelSource, PacketSender, DEFAULT_CAPACITY};

#[cfg(feature = "midi-io")]
mod input;

#[cfg(feature = "midi-io")]
pub use input::{list_input_devices, MidiInputDevice, MidirSource};

pub use midiroute_midi::{drain, pump, MessageSource};
