//! # midiroute - MIDI classify-and-dispatch
//!
//! Decodes raw 3-byte MIDI messages into a closed set of categories and routes
//! each one to the handler registered for it.
//!
//! ## Architecture
//!
//! midiroute is an umbrella crate over:
//! - **midiroute-midi** - Categories, Control Change table, classifier, router
//! - **midiroute-io** - Packet framing, callback-to-poller channel, hardware input (midir)
//!
//! ## Quick Start
//!
//! ```ignore
//! use midiroute::prelude::*;
//!
//! let router = MidiRouter::builder()
//!     .on(MessageCategory::NoteOn, |status, note, velocity| {
//!         println!("Note On: ch {} note {} vel {}", status & 0x0F, note, velocity);
//!     })
//!     .build();
//!
//! let mut input = MidirSource::connect_by_name("Keystation")?;
//! loop {
//!     input.wait(std::time::Duration::from_millis(100));
//!     drain(&mut input, &router);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - Everything enabled
//! - `midi-hardware` - Hardware MIDI input via midir

/// Re-export of midiroute-midi for direct access
pub use midiroute_midi as midi;

/// Re-export of midiroute-io for direct access
pub use midiroute_io as io;

pub use midiroute_midi::{
    classify, controller_category, drain, pump, system_category, Dispatch, Dispatcher,
    MessageCategory, MessageSource, MidiHandler, MidiRouter, MidiRouterBuilder, RawMessage,
    ReplaySource, SharedHandler, SharedRouter, CONTROLLER_TABLE,
};

pub use midiroute_io::{frame_packet, packet_channel, ChannelSource, MidiPacket, PacketSender};

#[cfg(feature = "midi-hardware")]
pub use midiroute_io::{list_input_devices, MidiInputDevice, MidirSource};

mod error;
pub use error::{Error, Result};

/// Convenient imports for common usage
pub mod prelude {
    // Routing
    pub use crate::{Dispatch, MessageCategory, MidiRouter, SharedRouter};

    // Polling
    pub use crate::{drain, pump, MessageSource, ReplaySource};

    // Hardware
    #[cfg(feature = "midi-hardware")]
    pub use crate::MidirSource;

    pub use crate::{Error, Result};
}
