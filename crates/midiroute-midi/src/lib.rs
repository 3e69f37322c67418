//! MIDI decode-and-dispatch core for midiroute.
//!
//! Classifies raw 3-byte MIDI messages into a closed set of categories and
//! routes each one to a caller-registered handler.
//!
//! # Pipeline
//!
//! - **Classifier**: [`classify`] maps `(status, data1, data2)` to a
//!   [`MessageCategory`], including the full Control Change table
//!   ([`CONTROLLER_TABLE`]) and the System real-time byte set.
//! - **Router**: [`MidiRouter`] maps categories to handlers and dispatches
//!   each buffer, or logs it as unhandled.
//! - **Sources**: [`MessageSource`] is the transport boundary; [`pump`] runs one
//!   polling iteration.
//!
//! # Example
//!
//! ```ignore
//! use midiroute_midi::{MessageCategory, MidiRouter};
//!
//! let router = MidiRouter::builder()
//!     .on(MessageCategory::NoteOn, |status, note, velocity| {
//!         println!("Note On: ch {} note {} vel {}", status & 0x0F, note, velocity);
//!     })
//!     .on(MessageCategory::Pan, |status, _, value| {
//!         println!("Pan: ch {} value {}", status & 0x0F, value);
//!     })
//!     .build();
//!
//! router.dispatch(&[0x90, 60, 100]); // Note On handler
//! router.dispatch(&[0x90, 60, 0]);   // velocity 0: NoteOff, unhandled
//! ```

pub mod error;
pub use error::{Error, Result};

mod category;
pub use category::MessageCategory;

mod controller;
pub use controller::{controller_category, CONTROLLER_TABLE};

mod classify;
pub use classify::{classify, system_category};

mod message;
pub use message::{RawMessage, MESSAGE_LEN};

pub mod router;
pub use router::{
    Dispatch, Dispatcher, MidiHandler, MidiRouter, MidiRouterBuilder, SharedHandler, SharedRouter,
};

pub mod source;
pub use source::{drain, pump, MessageSource, ReplaySource, PACKET_LEN};

// Typed view returned by `RawMessage::decode`
pub use midi_msg::{Channel, ChannelVoiceMsg, MidiMsg};
