//! Error types for the MIDI decode core.
//!
//! Classification and dispatch never fail. These errors only surface at the
//! framing boundary (`RawMessage::from_slice`) and the typed decode view.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("MIDI message too short: {len} bytes (need 3)")]
    ShortMessage { len: usize },

    #[error("MIDI parse error: {0}")]
    Parse(String),
}

impl From<midi_msg::ParseError> for Error {
    fn from(e: midi_msg::ParseError) -> Self {
        Error::Parse(format!("{:?}", e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
