//! Error types for the MIDI transport layer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Midi(#[from] midiroute_midi::Error),

    #[error("MIDI device error: {0}")]
    MidiDevice(String),

    #[error("MIDI port error: {0}")]
    MidiPort(String),

    #[error("No MIDI device matching '{0}' found")]
    DeviceNotFound(String),
}

#[cfg(feature = "midi-io")]
impl From<midir::InitError> for Error {
    fn from(e: midir::InitError) -> Self {
        Error::MidiDevice(e.to_string())
    }
}

#[cfg(feature = "midi-io")]
impl From<midir::ConnectError<midir::MidiInput>> for Error {
    fn from(e: midir::ConnectError<midir::MidiInput>) -> Self {
        Error::MidiPort(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
