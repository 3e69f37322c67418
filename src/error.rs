//! Centralized error type for the midiroute umbrella crate.
//!
//! Wraps both subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Midi(#[from] midiroute_midi::Error),

    #[error("MIDI I/O: {0}")]
    Io(#[from] midiroute_io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
