//! Hardware MIDI input through midir.
//!
//! midir delivers messages on its own callback thread. The callback only frames
//! and queues packets; classification and dispatch run wherever the
//! [`MidirSource`] is polled.

use std::time::Duration;

use midir::{Ignore, MidiInput, MidiInputConnection};
use midiroute_midi::MessageSource;
use tracing::info;

use crate::channel::{packet_channel, ChannelSource, DEFAULT_CAPACITY};
use crate::error::{Error, Result};

const CLIENT_NAME: &str = "midiroute-input";
const PORT_NAME: &str = "midiroute-in";

/// Information about an available MIDI input device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiInputDevice {
    /// Device index (for connection)
    pub index: usize,
    pub name: String,
}

/// Enumerate input devices. Returns an empty list if the MIDI backend is unavailable.
pub fn list_input_devices() -> Vec<MidiInputDevice> {
    let Ok(midi_input) = MidiInput::new("midiroute-device-list") else {
        return Vec::new();
    };
    midi_input
        .ports()
        .iter()
        .enumerate()
        .map(|(index, port)| MidiInputDevice {
            index,
            name: midi_input
                .port_name(port)
                .unwrap_or_else(|_| format!("Unknown Device {}", index)),
        })
        .collect()
}

/// Connected hardware input, polled as a [`MessageSource`].
///
/// Dropping it closes the connection.
pub struct MidirSource {
    _connection: MidiInputConnection<()>,
    source: ChannelSource,
    device: MidiInputDevice,
}

impl MidirSource {
    pub fn connect(device_index: usize) -> Result<Self> {
        let mut midi_input = MidiInput::new(CLIENT_NAME)?;
        // Clock and active sensing are classified, so nothing is filtered here.
        midi_input.ignore(Ignore::None);

        let ports = midi_input.ports();
        let port = ports
            .get(device_index)
            .ok_or_else(|| Error::DeviceNotFound(format!("#{}", device_index)))?;
        let name = midi_input
            .port_name(port)
            .unwrap_or_else(|_| format!("Device {}", device_index));

        let (sender, source) = packet_channel(DEFAULT_CAPACITY);
        let connection = midi_input.connect(
            port,
            PORT_NAME,
            move |_timestamp, message, _| {
                sender.push(message);
            },
            (),
        )?;

        info!("Connected MIDI input {}: {}", device_index, name);
        Ok(Self {
            _connection: connection,
            source,
            device: MidiInputDevice {
                index: device_index,
                name,
            },
        })
    }

    /// Connect to the first device whose name contains `name` (case-insensitive).
    pub fn connect_by_name(name: &str) -> Result<Self> {
        let needle = name.to_lowercase();
        let device = list_input_devices()
            .into_iter()
            .find(|d| d.name.to_lowercase().contains(&needle))
            .ok_or_else(|| Error::DeviceNotFound(name.to_string()))?;
        Self::connect(device.index)
    }

    pub fn device(&self) -> &MidiInputDevice {
        &self.device
    }

    /// Block up to `timeout` for the next message.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        self.source.wait(timeout)
    }
}

impl MessageSource for MidirSource {
    #[inline]
    fn available(&mut self) -> bool {
        self.source.available()
    }

    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> usize {
        self.source.read(buf)
    }
}
