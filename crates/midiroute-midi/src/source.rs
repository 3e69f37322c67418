//! Abstraction for MIDI byte sources.
//!
//! A transport (USB endpoint, OS MIDI port, replay buffer) exposes
//! "is a message available" and "read up to N bytes". The pump reads one
//! message per iteration and hands it to a [`Dispatcher`].

use std::collections::VecDeque;

use crate::router::{Dispatch, Dispatcher};

/// Read buffer size for one polling iteration. USB-MIDI event packets are 4 bytes.
pub const PACKET_LEN: usize = 4;

/// Polled MIDI byte source.
pub trait MessageSource {
    /// True if a message is ready to be read.
    fn available(&mut self) -> bool;

    /// Read up to `buf.len()` bytes of the next message into `buf`.
    /// Returns the number of bytes written.
    fn read(&mut self, buf: &mut [u8]) -> usize;
}

impl<S: MessageSource + ?Sized> MessageSource for &mut S {
    #[inline]
    fn available(&mut self) -> bool {
        (**self).available()
    }

    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> usize {
        (**self).read(buf)
    }
}

/// One polling iteration. Returns `None` if the source had nothing available.
pub fn pump<S, D>(source: &mut S, dispatcher: &D) -> Option<Dispatch>
where
    S: MessageSource + ?Sized,
    D: Dispatcher + ?Sized,
{
    if !source.available() {
        return None;
    }
    let mut packet = [0u8; PACKET_LEN];
    let count = source.read(&mut packet).min(PACKET_LEN);
    Some(dispatcher.dispatch(&packet[..count]))
}

/// Pump until the source runs dry. Returns the number of dispatch calls made.
pub fn drain<S, D>(source: &mut S, dispatcher: &D) -> usize
where
    S: MessageSource + ?Sized,
    D: Dispatcher + ?Sized,
{
    let mut dispatched = 0;
    while pump(source, dispatcher).is_some() {
        dispatched += 1;
    }
    dispatched
}

/// In-memory source that replays queued packets in order.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    packets: VecDeque<Vec<u8>>,
}

impl ReplaySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, packet: impl Into<Vec<u8>>) {
        self.packets.push_back(packet.into());
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }
}

impl<P: Into<Vec<u8>>> FromIterator<P> for ReplaySource {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            packets: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl MessageSource for ReplaySource {
    fn available(&mut self) -> bool {
        !self.packets.is_empty()
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        let Some(packet) = self.packets.pop_front() else {
            return 0;
        };
        let count = packet.len().min(buf.len());
        buf[..count].copy_from_slice(&packet[..count]);
        count
    }
}
