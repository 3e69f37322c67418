//! Bounded packet channel between a transport callback and the polling loop.
//!
//! The producer side runs on whatever thread the transport delivers on and
//! never blocks: a full channel drops the packet. The consumer side is a
//! [`MessageSource`] the dispatch loop polls.

use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError, TrySendError};
use midiroute_midi::MessageSource;
use tracing::debug;

use crate::framing::{frame_packet, MidiPacket};

/// Packets buffered between transport and dispatch loop.
pub const DEFAULT_CAPACITY: usize = 256;

pub fn packet_channel(capacity: usize) -> (PacketSender, ChannelSource) {
    let (tx, rx) = bounded(capacity);
    (
        PacketSender { tx },
        ChannelSource {
            rx,
            pending: None,
        },
    )
}

/// Producer half. Cheap to clone.
#[derive(Clone, Debug)]
pub struct PacketSender {
    tx: Sender<MidiPacket>,
}

impl PacketSender {
    /// Frame and queue one message. Returns false if it was dropped.
    pub fn push(&self, message: &[u8]) -> bool {
        let Some(packet) = frame_packet(message) else {
            return false;
        };
        match self.tx.try_send(packet) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                debug!("MIDI input channel full, dropping packet");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Consumer half, polled by the dispatch loop.
#[derive(Debug)]
pub struct ChannelSource {
    rx: Receiver<MidiPacket>,
    pending: Option<MidiPacket>,
}

impl ChannelSource {
    /// Block up to `timeout` for the next packet. Returns true if one is ready.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        if self.pending.is_some() {
            return true;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(packet) => {
                self.pending = Some(packet);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// True once every sender is gone and nothing is left to read.
    pub fn is_closed(&mut self) -> bool {
        if self.pending.is_some() {
            return false;
        }
        match self.rx.try_recv() {
            Ok(packet) => {
                self.pending = Some(packet);
                false
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => true,
        }
    }
}

impl MessageSource for ChannelSource {
    fn available(&mut self) -> bool {
        if self.pending.is_none() {
            self.pending = self.rx.try_recv().ok();
        }
        self.pending.is_some()
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        let Some(packet) = self.pending.take().or_else(|| self.rx.try_recv().ok()) else {
            return 0;
        };
        let bytes = packet.as_bytes();
        let count = bytes.len().min(buf.len());
        buf[..count].copy_from_slice(&bytes[..count]);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use midiroute_midi::{pump, Dispatch, MessageCategory, MidiRouter};
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;
    use std::thread;

    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let lines = String::from_utf8_lossy(&capture.0.lock())
            .lines()
            .map(str::to_owned)
            .collect();
        (result, lines)
    }

    #[test]
    fn test_push_then_pump() {
        let (tx, mut source) = packet_channel(8);
        assert!(tx.push(&[0xF8]));
        assert!(tx.push(&[0x90, 60, 100]));

        let router = MidiRouter::new();
        assert_eq!(
            pump(&mut source, &router),
            Some(Dispatch::Unhandled(MessageCategory::TimingClock))
        );
        assert_eq!(
            pump(&mut source, &router),
            Some(Dispatch::Unhandled(MessageCategory::NoteOn))
        );
        assert_eq!(pump(&mut source, &router), None);
    }

    #[test]
    fn test_full_channel_drops() {
        let (tx, mut source) = packet_channel(2);
        let (pushed, lines) = with_captured_logs(|| {
            [
                tx.push(&[0x90, 1, 1]),
                tx.push(&[0x90, 2, 1]),
                tx.push(&[0x90, 3, 1]),
            ]
        });
        assert_eq!(pushed, [true, true, false]);
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].contains("channel full"));

        let mut buf = [0u8; 4];
        assert!(source.available());
        assert_eq!(source.read(&mut buf), 3);
        assert_eq!(buf[..3], [0x90, 1, 1]);
    }

    #[test]
    fn test_short_message_keeps_length() {
        let (tx, mut source) = packet_channel(4);
        assert!(tx.push(&[0xD2, 40]));

        let mut buf = [0u8; 4];
        assert_eq!(source.read(&mut buf), 2);
        assert_eq!(buf[..2], [0xD2, 40]);

        assert!(tx.push(&[0xC0, 5]));
        let router = MidiRouter::new();
        let (outcome, lines) = with_captured_logs(|| pump(&mut source, &router));
        assert_eq!(outcome, Some(Dispatch::Ignored));
        assert!(lines.is_empty(), "{lines:?}");
    }

    #[test]
    fn test_empty_message_not_queued() {
        let (tx, mut source) = packet_channel(2);
        assert!(!tx.push(&[]));
        assert!(!source.available());
    }

    #[test]
    fn test_wait_across_threads() {
        let (tx, mut source) = packet_channel(DEFAULT_CAPACITY);
        let producer = thread::spawn(move || {
            tx.push(&[0xFA]);
        });
        assert!(source.wait(Duration::from_secs(5)));
        producer.join().unwrap();

        let mut buf = [0u8; 4];
        assert_eq!(source.read(&mut buf), 3);
        assert_eq!(buf[..3], [0xFA, 0, 0]);
        assert!(source.is_closed());
        assert!(!source.wait(Duration::from_millis(1)));
    }
}
