//! Transport-to-router integration tests.
//!
//! The hardware test is `#[ignore]` so CI doesn't fail without a device.
//!
//! Run with:
//!   MIDIROUTE_TEST_DEVICE="IAC" cargo test -p midiroute-io --test integration -- --ignored

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use midiroute_io::{drain, packet_channel, pump, MessageSource};
use midiroute_midi::{Dispatch, MessageCategory, MidiRouter};

fn counter() -> (Arc<AtomicUsize>, impl Fn(u8, u8, u8) + Send + Sync + 'static) {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_clone = Arc::clone(&hits);
    (hits, move |_: u8, _: u8, _: u8| {
        hits_clone.fetch_add(1, Ordering::Relaxed);
    })
}

// ---------------------------------------------------------------------------
// Channel transport
// ---------------------------------------------------------------------------

#[test]
fn test_callback_thread_to_router() {
    let (note_hits, note_on) = counter();
    let (clock_hits, clock) = counter();
    let router = MidiRouter::builder()
        .on(MessageCategory::NoteOn, note_on)
        .on(MessageCategory::TimingClock, clock)
        .build();

    let (tx, mut source) = packet_channel(64);
    let producer = thread::spawn(move || {
        for note in 0..10u8 {
            tx.push(&[0x90, 60 + note, 100]);
            tx.push(&[0xF8]);
        }
    });
    producer.join().unwrap();

    assert_eq!(drain(&mut source, &router), 20);
    assert_eq!(note_hits.load(Ordering::Relaxed), 10);
    assert_eq!(clock_hits.load(Ordering::Relaxed), 10);
    assert!(source.is_closed());
}

#[test]
fn test_multiple_producers() {
    let (hits, handler) = counter();
    let router = MidiRouter::builder()
        .on(MessageCategory::Pan, handler)
        .build();

    let (tx, mut source) = packet_channel(256);
    let producers: Vec<_> = (0..4u8)
        .map(|channel| {
            let tx = tx.clone();
            thread::spawn(move || {
                for value in 0..16u8 {
                    assert!(tx.push(&[0xB0 | channel, 10, value]));
                }
            })
        })
        .collect();
    drop(tx);
    for producer in producers {
        producer.join().unwrap();
    }

    assert_eq!(drain(&mut source, &router), 64);
    assert_eq!(hits.load(Ordering::Relaxed), 64);
}

#[test]
fn test_two_byte_messages_are_ignored() {
    let (fallback_hits, fallback) = counter();
    let router = MidiRouter::builder().fallback(fallback).build();

    let (tx, mut source) = packet_channel(4);
    tx.push(&[0xC3, 12]); // Program Change
    tx.push(&[0xD0, 40]); // Channel Pressure
    tx.push(&[0xF3, 2]); // Song Select

    for _ in 0..3 {
        assert!(source.available());
        assert_eq!(pump(&mut source, &router), Some(Dispatch::Ignored));
    }
    assert_eq!(pump(&mut source, &router), None);
    assert_eq!(fallback_hits.load(Ordering::Relaxed), 0);
}

#[test]
fn test_wait_times_out_when_idle() {
    let (_tx, mut source) = packet_channel(4);
    assert!(!source.wait(Duration::from_millis(10)));
    assert!(!source.is_closed());
}

// ---------------------------------------------------------------------------
// Hardware
// ---------------------------------------------------------------------------

#[cfg(feature = "midi-io")]
#[test]
#[ignore]
fn test_hardware_input_connects() {
    let name = std::env::var("MIDIROUTE_TEST_DEVICE").unwrap_or_else(|_| "IAC".to_string());
    let mut input = midiroute_io::MidirSource::connect_by_name(&name)
        .expect("Failed to connect to MIDI input");
    assert!(input
        .device()
        .name
        .to_lowercase()
        .contains(&name.to_lowercase()));

    let router = MidiRouter::new();
    // Nothing is guaranteed to arrive; polling an idle device must not block.
    input.wait(Duration::from_millis(100));
    let _ = drain(&mut input, &router);
}
