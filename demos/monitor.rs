//! MIDI monitor: prints notes and pan moves and drives a status "LED".
//!
//! With a device name argument (and the `midi-hardware` feature) it listens to
//! that input. Without one it replays a short canned session.
//!
//! Run with: `cargo run --example monitor -- "Keystation"`

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use midiroute::prelude::*;

struct Led(AtomicBool);

impl Led {
    fn set(&self, on: bool) {
        if self.0.swap(on, Ordering::Relaxed) != on {
            println!("[LED {}]", if on { "on" } else { "off" });
        }
    }
}

fn blink(led: &Led) {
    led.set(true);
    thread::sleep(Duration::from_millis(500));
    led.set(false);
    thread::sleep(Duration::from_millis(500));
}

fn build_router(led: &Arc<Led>) -> MidiRouter {
    let led_on = Arc::clone(led);
    let led_off = Arc::clone(led);
    MidiRouter::builder()
        .on(MessageCategory::NoteOn, move |status, note, velocity| {
            println!(
                "Note On: Channel {}, Note {}, Velocity {}",
                status & 0x0F,
                note,
                velocity
            );
            led_on.set(true);
        })
        .on(MessageCategory::NoteOff, move |status, note, _| {
            println!("Note Off: Channel {}, Note {}", status & 0x0F, note);
            led_off.set(false);
        })
        .on(MessageCategory::Pan, |status, _, value| {
            println!("Pan: Channel {}, Value {}", status & 0x0F, value);
        })
        .build()
}

fn replay(router: &MidiRouter) {
    let mut source: ReplaySource = [
        vec![0x90, 60, 100],
        vec![0xB0, 10, 32],
        vec![0xF8, 0, 0],
        vec![0x90, 60, 0],
        vec![0x91, 67, 80],
        vec![0xB1, 7, 100],
        vec![0x81, 67, 64],
    ]
    .into_iter()
    .collect();

    while pump(&mut source, router).is_some() {
        thread::sleep(Duration::from_millis(250));
    }
}

#[cfg(feature = "midi-hardware")]
fn listen(router: &MidiRouter, name: &str) -> Result<()> {
    for device in midiroute::list_input_devices() {
        println!("  [{}] {}", device.index, device.name);
    }
    let mut input = MidirSource::connect_by_name(name)?;
    println!("Listening on {} (Ctrl+C to quit)", input.device().name);
    loop {
        if input.wait(Duration::from_millis(100)) {
            drain(&mut input, router);
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let led = Arc::new(Led(AtomicBool::new(false)));
    blink(&led);

    let router = build_router(&led);

    #[cfg(feature = "midi-hardware")]
    if let Some(name) = std::env::args().nth(1) {
        return listen(&router, &name);
    }

    replay(&router);
    Ok(())
}
