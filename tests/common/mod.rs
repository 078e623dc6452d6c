//! Line probe: four fake pins sharing one event log, so the exact order of level changes on
//! LOAD, DATA, SDCLK and RESET can be checked.
#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::v2::OutputPin;
use sda5708::{SDA5708GpioBackend, SDA5708};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Load,
    Data,
    Clock,
    Reset,
}

pub type Event = (Line, bool);

#[derive(Clone, Default)]
pub struct Probe {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Probe {
    pub fn pin(&self, line: Line) -> ProbePin {
        ProbePin {
            line,
            events: self.events.clone(),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn forget(&self) {
        self.events.borrow_mut().clear();
    }

    /// Decodes the recorded events into bytes, asserting every frame is well formed.
    pub fn bytes(&self) -> Vec<u8> {
        decode(&self.events())
    }
}

pub struct ProbePin {
    line: Line,
    events: Rc<RefCell<Vec<Event>>>,
}

impl OutputPin for ProbePin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.events.borrow_mut().push((self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.events.borrow_mut().push((self.line, true));
        Ok(())
    }
}

pub type ProbeBackend = SDA5708GpioBackend<ProbePin, ProbePin, ProbePin, ProbePin>;

/// A display wired to a fresh probe. The events of the construction are kept.
pub fn display() -> (SDA5708<ProbeBackend>, Probe) {
    let probe = Probe::default();
    let backend = SDA5708GpioBackend::new(
        probe.pin(Line::Load),
        probe.pin(Line::Data),
        probe.pin(Line::Clock),
        probe.pin(Line::Reset),
    )
    .unwrap();
    let display = SDA5708::new(backend).unwrap();
    (display, probe)
}

/// The exact line events of one byte frame.
pub fn frame(byte: u8) -> Vec<Event> {
    let mut events = vec![(Line::Load, false)];
    for bit in 0..8 {
        events.push((Line::Data, (byte >> bit) & 1 == 1));
        events.push((Line::Clock, true));
        events.push((Line::Clock, false));
    }
    events.push((Line::Load, true));
    events
}

pub fn decode(events: &[Event]) -> Vec<u8> {
    assert_eq!(events.len() % 26, 0, "incomplete frame in {:?}", events);
    events
        .chunks(26)
        .map(|chunk| {
            let mut value = 0u8;
            for bit in 0..8 {
                if chunk[1 + bit * 3].1 {
                    value |= 1 << bit;
                }
            }
            assert_eq!(chunk, frame(value).as_slice());
            value
        })
        .collect()
}

/// Address byte followed by the 7 right-justified rows of `c`.
pub fn glyph_bytes(c: char, position: u8) -> Vec<u8> {
    let mut bytes = vec![0xA0 | position];
    bytes.extend(sda5708::font::glyph(c).iter().map(|row| row >> 3));
    bytes
}
