//! A pin failing in the middle of a frame leaves the display's bit counter out of step. The
//! driver has to pulse RESET before the next byte.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::digital::v2::OutputPin;
use sda5708::{SDA5708GpioBackend, SDA5708};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Load,
    Data,
    Clock,
    Reset,
}

#[derive(Debug, PartialEq, Eq)]
struct Broken;

#[derive(Default)]
struct Wire {
    events: RefCell<Vec<(Line, bool)>>,
    // number of DATA writes left before the data line fails once
    data_fails_in: Cell<Option<usize>>,
}

struct FlakyPin {
    line: Line,
    wire: Rc<Wire>,
}

impl FlakyPin {
    fn set(&mut self, high: bool) -> Result<(), Broken> {
        if self.line == Line::Data {
            if let Some(left) = self.wire.data_fails_in.get() {
                if left == 0 {
                    self.wire.data_fails_in.set(None);
                    return Err(Broken);
                }
                self.wire.data_fails_in.set(Some(left - 1));
            }
        }
        self.wire.events.borrow_mut().push((self.line, high));
        Ok(())
    }
}

impl OutputPin for FlakyPin {
    type Error = Broken;

    fn set_low(&mut self) -> Result<(), Broken> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), Broken> {
        self.set(true)
    }
}

fn display(wire: &Rc<Wire>) -> SDA5708<SDA5708GpioBackend<FlakyPin, FlakyPin, FlakyPin, FlakyPin>> {
    let pin = |line| FlakyPin {
        line,
        wire: wire.clone(),
    };
    let backend =
        SDA5708GpioBackend::new(pin(Line::Load), pin(Line::Data), pin(Line::Clock), pin(Line::Reset))
            .unwrap();
    SDA5708::new(backend).unwrap()
}

#[test]
fn error_is_returned_and_reset_follows() {
    let wire = Rc::new(Wire::default());
    let mut display = display(&wire);
    wire.events.borrow_mut().clear();

    // fail on the fourth bit of the first byte
    wire.data_fails_in.set(Some(3));
    assert_eq!(display.set_brightness(2), Err(Broken));

    // frame was cut: LOAD low, three bits, nothing else
    {
        let events = wire.events.borrow();
        assert_eq!(events.len(), 1 + 3 * 3);
        assert_eq!(events[0], (Line::Load, false));
        assert!(!events.contains(&(Line::Load, true)));
    }
    wire.events.borrow_mut().clear();

    display.set_brightness(2).unwrap();

    let events = wire.events.borrow();
    assert_eq!(
        &events[..3],
        [(Line::Load, true), (Line::Reset, false), (Line::Reset, true)]
    );
    assert_eq!(events.len(), 3 + 26);
    assert_eq!(events[3], (Line::Load, false));
    assert_eq!(events[28], (Line::Load, true));
}

#[test]
fn no_reset_without_failure() {
    let wire = Rc::new(Wire::default());
    let mut display = display(&wire);
    wire.events.borrow_mut().clear();

    display.render_text("ok", 0).unwrap();

    let events = wire.events.borrow();
    assert_eq!(events.len(), 2 * 8 * 26);
    assert!(!events.iter().any(|(line, _)| *line == Line::Reset));
}

#[test]
fn brightness_after_reset_is_the_new_one() {
    let wire = Rc::new(Wire::default());
    let mut display = display(&wire);

    wire.data_fails_in.set(Some(0));
    assert_eq!(display.set_brightness(2), Err(Broken));
    wire.events.borrow_mut().clear();

    display.set_brightness(5).unwrap();
    assert_eq!(display.brightness().level(), 5);
    display.hw_clear().unwrap();
    assert_eq!(display.brightness().level(), 5);

    let events = wire.events.borrow();
    assert_eq!(events.len(), 3 + 3 * 26);
    assert_eq!(events.iter().filter(|(line, _)| *line == Line::Reset).count(), 2);
}
