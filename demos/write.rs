use sda5708::dummypins::DummyOutputPin;
use sda5708::{SDA5708GpioBackend, SDA5708};
use std::fmt::Write;

fn main() {
    let load = DummyOutputPin;
    let data = DummyOutputPin;
    let sdclk = DummyOutputPin;
    let rst = DummyOutputPin;

    let backend = SDA5708GpioBackend::new(load, data, sdclk, rst).expect("Infallible cannot fail");
    let mut display = SDA5708::new(backend).expect("Infallible cannot fail");

    display.set_brightness(2).expect("Infallible cannot fail");
    display.render_text("Hello", 0).expect("Infallible cannot fail");

    display.cls().expect("Infallible cannot fail");
    writeln!(display, "{:>7}!", 1234).unwrap();
}
