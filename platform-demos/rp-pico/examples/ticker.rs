//! Shows a ticker and a counter on a Siemens SDA5708 display (the one from the DBox 1)
//! This example is for the Raspberry Pico with the rp2040 chip
//!
//! Pin layout and connection for this example
//!
//! display | Pico pin |  Pico function       | purpose
//!  1 VCC     pin 40     VBUS                  5V supply, the SDA5708 does not run on 3V3
//!  2 LOAD    pin 4      GP2 (gpio2)           frame a byte: low while shifting, latched on high
//!  3 DATA    pin 5      GP3 (gpio3)           serial data, least significant bit first
//!  4 SDCLK   pin 6      GP4 (gpio4)           serial clock, data sampled on the rising edge
//!  5 RESET   pin 7      GP5 (gpio5)           reset: active low
//!  6 GND     pin 38     GND
//!
//! The inputs of the display accept the 3V3 levels of the Pico on every board I had at hand.
//! The 125MHz of the Pico are too fast for the display, so the backend gets a delay.

#![deny(unsafe_code)]
#![deny(warnings)]
#![no_std]
#![no_main]

// Imports

use panic_halt as _;                        // well. halt on panic..
use cortex_m_rt::entry;                     // the macro for our startup function
use embedded_hal::digital::v2::OutputPin;   // GPIO output pin trait
use embedded_time::fixed_point::FixedPoint; // for .integer()
use core::fmt::Write;                       // for write!() macro
use rp_pico as bsp;                         // Provide an alias for our BSP so we can switch targets quickly.
use bsp::hal::{
    pac,                                    // Peripheral Access Crate; low-level registers
    sio::Sio,                               // Single-clock IO, takes care of all GPIO
    watchdog::Watchdog,                     // we need to regularly call the watchdog or it shuts down our Pico
};

extern crate sda5708;
use sda5708::{SDA5708, SDA5708GpioBackend};

const TICKER: &str = "        Hello from the Pico!        ";

#[entry]
fn main() -> ! {

 // --------------------------------------------------------------------------
 //  First part is "boilerplate" setup stuff for Raspberry Pico
 // --------------------------------------------------------------------------

    let mut pac = pac::Peripherals::take().unwrap();   // grab singleton objects
    let core = pac::CorePeripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);    // set up watchdog timer

    let clocks = bsp::hal::clocks::init_clocks_and_plls(   // configure clocks
        bsp::XOSC_CRYSTAL_FREQ,                            // default is 125mHz system clock
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);       // the single-cycle I/O block (SIO) controls our GPIO pins
    let pins = bsp::Pins::new(         // first set up the pins to their default state
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

 // --------------------------------------------------------------------------
 //  The display only needs four GPIO's
 // --------------------------------------------------------------------------

    let load = pins.gpio2.into_push_pull_output();
    let data = pins.gpio3.into_push_pull_output();
    let sdclk = pins.gpio4.into_push_pull_output();
    let rst = pins.gpio5.into_push_pull_output();

    let mut pico_led = pins.led.into_push_pull_output();

    // one delay for the display clock, one for the animation
    let mut delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().integer());
    let bus_delay = BusyDelay;

    let backend = SDA5708GpioBackend::new_with_delay(load, data, sdclk, rst, bus_delay).unwrap();
    let mut display = SDA5708::new(backend).unwrap();

    display.set_brightness(1).unwrap();
    display.clear().unwrap();

 // --------------------------------------------------------------------------
 //  And loop forever: scroll the ticker, count, fade out
 // --------------------------------------------------------------------------

    let mut count: u32 = 0;
    loop {
        pico_led.set_high().unwrap();

        // scroll the text through the 8 cells
        for start in 0..=(TICKER.len() - 8) {
            display.render_text(&TICKER[start..start + 8], 0).unwrap();
            delay.delay_ms(150);
        }

        pico_led.set_low().unwrap();

        // a counter, right aligned, using the Write implementation
        for _ in 0..20 {
            display.cls().unwrap();
            write!(display, "{:>8}", count).unwrap();
            count = count.wrapping_add(1);
            delay.delay_ms(100);
        }

        // fade out and back in
        for level in 0..8 {
            display.set_brightness(level).unwrap();
            delay.delay_ms(120);
        }
        display.hw_clear().unwrap();
        display.set_brightness(1).unwrap();
        delay.delay_ms(500);
    }
}

/// Busy waits roughly a microsecond at 125MHz
struct BusyDelay;

impl embedded_hal::blocking::delay::DelayUs<u8> for BusyDelay {
    fn delay_us(&mut self, us: u8) {
        cortex_m::asm::delay(125 * us as u32);
    }
}

// End of file
