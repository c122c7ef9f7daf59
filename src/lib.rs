//! Real-time core of a two-channel battery LED light
//!
//! A timer overflow interrupt drives [`SharedEngine::on_tick`], which advances
//! the tick clock, expires waits and modulates flashing channels through a
//! waveform table. The main flow runs a [`Controller`]: it boots, plays a
//! script through the [`LightShow`] interface and parks the device in its
//! lowest power state until the button wakes it.
//!
//! ```ignore
//! static ENGINE: SharedEngine<Board> = SharedEngine::new(Engine::new(Board::new()));
//!
//! fn main() -> ! {
//!     let mut controller = Controller::new(&ENGINE, button, delay, power, TimingConfig::new());
//!     loop {
//!         let Restart = controller.session(|lights| BEE_SHOW.play(lights));
//!     }
//! }
//! ```
#![no_std]

pub mod brightness;
pub mod button;
pub mod config;
pub mod controller;
pub mod engine;
pub mod modulator;
pub mod pattern;
pub mod programme;
pub mod status;
pub mod tick;
pub mod waveform;

pub use brightness::{Brightness, BrightnessError, Flash, FlashRate, Percent};
pub use button::Button;
pub use config::TimingConfig;
pub use controller::{Controller, PowerState, Restart};
pub use engine::{Engine, SharedEngine};
pub use pattern::{ChannelId, LedPattern, OutputConfig, Polarity};
pub use programme::{BEE_SHOW, Programme, Step};
pub use status::StatusFlags;
pub use tick::{TickCounter, WaitDeadline};
pub use waveform::Waveform;

pub use embassy_time::Duration;

/// Abstract LED output driver
///
/// Implement this trait over the board's PWM timer and port registers.
/// Methods are only called with interrupts held off.
pub trait OutputDriver {
    /// Write a channel's PWM compare register
    fn set_duty(&mut self, channel: ChannelId, duty: u8);

    /// Switch every LED line to high impedance
    fn release(&mut self);

    /// Apply polarity, compare modes and port level while the lines are released
    fn configure(&mut self, config: &OutputConfig);

    /// Drive the LED lines again
    fn enable(&mut self, config: &OutputConfig);
}

/// Sleep and wake hardware
pub trait PowerControl {
    /// Select the lowest power sleep mode and arm the button edge as wake source
    fn arm_wake(&mut self);

    /// Halt the CPU
    ///
    /// With no handler bound to the wake interrupt the wake edge resets the
    /// device, so on hardware this never returns.
    fn halt(&mut self);
}

/// Script-facing light control
pub trait LightShow {
    /// Show `pattern`; `first` drives the right antenna or eyes (channel B),
    /// `second` the left antenna or sting (channel A)
    fn show_each(&mut self, pattern: LedPattern, first: Brightness, second: Brightness);

    /// Hold for `deciseconds` tenths of a second
    ///
    /// A button press cancels the wait and sleeps the device; the returned
    /// [`Restart`] must be propagated to the top of the main flow.
    fn wait(&mut self, deciseconds: u8) -> Result<(), Restart>;

    /// Show `pattern` at full static brightness
    fn show(&mut self, pattern: LedPattern) {
        self.show_each(pattern, Brightness::FULL, Brightness::FULL);
    }

    /// Show `pattern` with one brightness on every active channel
    fn show_level(&mut self, pattern: LedPattern, brightness: Brightness) {
        self.show_each(pattern, brightness, brightness);
    }
}
