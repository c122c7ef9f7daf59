//! Push button on an active-low, pulled-up input line

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// Activating/sleep button
pub struct Button<P> {
    pin: P,
}

impl<P: InputPin> Button<P> {
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Raw line state; a read error counts as released
    pub fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }

    /// Ride out contact bounce around a press
    ///
    /// Busy-waits the settle time, spins until the line is released, then
    /// busy-waits the settle time again. Interrupts keep running throughout.
    pub fn debounce<D: DelayNs>(&mut self, delay: &mut D, settle: Duration) {
        settle_for(delay, settle);
        while self.is_pressed() {}
        settle_for(delay, settle);
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn settle_for<D: DelayNs>(delay: &mut D, settle: Duration) {
    delay.delay_us(settle.as_micros().min(u64::from(u32::MAX)) as u32);
}
