//! Tick clock and wait deadlines
//!
//! The tick counter is the sole time base of the device. It is advanced once
//! per timer overflow and wraps silently at 16 bits; there is no way to set or
//! rewind it.

/// Largest delay that keeps deadline detection unambiguous across a wrap
pub const MAX_WAIT_TICKS: u16 = u16::MAX / 2;

/// Free-running 16-bit tick counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickCounter(u16);

impl TickCounter {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Current tick value
    #[inline]
    pub const fn now(self) -> u16 {
        self.0
    }

    /// Advance by one period. Only the tick handler calls this.
    #[inline]
    pub(crate) fn advance(&mut self) -> u16 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    /// Deadline `delay` ticks from now
    pub const fn deadline_after(self, delay: u16) -> WaitDeadline {
        WaitDeadline(self.0.wrapping_add(delay))
    }
}

/// Absolute tick value at which a pending wait expires
///
/// Expiry is detected by equality with the counter, never by ordering, so a
/// deadline that lies past a wrap is reached exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitDeadline(u16);

impl WaitDeadline {
    pub const fn at(tick: u16) -> Self {
        Self(tick)
    }

    pub const fn tick(self) -> u16 {
        self.0
    }

    /// Check whether the counter has just reached this deadline
    #[inline]
    pub const fn is_reached(self, counter: TickCounter) -> bool {
        counter.0 == self.0
    }
}
