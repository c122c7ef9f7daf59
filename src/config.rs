//! Timing configuration
//!
//! All constants depend on the board's clock, so they are carried as
//! durations and converted to ticks where needed.

use embassy_time::Duration;

use crate::tick::MAX_WAIT_TICKS;

/// Timer overflow period: 256 cycles of a 62.5 kHz clock
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_micros(4_096);

/// Settle time of the push switch
pub const DEFAULT_DEBOUNCE_SETTLE: Duration = Duration::from_millis(10);

/// Activating press that enables the repeating programme
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_secs(3);

/// Script wait unit
pub const DECISECOND: Duration = Duration::from_millis(100);

/// Board timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Period of one tick interrupt
    pub tick_period: Duration,
    /// Busy-wait applied around button transitions
    pub debounce_settle: Duration,
    /// Minimum activating press that enables repeat
    pub long_press: Duration,
}

impl TimingConfig {
    pub const fn new() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            debounce_settle: DEFAULT_DEBOUNCE_SETTLE,
            long_press: DEFAULT_LONG_PRESS,
        }
    }

    /// Number of ticks covering `duration`
    ///
    /// Rounds up, never returns zero so a zero wait still expires on the next
    /// tick, and is capped at [`MAX_WAIT_TICKS`].
    #[allow(clippy::cast_possible_truncation)]
    pub const fn ticks_in(&self, duration: Duration) -> u16 {
        let period = self.tick_period.as_micros();
        if period == 0 {
            return MAX_WAIT_TICKS;
        }
        let ticks = duration.as_micros().div_ceil(period);
        if ticks == 0 {
            1
        } else if ticks > MAX_WAIT_TICKS as u64 {
            MAX_WAIT_TICKS
        } else {
            ticks as u16
        }
    }

    /// Ticks in `count` tenths of a second
    pub const fn deciseconds(&self, count: u8) -> u16 {
        self.ticks_in(Duration::from_millis(DECISECOND.as_millis() * count as u64))
    }

    pub const fn long_press_ticks(&self) -> u16 {
        self.ticks_in(self.long_press)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::new()
    }
}
