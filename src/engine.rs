//! State shared between the tick interrupt and the main flow
//!
//! The engine owns the tick counter, the wait deadline, the status flags, the
//! per-channel flash descriptors and the output driver. It lives behind a
//! [`critical_section::Mutex`] so every update that the interrupt also reads
//! is applied with interrupts held off.

use core::cell::RefCell;

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::brightness::{Brightness, Flash};
use crate::modulator::channel_duties;
use crate::pattern::{ChannelId, LedPattern};
use crate::status::StatusFlags;
use crate::tick::{TickCounter, WaitDeadline};
use crate::waveform::{TRIANGLE, Waveform};

/// Modulation and timing state
///
/// Nothing here survives a sleep: [`Engine::reset`] is called on every entry
/// to the main flow.
#[derive(Debug)]
pub struct Engine<O> {
    clock: TickCounter,
    deadline: Option<WaitDeadline>,
    flags: StatusFlags,
    channels: [Option<Flash>; 2],
    waveform: &'static Waveform,
    outputs: O,
}

impl<O: OutputDriver> Engine<O> {
    /// Create an engine using the triangle waveform
    pub const fn new(outputs: O) -> Self {
        Self::with_waveform(outputs, &TRIANGLE)
    }

    pub const fn with_waveform(outputs: O, waveform: &'static Waveform) -> Self {
        Self {
            clock: TickCounter::new(),
            deadline: None,
            flags: StatusFlags::empty(),
            channels: [None, None],
            waveform,
            outputs,
        }
    }

    /// Return to power-on state
    pub fn reset(&mut self) {
        self.clock = TickCounter::new();
        self.deadline = None;
        self.flags = StatusFlags::empty();
        self.channels = [None, None];
    }

    /// Timer overflow step
    ///
    /// Advances the counter, raises the wait timeout when the deadline is hit
    /// and refreshes the duty of every flashing channel, all against the same
    /// counter value.
    pub fn on_tick(&mut self) {
        self.clock.advance();

        if let Some(deadline) = self.deadline {
            if deadline.is_reached(self.clock) {
                self.flags.insert(StatusFlags::WAIT_TIMEOUT);
                self.deadline = None;
            }
        }

        let duties = channel_duties(self.clock.now(), &self.channels, self.waveform);
        for channel in ChannelId::ALL {
            if let Some(duty) = duties[channel.index()] {
                self.outputs.set_duty(channel, duty);
            }
        }
    }

    pub const fn now(&self) -> u16 {
        self.clock.now()
    }

    pub const fn flags(&self) -> StatusFlags {
        self.flags
    }

    pub const fn deadline(&self) -> Option<WaitDeadline> {
        self.deadline
    }

    /// Clear the timeout flag and arm a deadline `delay` ticks from now
    pub fn arm_deadline(&mut self, delay: u16) -> WaitDeadline {
        self.flags.remove(StatusFlags::WAIT_TIMEOUT);
        let deadline = self.clock.deadline_after(delay);
        self.deadline = Some(deadline);
        deadline
    }

    pub fn disarm_deadline(&mut self) {
        self.deadline = None;
    }

    pub fn enable_repeat(&mut self) {
        self.flags.insert(StatusFlags::REPEAT_ENABLED);
    }

    /// Flash descriptor currently driving `channel`, if any
    pub const fn flash(&self, channel: ChannelId) -> Option<Flash> {
        self.channels[channel.index()]
    }

    /// Set one channel's brightness
    ///
    /// A static level disables modulation and writes the duty register
    /// directly; a flash descriptor hands the register to the tick handler.
    pub fn set_brightness(&mut self, channel: ChannelId, brightness: Brightness) {
        match brightness {
            Brightness::Static(percent) => {
                self.channels[channel.index()] = None;
                self.outputs.set_duty(channel, percent.duty());
            }
            Brightness::Flash(flash) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[Engine.set_brightness] {:?} flashing at {:?} (antiphase: {})",
                    channel, flash.rate, flash.antiphase
                );
                self.channels[channel.index()] = Some(flash);
            }
        }
    }

    /// Show `pattern` with a brightness per channel, indexed by [`ChannelId::index`]
    ///
    /// Inactive channels lose their flash descriptor. The lines are released
    /// before the polarity changes and enabled again afterwards.
    pub fn show(&mut self, pattern: LedPattern, brightness: [Brightness; 2]) {
        let config = pattern.output_config();
        for channel in ChannelId::ALL {
            if config.is_active(channel) {
                self.set_brightness(channel, brightness[channel.index()]);
            } else {
                self.channels[channel.index()] = None;
            }
        }
        self.outputs.release();
        self.outputs.configure(&config);
        self.outputs.enable(&config);
    }

    /// Stop modulation and park all lines in high impedance
    pub fn shutdown(&mut self) {
        self.channels = [None, None];
        self.deadline = None;
        self.outputs.release();
    }

    pub const fn outputs(&self) -> &O {
        &self.outputs
    }
}

/// Engine guarded for access from both the interrupt and the main flow
///
/// Can be placed in a `static` and ticked from the timer overflow handler:
///
/// ```ignore
/// static ENGINE: SharedEngine<BoardOutputs> = SharedEngine::new(Engine::new(BoardOutputs));
///
/// #[interrupt]
/// fn TIM0_OVF() {
///     ENGINE.on_tick();
/// }
/// ```
pub struct SharedEngine<O> {
    inner: Mutex<RefCell<Engine<O>>>,
}

impl<O: OutputDriver> SharedEngine<O> {
    pub const fn new(engine: Engine<O>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(engine)),
        }
    }

    /// Run `f` with interrupts held off
    pub fn with<R>(&self, f: impl FnOnce(&mut Engine<O>) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.inner.borrow(cs).borrow_mut()))
    }

    /// Entry point for the timer overflow interrupt
    pub fn on_tick(&self) {
        self.with(Engine::on_tick);
    }

    pub fn now(&self) -> u16 {
        self.with(|engine| engine.now())
    }

    pub fn flags(&self) -> StatusFlags {
        self.with(|engine| engine.flags())
    }

    /// The critical section only spans a one-byte read, so the poll loops
    /// never hold the tick interrupt off for more than a few cycles.
    pub fn is_timed_out(&self) -> bool {
        self.flags().contains(StatusFlags::WAIT_TIMEOUT)
    }

    pub fn is_repeat_enabled(&self) -> bool {
        self.flags().contains(StatusFlags::REPEAT_ENABLED)
    }
}
