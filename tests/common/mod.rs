#![allow(dead_code)]

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use core::ops::Range;

use bee_lights::{
    ChannelId, Engine, OutputConfig, OutputDriver, PowerControl, SharedEngine, TimingConfig,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputEvent {
    Release,
    Configure(OutputConfig),
    Enable(OutputConfig),
}

/// Output driver that remembers duty registers and reconfigurations
#[derive(Debug, Default)]
pub(crate) struct RecordingOutputs {
    pub(crate) duty: [u8; 2],
    pub(crate) duty_writes: [usize; 2],
    pub(crate) events: Vec<OutputEvent>,
    pub(crate) enabled: bool,
    /// Lines switched to output, bit 0 = A
    pub(crate) direction: u8,
}

impl RecordingOutputs {
    pub(crate) fn duty(&self, channel: ChannelId) -> u8 {
        self.duty[channel.index()]
    }
}

impl OutputDriver for RecordingOutputs {
    fn set_duty(&mut self, channel: ChannelId, duty: u8) {
        self.duty[channel.index()] = duty;
        self.duty_writes[channel.index()] += 1;
    }

    fn release(&mut self) {
        self.enabled = false;
        self.direction = 0;
        self.events.push(OutputEvent::Release);
    }

    fn configure(&mut self, config: &OutputConfig) {
        self.events.push(OutputEvent::Configure(*config));
    }

    fn enable(&mut self, config: &OutputConfig) {
        self.enabled = true;
        self.direction = config.active_mask();
        self.events.push(OutputEvent::Enable(*config));
    }
}

pub(crate) type TestEngine = SharedEngine<RecordingOutputs>;

pub(crate) fn new_engine() -> TestEngine {
    SharedEngine::new(Engine::new(RecordingOutputs::default()))
}

/// Simulated passage of time and button presses
///
/// Time only moves when the code under test polls the button or busy-waits,
/// which is where the timer interrupt would fire on hardware.
pub(crate) struct SimClock<'a> {
    engine: &'a TestEngine,
    elapsed: Cell<u32>,
    presses: RefCell<Vec<Range<u32>>>,
}

impl<'a> SimClock<'a> {
    pub(crate) fn new(engine: &'a TestEngine) -> Self {
        Self {
            engine,
            elapsed: Cell::new(0),
            presses: RefCell::new(Vec::new()),
        }
    }

    /// Ticks elapsed since the simulation started
    pub(crate) fn elapsed(&self) -> u32 {
        self.elapsed.get()
    }

    pub(crate) fn advance(&self, ticks: u32) {
        for _ in 0..ticks {
            self.engine.on_tick();
            self.elapsed.set(self.elapsed.get() + 1);
        }
    }

    /// Hold the button down for `ticks`, starting now
    pub(crate) fn press_for(&self, ticks: u32) {
        self.press_at(self.elapsed(), ticks);
    }

    /// Hold the button down for `ticks`, starting at elapsed tick `start`
    pub(crate) fn press_at(&self, start: u32, ticks: u32) {
        self.presses.borrow_mut().push(start..start + ticks);
    }

    pub(crate) fn is_pressed(&self) -> bool {
        let now = self.elapsed();
        self.presses.borrow().iter().any(|range| range.contains(&now))
    }
}

/// Active-low button; every read lets one tick elapse
pub(crate) struct SimButton<'a> {
    clock: &'a SimClock<'a>,
    pub(crate) reads: usize,
}

impl<'a> SimButton<'a> {
    pub(crate) fn new(clock: &'a SimClock<'a>) -> Self {
        Self { clock, reads: 0 }
    }
}

impl ErrorType for SimButton<'_> {
    type Error = Infallible;
}

impl InputPin for SimButton<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        let pressed = self.clock.is_pressed();
        self.reads += 1;
        self.clock.advance(1);
        Ok(pressed)
    }
}

/// Busy-wait that advances the clock by the elapsed tick periods
pub(crate) struct SimDelay<'a> {
    clock: &'a SimClock<'a>,
    period_ns: u64,
    carry_ns: u64,
    pub(crate) total_ns: u64,
}

impl<'a> SimDelay<'a> {
    pub(crate) fn new(clock: &'a SimClock<'a>, config: &TimingConfig) -> Self {
        Self {
            clock,
            period_ns: config.tick_period.as_micros() * 1_000,
            carry_ns: 0,
            total_ns: 0,
        }
    }
}

impl DelayNs for SimDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.carry_ns += u64::from(ns);
        let ticks = self.carry_ns / self.period_ns;
        self.carry_ns %= self.period_ns;
        self.clock.advance(u32::try_from(ticks).unwrap());
    }
}

/// Power control that remembers when the wake source was armed
pub(crate) struct SimPower<'a> {
    clock: &'a SimClock<'a>,
    pub(crate) armed: usize,
    pub(crate) halts: usize,
    pub(crate) armed_at: Vec<u32>,
}

impl<'a> SimPower<'a> {
    pub(crate) fn new(clock: &'a SimClock<'a>) -> Self {
        Self {
            clock,
            armed: 0,
            halts: 0,
            armed_at: Vec::new(),
        }
    }
}

impl PowerControl for SimPower<'_> {
    fn arm_wake(&mut self) {
        self.armed += 1;
        self.armed_at.push(self.clock.elapsed());
    }

    fn halt(&mut self) {
        assert_eq!(self.armed, self.halts + 1, "halted without an armed wake source");
        assert!(!self.clock.is_pressed(), "halted with the button held");
        self.halts += 1;
    }
}
