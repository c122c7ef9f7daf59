//! Main control flow: boot, scripted waits and the sleep/wake cycle
//!
//! The device never resumes after sleeping. Waking restarts execution from
//! the entry point, so a wait cancelled by the button reports [`Restart`]
//! instead of returning normally, and the caller unwinds back to the top where
//! [`Controller::session`] runs boot again.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::brightness::Brightness;
use crate::button::Button;
use crate::config::TimingConfig;
use crate::engine::{Engine, SharedEngine};
use crate::pattern::{ChannelId, LedPattern};
use crate::tick::MAX_WAIT_TICKS;
use crate::{LightShow, OutputDriver, PowerControl};

/// The device slept and woke up; everything must be initialised again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Restart;

/// Power state of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    #[default]
    Awake,
    /// Outputs parked, waiting for the button to settle
    PreparingSleep,
    /// Wake source armed, CPU halted
    Asleep,
}

/// Main-flow side of the device
pub struct Controller<'a, O, B, D, P> {
    engine: &'a SharedEngine<O>,
    button: Button<B>,
    delay: D,
    power: P,
    config: TimingConfig,
    state: PowerState,
}

impl<'a, O, B, D, P> Controller<'a, O, B, D, P>
where
    O: OutputDriver,
    B: InputPin,
    D: DelayNs,
    P: PowerControl,
{
    pub fn new(
        engine: &'a SharedEngine<O>,
        button: B,
        delay: D,
        power: P,
        config: TimingConfig,
    ) -> Self {
        Self {
            engine,
            button: Button::new(button),
            delay,
            power,
            config,
            state: PowerState::Awake,
        }
    }

    /// Boot, then run `script` until the device sleeps
    pub fn session<F>(&mut self, script: F) -> Restart
    where
        F: FnMut(&mut Self) -> Result<(), Restart>,
    {
        self.boot();
        self.run(script)
    }

    /// Power-on initialisation
    ///
    /// Resets the shared state and times the activating press. Holding the
    /// button past the long-press threshold enables repeat, acknowledged by
    /// lighting the sting.
    pub fn boot(&mut self) {
        let long_press = self.config.long_press_ticks();
        self.engine.with(|engine| {
            engine.reset();
            engine.arm_deadline(long_press);
        });
        self.state = PowerState::Awake;

        self.delay_settle();
        while !self.engine.is_timed_out() && self.button.is_pressed() {}

        if self.engine.is_timed_out() {
            #[cfg(feature = "esp32-log")]
            println!("[Controller.boot] long press, repeat enabled");
            self.engine.with(Engine::enable_repeat);
            self.show(LedPattern::Sting);
        } else {
            self.engine.with(Engine::disarm_deadline);
        }

        self.debounce();
    }

    /// Play `script` repeatedly while repeat is enabled, otherwise once
    ///
    /// Always ends in sleep.
    pub fn run<F>(&mut self, mut script: F) -> Restart
    where
        F: FnMut(&mut Self) -> Result<(), Restart>,
    {
        loop {
            if let Err(restart) = script(self) {
                return restart;
            }
            if !self.engine.is_repeat_enabled() {
                return self.sleep();
            }
        }
    }

    /// Wait `ticks` tick periods, polling the button
    ///
    /// A press cancels the wait and puts the device to sleep.
    pub fn wait_ticks(&mut self, ticks: u16) -> Result<(), Restart> {
        let ticks = ticks.clamp(1, MAX_WAIT_TICKS);
        self.engine.with(|engine| engine.arm_deadline(ticks));

        while !self.engine.is_timed_out() {
            if self.button.is_pressed() {
                return Err(self.sleep());
            }
        }
        Ok(())
    }

    /// Park the device in its lowest power state
    ///
    /// On hardware the halt does not return: the button edge resets the CPU.
    pub fn sleep(&mut self) -> Restart {
        #[cfg(feature = "esp32-log")]
        println!("[Controller.sleep] preparing sleep");
        self.state = PowerState::PreparingSleep;
        self.engine.with(Engine::shutdown);
        self.debounce();

        self.power.arm_wake();
        self.state = PowerState::Asleep;
        self.power.halt();

        #[cfg(feature = "esp32-log")]
        println!("[Controller.sleep] woke up");
        Restart
    }

    /// Wait out contact bounce and the release of the button
    pub fn debounce(&mut self) {
        self.button.debounce(&mut self.delay, self.config.debounce_settle);
    }

    pub const fn state(&self) -> PowerState {
        self.state
    }

    pub const fn config(&self) -> &TimingConfig {
        &self.config
    }

    pub const fn engine(&self) -> &'a SharedEngine<O> {
        self.engine
    }

    pub fn is_repeat_enabled(&self) -> bool {
        self.engine.is_repeat_enabled()
    }

    pub fn power(&self) -> &P {
        &self.power
    }

    fn delay_settle(&mut self) {
        crate::button::settle_for(&mut self.delay, self.config.debounce_settle);
    }
}

impl<O, B, D, P> LightShow for Controller<'_, O, B, D, P>
where
    O: OutputDriver,
    B: InputPin,
    D: DelayNs,
    P: PowerControl,
{
    fn show_each(&mut self, pattern: LedPattern, first: Brightness, second: Brightness) {
        let mut brightness = [Brightness::OFF; 2];
        brightness[ChannelId::B.index()] = first;
        brightness[ChannelId::A.index()] = second;
        self.engine.with(|engine| engine.show(pattern, brightness));
    }

    fn wait(&mut self, deciseconds: u8) -> Result<(), Restart> {
        self.wait_ticks(self.config.deciseconds(deciseconds))
    }
}
