//! Scripted light sequences
//!
//! A programme is a fixed list of steps played through the [`LightShow`]
//! interface. Each wait may be cut short by the button, in which case
//! playback stops and the [`Restart`] is handed back to the caller.

use crate::LightShow;
use crate::brightness::{Brightness, FlashRate};
use crate::controller::Restart;
use crate::pattern::LedPattern;
use crate::pattern::LedPattern::{Antennae, Eyes, EyesSting};

use Step::Wait;

/// One scripted action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Show a pattern; `first` drives channel B, `second` channel A
    Show {
        pattern: LedPattern,
        first: Brightness,
        second: Brightness,
    },
    /// Hold the current state for a number of tenths of a second
    Wait(u8),
}

impl Step {
    pub const fn show(pattern: LedPattern) -> Self {
        Self::show_level(pattern, Brightness::FULL)
    }

    pub const fn show_level(pattern: LedPattern, brightness: Brightness) -> Self {
        Self::show_each(pattern, brightness, brightness)
    }

    pub const fn show_each(pattern: LedPattern, first: Brightness, second: Brightness) -> Self {
        Self::Show {
            pattern,
            first,
            second,
        }
    }

    pub fn apply<L: LightShow>(&self, lights: &mut L) -> Result<(), Restart> {
        match *self {
            Self::Show {
                pattern,
                first,
                second,
            } => {
                lights.show_each(pattern, first, second);
                Ok(())
            }
            Self::Wait(deciseconds) => lights.wait(deciseconds),
        }
    }
}

/// Ordered list of steps
#[derive(Debug, Clone, Copy)]
pub struct Programme<'a> {
    steps: &'a [Step],
}

impl<'a> Programme<'a> {
    pub const fn new(steps: &'a [Step]) -> Self {
        Self { steps }
    }

    pub const fn steps(&self) -> &'a [Step] {
        self.steps
    }

    /// Play every step once
    pub fn play<L: LightShow>(&self, lights: &mut L) -> Result<(), Restart> {
        for step in self.steps {
            step.apply(lights)?;
        }
        Ok(())
    }

    /// Total of all waits, in tenths of a second
    pub fn duration_deciseconds(&self) -> u32 {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Wait(deciseconds) => u32::from(*deciseconds),
                Step::Show { .. } => 0,
            })
            .sum()
    }
}

const fn flash(rate: FlashRate) -> Brightness {
    Brightness::flash(rate)
}

const BEE_SHOW_STEPS: &[Step] = &[
    Step::show(Eyes),
    Wait(10),
    Step::show_level(Eyes, flash(FlashRate::VerySlow)),
    Wait(30),
    Step::show(Antennae),
    Wait(5),
    Step::show_level(Antennae, Brightness::flash_antiphase(FlashRate::Slow)),
    Wait(20),
    Step::show(Eyes),
    Wait(10),
    Step::show_level(Eyes, flash(FlashRate::VerySlow)),
    Wait(30),
    Step::show(Antennae),
    Wait(5),
    Step::show_level(Antennae, flash(FlashRate::Slow)),
    Wait(30),
    Step::show_level(Eyes, flash(FlashRate::Medium)),
    Wait(10),
    Step::show(Antennae),
    Wait(5),
    Step::show_level(Antennae, flash(FlashRate::Slow)),
    Wait(10),
    // right antenna slow, left medium
    Step::show_each(Antennae, flash(FlashRate::Slow), flash(FlashRate::Medium)),
    Wait(20),
    Step::show_each(Antennae, flash(FlashRate::Medium), flash(FlashRate::Slow)),
    Wait(20),
    Step::show(Antennae),
    Wait(5),
    Step::show_level(Eyes, flash(FlashRate::Slow)),
    Wait(15),
    Step::show_level(Eyes, flash(FlashRate::Medium)),
    Wait(15),
    Step::show_level(Eyes, flash(FlashRate::Fast)),
    Wait(10),
    // eyes slow, sting fast
    Step::show_each(EyesSting, flash(FlashRate::Slow), flash(FlashRate::Fast)),
    Wait(20),
    Step::show_level(Eyes, flash(FlashRate::Medium)),
    Wait(5),
    Step::show_each(EyesSting, flash(FlashRate::Slow), flash(FlashRate::Fast)),
    Wait(20),
    Step::show_level(Eyes, flash(FlashRate::Slow)),
    Wait(30),
];

/// Default bee light show
pub const BEE_SHOW: Programme<'static> = Programme::new(BEE_SHOW_STEPS);
