//! Per-channel brightness descriptors
//!
//! A channel is either held at a static percentage or flashed through the
//! waveform at one of a few fixed rates. The packed byte form exists only at
//! the script/register boundary; everything inside the crate uses the enum.

use core::fmt;

const RAW_FLASH: u8 = 0b1000_0000;
const RAW_ANTIPHASE: u8 = 0b0100_0000;
const RAW_RATE_MASK: u8 = 0b0000_0111;

/// Maximum static brightness
pub const MAX_PERCENT: u8 = 100;

/// Error returned by fallible brightness constructors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessError {
    /// Static brightness above 100%
    PercentOutOfRange(u8),
    /// Flash descriptor whose rate selector names no flash rate (including zero)
    InvalidRate(u8),
}

impl fmt::Display for BrightnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PercentOutOfRange(value) => write!(f, "brightness {value}% exceeds 100%"),
            Self::InvalidRate(selector) => write!(f, "unknown flash rate selector {selector}"),
        }
    }
}

impl core::error::Error for BrightnessError {}

/// Static brightness in the range 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(u8);

impl Percent {
    pub const OFF: Self = Self(0);
    pub const FULL: Self = Self(MAX_PERCENT);

    pub const fn new(value: u8) -> Result<Self, BrightnessError> {
        if value > MAX_PERCENT {
            return Err(BrightnessError::PercentOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// PWM duty register value for this percentage (truncating)
    #[allow(clippy::cast_possible_truncation)]
    pub const fn duty(self) -> u8 {
        (0xFF * self.0 as u16 / MAX_PERCENT as u16) as u8
    }
}

/// Flash speed
///
/// The selector is the number of tick bits (plus one) discarded before the
/// waveform lookup, so each step up halves the speed. Zero is not a valid
/// selector and cannot be expressed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FlashRate {
    Fast = 1,
    Medium = 2,
    Slow = 3,
    VerySlow = 4,
    VeryVerySlow = 7,
}

impl FlashRate {
    pub const fn from_selector(selector: u8) -> Option<Self> {
        Some(match selector {
            1 => Self::Fast,
            2 => Self::Medium,
            3 => Self::Slow,
            4 => Self::VerySlow,
            7 => Self::VeryVerySlow,
            _ => return None,
        })
    }

    pub const fn selector(self) -> u8 {
        self as u8
    }

    /// Right shift applied to the tick counter
    #[inline]
    pub const fn shift(self) -> u8 {
        self.selector() - 1
    }

    /// Ticks in one full waveform cycle at this rate
    pub const fn cycle_ticks(self) -> u32 {
        (crate::waveform::WAVEFORM_LEN as u32) << self.shift()
    }
}

/// Flash descriptor: rate plus optional half-cycle phase offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flash {
    pub rate: FlashRate,
    pub antiphase: bool,
}

impl Flash {
    pub const fn new(rate: FlashRate) -> Self {
        Self {
            rate,
            antiphase: false,
        }
    }

    #[must_use]
    pub const fn with_antiphase(mut self) -> Self {
        self.antiphase = true;
        self
    }
}

/// Requested brightness for one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brightness {
    /// Constant duty, modulation disabled
    Static(Percent),
    /// Duty driven by the modulator on every tick
    Flash(Flash),
}

impl Brightness {
    pub const FULL: Self = Self::Static(Percent::FULL);
    pub const OFF: Self = Self::Static(Percent::OFF);

    pub const fn percent(value: u8) -> Result<Self, BrightnessError> {
        match Percent::new(value) {
            Ok(percent) => Ok(Self::Static(percent)),
            Err(err) => Err(err),
        }
    }

    pub const fn flash(rate: FlashRate) -> Self {
        Self::Flash(Flash::new(rate))
    }

    pub const fn flash_antiphase(rate: FlashRate) -> Self {
        Self::Flash(Flash::new(rate).with_antiphase())
    }

    /// Decode the packed byte form
    ///
    /// Bit 7 marks a flash descriptor, bit 6 the anti-phase modifier and bits
    /// 0..2 the rate selector. Without bit 7 the byte is a percentage.
    pub const fn from_raw(raw: u8) -> Result<Self, BrightnessError> {
        if raw & RAW_FLASH == 0 {
            return Self::percent(raw);
        }
        let selector = raw & RAW_RATE_MASK;
        let Some(rate) = FlashRate::from_selector(selector) else {
            return Err(BrightnessError::InvalidRate(selector));
        };
        Ok(Self::Flash(Flash {
            rate,
            antiphase: raw & RAW_ANTIPHASE != 0,
        }))
    }

    /// Encode into the packed byte form
    pub const fn to_raw(self) -> u8 {
        match self {
            Self::Static(percent) => percent.value(),
            Self::Flash(flash) => {
                let phase = if flash.antiphase { RAW_ANTIPHASE } else { 0 };
                RAW_FLASH | phase | flash.rate.selector()
            }
        }
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<Percent> for Brightness {
    fn from(value: Percent) -> Self {
        Self::Static(value)
    }
}

impl From<Flash> for Brightness {
    fn from(value: Flash) -> Self {
        Self::Flash(value)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = BrightnessError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}
