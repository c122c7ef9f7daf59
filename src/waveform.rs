//! Brightness envelopes used by flashing channels
//!
//! A waveform is one modulation cycle sampled at 16 points. The modulator
//! walks it with a 4-bit index derived from the tick counter.

/// Number of samples in one waveform cycle
pub const WAVEFORM_LEN: usize = 16;

/// Index offset of half a cycle, used for anti-phase flashing
pub const HALF_CYCLE: u8 = (WAVEFORM_LEN / 2) as u8;

const INDEX_MASK: u8 = (WAVEFORM_LEN - 1) as u8;

/// Fixed table of duty samples forming one flash cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waveform([u8; WAVEFORM_LEN]);

/// Triangle wave, visually close to a rectified sine
pub const TRIANGLE: Waveform = Waveform([
    32, 64, 96, 128, 160, 192, 224, 255, 224, 192, 160, 128, 96, 64, 32, 0,
]);

/// Linear fade from full to off
pub const FADE_OUT: Waveform = Waveform([
    255, 238, 221, 204, 187, 170, 153, 136, 119, 102, 85, 68, 51, 34, 17, 0,
]);

/// Linear fade from off to full
pub const FADE_IN: Waveform = Waveform([
    0, 17, 34, 51, 68, 85, 102, 119, 136, 153, 170, 187, 204, 221, 238, 255,
]);

impl Waveform {
    /// Create a waveform from raw samples
    pub const fn new(samples: [u8; WAVEFORM_LEN]) -> Self {
        Self(samples)
    }

    /// Sample at `index`, wrapping modulo the cycle length
    #[inline]
    pub const fn sample(&self, index: u8) -> u8 {
        self.0[(index & INDEX_MASK) as usize]
    }

    pub const fn samples(&self) -> &[u8; WAVEFORM_LEN] {
        &self.0
    }
}

impl Default for Waveform {
    fn default() -> Self {
        TRIANGLE
    }
}
