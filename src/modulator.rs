//! Brightness modulation math
//!
//! Rebuilds a smooth-looking envelope from the coarse tick counter: the rate
//! selects which four counter bits form the waveform index.

use crate::brightness::{Flash, FlashRate};
use crate::waveform::{HALF_CYCLE, Waveform};

/// 4-bit waveform index for `ticks` at `rate`, shifted half a cycle if `offset`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn waveform_index(ticks: u16, rate: FlashRate, offset: bool) -> u8 {
    let step = (ticks >> rate.shift()) as u8;
    let phase = if offset { HALF_CYCLE } else { 0 };
    step.wrapping_add(phase) & 0x0F
}

/// Instantaneous duty values of both channels
///
/// Channel A takes the half-cycle offset whenever either channel asks for
/// anti-phase; channel B is the phase reference and is never offset. Channels
/// without a flash descriptor yield `None` and keep their static duty.
pub fn channel_duties(
    ticks: u16,
    channels: &[Option<Flash>; 2],
    waveform: &Waveform,
) -> [Option<u8>; 2] {
    let antiphase = channels.iter().flatten().any(|flash| flash.antiphase);
    let [a, b] = *channels;
    [
        a.map(|flash| waveform.sample(waveform_index(ticks, flash.rate, antiphase))),
        b.map(|flash| waveform.sample(waveform_index(ticks, flash.rate, false))),
    ]
}
