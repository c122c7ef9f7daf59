//! Logical LED patterns and how they map onto the two PWM lines
//!
//! Both LED groups share the same two pins. The antennae are lit when a line
//! sources current ("pulled up", non-inverting PWM); the eyes and sting are lit
//! when a line sinks current ("pulled down", inverting PWM). The pattern's raw
//! value is the port level that selects the group.

/// Physical PWM channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelId {
    /// First line: left antenna or sting
    A,
    /// Second line: right antenna or eyes
    B,
}

impl ChannelId {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Drive polarity of the active lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Non-inverting PWM, LED between pin and ground
    PullUp,
    /// Inverting PWM, LED between supply and pin
    PullDown,
}

const PORT_BIT_A: u8 = 0b001;
const PORT_BIT_B: u8 = 0b010;
const PORT_BIT_INVERT: u8 = 0b100;

/// Named LED grouping requested by a script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LedPattern {
    Off = 0,
    AntennaLeft = 1,
    AntennaRight = 2,
    /// Both antennae, individually controllable
    Antennae = 3,
    /// Eyes and sting, individually controllable
    EyesSting = 4,
    Eyes = 5,
    Sting = 6,
}

impl LedPattern {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Off,
            1 => Self::AntennaLeft,
            2 => Self::AntennaRight,
            3 => Self::Antennae,
            4 => Self::EyesSting,
            5 => Self::Eyes,
            6 => Self::Sting,
            _ => return None,
        })
    }

    /// Port level that selects this pattern
    pub const fn port_level(self) -> u8 {
        self as u8
    }

    /// Decode the pattern into polarity and active channels
    pub const fn output_config(self) -> OutputConfig {
        let level = self.port_level();
        if level & PORT_BIT_INVERT == 0 {
            OutputConfig {
                polarity: Polarity::PullUp,
                active: [level & PORT_BIT_A != 0, level & PORT_BIT_B != 0],
                port_level: level,
            }
        } else {
            OutputConfig {
                polarity: Polarity::PullDown,
                active: [level & PORT_BIT_A == 0, level & PORT_BIT_B == 0],
                port_level: level,
            }
        }
    }
}

/// Output reconfiguration applied as a unit by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub polarity: Polarity,
    /// Active flag per channel, indexed by [`ChannelId::index`]
    pub active: [bool; 2],
    /// Level written to the port before the lines are enabled
    pub port_level: u8,
}

impl OutputConfig {
    pub const fn is_active(&self, channel: ChannelId) -> bool {
        self.active[channel.index()]
    }

    /// Bit mask of the active channels, bit 0 = A
    pub const fn active_mask(&self) -> u8 {
        (self.active[0] as u8) | ((self.active[1] as u8) << 1)
    }
}
