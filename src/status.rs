//! Status bits shared between the tick handler and the main flow

/// Small bit-set of device status flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags(u8);

impl StatusFlags {
    /// Set by the tick handler when the counter reaches the wait deadline
    pub const WAIT_TIMEOUT: Self = Self(1 << 0);
    /// Set once at boot after a long activating press; lasts for the session
    pub const REPEAT_ENABLED: Self = Self(1 << 1);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}
