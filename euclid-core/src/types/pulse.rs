//! A single slot of a rhythm: either a hit or a rest.

use std::fmt;

/// One unit symbol of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pulse {
    #[default]
    Rest,
    Hit,
}

impl Pulse {
    /// Integer form used on the wire (0 or 1)
    pub fn as_u8(self) -> u8 {
        match self {
            Pulse::Rest => 0,
            Pulse::Hit => 1,
        }
    }

    pub fn is_hit(self) -> bool {
        self == Pulse::Hit
    }

    /// Grid symbol: `x` for a hit, `.` for a rest
    pub fn symbol(self) -> char {
        match self {
            Pulse::Rest => '.',
            Pulse::Hit => 'x',
        }
    }
}

impl From<bool> for Pulse {
    fn from(hit: bool) -> Self {
        if hit {
            Pulse::Hit
        } else {
            Pulse::Rest
        }
    }
}

impl From<Pulse> for u8 {
    fn from(pulse: Pulse) -> Self {
        pulse.as_u8()
    }
}

impl fmt::Display for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
