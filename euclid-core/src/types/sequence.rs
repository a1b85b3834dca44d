//! Flat on/off sequence handed back to callers.

use super::pulse::Pulse;
#[cfg(feature = "colored")]
use colored::*;
use std::fmt;
use std::ops::Index;

/// Ordered hits and rests, owned by the caller once generated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence {
    pulses: Vec<Pulse>,
}

impl Sequence {
    pub fn new(pulses: Vec<Pulse>) -> Self {
        Self { pulses }
    }

    /// Build from integers; any non-zero value is a hit
    pub fn from_ints(ints: &[u8]) -> Self {
        ints.iter().map(|&i| Pulse::from(i != 0)).collect()
    }

    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pulse> {
        self.pulses.iter()
    }

    /// Number of hits in the sequence
    pub fn hit_count(&self) -> usize {
        self.pulses.iter().filter(|p| p.is_hit()).count()
    }

    /// The 0/1 integer form emitted to hosts
    pub fn to_ints(&self) -> Vec<u8> {
        self.pulses.iter().map(|p| p.as_u8()).collect()
    }

    /// Plain grid notation, e.g. `x..x..x.`
    pub fn to_grid(&self) -> String {
        self.pulses.iter().map(|p| p.symbol()).collect()
    }

    pub fn into_pulses(self) -> Vec<Pulse> {
        self.pulses
    }
}

impl Index<usize> for Sequence {
    type Output = Pulse;

    fn index(&self, index: usize) -> &Pulse {
        &self.pulses[index]
    }
}

impl FromIterator<Pulse> for Sequence {
    fn from_iter<I: IntoIterator<Item = Pulse>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Sequence {
    type Item = Pulse;
    type IntoIter = std::vec::IntoIter<Pulse>;

    fn into_iter(self) -> Self::IntoIter {
        self.pulses.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Pulse;
    type IntoIter = std::slice::Iter<'a, Pulse>;

    fn into_iter(self) -> Self::IntoIter {
        self.pulses.iter()
    }
}

impl From<Vec<Pulse>> for Sequence {
    fn from(pulses: Vec<Pulse>) -> Self {
        Self::new(pulses)
    }
}

#[cfg(feature = "colored")]
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{}", "[]".bright_black());
        }
        for pulse in &self.pulses {
            match pulse {
                Pulse::Hit => write!(f, "{}", "x".bright_yellow().bold())?,
                Pulse::Rest => write!(f, "{}", ".".bright_black())?,
            }
        }
        Ok(())
    }
}

// Plain Display impl for non-colored builds (WASM)
#[cfg(not(feature = "colored"))]
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }
        write!(f, "{}", self.to_grid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_view_round_trips() {
        let seq = Sequence::from_ints(&[1, 0, 0, 1, 0, 0, 1, 0]);
        assert_eq!(seq.len(), 8);
        assert_eq!(seq.hit_count(), 3);
        assert_eq!(seq.to_ints(), vec![1, 0, 0, 1, 0, 0, 1, 0]);
        // Any non-zero value counts as a hit
        assert_eq!(Sequence::from_ints(&[7, 0, 255]).to_ints(), vec![1, 0, 1]);
    }

    #[test]
    fn test_grid_notation() {
        let seq = Sequence::from_ints(&[1, 0, 0, 1, 0, 0, 1, 0]);
        assert_eq!(seq.to_grid(), "x..x..x.");
        assert_eq!(Sequence::default().to_grid(), "");
    }

    #[test]
    fn test_from_ints_treats_nonzero_as_hit() {
        assert_eq!(Sequence::from_ints(&[2, 0, 7]).to_ints(), vec![1, 0, 1]);
    }

    #[test]
    fn test_index() {
        let seq = Sequence::from_ints(&[0, 1]);
        assert_eq!(seq[0], Pulse::Rest);
        assert_eq!(seq[1], Pulse::Hit);
    }
}
