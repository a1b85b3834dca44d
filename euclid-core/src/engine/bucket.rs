//! Buckets: transient pulse groups used while distributing.

use crate::types::Pulse;

/// A group of one or more pulses
///
/// Two buckets are of the same kind when their contents are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pulses: Vec<Pulse>,
}

impl Bucket {
    /// A bucket holding a single unit
    pub fn unit(pulse: Pulse) -> Self {
        Self {
            pulses: vec![pulse],
        }
    }

    /// Number of units in the bucket
    pub fn size(&self) -> usize {
        self.pulses.len()
    }

    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    /// Append the contents of `other`, producing the merged bucket
    pub fn absorb(mut self, other: Bucket) -> Self {
        self.pulses.extend(other.pulses);
        self
    }

    pub fn into_pulses(self) -> Vec<Pulse> {
        self.pulses
    }
}

/// `beats` unit buckets, the first `hits` filled and the rest empty
///
/// Callers pass already clamped values (`hits <= beats`).
pub fn initialize(hits: u32, beats: u32) -> Vec<Bucket> {
    (0..beats)
        .map(|i| Bucket::unit(Pulse::from(i < hits)))
        .collect()
}
