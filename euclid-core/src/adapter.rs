//! Host adapter object
//!
//! Models one instance of the sequencer object inside a message-passing host:
//! three integer inlets (hits, beats, offset) that each cause output, a
//! `pingpong` attribute, a `bang` that regenerates from the last parameters,
//! and a single outlet that emits the whole sequence as one message.
//!
//! Raw inlet values are stored as received (after the per-inlet clamps) and
//! re-clamped against each other at every generation, so lowering `beats`
//! and raising it again restores the previously requested hit count.

use crate::engine::generate_with;
use crate::error::EuclidError;
use crate::types::{params, Distribution, PatternParams, Sequence};
use std::fmt;
use tracing::debug;

/// Selector of the outgoing message
pub const SEQUENCE_SELECTOR: &str = "sequence";

/// One batched output event
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceMessage {
    pub selector: String,
    pub values: Vec<u8>,
}

impl SequenceMessage {
    pub fn new(sequence: &Sequence) -> Self {
        Self {
            selector: SEQUENCE_SELECTOR.to_string(),
            values: sequence.to_ints(),
        }
    }

    pub fn sequence(&self) -> Sequence {
        Sequence::from_ints(&self.values)
    }
}

impl fmt::Display for SequenceMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector)?;
        for value in &self.values {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

/// Which side of the object an assist query refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    Inlet(usize),
    Outlet(usize),
}

/// Stateful sequencer object holding the last-used parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EuclidObject {
    hits: i64,
    beats: i64,
    offset: i64,
    ping_pong: bool,
    distribution: Distribution,
}

impl EuclidObject {
    pub fn new() -> Self {
        Self {
            hits: 0,
            beats: 1,
            offset: 0,
            ping_pong: false,
            distribution: Distribution::default(),
        }
    }

    /// Start from existing parameters
    pub fn with_params(params: PatternParams) -> Self {
        Self {
            hits: params.hits() as i64,
            beats: params.beats() as i64,
            offset: params.offset() as i64,
            ping_pong: params.ping_pong(),
            distribution: Distribution::default(),
        }
    }

    /// Current parameters, clamped into range
    pub fn params(&self) -> PatternParams {
        PatternParams::new(self.hits, self.beats, self.offset, self.ping_pong)
    }

    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    /// Left inlet: set hits and output
    pub fn set_hits(&mut self, hits: i64) -> SequenceMessage {
        self.hits = hits.max(0);
        self.bang()
    }

    /// Middle inlet: set beats and output
    pub fn set_beats(&mut self, beats: i64) -> SequenceMessage {
        self.beats = params::clamp_beats(beats) as i64;
        self.bang()
    }

    /// Right inlet: set offset and output
    pub fn set_offset(&mut self, offset: i64) -> SequenceMessage {
        self.offset = params::clamp_offset(offset) as i64;
        self.bang()
    }

    /// `pingpong` attribute; takes effect on the next output
    pub fn set_ping_pong(&mut self, ping_pong: bool) {
        self.ping_pong = ping_pong;
    }

    /// Takes effect on the next output
    pub fn set_distribution(&mut self, distribution: Distribution) {
        self.distribution = distribution;
    }

    /// Regenerate from the last parameters
    pub fn bang(&mut self) -> SequenceMessage {
        let params = self.params();
        debug!(%params, distribution = %self.distribution, "bang");
        SequenceMessage::new(&generate_with(&params, self.distribution))
    }

    /// Set hits, beats and (optionally) offset together, with a single output
    ///
    /// Values are applied right to left so hits clamp against the new beats.
    pub fn list(&mut self, values: &[i64]) -> Result<SequenceMessage, EuclidError> {
        match values {
            [hits, beats] => {
                self.beats = params::clamp_beats(*beats) as i64;
                self.hits = (*hits).max(0);
            }
            [hits, beats, offset] => {
                self.offset = params::clamp_offset(*offset) as i64;
                self.beats = params::clamp_beats(*beats) as i64;
                self.hits = (*hits).max(0);
            }
            _ => return Err(EuclidError::WrongArity(values.len())),
        }
        Ok(self.bang())
    }

    /// Handle a textual message such as `hits 3`, `beats 8`, `offset 2`,
    /// `pingpong 1`, `bang`, a list `3 8 2` or notation `(3,8,2)`
    ///
    /// Returns `Ok(None)` for messages that change state without output.
    pub fn message(&mut self, input: &str) -> Result<Option<SequenceMessage>, EuclidError> {
        let mut words = input.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let single = |rest: &[&str]| -> Result<i64, EuclidError> {
            match rest {
                [value] => value
                    .parse::<i64>()
                    .map_err(|_| EuclidError::InvalidNumber(value.to_string())),
                _ => Err(EuclidError::WrongArity(rest.len())),
            }
        };

        match head {
            "bang" => Ok(Some(self.bang())),
            "hits" | "int" => Ok(Some(self.set_hits(single(&rest)?))),
            "beats" | "in1" => Ok(Some(self.set_beats(single(&rest)?))),
            "offset" | "in2" => Ok(Some(self.set_offset(single(&rest)?))),
            "pingpong" => {
                self.set_ping_pong(single(&rest)? != 0);
                Ok(None)
            }
            "mode" => match rest.as_slice() {
                [name] => {
                    self.set_distribution(name.parse()?);
                    Ok(None)
                }
                _ => Err(EuclidError::WrongArity(rest.len())),
            },
            _ => {
                let values = params::parse_notation(input)?;
                self.list(&values).map(Some)
            }
        }
    }

    /// Description of an inlet or outlet
    pub fn assist(port: Port) -> Option<String> {
        match port {
            Port::Outlet(0) => Some("Generated sequence output".to_string()),
            Port::Inlet(0) => Some("Inlet 0: Hits (Causes Output)".to_string()),
            Port::Inlet(1) => Some("Inlet 1: Beats (Causes Output)".to_string()),
            Port::Inlet(2) => Some("Inlet 2: Offset (Causes Output)".to_string()),
            _ => None,
        }
    }
}

impl Default for EuclidObject {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_object_outputs_single_rest() {
        let mut obj = EuclidObject::new();
        assert_eq!(obj.bang().values, vec![0]);
    }

    #[test]
    fn test_inlets_cause_output() {
        let mut obj = EuclidObject::new();
        obj.set_beats(8);
        let msg = obj.set_hits(3);
        assert_eq!(msg.selector, "sequence");
        assert_eq!(msg.values, vec![1, 0, 0, 1, 0, 0, 1, 0]);

        let msg = obj.set_offset(3);
        assert_eq!(msg.values, vec![0, 1, 0, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn test_inlet_clamping() {
        let mut obj = EuclidObject::new();
        assert_eq!(obj.set_beats(500).values.len(), 64);
        assert_eq!(obj.set_beats(-3).values.len(), 1);
        obj.set_beats(8);
        assert_eq!(obj.set_hits(-5).values, vec![0; 8]);
        assert_eq!(obj.set_hits(100).values, vec![1; 8]);
        obj.set_offset(-1);
        assert_eq!(obj.params().offset(), 0);
        obj.set_offset(1000);
        assert_eq!(obj.params().offset(), 128);
    }

    #[test]
    fn test_hits_reclamped_when_beats_change() {
        let mut obj = EuclidObject::new();
        obj.set_beats(16);
        obj.set_hits(12);
        assert_eq!(obj.set_beats(4).values, vec![1, 1, 1, 1]);
        assert_eq!(obj.set_beats(16).values.iter().filter(|&&v| v == 1).count(), 12);
    }

    #[test]
    fn test_ping_pong_attribute_waits_for_output() {
        let mut obj = EuclidObject::with_params(PatternParams::new(3, 8, 0, false));
        obj.set_ping_pong(true);
        assert_eq!(obj.bang().values.len(), 16);
    }

    #[test]
    fn test_distribution_switch() {
        let mut obj = EuclidObject::with_params(PatternParams::new(3, 8, 0, false));
        obj.set_distribution(Distribution::Legacy);
        assert_eq!(obj.bang().sequence().to_grid(), "x..x.x..");
        assert_eq!(obj.distribution(), Distribution::Legacy);
    }

    #[test]
    fn test_list_sets_all_parameters() {
        let mut obj = EuclidObject::new();
        let msg = obj.list(&[3, 8, 3]).unwrap();
        assert_eq!(msg.values, vec![0, 1, 0, 1, 0, 0, 1, 0]);
        assert_eq!(obj.list(&[1]), Err(EuclidError::WrongArity(1)));
    }

    #[test]
    fn test_text_messages() {
        let mut obj = EuclidObject::new();
        assert_eq!(obj.message("beats 8").unwrap().unwrap().values.len(), 8);
        assert_eq!(
            obj.message("hits 3").unwrap().unwrap().to_string(),
            "sequence 1 0 0 1 0 0 1 0"
        );
        assert_eq!(obj.message("pingpong 1").unwrap(), None);
        assert_eq!(obj.message("bang").unwrap().unwrap().values.len(), 16);
        assert_eq!(obj.message("5 8").unwrap().unwrap().values.len(), 16);
        assert_eq!(obj.message("(3,8,1)").unwrap().unwrap().values.len(), 16);
        assert_eq!(obj.message("").unwrap(), None);
        assert_eq!(
            obj.message("hits three"),
            Err(EuclidError::InvalidNumber("three".to_string()))
        );
        assert!(obj.message("mode sideways").is_err());
    }

    #[test]
    fn test_assist_strings() {
        assert_eq!(
            EuclidObject::assist(Port::Outlet(0)).as_deref(),
            Some("Generated sequence output")
        );
        assert_eq!(
            EuclidObject::assist(Port::Inlet(1)).as_deref(),
            Some("Inlet 1: Beats (Causes Output)")
        );
        assert_eq!(
            EuclidObject::assist(Port::Inlet(2)).as_deref(),
            Some("Inlet 2: Offset (Causes Output)")
        );
        assert_eq!(EuclidObject::assist(Port::Inlet(3)), None);
    }
}
