//! Pattern parameters and the clamping rules applied to raw host input.

use crate::error::EuclidError;
use std::fmt;
use std::str::FromStr;

/// Upper bound on the number of beats in one cycle
pub const MAX_BEATS: u32 = 64;

/// Upper bound on the rotation offset
pub const MAX_OFFSET: u32 = 128;

/// Immutable generation parameters
///
/// Always satisfies `1 <= beats <= 64`, `0 <= hits <= beats` and
/// `0 <= offset <= 128`. Raw values outside these ranges are clamped,
/// never rejected, including on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawParams"))]
pub struct PatternParams {
    hits: u32,
    beats: u32,
    offset: u32,
    ping_pong: bool,
}

impl PatternParams {
    /// Build parameters from raw values, clamping each into range
    pub fn new(hits: i64, beats: i64, offset: i64, ping_pong: bool) -> Self {
        let beats = clamp_beats(beats);
        Self {
            hits: clamp_hits(hits, beats),
            beats,
            offset: clamp_offset(offset),
            ping_pong,
        }
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn beats(&self) -> u32 {
        self.beats
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn ping_pong(&self) -> bool {
        self.ping_pong
    }

    /// Length of the sequence these parameters generate
    pub fn output_len(&self) -> usize {
        if self.ping_pong {
            self.beats as usize * 2
        } else {
            self.beats as usize
        }
    }

    /// Copy with ping-pong mode switched
    pub fn with_ping_pong(self, ping_pong: bool) -> Self {
        Self { ping_pong, ..self }
    }
}

/// Unclamped wire form, routed through [`PatternParams::new`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawParams {
    hits: i64,
    beats: i64,
    #[serde(default)]
    offset: i64,
    #[serde(default)]
    ping_pong: bool,
}

#[cfg(feature = "serde")]
impl From<RawParams> for PatternParams {
    fn from(raw: RawParams) -> Self {
        Self::new(raw.hits, raw.beats, raw.offset, raw.ping_pong)
    }
}

impl Default for PatternParams {
    fn default() -> Self {
        Self::new(0, 1, 0, false)
    }
}

/// `beats > 64` becomes 64, `beats <= 0` becomes 1
pub fn clamp_beats(beats: i64) -> u32 {
    beats.clamp(1, MAX_BEATS as i64) as u32
}

/// Negative hits become 0, hits above `beats` become `beats`
pub fn clamp_hits(hits: i64, beats: u32) -> u32 {
    hits.clamp(0, beats as i64) as u32
}

/// Negative offsets become 0, offsets above 128 become 128
pub fn clamp_offset(offset: i64) -> u32 {
    offset.clamp(0, MAX_OFFSET as i64) as u32
}

/// Parse the value list of a notation string into raw integers
fn parse_values(input: &str) -> Result<Vec<i64>, EuclidError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| EuclidError::InvalidNumber(part.to_string()))
        })
        .collect()
}

/// Parse `(hits,beats)`, `(hits,beats,offset)` or the bare forms
/// `hits beats [offset]` / `hits,beats[,offset]` into 2 or 3 raw values
pub fn parse_notation(input: &str) -> Result<Vec<i64>, EuclidError> {
    let trimmed = input.trim();
    let inner = match (trimmed.starts_with('('), trimmed.ends_with(')')) {
        (true, true) => &trimmed[1..trimmed.len() - 1],
        (false, false) => trimmed,
        _ => return Err(EuclidError::MalformedNotation(trimmed.to_string())),
    };

    let values = parse_values(inner)?;
    match values.len() {
        2 | 3 => Ok(values),
        n => Err(EuclidError::WrongArity(n)),
    }
}

impl FromStr for PatternParams {
    type Err = EuclidError;

    /// Parse pattern notation; a missing offset is 0 and ping-pong is off
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_notation(s)?.as_slice() {
            [hits, beats] => Ok(Self::new(*hits, *beats, 0, false)),
            [hits, beats, offset] => Ok(Self::new(*hits, *beats, *offset, false)),
            values => Err(EuclidError::WrongArity(values.len())),
        }
    }
}

impl fmt::Display for PatternParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E({},{},{})", self.hits, self.beats, self.offset)?;
        if self.ping_pong {
            write!(f, " ping-pong")?;
        }
        Ok(())
    }
}
