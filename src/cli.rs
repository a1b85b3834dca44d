//! Command-line configuration

use crate::output::OutputFormat;
use clap::Parser;
use euclid_core::{Distribution, EuclidObject, PatternParams};

#[derive(Debug, Parser)]
#[command(name = "euclid")]
#[command(about = "Euclidean rhythm sequence generator", long_about = None)]
pub struct Cli {
    /// Number of hits to distribute (clamped to 0..=beats)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub hits: i64,

    /// Number of beats per cycle (clamped to 1..=64)
    #[arg(short, long, default_value = "8", allow_negative_numbers = true)]
    pub beats: i64,

    /// Rotation offset (clamped to 0..=128)
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pub offset: i64,

    /// Append a reversed copy of the pattern
    #[arg(short, long)]
    pub ping_pong: bool,

    /// Distribution strategy: bjorklund or legacy
    #[arg(short, long, default_value = "bjorklund", value_parser = parse_distribution)]
    pub mode: Distribution,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ints)]
    pub format: OutputFormat,

    /// Print one sequence and exit instead of starting the REPL
    #[arg(long)]
    pub once: bool,
}

fn parse_distribution(s: &str) -> Result<Distribution, String> {
    s.parse::<Distribution>().map_err(|e| e.to_string())
}

impl Cli {
    /// Parameters requested on the command line, clamped into range
    pub fn params(&self) -> PatternParams {
        PatternParams::new(self.hits, self.beats, self.offset, self.ping_pong)
    }

    /// Adapter object seeded with the command-line settings
    pub fn object(&self) -> EuclidObject {
        let mut object = EuclidObject::with_params(self.params());
        object.set_distribution(self.mode);
        object
    }
}
