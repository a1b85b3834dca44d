//! Rendering of generated sequences for the terminal

use clap::ValueEnum;
use colored::*;
use euclid_core::{Distribution, PatternParams, SequenceMessage};

/// How sequences are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `sequence 1 0 0 1 0 0 1 0`
    #[default]
    Ints,
    /// `x..x..x.` with the parameters alongside
    Grid,
    /// One JSON object per sequence
    Json,
}

impl OutputFormat {
    /// Parse format from string (case-insensitive)
    pub fn from_name(s: &str) -> Option<OutputFormat> {
        <OutputFormat as ValueEnum>::from_str(s.trim(), true).ok()
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Ints => "ints",
            OutputFormat::Grid => "grid",
            OutputFormat::Json => "json",
        }
    }
}

/// Render one output message in the requested format
pub fn render(
    message: &SequenceMessage,
    params: &PatternParams,
    distribution: Distribution,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Ints => message.to_string(),
        OutputFormat::Grid => format!(
            "{}  {} {}",
            message.sequence(),
            params.to_string().cyan(),
            format!("[{}]", distribution).bright_black()
        ),
        OutputFormat::Json => serde_json::json!({
            "params": params,
            "distribution": distribution,
            "sequence": message.values,
        })
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid_core::generate;

    fn message(params: &PatternParams) -> SequenceMessage {
        SequenceMessage::new(&generate(params))
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("GRID"), Some(OutputFormat::Grid));
        assert_eq!(OutputFormat::from_name(" json "), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("xml"), None);
        assert_eq!(OutputFormat::default().name(), "ints");
    }

    #[test]
    fn test_render_ints() {
        let params = PatternParams::new(3, 8, 0, false);
        let out = render(&message(&params), &params, Distribution::Bjorklund, OutputFormat::Ints);
        assert_eq!(out, "sequence 1 0 0 1 0 0 1 0");
    }

    #[test]
    fn test_render_grid() {
        colored::control::set_override(false);
        let params = PatternParams::new(3, 8, 0, false);
        let out = render(&message(&params), &params, Distribution::Bjorklund, OutputFormat::Grid);
        assert_eq!(out, "x..x..x.  E(3,8,0) [bjorklund]");

        let params = PatternParams::new(1, 2, 0, true);
        let out = render(&message(&params), &params, Distribution::Legacy, OutputFormat::Grid);
        assert_eq!(out, "x..x  E(1,2,0) ping-pong [legacy]");
    }

    #[test]
    fn test_params_from_json_are_clamped() {
        let params: PatternParams =
            serde_json::from_str(r#"{"hits":5,"beats":0,"offset":-3,"ping_pong":false}"#).unwrap();
        let out = render(&message(&params), &params, Distribution::Bjorklund, OutputFormat::Ints);
        assert_eq!(out, "sequence 1");
    }

    #[test]
    fn test_render_json() {
        let params = PatternParams::new(2, 4, 1, false);
        let out = render(&message(&params), &params, Distribution::Legacy, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["sequence"], serde_json::json!([0, 1, 0, 1]));
        assert_eq!(value["distribution"], "legacy");
        assert_eq!(value["params"]["beats"], 4);
    }
}
