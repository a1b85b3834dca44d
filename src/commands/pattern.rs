//! Pattern commands (hits, beats, offset, bang, pingpong, mode, format)

use crate::commands::{CommandContext, CommandResult};
use crate::output::OutputFormat;
use colored::*;
use euclid_core::Distribution;

fn parse_int(args: &str, usage: &str) -> Result<i64, CommandResult> {
    if args.is_empty() {
        return Err(CommandResult::Error(format!("Usage: {}", usage)));
    }
    args.parse::<i64>()
        .map_err(|_| CommandResult::Error(format!("Invalid integer '{}'. Usage: {}", args, usage)))
}

/// Handle `hits <n>` command
pub fn cmd_hits(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match parse_int(args, "hits <n>") {
        Ok(hits) => {
            let message = ctx.object.set_hits(hits);
            CommandResult::Message(ctx.render(&message))
        }
        Err(e) => e,
    }
}

/// Handle `beats <n>` command
pub fn cmd_beats(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match parse_int(args, "beats <n>") {
        Ok(beats) => {
            let message = ctx.object.set_beats(beats);
            CommandResult::Message(ctx.render(&message))
        }
        Err(e) => e,
    }
}

/// Handle `offset <n>` command
pub fn cmd_offset(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match parse_int(args, "offset <n>") {
        Ok(offset) => {
            let message = ctx.object.set_offset(offset);
            CommandResult::Message(ctx.render(&message))
        }
        Err(e) => e,
    }
}

/// Handle `bang` command
pub fn cmd_bang(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let message = ctx.object.bang();
    CommandResult::Message(ctx.render(&message))
}

/// Handle `pingpong [on|off]` command
pub fn cmd_ping_pong(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let enabled = match args.to_lowercase().as_str() {
        "" => !ctx.object.params().ping_pong(),
        "on" | "1" | "true" => true,
        "off" | "0" | "false" => false,
        _ => return CommandResult::Error("Usage: pingpong [on|off]".to_string()),
    };
    ctx.object.set_ping_pong(enabled);
    let state = if enabled { "on".bright_green() } else { "off".bright_red() };
    CommandResult::Message(format!("Ping-pong {}", state))
}

/// Handle `mode [bjorklund|legacy]` command
pub fn cmd_mode(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!(
            "Current distribution: {}",
            ctx.object.distribution().name().cyan()
        ));
    }
    match args.parse::<Distribution>() {
        Ok(distribution) => {
            ctx.object.set_distribution(distribution);
            CommandResult::Message(format!("Distribution set to {}", distribution.name().cyan()))
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `format [ints|grid|json]` command
pub fn cmd_format(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Current format: {}", ctx.format.name().cyan()));
    }
    match OutputFormat::from_name(args) {
        Some(format) => {
            ctx.format = format;
            CommandResult::Message(format!("Output format set to {}", format.name().cyan()))
        }
        None => CommandResult::Error(format!(
            "Unknown format '{}'. Use 'ints', 'grid' or 'json'",
            args
        )),
    }
}
