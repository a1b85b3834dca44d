//! General REPL commands (help, quit, status)

use crate::commands::{CommandContext, CommandResult};
use colored::*;

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Handle `status` command
pub fn cmd_status(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let params = ctx.object.params();
    CommandResult::Message(format!(
        "hits {}  beats {}  offset {}  pingpong {}  mode {}  format {}",
        params.hits().to_string().cyan(),
        params.beats().to_string().cyan(),
        params.offset().to_string().cyan(),
        (if params.ping_pong() { "on" } else { "off" }).cyan(),
        ctx.object.distribution().name().cyan(),
        ctx.format.name().cyan()
    ))
}

/// Print help information
fn print_help() {
    println!("{}", "🥁 Euclid Sequencer Help".bold());
    println!("{}", "========================".bold());
    println!();
    println!("{}", "Parameters (each prints the new sequence):".green());
    println!("  {}       - Hits to distribute (0..=beats)", "hits <n>".cyan());
    println!("  {}      - Beats per cycle (1..=64)", "beats <n>".cyan());
    println!("  {}     - Rotate right by n (0..=128)", "offset <n>".cyan());
    println!("  {}            - Regenerate from current settings", "bang".cyan());
    println!();
    println!("{}", "Notation:".green());
    println!("  {}           - Set hits and beats", "(3,8)".cyan());
    println!("  {}         - Set hits, beats and offset", "(3,8,2)".cyan());
    println!("  {}           - Same, without brackets", "3 8 2".cyan());
    println!();
    println!("{}", "Settings:".green());
    println!("  {} - Toggle or set ping-pong mirroring", "pingpong [on|off]".cyan());
    println!(
        "  {} - Distribution strategy",
        "mode [bjorklund|legacy]".cyan()
    );
    println!("  {} - Output format", "format [ints|grid|json]".cyan());
    println!();
    println!("{}", "Examples:".green());
    println!("  euclid> {}", "(3,8)".cyan());
    println!("  sequence 1 0 0 1 0 0 1 0");
    println!();
    println!("  euclid> {}", "offset 3".cyan());
    println!("  sequence 0 1 0 1 0 0 1 0");
    println!();
    println!("{}", "Other Commands:".green());
    println!("  {}            - Show current settings", "status".bright_green());
    println!("  {}              - Show this help", "help".bright_green());
    println!("  {}              - Exit the REPL", "quit".bright_red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_exits() {
        let mut ctx = CommandContext::default();
        assert_eq!(cmd_quit("", &mut ctx), CommandResult::Exit);
    }

    #[test]
    fn test_status_mentions_parameters() {
        colored::control::set_override(false);
        let mut ctx = CommandContext::default();
        ctx.object.set_beats(8);
        match cmd_status("", &mut ctx) {
            CommandResult::Message(text) => {
                assert!(text.contains("beats 8"), "{}", text);
                assert!(text.contains("mode bjorklund"), "{}", text);
            }
            other => panic!("Expected Message, got {:?}", other),
        }
    }
}
