//! REPL (Read-Eval-Print Loop) for the Euclid sequencer

use crate::commands::{create_registry, CommandContext, CommandRegistry, CommandResult};
use anyhow::Result;
use colored::*;
use euclid_core::types::params::parse_notation;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RustylineResult};
use tracing::debug;

/// Interactive REPL for the Euclid sequencer
pub struct Repl {
    editor: DefaultEditor,
    registry: CommandRegistry,
    ctx: CommandContext,
}

impl Repl {
    /// Create a new REPL instance around a command context
    pub fn new(ctx: CommandContext) -> RustylineResult<Self> {
        Ok(Repl {
            editor: DefaultEditor::new()?,
            registry: create_registry(),
            ctx,
        })
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🥁".bright_yellow(),
            "Euclid Rhythm Sequencer".bright_cyan().bold()
        );
        println!(
            "Type parameters like: {}, {}, {}",
            "(3,8)".cyan(),
            "hits 5".cyan(),
            "offset 2".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        loop {
            let prompt = format!("{} ", "euclid>".bright_magenta().bold());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);

                    match self.eval_line(line) {
                        CommandResult::Success => {}
                        CommandResult::Message(msg) => println!("{}", msg),
                        CommandResult::Exit => {
                            println!("{} 🥁", "Goodbye!".bright_cyan());
                            break;
                        }
                        CommandResult::Error(e) => {
                            println!("{} {}", "Error:".bright_red().bold(), e.red())
                        }
                        CommandResult::NotACommand => println!(
                            "{} {}",
                            "Unknown input:".bright_red().bold(),
                            "type 'help' for commands".red()
                        ),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("{} 🥁", "Goodbye!".bright_cyan());
                    break;
                }
                Err(err) => {
                    println!(
                        "{} {}",
                        "Error reading input:".bright_red().bold(),
                        err.to_string().red()
                    );
                }
            }
        }

        Ok(())
    }

    /// Evaluate one line: a registered command, else pattern notation
    pub fn eval_line(&mut self, line: &str) -> CommandResult {
        eval_line(&self.registry, &mut self.ctx, line)
    }
}

/// Evaluate one line against a registry and context
pub fn eval_line(registry: &CommandRegistry, ctx: &mut CommandContext, line: &str) -> CommandResult {
    match registry.execute(line, ctx) {
        CommandResult::NotACommand => {}
        result => return result,
    }

    // `(3,8)`, `(3,8,2)`, `3 8 2` set all parameters at once
    debug!(line, "interpreting as pattern notation");
    match parse_notation(line).and_then(|values| ctx.object.list(&values)) {
        Ok(message) => CommandResult::Message(ctx.render(&message)),
        Err(_) if !looks_like_notation(line) => CommandResult::NotACommand,
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn looks_like_notation(line: &str) -> bool {
    line.starts_with('(') || line.starts_with(|c: char| c.is_ascii_digit() || c == '-')
}

/// Convenience function to start the REPL
pub fn start(ctx: CommandContext) -> Result<()> {
    let mut repl = Repl::new(ctx).map_err(|e| anyhow::anyhow!("Failed to initialize REPL: {}", e))?;
    repl.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn run(lines: &[&str]) -> Vec<CommandResult> {
        let registry = create_registry();
        let mut ctx = CommandContext::default();
        lines
            .iter()
            .map(|line| eval_line(&registry, &mut ctx, line))
            .collect()
    }

    #[test]
    fn test_notation_sets_all_parameters() {
        let results = run(&["(3,8)", "(3,8,3)", "5 8"]);
        assert_eq!(
            results,
            vec![
                CommandResult::Message("sequence 1 0 0 1 0 0 1 0".to_string()),
                CommandResult::Message("sequence 0 1 0 1 0 0 1 0".to_string()),
                // Offset 3 is kept from the previous line
                CommandResult::Message("sequence 1 1 0 1 0 1 1 0".to_string()),
            ]
        );
    }

    #[test]
    fn test_session_with_commands() {
        let results = run(&["beats 4", "hits 1", "pingpong on", "bang", "quit"]);
        assert_eq!(
            results[1],
            CommandResult::Message("sequence 1 0 0 0".to_string())
        );
        assert_eq!(
            results[3],
            CommandResult::Message("sequence 1 0 0 0 0 0 0 1".to_string())
        );
        assert_eq!(results[4], CommandResult::Exit);
    }

    #[test]
    fn test_bad_notation_reports_error() {
        let results = run(&["(3,8", "(3)", "3 x"]);
        assert!(results.iter().all(|r| matches!(r, CommandResult::Error(_))));
    }

    #[test]
    fn test_unknown_words_are_not_commands() {
        assert_eq!(run(&["play"]), vec![CommandResult::NotACommand]);
    }

    #[test]
    fn test_json_format_round_trip_through_context() {
        let registry = create_registry();
        let mut ctx = CommandContext::default();
        ctx.format = OutputFormat::Json;
        match eval_line(&registry, &mut ctx, "(2,4)") {
            CommandResult::Message(json) => {
                let value: serde_json::Value = serde_json::from_str(&json).unwrap();
                assert_eq!(value["sequence"], serde_json::json!([1, 0, 1, 0]));
            }
            other => panic!("Expected Message, got {:?}", other),
        }
    }
}
