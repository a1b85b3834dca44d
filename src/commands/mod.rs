//! Command registry for REPL commands
//!
//! Provides a clean, extensible pattern for handling REPL commands.

pub mod general;
pub mod pattern;

use crate::output::{render, OutputFormat};
use euclid_core::{EuclidObject, SequenceMessage};

/// Result of executing a command
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// Not a command, try interpreting as pattern notation
    NotACommand,
    /// Error occurred
    Error(String),
}

/// Context passed to command handlers
pub struct CommandContext {
    /// The sequencer object that holds the last-used parameters
    pub object: EuclidObject,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn new(object: EuclidObject, format: OutputFormat) -> Self {
        Self { object, format }
    }

    /// Render an output message using the current format
    pub fn render(&self, message: &SequenceMessage) -> String {
        render(
            message,
            &self.object.params(),
            self.object.distribution(),
            self.format,
        )
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new(EuclidObject::default(), OutputFormat::default())
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Commands indexed by their prefix
    /// Sorted by prefix length descending for longest-match-first lookup
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with its prefix
    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        // Sort by prefix length descending for longest-match-first
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = if input.len() > prefix.len() {
                    input[prefix.len()..].trim()
                } else {
                    ""
                };
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }

    /// Get all registered command prefixes
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    // Parameter commands (each causes output, like the object's inlets)
    registry.register("hits", pattern::cmd_hits);
    registry.register("beats", pattern::cmd_beats);
    registry.register("offset", pattern::cmd_offset);
    registry.register("bang", pattern::cmd_bang);

    // Settings that take effect on the next output
    registry.register("pingpong", pattern::cmd_ping_pong);
    registry.register("mode", pattern::cmd_mode);
    registry.register("format", pattern::cmd_format);

    // General commands
    registry.register("status", general::cmd_status);
    registry.register("help", general::cmd_help);
    registry.register("quit", general::cmd_quit);
    registry.register("exit", general::cmd_quit);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_prefix_wins() {
        fn short(_: &str, _: &mut CommandContext) -> CommandResult {
            CommandResult::Message("short".to_string())
        }
        fn long(_: &str, _: &mut CommandContext) -> CommandResult {
            CommandResult::Message("long".to_string())
        }

        let mut registry = CommandRegistry::new();
        registry.register("mode", short);
        registry.register("mode legacy", long);
        let mut ctx = CommandContext::default();
        assert_eq!(
            registry.execute("mode legacy", &mut ctx),
            CommandResult::Message("long".to_string())
        );
        assert_eq!(
            registry.execute("mode bjorklund", &mut ctx),
            CommandResult::Message("short".to_string())
        );
    }

    #[test]
    fn test_prefix_must_end_at_word_boundary() {
        let registry = create_registry();
        let mut ctx = CommandContext::default();
        assert_eq!(registry.execute("hitsx 3", &mut ctx), CommandResult::NotACommand);
        assert_eq!(registry.execute("(3,8)", &mut ctx), CommandResult::NotACommand);
    }

    #[test]
    fn test_registry_lists_builtins() {
        let registry = create_registry();
        let commands = registry.list_commands();
        for name in ["hits", "beats", "offset", "bang", "pingpong", "mode", "help"] {
            assert!(commands.contains(&name), "missing {}", name);
        }
    }
}
