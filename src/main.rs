//! Euclid CLI - one-shot generation or interactive REPL

use anyhow::Result;
use clap::Parser;
use euclid::cli::Cli;
use euclid::commands::CommandContext;
use euclid::repl;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so sequences on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut ctx = CommandContext::new(cli.object(), cli.format);

    if cli.once {
        let message = ctx.object.bang();
        println!("{}", ctx.render(&message));
        return Ok(());
    }

    repl::start(ctx)
}
