//! bookstrat - run display, print and serialize strategies against a book

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bookstrat::{Book, DEFAULT_COMMANDS};

#[derive(Parser)]
#[command(name = "bookstrat")]
#[command(version, about = "Run display, print and serialize strategies against a book", long_about = None)]
#[command(after_help = "EXAMPLES:
    bookstrat                                 Reverse-display the sample book, then serialize it as XML
    bookstrat print:console serialize:json    Print the sample book, then serialize it as JSON
    bookstrat --title Dune display:reverse    Use a custom title")]
struct Cli {
    /// Commands to run, in order (display:console|reverse, print:console|reverse, serialize:json|xml)
    #[arg(value_name = "COMMAND:VARIANT")]
    commands: Vec<String>,

    /// Book title
    #[arg(short, long)]
    title: Option<String>,

    /// Book content
    #[arg(short, long)]
    content: Option<String>,

    /// Don't print the serialized result
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<(), bookstrat::Error> {
    let sample = Book::sample();
    let book = Book::new(
        cli.title.as_deref().unwrap_or(sample.title()),
        cli.content.as_deref().unwrap_or(sample.content()),
    );

    let commands: Vec<(String, String)> = if cli.commands.is_empty() {
        DEFAULT_COMMANDS
            .iter()
            .map(|&(command, variant)| (command.to_string(), variant.to_string()))
            .collect()
    } else {
        split_commands(&cli.commands)
    };

    let result = bookstrat::run(&book, commands)?;

    if !cli.quiet {
        match result {
            Some(text) => println!("{text}"),
            None => println!("None"),
        }
    }

    Ok(())
}

/// Split `command:variant` arguments into pairs without validating them.
///
/// Validation happens in the runner so that commands before an invalid one
/// still run.
fn split_commands(args: &[String]) -> Vec<(String, String)> {
    args.iter()
        .map(|arg| match arg.split_once(':') {
            Some((command, variant)) => (command.to_string(), variant.to_string()),
            None => (arg.clone(), String::new()),
        })
        .collect()
}
