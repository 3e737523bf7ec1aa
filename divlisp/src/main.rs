//! DivLisp CLI

use clap::{Parser, Subcommand};
use divlisp::error::report_error;
use divlisp::repl::{Repl, ReplConfig};
use divlisp::{CompileError, Interpreter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "divlisp", version, about = "DivLisp - a small Lisp interpreter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive REPL (default)
    Repl {
        /// History file (defaults to ~/.divlisp_history)
        #[arg(long, value_name = "PATH", conflicts_with = "no_history")]
        history: Option<PathBuf>,
        /// Do not load or save line history
        #[arg(long)]
        no_history: bool,
        /// Skip the version banner
        #[arg(long, short)]
        quiet: bool,
    },
    /// Evaluate a file line by line, printing each result
    Run {
        /// Source file to run
        file: PathBuf,
    },
    /// Parse and dump the parse tree as JSON (debug)
    Parse {
        /// Source file to parse
        file: PathBuf,
    },
    /// Tokenize and dump tokens (debug)
    Tokens {
        /// Source file to tokenize
        file: PathBuf,
    },
}

fn main() {
    divlisp::init_tracing();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Command::Repl {
        history: None,
        no_history: false,
        quiet: false,
    });

    let result = match command {
        Command::Repl {
            history,
            no_history,
            quiet,
        } => run_repl(history, no_history, quiet),
        Command::Run { file } => run_file(&file),
        Command::Parse { file } => parse_file(&file),
        Command::Tokens { file } => tokenize_file(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_repl(
    history: Option<PathBuf>,
    no_history: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ReplConfig::default();
    if no_history {
        config.history_path = None;
    } else if history.is_some() {
        config.history_path = history;
    }
    config.banner = !quiet;

    Repl::new(config)?.run()?;
    Ok(())
}

fn read_source(path: &Path) -> Result<String, CompileError> {
    std::fs::read_to_string(path)
        .map_err(|e| CompileError::io_error(format!("{}: {e}", path.display())))
}

fn run_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_source(path)?;
    let filename = path.display().to_string();
    let mut interpreter = Interpreter::new();

    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        match interpreter.eval_source(line) {
            Ok(value) => println!("{value}"),
            Err(err) => report_error(&filename, line, &err),
        }
    }

    Ok(())
}

fn parse_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_source(path)?;
    let filename = path.display().to_string();

    let tree = divlisp::parser::parse_source(&source).inspect_err(|err| {
        report_error(&filename, &source, err);
    })?;

    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

fn tokenize_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_source(path)?;

    let tokens = divlisp::lexer::tokenize(&source)?;
    for (tok, span) in &tokens {
        println!("{:?} @ {}", tok, span);
    }

    Ok(())
}
