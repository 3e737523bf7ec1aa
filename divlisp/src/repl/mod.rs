//! REPL (Read-Eval-Print Loop) for DivLisp

use crate::error::report_error;
use crate::interp::{Interpreter, Value};
use crate::util::{find_similar_name, suggestion_threshold};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

const PROMPT: &str = "divlisp> ";
const HISTORY_FILE: &str = ".divlisp_history";
const BANNER: &str = "DivLisp version 0.1";

/// REPL settings taken from the command line
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Where line history is loaded from and saved to; `None` disables it
    pub history_path: Option<PathBuf>,
    /// Print the version banner on start
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            history_path: default_history_path(),
            banner: true,
        }
    }
}

/// REPL state
pub struct Repl {
    editor: DefaultEditor,
    interpreter: Interpreter,
    config: ReplConfig,
}

impl Repl {
    /// Create a new REPL
    pub fn new(config: ReplConfig) -> RlResult<Self> {
        let mut editor = DefaultEditor::new()?;
        if let Some(ref path) = config.history_path {
            // A missing history file is normal on first run.
            if editor.load_history(path).is_err() {
                tracing::debug!(path = %path.display(), "no history loaded");
            }
        }

        Ok(Repl {
            editor,
            interpreter: Interpreter::new(),
            config,
        })
    }

    /// Run the REPL
    pub fn run(&mut self) -> RlResult<()> {
        if self.config.banner {
            println!("{BANNER}");
            println!("Type :help for help, :quit to exit.\n");
        }

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = self.editor.add_history_entry(line);

                    if line.starts_with(':') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    if let Some(output) = self.eval_input(line) {
                        println!("{output}");
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Goodbye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {err}");
                    break;
                }
            }
        }

        if let Some(ref path) = self.config.history_path
            && let Err(err) = self.editor.save_history(path)
        {
            tracing::warn!(path = %path.display(), %err, "could not save history");
        }

        Ok(())
    }

    /// Handle REPL commands (starting with :)
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            ":quit" | ":q" | ":exit" => {
                println!("Goodbye!");
                true
            }
            ":help" | ":h" | ":?" => {
                self.print_help();
                false
            }
            ":env" => {
                println!("{}", self.interpreter.env().names().join(" "));
                false
            }
            ":clear" => {
                print!("\x1B[2J\x1B[1;1H");
                false
            }
            _ => {
                println!("Unknown command: {cmd}");
                println!("Type :help for help.");
                false
            }
        }
    }

    /// Print help message
    fn print_help(&self) {
        println!("DivLisp REPL Commands:");
        println!("  :help, :h, :?   Show this help");
        println!("  :quit, :q       Exit the REPL");
        println!("  :env            List bound names");
        println!("  :clear          Clear the screen");
        println!();
        println!("Each line is one S-Expression; the outer parentheses are optional:");
        println!("  + 1 2 3             => 6.000000");
        println!("  head {{1 2 3}}        => {{1.000000}}");
        println!("  def {{x y}} 1 2       => ()");
        println!();
        println!("Builtins: list head tail eval join len init def + - * / % ^");
    }

    /// Evaluate one line, returning the text to print.
    ///
    /// Lexer and parser failures are reported on stderr and print nothing.
    fn eval_input(&mut self, input: &str) -> Option<String> {
        match self.interpreter.eval_source(input) {
            Ok(value) => {
                let mut output = value.to_string();
                if let Some(hint) = self.hint_for(&value) {
                    output.push('\n');
                    output.push_str(&hint);
                }
                Some(output)
            }
            Err(err) => {
                report_error("<stdin>", input, &err);
                None
            }
        }
    }

    /// "Did you mean" hint for an unbound symbol
    fn hint_for(&self, value: &Value) -> Option<String> {
        let Value::Error(err) = value else {
            return None;
        };
        let name = err.unbound_name()?;
        let names = self.interpreter.env().names();
        find_similar_name(name, &names, suggestion_threshold(name))
            .map(|suggestion| format!("  help: did you mean '{suggestion}'?"))
    }
}

/// Default history location in the home directory
fn default_history_path() -> Option<PathBuf> {
    dirs_home().map(|h| h.join(HISTORY_FILE))
}

/// Get home directory
fn dirs_home() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}
