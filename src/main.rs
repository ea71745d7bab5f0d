use std::{
    io::{self, BufRead, IsTerminal, Write},
    path::Path,
};

use env_logger::{Builder, Env};
use lumbung::{
    art::welcome_message,
    executor::{self, ExecutionResult},
    statement::parser::StatementParser,
    storage::table::Table,
};
use rustyline::{DefaultEditor, Result, error::ReadlineError};

const PROMPT: &str = "lumbung> ";
const HISTORY_FILE: &str = ".lumbung_history";

enum MetaCommand {
    Exit,
    Help,
}

impl MetaCommand {
    fn parse(line: &str) -> Option<Self> {
        match line {
            ".exit" => Some(MetaCommand::Exit),
            ".help" => Some(MetaCommand::Help),
            _ => None,
        }
    }
}

fn init_logger() {
    // Level comes from RUST_LOG, defaulting to info.
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn print_help() {
    println!(
        r#"
Statements:
  insert <id> <username> <email>  - Append one row
  select                          - Print every row in insertion order

Meta-commands:
  .help  - Show this help message
  .exit  - Exit the shell
"#
    );
}

/// Handle one input line. Returns false when the session should end.
fn process_line(line: &str, table: &mut Table) -> bool {
    if line.starts_with('.') {
        match MetaCommand::parse(line) {
            Some(MetaCommand::Exit) => return false,
            Some(MetaCommand::Help) => print_help(),
            None => println!("Unrecognized command '{}'.", line),
        }
        return true;
    }

    match StatementParser::new().prepare(line) {
        Ok(statement) => match executor::execute_statement(&statement, table) {
            Ok(ExecutionResult::Inserted) => println!("Executed."),
            Ok(ExecutionResult::Selected(rows)) => {
                for row in &rows {
                    println!("{}", row);
                }
                println!("Executed.");
            }
            Err(e) => println!("Error: {}.", e),
        },
        Err(e) => println!("Error: {}.", e),
    }

    true
}

fn run_interactive(table: &mut Table) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    if Path::new(HISTORY_FILE).exists() {
        rl.load_history(HISTORY_FILE)?;
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(&line)?;
                if !process_line(&line, table) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("EOF");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    rl.save_history(HISTORY_FILE)?;
    Ok(())
}

/// Non-terminal stdin: the same prompt and loop without the line editor.
/// Exhausted input before `.exit` is fatal since no command can follow.
fn run_piped(table: &mut Table) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            eprintln!("Error reading input");
            std::process::exit(1);
        };
        let line = line?;
        if line.is_empty() {
            continue;
        }
        if !process_line(&line, table) {
            break;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    init_logger();
    println!("{}", welcome_message("LUMBUNG DB"));

    let mut table = Table::new();
    if io::stdin().is_terminal() {
        run_interactive(&mut table)?;
    } else {
        run_piped(&mut table)?;
    }

    println!("Goodbye!");
    Ok(())
}
