//! The interactive read-eval-print loop.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::diagnostics::emit_parse_error;
use crate::Session;

const PROMPT: &str = "lispy> ";

/// Run the loop until `:quit`, Ctrl-C or Ctrl-D.
pub fn run(session: &Session) -> Result<(), ReadlineError> {
    println!("Lispy Version {}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for commands, Ctrl+C to exit.");
    println!();

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match line {
                    ":help" => print_help(),
                    ":env" => print_env(session),
                    ":quit" | ":exit" => break,
                    _ => match session.eval_line(line) {
                        Ok(value) => println!("{}", session.render(&value)),
                        Err(err) => emit_parse_error(line, &err),
                    },
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  :help         Show this help");
    println!("  :env          List global bindings");
    println!("  :quit, :exit  Leave the session");
    println!();
    println!("Builtins: list head tail eval join cons def = \\ + - * / ^ min max");
}

fn print_env(session: &Session) {
    for (name, value) in session.bindings() {
        println!("  {name} = {value}");
    }
}
