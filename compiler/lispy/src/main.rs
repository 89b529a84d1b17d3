//! Lispy CLI

use std::io::{self, Write};
use std::process::ExitCode;

use lispy::config::usage;
use lispy::{init_tracing, parse_args, repl, Command, Session, SessionError};

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{}", usage());
            return ExitCode::from(2);
        }
    };

    let config = match command {
        Command::Help => {
            println!("{}", usage());
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("lispy {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Command::Run(config) => config,
    };

    let session = Session::new(config.format);

    if config.is_interactive() {
        return match repl::run(&session) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut status = ExitCode::SUCCESS;
    for path in &config.files {
        match session.run_file(path, &mut out) {
            Ok(()) => {}
            // Already rendered against the file's text.
            Err(SessionError::Parse(_)) => status = ExitCode::FAILURE,
            Err(err) => {
                eprintln!("error: {err}");
                status = ExitCode::FAILURE;
            }
        }
    }
    let _ = out.flush();
    status
}
