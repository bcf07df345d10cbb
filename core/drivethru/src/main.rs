mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io;
use std::process;
use std::sync::{Arc, Mutex};

use cli::{parse_args, print_completion, run_repl, ParseOutcome};
use common::adapter::StdEnvResolver;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use wiring::wire_app;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("drivethru: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };

    let mut app = wire_app(&config, &StdEnvResolver)?;
    let _ = app.logger.log(
        &LogRecord::new(LogLevel::Info, "session started")
            .layer("cli")
            .kind("lifecycle")
            .field("menu_items", serde_json::json!(app.assistant.menu().len())),
    );

    let summary = Arc::new(Mutex::new(String::new()));
    if let Err(e) = adapter::install_sigint_handler(Arc::clone(&summary)) {
        let _ = app.logger.log(
            &LogRecord::new(LogLevel::Warn, format!("failed to install Ctrl+C handler: {}", e))
                .layer("cli")
                .kind("lifecycle"),
        );
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = run_repl(&mut app.assistant, stdin.lock(), &mut stdout, Some(&summary))
        .map_err(|e| Error::io_msg(e.to_string()));

    let _ = app.logger.log(
        &LogRecord::new(LogLevel::Info, "session finished")
            .layer("cli")
            .kind("lifecycle")
            .field("turns", serde_json::json!(app.assistant.history().len() / 2))
            .field("total", serde_json::json!(app.assistant.calculate_total())),
    );
    result.map(|_| 0)
}

fn print_usage() {
    eprintln!("Usage: drivethru [--config <path>] [-m <model>] [--base-url <url>] [-v] [--log-file <path>]");
}
