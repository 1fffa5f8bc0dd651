//! CLI binary for `todo_cli`.
//!
//! This binary is a thin wrapper that parses arguments and delegates to the library.

use std::process::ExitCode;

use clap::Parser;
use todo_cli::cli::{self, Cli};
use todo_cli::config::Settings;
use todo_cli::{logging, paths};

fn main() -> ExitCode {
    let args = Cli::parse();

    let Some(data_dir) = paths::data_dir() else {
        logging::init(None);
        return print(cli::run(args.command));
    };

    let log_level = Settings::load_or_default(&data_dir).ok().and_then(|s| s.log_level);
    logging::init(log_level.as_deref());

    print(cli::run_in(args.command, &data_dir))
}

fn print(output: cli::CliOutput) -> ExitCode {
    for line in output.stdout {
        println!("{line}");
    }
    for line in output.stderr {
        eprintln!("{line}");
    }
    output.exit_code
}
