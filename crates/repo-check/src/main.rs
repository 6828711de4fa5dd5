use std::{io, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error};

use repo_check::{Args, ErrorAdapter};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Parsed arguments");

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match repo_check::run(&args, &mut input, &mut output) {
        Ok(exit_code) => process::exit(exit_code.code()),
        Err(err) => {
            if args.json {
                println!("{}", serde_json::json!({ "error": err.to_string() }));
            } else {
                // Wrap error in ErrorAdapter for rich miette formatting
                let adapted_error = ErrorAdapter(&err);

                let reporter = miette::GraphicalReportHandler::new();
                let mut writer = String::new();
                if reporter.render_report(&mut writer, &adapted_error).is_err() {
                    writer = err.to_string();
                }

                error!("Failed\n{writer}");
            }
            process::exit(err.exit_code().code());
        }
    }
}
