//! Madder CLI entry point.

use std::{process, str::FromStr};

use clap::{CommandFactory, Parser};
use log::{LevelFilter, debug, error, info};

use madder_cli::{Args, error_adapter::ErrorAdapter, exit_code};

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

    // Usage errors exit before any file is touched, each with its own code.
    if args.color.is_none() {
        eprintln!("No color given!");
        print_help();
        process::exit(1);
    }
    if args.files.is_empty() {
        eprintln!("No files given!");
        print_help();
        process::exit(2);
    }

    info!(log_level:?; "Starting madder");
    debug!(args:?; "Parsed arguments");

    // Run the application
    if let Err(err) = madder_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        let mut rendered = String::new();
        reporter
            .render_report(&mut rendered, &ErrorAdapter(&err))
            .expect("Writing to String buffer is infallible");

        error!("{rendered}");
        process::exit(exit_code(&err));
    }

    info!("Completed successfully");
}

fn print_help() {
    let mut command = Args::command();
    eprintln!("{}", command.render_help());
}
