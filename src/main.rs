// src/main.rs
use clap::Parser;
use filter::args::{Args, USAGE};
use filter::config::Config;
use filter::engine;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if args.help {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let config = Config::from(args);
    match engine::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
