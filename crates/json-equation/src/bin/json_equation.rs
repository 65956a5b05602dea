//! `json-equation`: render, rearrange or solve a JSON-described equation.
//!
//! Usage:
//!   json-equation render  '<json>'
//!   json-equation isolate '<json>'
//!   json-equation solve   '<json>'
//!   json-equation eval    '<infix>'
//!
//! When the argument is omitted the input is read from stdin.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use json_equation::cli::{evaluate_infix, isolate_expression, render_expression, solve_equation};
use json_equation::ParseOptions;
use log::info;
use std::io::{self, Read};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "json-equation")]
#[command(about = "Render, rearrange and solve single-variable equations given as JSON")]
#[command(version)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Do not replace operator keywords (add, subtract, ...) before decoding
    #[arg(long, global = true)]
    no_keywords: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the expression in infix form
    Render { json: Option<String> },
    /// Print the equation rearranged so x stands alone
    Isolate { json: Option<String> },
    /// Print the value of x
    Solve { json: Option<String> },
    /// Evaluate a space-separated infix arithmetic expression
    Eval { infix: Option<String> },
}

fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(s) => Ok(s),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf.trim().to_string())
        }
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.to_log_level_filter())
        .init();

    let options = ParseOptions {
        substitute_keywords: !args.no_keywords,
    };

    let output = match args.command {
        Command::Render { json } => {
            let input = read_input(json)?;
            info!("rendering {}", input);
            render_expression(&input, options)?
        }
        Command::Isolate { json } => {
            let input = read_input(json)?;
            info!("isolating x in {}", input);
            isolate_expression(&input, options)?
        }
        Command::Solve { json } => {
            let input = read_input(json)?;
            info!("solving for x in {}", input);
            solve_equation(&input, options)?
        }
        Command::Eval { infix } => {
            let input = read_input(infix)?;
            info!("evaluating {}", input);
            evaluate_infix(&input)?
        }
    };
    println!("{}", output);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
