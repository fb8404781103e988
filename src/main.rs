//! ccimport - Import MCP server definitions and parse skill/agent documents.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ccimport::app::AppContext;
use ccimport::cli::output::{emit_robot, robot_error_structured};
use ccimport::cli::Cli;
use ccimport::Result;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let mut machine = cli.machine_errors();
    match run(&cli, &mut machine) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if machine {
                // Machine mode: structured error envelope on stdout
                if emit_robot(&robot_error_structured(&e)).is_err() {
                    eprintln!("Error: {e}");
                }
            } else {
                eprintln!("Error: {e}");
                let hint = e.to_structured().suggestion;
                if !cli.quiet && !hint.is_empty() {
                    eprintln!("Hint: {hint}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, machine: &mut bool) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    *machine = ctx.robot_mode();
    ccimport::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,ccimport=info",
        1 => "info,ccimport=debug",
        2 => "debug,ccimport=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.machine_errors() {
        // JSON logging for machine mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Human-readable logging
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
