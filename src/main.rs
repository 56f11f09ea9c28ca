use anyhow::Context;
use clap::Parser;
use portfolio_ingest::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = match tokio::runtime::Runtime::new().context("Failed to create async runtime") {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    };

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, stopping...");
                Err(portfolio_ingest::Error::processing_interrupted(
                    "Interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(_stats) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Portfolio Ingest - portfolio CSV tooling");
    println!("========================================");
    println!();
    println!("Parse portfolio CSV exports, normalise company statuses and");
    println!("regenerate the static portfolio page.");
    println!();
    println!("USAGE:");
    println!("    portfolio-ingest <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    preview     Parse a CSV and list the resulting entries");
    println!("    stats       Show active company and exit counts");
    println!("    render      Regenerate the portfolio section of index.html");
    println!("    check       Check entries against the admin input rules");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Preview the default CSV (data/portfolio.csv):");
    println!("    portfolio-ingest preview");
    println!();
    println!("    # Preview an upload in display order as JSON:");
    println!("    portfolio-ingest preview upload.csv --sort --format json");
    println!();
    println!("    # Count active companies in a database export:");
    println!("    portfolio-ingest stats portfolio_companies.json");
    println!();
    println!("    # Rebuild the landing page:");
    println!("    portfolio-ingest render --index public/index.html");
    println!();
    println!("For detailed help on any command, use:");
    println!("    portfolio-ingest <COMMAND> --help");
}
