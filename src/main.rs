use clap::Parser;
use std::process;
use telemetry_replay::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Telemetry Replay - Rig Telemetry Feed Simulator");
    println!("===============================================");
    println!();
    println!("Ingest semi-structured telemetry exports (JSON arrays of tag/value");
    println!("objects), normalize every reading to a numeric value, and replay the");
    println!("records as an endless cyclic feed.");
    println!();
    println!("USAGE:");
    println!("    telemetry-replay <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    replay      Replay a normalized dataset to stdout as a paced cyclic feed");
    println!("    inspect     Show dataset structure and contents without replaying");
    println!("    check       Validate an export file and report why it is rejected");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Replay the built-in sample dataset at one record per second:");
    println!("    telemetry-replay replay");
    println!();
    println!("    # Replay an export twice as fast, stopping after three cycles:");
    println!("    telemetry-replay replay --input rig_export.json --interval-ms 500 --cycles 3");
    println!();
    println!("    # Inspect an export before replaying it:");
    println!("    telemetry-replay inspect --input rig_export.json --rows 5");
    println!();
    println!("    # Validate an export in a script:");
    println!("    telemetry-replay check rig_export.json --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    telemetry-replay <COMMAND> --help");
}
