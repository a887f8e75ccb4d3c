use clap::Parser;
use hotspot_dashboard::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Hotspot Dashboard - Waste Hotspot Map and Export Tool");
    println!("=====================================================");
    println!();
    println!("Load geotagged waste hotspot records, inspect them on a map descriptor,");
    println!("view per-hotspot details and export the data as CSV or Excel.");
    println!();
    println!("USAGE:");
    println!("    hotspot-dashboard [OPTIONS] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("    map         Print the map descriptor and data quality warnings");
    println!("    detail      Print the detail panel for one hotspot");
    println!("    render      Run a full render cycle (map and detail)");
    println!("    export      Export hotspot records or an auxiliary dataset");
    println!("    datasets    List configured auxiliary datasets");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>     Configuration file (TOML)");
    println!("    -r, --records <FILE>    Hotspot records file (CSV or SQLite)");
    println!("    -h, --help              Show help information");
    println!("    -V, --version           Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Map with one hotspot highlighted:");
    println!("    hotspot-dashboard --records hotspots.csv map --select \"Site B\"");
    println!();
    println!("    # Export selected columns to Excel:");
    println!("    hotspot-dashboard export --columns row_number,name,status --format xlsx");
    println!();
    println!("For detailed help on any command, use:");
    println!("    hotspot-dashboard <COMMAND> --help");
}
