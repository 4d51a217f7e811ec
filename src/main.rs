// Entry point and high-level CLI flow.
//
// The binary runs one analysis per invocation:
// - resolve configuration (defaults, JSON file, flags),
// - load and clean the CSV export,
// - run the territory/brand Pareto analysis,
// - write the result table (and optional summary), then print a preview.
mod aggregate;
mod analysis;
mod cli;
mod compose;
mod config;
mod error;
mod gap;
mod loader;
mod logging;
mod output;
mod pareto;
mod types;
mod util;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

fn execute(cli: &Cli) -> error::Result<()> {
    let cfg = cli.resolve_config()?;
    let (records, load_report) = loader::load_records(&cli.input, cfg.measure)?;

    println!(
        "Processing dataset... ({} rows loaded, {} skipped)",
        util::format_int(load_report.loaded_rows),
        util::format_int(load_report.parse_errors)
    );

    let outcome = analysis::run(&records, &cfg)?;
    output::write_csv(&cli.output, &outcome.rows)?;

    if let Some(path) = &cli.summary {
        let summary = output::RunSummary::new(&load_report, &cfg, &outcome.stats);
        output::write_json(path, &summary)?;
    }

    let stats = &outcome.stats;
    println!("\nUnder-performance Pareto Analysis");
    println!(
        "({} of {} territories, {} brands; total gap {})\n",
        util::format_int(stats.territories_selected),
        util::format_int(stats.territories_considered),
        util::format_int(stats.brands_selected),
        util::format_number(stats.total_gap, 2)
    );
    println!("{}\n", output::render_preview(&outcome.rows, cli.preview));
    println!("(Full table exported to {})", cli.output.display());
    if let Some(path) = &cli.summary {
        println!("(Summary written to {})", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
