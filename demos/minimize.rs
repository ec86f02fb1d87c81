use std::path::PathBuf;

use clap::Parser;

use qmc_rs::chart::build_chart;
use qmc_rs::minimize::{Minimizer, MinimizerConfig};
use qmc_rs::table::Table;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Rows of the truth table on which the function is true (e.g. `110`).
    #[arg(value_name = "ROW")]
    rows: Vec<String>,

    /// Read rows from a file (whitespace-separated, `#` comments).
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Comma-separated variable names.
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    names: Vec<String>,

    /// Disable parallel pairwise comparison.
    #[arg(long)]
    sequential: bool,

    /// Smallest working table compared in parallel.
    #[arg(long, value_name = "INT", default_value = "64")]
    threshold: usize,

    /// Print the prime implicant chart.
    #[arg(long)]
    chart: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => args.rows.join(" "),
    };
    let table: Table = text.parse()?;
    println!("table of {} rows over {} variables", table.len(), table.arity());

    let minimizer = Minimizer::new(MinimizerConfig {
        parallel: !args.sequential,
        parallel_threshold: args.threshold,
    });
    let f = minimizer.minimize(&table)?;

    println!("prime implicants ({}):", f.primes().len());
    for prime in f.primes() {
        let mark = if f.essential().contains(prime) { "*" } else { "" };
        println!("  {}{}", prime, mark);
    }
    if args.chart {
        let chart = build_chart(f.primes())?;
        println!("chart:\n{}", chart);
    }
    println!("cover ({}):", f.implicants().len());
    for implicant in f.implicants() {
        println!("  {}", implicant);
    }
    println!("f = {}", f.to_expression_with(args.names.as_slice()));

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
