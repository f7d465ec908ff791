use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use gcscan::cli::counters::ScanCounters;
use gcscan::cli::opts::{OutputArgs, ScanArgs, SourceArgs};
use gcscan::gc::load::load_first_record;
use gcscan::gc::plot::plot_series;
use gcscan::gc::scan::scan;
use gcscan::gc::source::{EntrezFetcher, SequenceSource};
use gcscan::gc::write::write_series_file;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use std::time::{Duration, Instant};

/// Command-line options for the sliding-window GC tool
#[derive(Parser)]
#[command(
    name = "gcscan",
    about = "Sliding-window GC ratio / GC skew over a nucleotide sequence",
    long_about = "Sliding-window GC ratio / GC skew over a nucleotide sequence.

The sequence is fetched from the NCBI nucleotide database by accession id
and cached as '<seq_id>.fasta'. The per-window series is drawn as an SVG chart.

EXAMPLES:
    // GC ratio with defaults (window 1000, step 10)
    $ gcscan NC_000913.3

    // GC skew over 10kb windows, also saving the series
    $ gcscan NC_000913.3 -w 10000 -s 100 -f gc_skew -o skew.tsv
    ",
    version
)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    scan: ScanArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Increase log verbosity (-v info, -vv debug) [flag]
    #[clap(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let opt = Cli::parse();
    init_logging(opt.verbose);

    // Single exit point for every failure
    if let Err(e) = run(&opt) {
        println!("[ERROR] {:#}", e);
        std::process::exit(1);
    }
    std::process::exit(0);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(opt: &Cli) -> Result<()> {
    let start_time = Instant::now();
    let seq_id = &opt.source.seq_id;
    let func = opt.scan.func;

    let source = SequenceSource::new(
        opt.source.cache_dir.clone(),
        EntrezFetcher::new(opt.source.email.as_str()),
    );

    let seq_path = if source.is_cached(seq_id) {
        source.locate(seq_id)?
    } else {
        println!("Start: Downloading {}", seq_id);
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} [{elapsed_precise}] {msg}")
                .context("building spinner style")?,
        );
        spinner.set_message(format!("Fetching {}", seq_id));
        spinner.enable_steady_tick(Duration::from_millis(100));
        let fetched = source.locate(seq_id);
        spinner.finish_and_clear();
        fetched?
    };

    println!("Start: Loading {}", seq_path.display());
    let record = load_first_record(&seq_path)?;
    log::info!("Loaded {} ({} bp)", record.id, record.seq.len());

    println!("Start: Computing {}", func);
    let window = opt.scan.window;
    let step = opt.scan.step;
    let ratios = scan(&record.seq, window, step, |w| func.apply(w))?;

    let counters = ScanCounters::from_series(&ratios);
    println!(
        "Windows: {} (undefined: {})",
        counters.windows, counters.undefined
    );
    if counters.windows == 0 {
        log::warn!("No windows fit before the sequence end; the chart will be empty");
    }

    if let Some(tsv) = &opt.output.output {
        println!("Start: Writing series to {}", tsv.display());
        write_series_file(tsv, &ratios, record.seq.len(), window, step)?;
    }

    let plot_path = opt.output.plot_path(seq_id, func);
    println!("Start: Plotting to {}", plot_path.display());
    plot_series(&ratios, func, &plot_path)?;

    let elapsed = start_time.elapsed();
    println!("Elapsed time: {:.2?}", elapsed);
    Ok(())
}
