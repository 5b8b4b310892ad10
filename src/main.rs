use anyhow::Context;
use clap::Parser;

mod error;
mod log;
mod model;
mod profiling;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "xcprofiler")]
#[command(about = "Profile the time for building iOS sources", long_about = None)]
struct Cli {
    /// Path to the .xcactivitylog file to analyze.
    file: String,

    /// Also time the tool's own phases and print them after the summary.
    #[arg(short = 'd', long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut timer = profiling::PhaseTimer::new();

    // 1) Decompress the log and extract the timed build steps.
    let profile = timer
        .measure("read activity log", || log::read_activity_log(&cli.file))
        .with_context(|| format!("analyze {}", cli.file))?;

    if profile.is_empty() {
        eprintln!("WARN: no timing records found in {}", cli.file);
    }

    // 2) Rank and render the summary.
    timer.measure("print summary", || {
        let summary = model::Summary::build(&profile, model::DEFAULT_COUNT);
        print!("{}", render::render_summary(&summary));
    });

    // 3) Optionally report how long the tool itself took.
    if cli.debug {
        print!("{}", timer.render());
    }

    Ok(())
}
