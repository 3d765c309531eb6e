mod load;
mod render;

use std::io::{BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use placefix_core::{compute_mismatches_with, select, DiffOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::load::load_snapshot;

#[derive(Parser)]
#[command(
    name = "placefix-suggest",
    about = "Suggest the next pixel to fix so a canvas matches a motif"
)]
struct Cli {
    /// Motif image: the pattern to restore (transparent pixels are ignored)
    motif: PathBuf,

    /// Place image: the current state of the canvas
    place: PathBuf,

    /// Seed for reproducible suggestions
    #[arg(long, env = "PLACEFIX_SEED")]
    seed: Option<u64>,

    /// Motif pixels with alpha at or below this value are ignored
    #[arg(long, env = "PLACEFIX_ALPHA_CUTOFF", default_value = "0")]
    alpha_cutoff: u8,

    /// List every mismatch instead of picking one
    #[arg(long)]
    all: bool,

    /// Re-read both images and suggest again every N seconds
    #[arg(long, env = "PLACEFIX_WATCH", value_name = "SECS")]
    watch: Option<u64>,

    /// Do not print a color swatch under the suggestion
    #[arg(long)]
    no_swatch: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("placefix=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = DiffOptions {
        alpha_cutoff: cli.alpha_cutoff,
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let swatch = !cli.no_swatch && std::io::stdout().is_terminal();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let Some(secs) = cli.watch else {
        run_pass(&cli, &options, &mut rng, swatch, &mut out)?;
        out.flush()?;
        return Ok(());
    };

    let interval = Duration::from_secs(secs.max(1));
    info!(interval_secs = interval.as_secs(), "watching for canvas changes");
    let mut pass = 0u64;
    loop {
        pass += 1;
        writeln!(out, "--- pass {pass} ---")?;
        if let Err(e) = run_pass(&cli, &options, &mut rng, swatch, &mut out) {
            warn!("pass {pass} failed: {e:#}");
        }
        out.flush()?;
        std::thread::sleep(interval);
    }
}

/// Load both images fresh, compare, and print the result.
fn run_pass<R: Rng>(
    cli: &Cli,
    options: &DiffOptions,
    rng: &mut R,
    swatch: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let motif = load_snapshot(&cli.motif)?;
    let place = load_snapshot(&cli.place)?;
    info!(
        motif = %cli.motif.display(),
        place = %cli.place.display(),
        "loaded {}x{} motif over {}x{} place",
        motif.width(),
        motif.height(),
        place.width(),
        place.height()
    );

    let set = compute_mismatches_with(&motif, &place, options);
    render::write_progress(out, &set)?;

    if cli.all {
        render::write_all(out, &set)?;
    } else {
        render::write_suggestion(out, &select(&set, rng), swatch)?;
    }
    Ok(())
}
