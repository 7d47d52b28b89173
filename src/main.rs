mod cli;
mod io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use prism_core::Pipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = cli::Args::parse();
    let params = args.parameters()?;
    let source = io::load_image(&args.input, args.max_edge)?;

    let t0 = std::time::Instant::now();
    let output = Pipeline::new().render(&source, &params)?;
    info!(
        elapsed_ms = t0.elapsed().as_millis(),
        preset = %params.preset,
        "rendered"
    );

    let path = args.output_path();
    io::save_png(output, &path)?;
    println!("{}", path.display());
    Ok(())
}
