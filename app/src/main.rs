//! Command-line entry point.
//!
//! Reads every page image in a folder, splits and fits each one onto the
//! configured screen canvas, and writes JPEGs plus a JSON manifest.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use manga_splitter_lib::cli::Args;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::info!(
        input = %args.input_dir.display(),
        output = %args.output_dir.display(),
        "Starting manga splitter"
    );

    let manifest = manga_splitter_lib::run(&args)?;
    tracing::info!(
        pages = manifest.total_pages,
        outputs = manifest.total_outputs,
        failed = manifest.failed_pages,
        "Done"
    );
    Ok(())
}
