pub mod batch;
pub mod cli;
pub mod config;
pub mod manifest;

use anyhow::Context;
use page_io::{PageStream, delete_images_in_folder};

use batch::BatchRunner;
use cli::Args;
use config::AppConfig;
use manifest::Manifest;

/// Load .env from multiple candidate paths.
pub fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load configuration from the environment and run.
pub fn run(args: &Args) -> anyhow::Result<Manifest> {
    load_dotenv();
    let mut config = AppConfig::load();
    args.apply(&mut config);
    run_with_config(args, &config)
}

/// Split every page in `args.input_dir` and write the manifest.
pub fn run_with_config(args: &Args, config: &AppConfig) -> anyhow::Result<Manifest> {
    let options = config.split_options();
    options
        .validate()
        .context("invalid splitting configuration")?;

    std::fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "failed to create output folder {}",
            args.output_dir.display()
        )
    })?;
    if args.clean {
        let removed = delete_images_in_folder(&args.output_dir)?;
        tracing::info!(removed, "Cleaned output folder");
    }

    let stream = PageStream::from_dir(&args.input_dir)?;
    tracing::info!(
        pages = stream.len(),
        width = options.canvas.width,
        height = options.canvas.height,
        "Starting split"
    );

    let runner = BatchRunner::new(options, &args.output_dir, config.jpeg_quality);
    let manifest = runner.run(stream);

    let manifest_path = args.manifest_path();
    manifest.write(&manifest_path)?;
    tracing::info!("Manifest written to {}", manifest_path.display());
    Ok(manifest)
}
