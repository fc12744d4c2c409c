//! `netpix` CLI - Convert Netpbm images through a fixed pipeline.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use netpix::io::PnmOptions;
use netpix::{Pipeline, run_pipeline};

/// Load a PBM/PGM/PPM image, convert it and save the result.
#[derive(Parser, Debug)]
#[command(name = "netpix")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source image path.
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Target image path.
    #[arg(value_name = "TARGET")]
    target: PathBuf,

    /// Conversion chain to run.
    #[arg(short, long, value_enum, default_value_t = Pipeline::Gray)]
    pipeline: Pipeline,

    /// Write the plain (ASCII) variant.
    #[arg(long)]
    plain: bool,

    /// Write 16-bit samples instead of 8-bit.
    #[arg(long)]
    double_precision: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();

    if let Err(err) = run(&args) {
        log::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    if !args.source.exists() {
        anyhow::bail!("Source file does not exist: {}", args.source.display());
    }
    let format = args.pipeline.check_source(&args.source).with_context(|| {
        format!(
            "{} pipeline cannot read {}",
            args.pipeline,
            args.source.display()
        )
    })?;
    log::debug!("source format: {format}");

    if !args.pipeline.matches_target_extension(&args.target) {
        log::warn!(
            "{} pipeline writes {} but target is {}",
            args.pipeline,
            args.pipeline.output_color_space(),
            args.target.display()
        );
    }

    let options = PnmOptions::new()
        .with_double_precision(args.double_precision)
        .with_plain(args.plain);

    run_pipeline(args.pipeline, &args.source, &args.target, &options).with_context(|| {
        format!(
            "Failed to run {} pipeline on {}",
            args.pipeline,
            args.source.display()
        )
    })?;

    println!(
        "Successfully converted {} -> {}",
        args.source.display(),
        args.target.display()
    );

    Ok(())
}
