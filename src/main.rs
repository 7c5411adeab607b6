use anyhow::{Context, Result};
use clap::Parser;
use prevalence::{DominantColors, DEFAULT_CLUSTER_THRESHOLD, DEFAULT_MAX_COLORS, DEFAULT_MIN_PERCENT};
use std::{env, path::PathBuf};

/// Print the dominant colors of images and how much of each image they cover.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// The most colors to print per image
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_COLORS)]
    max_colors: usize,

    /// Hide colors covering less than this percentage of the visible pixels
    #[arg(short, long, default_value_t = DEFAULT_MIN_PERCENT)]
    min_percent: f64,

    /// RGB distance under which colors are merged together
    #[arg(short = 't', long, default_value_t = DEFAULT_CLUSTER_THRESHOLD)]
    threshold: f64,

    /// Scale images down to at most this many pixels first. 0 analyzes every pixel
    #[arg(long, default_value_t = prevalence::DEFAULT_RESIZE_IMAGE_AREA)]
    resize_area: u32,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,

    /// Enable trace logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env::set_var("RUST_LOG", "prevalence=trace");
    } else if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "prevalence=info");
    }

    env_logger::init();
    log::trace!("Logger initialized.");

    let mut results = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        log::info!("Analyzing {}", input.display());

        let image = prevalence::image::open(input)
            .with_context(|| format!("failed to decode {}", input.display()))?
            .to_rgba8();

        let colors = DominantColors::from_image(image)
            .max_colors(args.max_colors)
            .min_percent(args.min_percent)
            .cluster_threshold(args.threshold)
            .resize_image_area(args.resize_area)
            .generate()
            .with_context(|| format!("failed to analyze {}", input.display()))?;

        if colors.is_empty() {
            log::warn!("{} has no visible pixels", input.display());
        }

        results.push((input, colors));
    }

    if args.json {
        let json = results
            .iter()
            .map(|(input, colors)| serde_json::json!({ "file": input, "colors": colors.colors() }))
            .collect::<Vec<_>>();

        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        for (input, colors) in &results {
            println!("{}", input.display());
            for color in colors.colors() {
                println!("  {} - {}%", color.hex(), color.percent());
            }
        }
    }

    Ok(())
}
