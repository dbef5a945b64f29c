//! locroi command-line interface.
//!
//! Filters a localization table against ROI polygons and writes the kept
//! points, excluded points and per-ROI convex hull measurements.
#![allow(clippy::uninlined_format_args)]

use clap::{Parser, Subcommand};

use locroi_algorithms::{ExclusionPipeline, PipelineResult};
use locroi_core::FilterConfig;
use locroi_io::{LocalizationParser, OutputPaths, ResultAssembler, RoiParser};
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    LocroiIo(#[from] locroi_io::Error),

    #[error("Core error: {0}")]
    Core(#[from] locroi_core::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// ROI exclusion filter for single-molecule localization data.
#[derive(Parser)]
#[command(name = "locroi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter localizations against ROIs and measure convex hulls
    Process {
        /// Tab-separated localization file
        #[arg(short, long)]
        localizations: PathBuf,

        /// ROI polygon file
        #[arg(short, long)]
        rois: PathBuf,

        /// Minimum distance outside every ROI for a point to be kept
        #[arg(short, long, default_value = "0.0")]
        threshold: f64,

        /// Field separator of the ROI file
        #[arg(short, long, default_value = " ")]
        separator: char,

        /// Scale applied before projecting coordinates onto the integer grid
        #[arg(long, default_value = "1.0")]
        grid_scale: f64,

        /// Directory for output files (defaults to the ROI file's directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show information about a localization file and a ROI file
    Info {
        /// Tab-separated localization file
        #[arg(short, long)]
        localizations: PathBuf,

        /// ROI polygon file
        #[arg(short, long)]
        rois: PathBuf,

        /// Field separator of the ROI file
        #[arg(short, long, default_value = " ")]
        separator: char,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Process {
            localizations,
            rois,
            threshold,
            separator,
            grid_scale,
            output_dir,
            json,
        } => {
            let config = FilterConfig::new()
                .with_threshold_distance(threshold)
                .with_roi_separator(separator)
                .with_grid_scale(grid_scale);
            let pipeline = ExclusionPipeline::new(config)?;

            let start = Instant::now();
            let loc_file = LocalizationParser::from_path(&localizations)?;
            let roi_list = RoiParser::from_config(pipeline.config()).from_path(&rois)?;
            log::info!(
                "Loaded {} localizations (frame {}) and {} ROIs",
                loc_file.len(),
                loc_file.frame,
                roi_list.len()
            );

            let result = pipeline.run(&loc_file.points, &roi_list);

            let paths = match &output_dir {
                Some(dir) => OutputPaths::derive_in(dir, &rois, threshold),
                None => OutputPaths::derive(&rois, threshold),
            };
            ResultAssembler::new(&loc_file.frame, &result).write_all(&paths)?;
            let elapsed = start.elapsed();

            if json {
                print_json_summary(&result, &paths)?;
            } else {
                print_summary(&result, &paths);
                println!("Elapsed: {:.3}s", elapsed.as_secs_f64());
            }
        }

        Commands::Info {
            localizations,
            rois,
            separator,
        } => {
            let loc_file = LocalizationParser::from_path(&localizations)?;
            let roi_list = RoiParser::new(separator).from_path(&rois)?;

            println!("Localization file: {}", localizations.display());
            println!("Frame: {}", loc_file.frame);
            println!("Points: {}", loc_file.len());
            let duplicates = locroi_algorithms::duplicate_ids(&loc_file.points);
            if !duplicates.is_empty() {
                println!("Duplicate ids: {}", duplicates.len());
            }

            println!("ROI file: {}", rois.display());
            println!("ROIs: {}", roi_list.len());
            for (index, roi) in roi_list.iter().enumerate() {
                let note = if roi.is_degenerate() { " (degenerate)" } else { "" };
                println!(
                    "  ROI {:>3} (id {}): {} vertices{}",
                    index + 1,
                    roi.label,
                    roi.len(),
                    note
                );
            }
        }
    }

    Ok(())
}

fn print_summary(result: &PipelineResult, paths: &OutputPaths) {
    let aggregate = &result.aggregate;
    println!(
        "Finished! Number of points in/out/total: {} {} {}",
        aggregate.kept_count(),
        aggregate.excluded_count(),
        aggregate.total_points
    );
    println!(
        "Hulls: {} of {} ROIs, total area {}",
        result.hulls.surviving_count(),
        result.hulls.records.len(),
        result.hulls.total_area()
    );
    for diagnostic in &result.hulls.diagnostics {
        println!("  skipped: {}", diagnostic);
    }
    println!("Output file: {}", paths.kept.display());
    println!("Complement output file: {}", paths.excluded.display());
    println!("Area output file: {}", paths.areas.display());
    println!("Convex hull output file: {}", paths.vertices.display());
}

fn print_json_summary(result: &PipelineResult, paths: &OutputPaths) -> Result<()> {
    let aggregate = &result.aggregate;
    let display = |path: &Path| path.display().to_string();
    let skipped: Vec<serde_json::Value> = result
        .hulls
        .diagnostics
        .iter()
        .map(|d| {
            serde_json::json!({
                "roi_index": d.roi_index,
                "point_count": d.point_count,
                "reason": format!("{:?}", d.reason),
            })
        })
        .collect();
    let summary = serde_json::json!({
        "kept": aggregate.kept_count(),
        "excluded": aggregate.excluded_count(),
        "total": aggregate.total_points,
        "surviving_rois": result.hulls.surviving_indices(),
        "total_area": result.hulls.total_area(),
        "skipped_rois": skipped,
        "duplicate_ids": result.duplicate_ids,
        "outputs": {
            "kept": display(&paths.kept),
            "excluded": display(&paths.excluded),
            "areas": display(&paths.areas),
            "vertices": display(&paths.vertices),
        },
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
