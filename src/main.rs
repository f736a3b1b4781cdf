use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use film_locations::{
    config::{Config, Year},
    geocoding::{http_client, ArcGis, Nominatim, Resolver},
    pipeline::Pipeline,
    presenter::{HtmlMapRenderer, Presenter},
    Result,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "film_locations=info";

/// Maps where the films of a given year were shot, nearest to a point first.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// The year the films were released, e.g. 2014
    year: Year,

    /// Latitude of the reference point in degrees
    latitude: f64,

    /// Longitude of the reference point in degrees
    longitude: f64,

    /// Path to the locations list
    path_to_dataset: PathBuf,
}

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::new(args.year, args.latitude, args.longitude, args.path_to_dataset)?;

    let client = http_client()?;
    let primary = Nominatim::new(client.clone());
    let secondary = ArcGis::new(client);
    let renderer = HtmlMapRenderer::new(config.output_path.clone(), config.reference);

    let pipeline = Pipeline::new(
        &config,
        Resolver::new(&primary, &secondary),
        Presenter::new(&renderer)?,
    );
    let report = pipeline.run()?;

    println!("Films located in {}: {}", config.year, report.ranked.len());
    println!("Dataset lines skipped: {}", report.lines_skipped);
    println!("Locations not found: {}", report.records_unresolved);
    println!("Map written to {}", config.output_path.display());

    Ok(())
}
