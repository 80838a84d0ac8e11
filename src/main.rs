use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use csv_geocoder::app::resolve_use_case::GeocodeResolver;
use csv_geocoder::config::Config;
use csv_geocoder::infra::http_client::ReqwestGeocodeProvider;
use csv_geocoder::infra::rate_limiter::FixedDelayLimiter;
use csv_geocoder::infra::rate_limiter_adapter::RateLimiterAdapter;
use csv_geocoder::logging;
use csv_geocoder::pipeline::CsvPipeline;

#[derive(Parser)]
#[command(name = "csv_geocoder")]
#[command(about = "Fill in latitude/longitude columns of a CSV file by geocoding its addresses")]
#[command(version = "0.1.0")]
struct Cli {
    /// CSV file to read addresses from
    input: PathBuf,
    /// CSV file to write, overwritten if it exists
    output: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    let _log_guard = logging::init_logging();

    let config = Config::from_env()?;
    info!(
        "Geocoding {} -> {} (max {} rows, {}s between requests)",
        cli.input.display(),
        cli.output.display(),
        config.max_rows,
        config.request_delay.as_secs()
    );

    let provider = ReqwestGeocodeProvider::new(&config)?;
    let limiter = RateLimiterAdapter(FixedDelayLimiter::new(config.request_delay));
    let resolver = GeocodeResolver::new(Box::new(provider), Box::new(limiter));

    let pipeline = CsvPipeline::new(&config, &resolver);
    let report = pipeline.run(&cli.input, &cli.output).await?;
    info!(
        "Wrote {} rows to {}",
        report.processed_rows,
        cli.output.display()
    );
    Ok(())
}
