use crate::app::resolve_use_case::GeocodeResolver;
use crate::config::Config;
use crate::constants::PROGRESS_INTERVAL;
use crate::error::{GeocoderError, Result};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Counters for a complete pipeline run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub total_rows: usize,
    pub processed_rows: usize,
    /// Rows whose coordinates were filled in by a lookup
    pub geocoded_rows: usize,
    /// Rows that needed a lookup that found nothing
    pub unresolved_rows: usize,
    /// Rows that already had both coordinates
    pub passed_through_rows: usize,
    /// Rows missing coordinates with no address to look up
    pub missing_address_rows: usize,
}

/// Positions of the configured columns in the input header
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    address: usize,
    lat: usize,
    lng: usize,
}

impl ColumnIndices {
    fn resolve(headers: &StringRecord, config: &Config) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let address = position(&config.address_column)
            .ok_or_else(|| GeocoderError::MissingAddressColumn(config.address_column.clone()))?;
        match (position(&config.lat_column), position(&config.lng_column)) {
            (Some(lat), Some(lng)) => Ok(Self { address, lat, lng }),
            _ => Err(GeocoderError::MissingCoordinateColumns {
                lat: config.lat_column.clone(),
                lng: config.lng_column.clone(),
            }),
        }
    }
}

enum RowAction<'r> {
    PassThrough,
    Lookup(&'r str),
    NoAddress,
}

fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

fn decide(record: &StringRecord, columns: ColumnIndices) -> RowAction<'_> {
    if !field(record, columns.lat).is_empty() && !field(record, columns.lng).is_empty() {
        return RowAction::PassThrough;
    }
    match field(record, columns.address) {
        "" => RowAction::NoAddress,
        address => RowAction::Lookup(address),
    }
}

/// Count data records, header excluded.
pub fn count_rows(path: &Path) -> Result<usize> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut rows = 0;
    for record in reader.byte_records() {
        record?;
        rows += 1;
    }
    Ok(rows)
}

/// Streams an input CSV to an output CSV, filling blank coordinates
pub struct CsvPipeline<'a> {
    config: &'a Config,
    resolver: &'a GeocodeResolver,
}

impl<'a> CsvPipeline<'a> {
    pub fn new(config: &'a Config, resolver: &'a GeocodeResolver) -> Self {
        Self { config, resolver }
    }

    #[instrument(skip(self, input, output), fields(input = %input.display(), output = %output.display()))]
    pub async fn run(&self, input: &Path, output: &Path) -> Result<PipelineReport> {
        let total_rows = count_rows(input)?;
        if total_rows > self.config.max_rows {
            return Err(GeocoderError::RowLimitExceeded {
                rows: total_rows,
                max: self.config.max_rows,
            });
        }
        info!("Processing {} rows", total_rows);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(input)?;
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_path(output)?;

        let headers = reader.headers()?.clone();
        let columns = ColumnIndices::resolve(&headers, self.config)?;
        writer.write_record(&headers)?;

        let mut report = PipelineReport {
            total_rows,
            ..Default::default()
        };
        let mut stdout = std::io::stdout();

        for record in reader.records() {
            let mut record = record?;
            if record.len() > headers.len() {
                return Err(GeocoderError::TooManyFields {
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            // trailing empty cells may be left off
            while record.len() < headers.len() {
                record.push_field("");
            }
            let coordinates = match decide(&record, columns) {
                RowAction::PassThrough => {
                    report.passed_through_rows += 1;
                    None
                }
                RowAction::NoAddress => {
                    debug!("Row {} has no address, leaving as is", report.processed_rows + 1);
                    report.missing_address_rows += 1;
                    None
                }
                RowAction::Lookup(address) => {
                    let found = self.resolver.lookup(address).await;
                    if found.is_some() {
                        report.geocoded_rows += 1;
                    } else {
                        report.unresolved_rows += 1;
                    }
                    found
                }
            };

            match coordinates {
                Some(coordinates) => {
                    let mut fields: Vec<&str> = record.iter().collect();
                    fields[columns.lat] = coordinates.lat.as_str();
                    fields[columns.lng] = coordinates.lon.as_str();
                    writer.write_record(&fields)?;
                }
                None => writer.write_record(&record)?,
            }

            report.processed_rows += 1;
            if report.processed_rows % PROGRESS_INTERVAL == 0 {
                print!("Processing: {}/{} rows\r", report.processed_rows, total_rows);
                let _ = stdout.flush();
            }
        }
        writer.flush()?;

        println!("\nCompleted! Processed {} rows", report.processed_rows);
        info!(
            "Run finished: {} geocoded, {} unresolved, {} already had coordinates, {} without address",
            report.geocoded_rows,
            report.unresolved_rows,
            report.passed_through_rows,
            report.missing_address_rows
        );
        Ok(report)
    }
}
