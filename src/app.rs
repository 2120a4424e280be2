use log::{error, info};

use crate::common::error::DecodeError;
use crate::config::Config;
use crate::enums::output_format::OutputFormat;
use crate::hardware::source::RevisionDecoder;
use crate::models::revision_record::RevisionRecord;

pub fn launch(conf: &Config) -> Result<(), DecodeError> {
    let decoder = RevisionDecoder::new(conf.source.clone());

    let record = decoder.decode().map_err(|e| {
        error!("Could not identify board: {}", e);
        e
    })?;

    info!("Identified {} ({})", record.board_type, record.raw_revision);
    println!("{}", render(&record, conf.output.format));

    Ok(())
}

pub fn render(record: &RevisionRecord, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => record.to_string(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(record).unwrap_or_else(|_| record.to_string())
        }
    }
}
