use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::engine::{InputRecord, Transaction};

/// Reads a JSON array of transaction objects from `path`, keeping file order.
pub fn read_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open transactions file {}", path.display()))?;

    parse_transactions(BufReader::new(file))
        .with_context(|| format!("Cannot parse transactions file {}", path.display()))
}

pub fn parse_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    log::debug!("Started deserialising records");
    let records: Vec<InputRecord> = serde_json::from_reader(reader)?;
    log::debug!("Deserialised {} records", records.len());

    Ok(records
        .into_iter()
        .map(InputRecord::into_transaction)
        .collect())
}
