//! Flat-table output
//!
//! Writes the final feature table as delimited text: one header row, one row
//! per symbol, missing values as empty fields.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::features::FeatureRow;

/// Serialize feature rows to any writer, header first
pub fn write_csv<W: Write>(writer: W, rows: &[FeatureRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write feature rows to a file, creating or truncating it
pub fn write_csv_file<P: AsRef<Path>>(path: P, rows: &[FeatureRow]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, rows)
}
