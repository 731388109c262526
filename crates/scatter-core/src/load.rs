// File: crates/scatter-core/src/load.rs
// Summary: CSV loading of state records (header-keyed, column order irrelevant).

use std::io::Read;
use std::path::Path;

use crate::error::{ChartError, Result};
use crate::record::{NumericPolicy, RawRecord, StateRecord};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "assets/data/data.csv";

/// Load and coerce every record of the CSV at `path`.
pub fn load_records(path: impl AsRef<Path>, policy: NumericPolicy) -> Result<Vec<StateRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| ChartError::io(path, e))?;
    let records = read_records(file, path, policy)?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded state records");
    Ok(records)
}

/// Parse records from any reader; `origin` only labels errors.
pub fn read_records<R: Read>(reader: R, origin: &Path, policy: NumericPolicy) -> Result<Vec<StateRecord>> {
    // Rows may be shorter or longer than the header: missing trailing fields
    // stay undefined, extra ones are dropped.
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

    let headers = rdr.headers().map_err(|e| ChartError::csv(origin, e))?.clone();
    for required in ["state", "abbr", "poverty", "healthcare"] {
        if !headers.iter().any(|h| h == required) {
            tracing::warn!(column = required, "CSV header is missing a plotted column");
        }
    }

    let mut out = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row.map_err(|e| ChartError::csv(origin, e))?;
        out.push(StateRecord::from_raw(RawRecord::from_row(&headers, &row), i + 1, policy)?);
    }
    Ok(out)
}
