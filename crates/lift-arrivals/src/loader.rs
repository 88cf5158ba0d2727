//! CSV arrival-record loader.
//!
//! # CSV format
//!
//! Header-less, variable-length rows.  The first field is the round number,
//! followed by one `(start, target)` floor pair per arriving person:
//!
//! ```csv
//! 0,1,3
//! 2,2,5,4,2
//! ```
//!
//! Row 2 above puts two people into round 2: one travelling 2→5 and one
//! travelling 4→2.
//!
//! Malformed rows — non-integer fields, floor 0, or an unpaired trailing
//! floor — fail the whole load with [`ArrivalError::Parse`].  This loader is
//! the data-source boundary; `FileArrivals` itself applies no validation
//! beyond its start-floor filter.

use std::io::Read;
use std::path::Path;

use lift_core::{Floor, Round};

use crate::{ArrivalError, ArrivalRecord, ArrivalResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load arrival records from a CSV file.
pub fn load_records_csv(path: &Path) -> ArrivalResult<Vec<ArrivalRecord>> {
    let file = std::fs::File::open(path).map_err(ArrivalError::Io)?;
    load_records_reader(file)
}

/// Like [`load_records_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded scripts.
pub fn load_records_reader<R: Read>(reader: R) -> ArrivalResult<Vec<ArrivalRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // rows carry a varying number of trips
        .from_reader(reader);

    let mut records = Vec::new();
    for (line, result) in csv_reader.records().enumerate() {
        let row = result.map_err(|e| ArrivalError::Parse(e.to_string()))?;
        records.push(parse_record(&row, line)?);
    }
    Ok(records)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_record(row: &csv::StringRecord, line: usize) -> ArrivalResult<ArrivalRecord> {
    let Some(first) = row.get(0) else {
        return Err(ArrivalError::Parse(format!("row {line}: empty record")));
    };
    let round = first.trim().parse::<u64>().map_err(|_| {
        ArrivalError::Parse(format!("row {line}: invalid round number {first:?}"))
    })?;

    let floors: Vec<Floor> = row
        .iter()
        .skip(1)
        .map(|field| parse_floor(field, line))
        .collect::<ArrivalResult<_>>()?;

    if floors.len() % 2 != 0 {
        return Err(ArrivalError::Parse(format!(
            "row {line}: unpaired trailing floor (expected start/target pairs)"
        )));
    }

    Ok(ArrivalRecord {
        round: Round(round),
        trips: floors.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect(),
    })
}

fn parse_floor(field: &str, line: usize) -> ArrivalResult<Floor> {
    match field.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(Floor(n)),
        _ => Err(ArrivalError::Parse(format!(
            "row {line}: invalid floor {field:?}"
        ))),
    }
}
