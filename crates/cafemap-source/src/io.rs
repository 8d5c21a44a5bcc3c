use crate::error::Result;
use crate::mapper::map_rows;
use crate::schema::RawCafeRow;
use cafemap_types::CafeRecord;
use std::io::Read;
use std::path::Path;

/// Parse café records from any CSV reader with a header row
pub fn records_from_reader<R: Read>(reader: R) -> Result<Vec<CafeRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut rows: Vec<RawCafeRow> = Vec::new();
    for record in csv_reader.records() {
        let mut record = record?;
        // The csv deserializer rejects rows shorter than the header even with
        // serde defaults; pad so missing columns degrade to empty fields.
        while record.len() < headers.len() {
            record.push_field("");
        }
        rows.push(record.deserialize(Some(&headers))?);
    }

    Ok(map_rows(&rows))
}

/// Load café records from a local CSV file
pub fn records_from_path(path: &Path) -> Result<Vec<CafeRecord>> {
    let file = std::fs::File::open(path)?;
    records_from_reader(file)
}

/// Fetch the published sheet and parse it.
///
/// Network and HTTP-status failures propagate as [`crate::Error::Fetch`];
/// there is no retry policy here, the caller decides.
pub async fn records_from_url(url: &str) -> Result<Vec<CafeRecord>> {
    let body = reqwest::get(url)
        .await?
        .error_for_status()?
        .text()
        .await?;

    records_from_reader(body.as_bytes())
}
