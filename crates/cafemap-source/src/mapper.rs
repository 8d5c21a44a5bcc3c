use crate::schema::RawCafeRow;
use cafemap_types::{CafeRecord, Coordinates, Ratings, fallback_id, placeholder_name, slugify};
use std::collections::HashSet;

/// Token marking a row as workable, compared case-insensitively
const WORKABLE_TOKEN: &str = "yes";

/// Map raw sheet rows to records.
///
/// Rows without parseable finite coordinates are dropped; the positional
/// index used for fallback ids and placeholder names counts pre-filter rows,
/// so ids stay stable when a bad row is fixed upstream. Duplicate slugs get
/// a numeric suffix to keep ids unique within the set.
pub fn map_rows(rows: &[RawCafeRow]) -> Vec<CafeRecord> {
    let mut used: HashSet<String> = HashSet::new();

    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| map_row(row, index))
        .map(|mut record| {
            record.id = unique_id(record.id, &mut used);
            record
        })
        .collect()
}

// First occurrence keeps the bare slug; collisions count up from -2 and
// skip over ids already taken, including another record's natural slug.
fn unique_id(base: String, used: &mut HashSet<String>) -> String {
    if used.insert(base.clone()) {
        return base;
    }

    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

fn map_row(row: &RawCafeRow, index: usize) -> Option<CafeRecord> {
    let coordinates = Coordinates::new(
        parse_number(&row.latitude)?,
        parse_number(&row.longitude)?,
    );

    let name = if row.name.trim().is_empty() {
        placeholder_name(index)
    } else {
        row.name.clone()
    };

    let slug = slugify(&name);
    let id = if slug.is_empty() {
        fallback_id(index)
    } else {
        slug
    };

    Some(CafeRecord::new(
        id,
        name,
        coordinates,
        Ratings {
            overall: parse_number(&row.overall),
            secondary: parse_number(&row.secondary),
        },
        row.workable.to_lowercase() == WORKABLE_TOKEN,
    ))
}

// Absent on parse failure, never zero; non-finite values count as failures
fn parse_number(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
