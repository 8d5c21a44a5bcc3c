use serde::Deserialize;

/// One row of the published sheet, keyed by its header names.
///
/// Every field is kept as raw text; coercion to numbers and booleans happens
/// in the mapper so that a bad cell degrades that one field instead of
/// failing the row deserialization. Missing columns default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCafeRow {
    /// Form submission timestamp; carried by the sheet but unused here
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,

    #[serde(rename = "Nombre del Café", default)]
    pub name: String,

    #[serde(rename = "Calificación Total", default)]
    pub overall: String,

    #[serde(rename = "Calificación Flat White", default)]
    pub secondary: String,

    #[serde(rename = "Latitud", default)]
    pub latitude: String,

    #[serde(rename = "Longitud", default)]
    pub longitude: String,

    #[serde(rename = "Workable", default)]
    pub workable: String,
}
