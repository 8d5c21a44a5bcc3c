use crate::Result;
use crate::config::Config;
use cafemap_source as source;
use cafemap_types::CafeRecord;
use std::path::Path;

fn looks_like_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load the café set following the source priority:
/// 1. explicit override (path or URL, e.g. the --source flag)
/// 2. configured sheet URL
/// 3. configured CSV path
/// 4. bundled starter list
pub async fn load_records(config: &Config, source_override: Option<&str>) -> Result<Vec<CafeRecord>> {
    if let Some(spec) = source_override {
        let records = if looks_like_url(spec) {
            source::records_from_url(spec).await?
        } else {
            source::records_from_path(Path::new(spec))?
        };
        return Ok(records);
    }

    if let Some(url) = &config.source.url {
        return Ok(source::records_from_url(url).await?);
    }

    if let Some(path) = &config.source.path {
        return Ok(source::records_from_path(path)?);
    }

    Ok(source::bundled_records())
}
