use crate::presentation::marker_feed;
use anyhow::Result;
use cafemap_runtime::Session;

/// The marker feed is the map widget's input contract; it is JSON no matter
/// which output format the session runs with.
pub fn handle(session: &Session) -> Result<()> {
    let feed = marker_feed(&session.views(), session.state());
    println!("{}", serde_json::to_string_pretty(&feed)?);
    Ok(())
}
