use crate::presentation::{card_view_models, print_cards, print_header};
use crate::types::OutputFormat;
use anyhow::Result;
use cafemap_runtime::Session;
use is_terminal::IsTerminal;

pub fn handle(session: &Session, limit: Option<usize>, format: OutputFormat) -> Result<()> {
    let state = session.state();
    let views = session.views();
    let total = views.len();

    let shown = match limit {
        Some(n) => &views[..total.min(n)],
        None => &views[..],
    };
    let cards = card_view_models(shown, state);

    match format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "total": total,
                "sort": state.sort_mode,
                "filter_workable": state.filter_workable,
                "cards": cards,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            print_header(total, state, color);
            print_cards(&cards, color);
        }
    }

    Ok(())
}
