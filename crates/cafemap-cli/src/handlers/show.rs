use crate::presentation::{CardViewModel, print_detail};
use crate::types::OutputFormat;
use anyhow::Result;
use cafemap_runtime::Session;
use is_terminal::IsTerminal;

pub fn handle(session: &Session, id: &str, format: OutputFormat) -> Result<()> {
    let state = session.state();
    let views = session.views();

    let Some(view) = views.iter().find(|v| v.record.id == id) else {
        anyhow::bail!("no café with id '{}' (try 'cafemap list' for the ids)", id);
    };

    let card = CardViewModel::from_view(view, state.sort_mode, state.selected_id.as_deref());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            print_detail(&card, color);
        }
    }

    Ok(())
}
