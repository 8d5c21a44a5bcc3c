use crate::args::{Cli, Commands, ViewArgs};
use crate::handlers;
use anyhow::Result;
use cafemap_engine::AppEvent;
use cafemap_runtime::{Config, FixedLocationService, LocationService, Session, load_records};
use std::sync::Arc;

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    let runtime = tokio::runtime::Runtime::new()?;

    match command {
        Commands::List { view, limit } => {
            let session = runtime.block_on(build_session(&config, cli.source.as_deref(), &view))?;
            handlers::list::handle(&session, limit, cli.format)
        }

        Commands::Show { id, near } => {
            let view = ViewArgs {
                workable: false,
                sort: Default::default(),
                near,
                select: None,
            };
            let session = runtime.block_on(build_session(&config, cli.source.as_deref(), &view))?;
            handlers::show::handle(&session, &id, cli.format)
        }

        Commands::Markers { view } => {
            let session = runtime.block_on(build_session(&config, cli.source.as_deref(), &view))?;
            handlers::markers::handle(&session)
        }
    }
}

/// Load records and replay the command options as session events.
///
/// A position given on the command line counts as an explicit location
/// request, so its failure surfaces; the config fallback position mirrors
/// the automatic attempt at session start and fails silently.
async fn build_session(
    config: &Config,
    source_override: Option<&str>,
    view: &ViewArgs,
) -> Result<Session> {
    let records = load_records(config, source_override).await?;

    let explicit = view.near.is_some();
    let position = view
        .near
        .or_else(|| config.location.map(|l| l.coordinates()));
    let service = position
        .map(|p| Arc::new(FixedLocationService::new(p)) as Arc<dyn LocationService>);

    let mut session = Session::new(records, service);
    session.request_location(!explicit).await?;

    if view.workable {
        session.dispatch(AppEvent::ToggleWorkableFilter);
    }
    session.dispatch(AppEvent::SetSortMode(view.sort));
    if let Some(id) = &view.select {
        session.dispatch(AppEvent::Select(id.clone()));
    }

    Ok(session)
}

fn show_guidance() {
    println!("cafemap - curated café directory\n");
    println!("Quick commands:");
    println!("  cafemap list                      # Card list, best rating first");
    println!("  cafemap list --workable           # Only work-friendly cafés");
    println!("  cafemap list --sort distance --near 20.67,-103.40");
    println!("  cafemap show <ID>                 # One café in detail");
    println!("  cafemap markers                   # Marker feed for the map widget\n");
    println!("For more options:");
    println!("  cafemap --help");
}
