use crate::types::OutputFormat;
use cafemap_types::{Coordinates, SortMode, parse_coordinates};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cafemap")]
#[command(about = "Browse, filter and map a curated café list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file path (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Record source override: a CSV file path or a sheet URL
    #[arg(long, global = true)]
    pub source: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Filter/sort/location options shared by the viewing commands
#[derive(Args, Clone)]
pub struct ViewArgs {
    /// Keep only cafés suited for working
    #[arg(long)]
    pub workable: bool,

    /// Sort order: overall, secondary or distance
    #[arg(long, default_value = "overall")]
    pub sort: SortMode,

    /// Your position as LAT,LNG; enables distance annotations
    #[arg(long, value_parser = parse_near)]
    pub near: Option<Coordinates>,

    /// Mark one café as selected
    #[arg(long)]
    pub select: Option<String>,
}

fn parse_near(s: &str) -> Result<Coordinates, String> {
    parse_coordinates(s)
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the café cards, filtered and sorted
    List {
        #[command(flatten)]
        view: ViewArgs,

        /// Show at most this many cards
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the detail card for one café
    Show {
        /// Café id (the slug shown in list output)
        id: String,

        /// Your position as LAT,LNG; adds a distance line
        #[arg(long, value_parser = parse_near)]
        near: Option<Coordinates>,
    },

    /// Emit the marker feed consumed by the map widget (JSON)
    Markers {
        #[command(flatten)]
        view: ViewArgs,
    },
}
