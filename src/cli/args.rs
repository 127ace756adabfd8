use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coord-processor")]
#[command(about = "Geographic coordinate processing pipeline")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert decimal-degree pairs to a DMS table
    Dms {
        #[arg(short, long, help = "Input file (reads stdin when omitted)")]
        input: Option<PathBuf>,
    },

    /// Compute great-circle distances between coordinate pairs
    Distance {
        #[arg(short, long, help = "Input file (reads stdin when omitted)")]
        input: Option<PathBuf>,
    },

    /// Extract point coordinates from GeoJSON text
    Geojson {
        #[arg(short, long, help = "Input file (reads stdin when omitted)")]
        input: Option<PathBuf>,
    },

    /// Extract point coordinates from KML text
    Kml {
        #[arg(short, long, help = "Input file (reads stdin when omitted)")]
        input: Option<PathBuf>,
    },

    /// Extract point coordinates from CSV text
    Csv {
        #[arg(short, long, help = "Input file (reads stdin when omitted)")]
        input: Option<PathBuf>,
    },
}
