use std::io::Read;
use std::path::Path;

use tracing::Level;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::pipeline;

pub fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let table = match cli.command {
        Commands::Dms { input } => {
            let text = read_input(input.as_deref())?;
            pipeline::convert_points_to_dms(&text)
        }
        Commands::Distance { input } => {
            let text = read_input(input.as_deref())?;
            pipeline::compute_distances(&text)
        }
        Commands::Geojson { input } => {
            let text = read_input(input.as_deref())?;
            pipeline::parse_geojson(&text)
        }
        Commands::Kml { input } => {
            let text = read_input(input.as_deref())?;
            pipeline::parse_kml(&text)
        }
        Commands::Csv { input } => {
            let text = read_input(input.as_deref())?;
            pipeline::parse_csv(&text)
        }
    };

    println!("{}", table);
    Ok(())
}

/// Read the whole input text from a file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
