use clap::Parser;
use coord_processor::cli::{run, Cli};
use coord_processor::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
