//! CLI entry point for the scrolling tile pattern generator

use clap::Parser;
use scrolltile::io::cli::{Cli, GenerationTask};

fn main() -> scrolltile::Result<()> {
    let cli = Cli::parse();
    let mut task = GenerationTask::new(cli);
    task.run()
}
