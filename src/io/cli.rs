//! Command-line interface and generation run orchestration

use crate::algorithm::{RowSampler, ScrollGenerator};
use crate::analysis::TransitionTable;
use crate::analysis::level::LevelGrid;
use crate::io::animation::AnimationWriter;
use crate::io::configuration::{
    DEFAULT_BLOCK_DIM, DEFAULT_FRAME_COUNT, DEFAULT_FRAME_DELAY_MS, DEFAULT_LEVEL,
    DEFAULT_OUT_HEIGHT, DEFAULT_OUTPUT_NAME,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::FrameProgress;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrolltile")]
#[command(
    author,
    version,
    about = "Generate an endlessly scrolling tile animation from an example level"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Level text file to learn from (built-in example level when omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output animation path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output: PathBuf,

    /// Number of visible rows in the output animation
    #[arg(short = 'H', long, default_value_t = DEFAULT_OUT_HEIGHT)]
    pub height: usize,

    /// Square pixel block size rendered for each cell
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_DIM)]
    pub dim: u32,

    /// Display duration of each frame in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub speed: u32,

    /// Number of frames generated after the initial fill
    #[arg(short = 'n', long, default_value_t = DEFAULT_FRAME_COUNT)]
    pub frames: usize,

    /// Random seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the transition table before generating
    #[arg(short, long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one generation run from level loading to the final frame
pub struct GenerationTask {
    cli: Cli,
}

impl GenerationTask {
    /// Create a task from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the full generation pipeline
    ///
    /// Loads the level, builds the transition table, primes the buffer so
    /// the first frame starts full, then emits that frame plus the
    /// configured number of scrolled frames into the output GIF.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, level loading, table
    /// construction, or animation output fails.
    // Table statistics go to stdout on request
    #[allow(clippy::print_stdout)]
    pub fn run(&mut self) -> Result<()> {
        self.validate()?;

        let level = match &self.cli.file {
            Some(path) => LevelGrid::from_file(path)?,
            None => LevelGrid::from_text(DEFAULT_LEVEL)?,
        };

        let table = TransitionTable::build(&level)?;

        if self.cli.print {
            println!("{table}");
        }

        let sampler = self
            .cli
            .seed
            .map_or_else(RowSampler::new, RowSampler::seeded);
        let mut generator = ScrollGenerator::new(table, self.cli.height, sampler)?;

        let mut writer = AnimationWriter::create(&self.cli.output, self.cli.dim, self.cli.speed)?;
        let progress = FrameProgress::new(self.cli.should_show_progress(), self.cli.frames);

        generator.fill();
        writer.write_frame(generator.buffer())?;

        for _ in 0..self.cli.frames {
            generator.advance();
            writer.write_frame(generator.buffer())?;
            progress.advance();
        }

        progress.finish();

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cli.height == 0 {
            return Err(invalid_parameter(
                "height",
                &self.cli.height,
                &"the output must be at least one row tall",
            ));
        }

        if self.cli.dim == 0 {
            return Err(invalid_parameter(
                "dim",
                &self.cli.dim,
                &"each cell needs at least one pixel",
            ));
        }

        Ok(())
    }
}
