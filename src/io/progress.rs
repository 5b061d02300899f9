//! Frame loop progress reporting

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} frames")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for the frame generation loop
///
/// Construction decides whether anything is shown; a quiet run carries no
/// bar at all, so call sites stay unconditional.
pub struct FrameProgress {
    bar: Option<ProgressBar>,
}

impl FrameProgress {
    /// Create a progress display covering `total_frames` frames
    pub fn new(enabled: bool, total_frames: usize) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new(total_frames as u64);
            bar.set_style(FRAME_STYLE.clone());
            bar
        });

        Self { bar }
    }

    /// Record one completed frame
    pub fn advance(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Complete and release the display
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish();
        }
    }
}
