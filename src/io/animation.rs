//! Animated GIF frame rendering and encoding

use crate::io::configuration::PALETTE;
use crate::io::error::{GeneratorError, Result};
use crate::spatial::ScrollBuffer;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Streams scrolling buffer snapshots into a looping animated GIF
///
/// Each cell becomes a `block_dim x block_dim` pixel block colored through
/// the palette. Frames are encoded as they arrive rather than collected,
/// so runs of any length hold one frame in memory at a time.
pub struct AnimationWriter {
    encoder: GifEncoder<File>,
    path: PathBuf,
    block_dim: u32,
    delay_ms: u32,
}

impl AnimationWriter {
    /// Create the output file and prepare an infinitely looping encoder
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or the file cannot be
    /// created, or if the encoder rejects the loop header.
    pub fn create<P: AsRef<Path>>(path: P, block_dim: u32, delay_ms: u32) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GeneratorError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = File::create(&path).map_err(|e| GeneratorError::FileSystem {
            path: path.clone(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = GifEncoder::new(file);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| GeneratorError::ImageExport {
                path: path.clone(),
                source: e,
            })?;

        Ok(Self {
            encoder,
            path,
            block_dim,
            delay_ms,
        })
    }

    /// Render the buffer at the configured scale and append it as one frame
    ///
    /// # Errors
    ///
    /// Returns an error if GIF encoding fails.
    pub fn write_frame(&mut self, buffer: &ScrollBuffer) -> Result<()> {
        let frame = Frame::from_parts(
            render_buffer(buffer, self.block_dim),
            0,
            0,
            Delay::from_numer_denom_ms(self.delay_ms, 1),
        );

        self.encoder
            .encode_frame(frame)
            .map_err(|e| GeneratorError::ImageExport {
                path: self.path.clone(),
                source: e,
            })
    }
}

/// Expand each cell into a square pixel block colored through the palette
fn render_buffer(buffer: &ScrollBuffer, block_dim: u32) -> RgbaImage {
    let width = buffer.width() as u32 * block_dim;
    let height = buffer.height() as u32 * block_dim;
    let mut img = RgbaImage::new(width, height);

    for ((y, x), &value) in buffer.cells().indexed_iter() {
        let rgba = PALETTE
            .get(usize::from(value))
            .copied()
            .unwrap_or([0x00, 0x00, 0x00, 0xFF]);
        let color = Rgba(rgba);

        let x_offset = x as u32 * block_dim;
        let y_offset = y as u32 * block_dim;
        for dy in 0..block_dim {
            for dx in 0..block_dim {
                img.put_pixel(x_offset + dx, y_offset + dy, color);
            }
        }
    }

    img
}
