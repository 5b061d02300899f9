//! Input/output operations and error handling

/// Animated GIF frame rendering and encoding
pub mod animation;
/// Command-line interface and run orchestration
pub mod cli;
/// Runtime constants and configuration defaults
pub mod configuration;
/// Error types for level analysis and animation output
pub mod error;
/// Frame loop progress reporting
pub mod progress;
