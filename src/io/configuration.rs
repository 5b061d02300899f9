//! Runtime constants and configuration defaults

/// Default number of visible rows in the output animation
pub const DEFAULT_OUT_HEIGHT: usize = 50;

/// Default square pixel block rendered for each cell
pub const DEFAULT_BLOCK_DIM: u32 = 20;

/// Default display duration of each frame in milliseconds
pub const DEFAULT_FRAME_DELAY_MS: u32 = 100;

/// Default number of frames generated after the initial fill
pub const DEFAULT_FRAME_COUNT: usize = 500;

/// Default output animation path
pub const DEFAULT_OUTPUT_NAME: &str = "level.gif";

/// RGBA color for each cell value; binary levels use the first two entries
pub const PALETTE: [[u8; 4]; 4] = [
    [0x00, 0x00, 0x00, 0xFF], // black
    [0x00, 0xFF, 0x00, 0xFF], // green
    [0xFF, 0x00, 0x00, 0xFF], // red
    [0x00, 0x00, 0xFF, 0xFF], // blue
];

/// Built-in example level used when no level file is given
pub const DEFAULT_LEVEL: &str = "\
100000001
100111001
100111001
100000001
100010001
100000001
110000011
111000111
111000111
111000011
100000001
111000111
100000001
100000111
100000001";
