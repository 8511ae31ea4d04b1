// src/config/consts.rs

// Input
pub const DEFAULT_SOURCE_COLUMN: &str = "Details";

// Export
pub const DEFAULT_OUT_DIR: &str = "outputs";
pub const OUTPUT_PREFIX: &str = "processed_";
pub const DEFAULT_FILE: &str = "details";

// Concurrency
pub const WORKERS: usize = 4;
pub const CHUNK_ROWS: usize = 256; // rows claimed per worker step

// Local store
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// GUI
pub const PREVIEW_ROWS: usize = 500;
