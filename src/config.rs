// src/config.rs

/// Token-pair dump read on every run, relative to the working directory.
pub const INPUT_PATH: &str = "data/token_pairs.json";

/// Number of source tokens shown in the printed sample.
pub const PREVIEW_LEN: usize = 3;
