//! Shared wheel engine and settings utilities
//!
//! The UI-independent half of the wheel: name list parsing, spin math,
//! winner resolution, and TOML settings persistence.

pub mod config;
pub mod wheel_engine;

pub use config::{config_dir, config_path, load_config, save_config, ConfigError};
pub use wheel_engine::{
    angle_per_segment, ease_out_cubic, fit_label_size, palette, parse_names, sanitize_name,
    winning_index, NameListError, ParsedNames, SpinSession, LABEL_MIN_FONT, MAX_NAMES,
    MAX_NAME_LEN, MIN_NAMES, POINTER_ANGLE, SPIN_DURATION,
};
