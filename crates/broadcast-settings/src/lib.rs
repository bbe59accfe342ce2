//! Broadcast Settings Crate
//!
//! Loads and saves [`BroadcastOptions`](broadcast_core::BroadcastOptions)
//! from JSON or TOML files stored in the platform configuration directory.

pub mod config;
pub mod error;

pub use config::{
    default_options_path, load_options, load_or_default, parse_options, render_options,
    save_options, OptionsFormat, CONFIG_DIR_NAME, OPTIONS_FILE_NAME,
};
pub use error::{SettingsError, SettingsResult};
