//! Configuration loading.

mod load_config;

pub use load_config::{CONFIG_ENV, CONFIG_FILE, load_config};
