//! TOML config file loading.

mod loader;
mod paths;


pub use loader::{load_default, load_from_path, parse_config};
pub use paths::{config_dir, default_config_path, default_secrets_path};
