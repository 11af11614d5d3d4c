//! Optional TOML/JSON config files, merged beneath explicit CLI flags.
mod apply;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use apply::apply_config;
pub use loader::{default_config_present, load_config, load_config_file};
pub use types::{ConfigFile, DurationValue};
