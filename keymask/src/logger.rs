//! Logger setup for the keymask binary.
//!
//! `RUST_LOG` is honored unless an explicit level override is given.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Installs `env_logger` writing to stderr. Safe to call more than once.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}
