// keymask/src/lib.rs
//! # keymask CLI
//!
//! Terminal front end for `keymask-core`: reads text from a file or stdin,
//! collects keywords from flags, a keywords file or a YAML config, and writes
//! the masked text or a scan report.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
