// keymask-core/src/engines/mod.rs
//! Concrete `MaskingEngine` implementations.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod keyword_engine;
