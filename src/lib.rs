// src/lib.rs
pub mod args;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod parsers;
pub mod stages;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
