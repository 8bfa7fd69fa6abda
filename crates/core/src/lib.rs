//! Core types and the input sink contract shared by the cursorkit crates.

pub mod platform;
pub mod types;
