//! Shared types for the sectorwatch monitor
//!
//! This crate defines the types passed across the monitor's seams:
//! - Version tuples for the loaded sector package and the remote manifest
//! - Check triggers and outcomes
//! - The string-triggered command surface

mod commands;
mod outcome;
mod types;

pub use commands::*;
pub use outcome::*;
pub use types::*;
