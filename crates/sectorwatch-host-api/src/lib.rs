//! Host adapter trait interfaces for sectorwatch
//!
//! This crate defines the seams between the monitor core and the hosting
//! environment (the simulation client's plugin surface, the OS HTTP client,
//! and the OS dialog facilities). It contains no platform code itself.

mod mock;
mod traits;

pub use mock::*;
pub use traits::*;
