//! Shipped host implementations for sectorwatch
//!
//! - `HttpFetcher`: blocking reqwest client with a request timeout
//! - `ConsoleHost`: notification surface for the standalone CLI runner

mod console;
mod fetch;

pub use console::*;
pub use fetch::*;
