//! Shared utilities for precinct returns crates.
//!
//! This crate provides common utilities used across the workspace,
//! including Polars DataFrame helpers.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{
    any_to_bool, any_to_f64, any_to_i64, any_to_string, format_numeric, is_missing, parse_f64,
    parse_i64,
};
