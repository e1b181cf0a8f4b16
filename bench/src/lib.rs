//! Benchmark utilities for the event hub.
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p rusty_hub_bench
//!
//! # Run one group
//! cargo bench -p rusty_hub_bench -- fanout
//! ```
//!
//! Results are written to `target/criterion/` with HTML reports.

pub mod fixtures;
