// Design Patterns: Decorator, Observer, Strategy
// Three small, independent demos of classic object-oriented patterns.

//! # Design Patterns
//!
//! This crate provides runnable demos for:
//!
//! ## Decorator
//! - Beverages wrapped by condiments that add to the price and the label
//!
//! ## Observer
//! - A weather station broadcasting measurements to display elements
//!
//! ## Strategy
//! - Ducks whose quacking and flying behaviors are swapped at runtime
//!
//! Each demo has a `run()` entry point that prints to stdout and returns an
//! opaque flag for the driver. Run them with:
//! ```bash
//! cargo run --bin patterns -- all
//! cargo run --bin patterns -- observer --iterations 3
//! ```

pub mod config;
pub mod console;
pub mod decorator;
pub mod error;
pub mod logging;
pub mod measurements;
pub mod observer;
pub mod price;
pub mod strategy;

pub use config::DemoConfig;
pub use console::{CapturedOutput, Console};
pub use error::PatternError;
