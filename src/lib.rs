//! qrprint - Batch QR code generator for printable fleet tags
//!
//! This library renders a sequence of string values into QR code PNG images
//! on disk, one file per value, sized for printing (High error correction,
//! 10px modules, 4-module quiet zone).
//!
//! # Example
//!
//! ```no_run
//! use qrprint::{GeneratorOptions, generate_batch};
//!
//! fn main() -> anyhow::Result<()> {
//!     let options = GeneratorOptions::default();
//!     let values = vec!["VEH-1-AB12CD34".to_string()];
//!
//!     let report = generate_batch(&values, &options)?;
//!     println!("Wrote {} tags", report.generated);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod batch;
pub mod config;
pub mod encoder;
pub mod error;
pub mod logging;

// Re-exports for convenience
pub use batch::{BatchReport, generate_batch, vehicle_tag};
pub use config::{GeneratorOptions, LoggingOptions};
pub use encoder::QrEncoder;
pub use error::{Error, Result};
