//! # tanhsinh-emit
//!
//! [`TableSink`](tanhsinh_core::TableSink) implementations that serialize a
//! finished quadrature table.
//!
//! Key types:
//! - [`RustConstSink`]: `const WEIGHTS` / `const ABSCISSA` / `const H` source text
//! - [`BincodeSink`]: binary blob readable with `QuadratureTable::from_bytes`
//! - [`OutputFormat`]: format selector with conventional file names
//! - [`table_digest`]: SHA-256 fingerprint for determinism checks

pub mod bincode_sink;
pub mod digest;
pub mod format;
pub mod rust_const;

pub use bincode_sink::BincodeSink;
pub use digest::table_digest;
pub use format::OutputFormat;
pub use rust_const::RustConstSink;
