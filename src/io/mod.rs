//! I/O layer for the report pipeline.
//! Provides the line-oriented `reader` over expression files and the
//! `writers` for the formatted report and the optional JSON sidecar.
pub mod reader;
pub use reader::ExpressionReader;

pub mod writers;
