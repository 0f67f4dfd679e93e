//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_normalizer`] - URL normalization and validation

pub mod code_generator;
pub mod url_normalizer;
