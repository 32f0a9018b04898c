//! Response handling module.
//!
//! This module provides the [`ResponseFormat`] trait for type-safe response
//! parsing, along with the formats an endpoint can declare: a JSON shape, raw
//! text, raw bytes, or no content at all.

mod format;

pub use format::{BinaryFormat, EmptyFormat, JsonFormat, PlainTextFormat, ResponseFormat};
