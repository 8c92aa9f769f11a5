// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Glue used by the exporting stage around [`objcx_types`].
//!
//! - [`ScopedTypeParameterNamer`] - Stable, clash-free type parameter names
//! - [`ExportConfig`] - TOML configuration for the namer
//! - [`HostPrimitive`] - Host scalar kinds with their Objective-C spelling and encoding

mod config;
mod error;
mod host;
mod namer;

pub use config::{ExportConfig, NamerConfig, parse_file, parse_str, parse_str_with_filename};
pub use error::{Error, Result};
pub use host::HostPrimitive;
pub use namer::{OBJC_RESERVED_WORDS, ScopedTypeParameterNamer};
