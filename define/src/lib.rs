//! Enumclad Definition Library
//!
//! This crate provides types for describing enumerations in a declarative way.
//! These definitions are consumed by the `enumclad-gen` binary to generate
//! self-contained C++ wrapper classes that adapt an existing enumeration for
//! command-line argument parsing: string construction, string conversion,
//! ordering, and a registry of all values.
//!
//! ## Core Types
//!
//! - [`EnumSpec`] - A complete enumeration definition with wrapper class name,
//!   underlying type, default value, and ordered entries
//! - [`EnumEntry`] - A single enumerator with its symbol, display label, and
//!   explicit ordinal
//!
//! ## Examples
//!
//! Define a small enumeration and hand it to the generator:
//!
//! ```
//! use enumclad_define::EnumSpec;
//!
//! let spec = EnumSpec::new("Compression", "OpenEXRIO::Compression", "OpenEXRIO::None")
//!     .entry("OpenEXRIO::None", "none")
//!     .entry("OpenEXRIO::RLE", "rle");
//!
//! assert_eq!(spec.class_name, "Compression");
//! assert_eq!(spec.entries.len(), 2);
//! assert_eq!(spec.entries[1].ordinal, 1);
//! ```
//!
//! The crate also ships the definitions the tool exists for, under [`specs`]:
//! the OpenEXR compression modes and the RGBA write-channel selections.

pub mod specs;
pub mod types;

pub use types::{EnumEntry, EnumSpec};
