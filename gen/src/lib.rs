//! Enumclad code generator library.
//!
//! This crate generates self-contained C++ wrapper classes from enumeration
//! definitions created with `enumclad-define`. The generated class adapts
//! an existing enumeration for TCLAP command-line parsing:
//!
//! - A constructor from the underlying enumeration type, with the spec's
//!   default value
//! - A string constructor dispatching on a 32-bit hash of the lowercased
//!   input, falling back to an explicit `INVALID` sentinel
//! - Conversions back to the underlying type (asserting validity) and to a
//!   display string (defaulting to `"unknown"`)
//! - Full ordering and equality operators over the stored value
//! - A `values()` registry of all instances in declaration order
//! - Stream operators and a `TCLAP::ArgTraits` specialization
//!
//! ## Modules
//!
//! - [`hash`] - The 32-bit base-31 string hash the dispatch tables key on
//! - [`codegen`] - Generation of the three document fragments
//! - [`template`] - The fixed wrapper template and checked substitution
//! - [`validation`] - Pre-generation hash-collision detection
//! - [`output`] - Assembly, atomic file writing, dry-run printing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use enumclad_define::specs::define_compression_spec;
//! use enumclad_gen::output::generate;
//!
//! let spec = define_compression_spec();
//! let code = generate(&spec).unwrap();
//! assert!(code.contains("class Compression"));
//! ```
//!
//! ## Generated Code Structure
//!
//! For a spec named "Compression" wrapping `OpenEXRIO::Compression`:
//!
//! ```text
//! class Compression
//! {
//! public:
//!     Compression(OpenEXRIO::Compression v = OpenEXRIO::None) ...
//!     Compression(const std::string &str) ...   // hash dispatch
//!     inline operator OpenEXRIO::Compression() const ...
//!     operator const char*() const ...          // label dispatch
//!     // ==, !=, <, >, <=, >= over the stored value
//!     static const std::vector<Compression>& values() ...
//! };
//!
//! template <>
//! struct TCLAP::ArgTraits<Compression> { typedef ValueLike ValueCategory; };
//! ```

pub mod codegen;
pub mod errors;
pub mod hash;
pub mod output;
pub mod template;
pub mod validation;
