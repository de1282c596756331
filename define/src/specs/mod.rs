//! Shipped enumeration definitions.
//!
//! These are the definitions the generator binary knows by name. Each module
//! defines one enumeration of the OpenEXR I/O layer, with entries listed in
//! the underlying enum's declaration order so the generated registration
//! list matches the true ordinal order.

pub mod channels;
pub mod compression;

pub use channels::define_write_channels_spec;
pub use compression::define_compression_spec;
