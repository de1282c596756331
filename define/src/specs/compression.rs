//! OpenEXR compression-mode definition.

use crate::EnumSpec;

/// Creates the definition of the OpenEXR compression modes.
///
/// The generated `Compression` wrapper lets TCLAP parse arguments like
/// `--compression rle` into `OpenEXRIO::Compression` values.
///
/// ## Example
///
/// ```
/// use enumclad_define::specs::define_compression_spec;
///
/// let spec = define_compression_spec();
/// assert_eq!(spec.class_name, "Compression");
/// assert_eq!(spec.entries.len(), 8);
/// ```
pub fn define_compression_spec() -> EnumSpec {
    EnumSpec::new("Compression", "OpenEXRIO::Compression", "OpenEXRIO::None")
        .entry("OpenEXRIO::None", "none")
        .entry("OpenEXRIO::RLE", "rle")
        .entry("OpenEXRIO::ZIPS", "zips")
        .entry("OpenEXRIO::ZIP", "zip")
        .entry("OpenEXRIO::PIZ", "piz")
        .entry("OpenEXRIO::PXR24", "pxr24")
        .entry("OpenEXRIO::B44", "b44")
        .entry("OpenEXRIO::B44A", "b44a")
}
