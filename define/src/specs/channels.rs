//! RGBA write-channel definition.

use crate::EnumSpec;

/// Creates the definition of the RGBA write-channel selections.
///
/// The generated `WriteChannels` wrapper parses arguments like
/// `--channels rgb` into `OpenEXRIO::RgbaChannels` values.
///
/// ## Example
///
/// ```
/// use enumclad_define::specs::define_write_channels_spec;
///
/// let spec = define_write_channels_spec();
/// assert_eq!(spec.class_name, "WriteChannels");
/// assert_eq!(spec.default_value, "OpenEXRIO::WRITE_RGBA");
/// ```
pub fn define_write_channels_spec() -> EnumSpec {
    EnumSpec::new(
        "WriteChannels",
        "OpenEXRIO::RgbaChannels",
        "OpenEXRIO::WRITE_RGBA",
    )
    .entry("OpenEXRIO::WRITE_R", "r")
    .entry("OpenEXRIO::WRITE_G", "g")
    .entry("OpenEXRIO::WRITE_B", "b")
    .entry("OpenEXRIO::WRITE_A", "a")
    .entry("OpenEXRIO::WRITE_RGB", "rgb")
    .entry("OpenEXRIO::WRITE_RGBA", "rgba")
    .entry("OpenEXRIO::WRITE_YC", "yc")
    .entry("OpenEXRIO::WRITE_YCA", "yca")
    .entry("OpenEXRIO::WRITE_Y", "y")
    .entry("OpenEXRIO::WRITE_YA", "ya")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_ten_channel_selections() {
        assert_eq!(define_write_channels_spec().entries.len(), 10);
    }

    #[test]
    fn default_is_a_known_symbol() {
        let spec = define_write_channels_spec();
        assert!(spec.entries.iter().any(|e| e.symbol == spec.default_value));
    }

    #[test]
    fn labels_are_unique() {
        let spec = define_write_channels_spec();
        let mut labels: Vec<&str> = spec.entries.iter().map(|e| e.label.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), spec.entries.len());
    }
}
