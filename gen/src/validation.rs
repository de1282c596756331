//! Pre-generation validation of enumeration definitions.
//!
//! The generated string constructor dispatches on a 32-bit hash of the
//! lowercased input, so two distinct labels sharing a hash would emit two
//! `case` labels with the same constant - code that cannot compile. This
//! check runs before generation and reports the conflict at the tool that
//! can fix it, instead of deferring it to the compiler of the generated
//! code.
//!
//! Nothing else about the spec is validated: duplicate symbols, duplicate
//! labels, empty entry lists, and a default absent from the entries all
//! pass through and produce degenerate output. The generator trusts its
//! caller on input shape.
//!
//! ## Examples
//!
//! ```
//! use enumclad_define::EnumSpec;
//! use enumclad_gen::validation::validate_spec;
//!
//! let spec = EnumSpec::new("Compression", "OpenEXRIO::Compression", "OpenEXRIO::None")
//!     .entry("OpenEXRIO::None", "none")
//!     .entry("OpenEXRIO::RLE", "rle");
//!
//! assert!(validate_spec(&spec).is_ok());
//! ```

use std::collections::HashMap;

use enumclad_define::EnumSpec;

use crate::errors::GeneratorError;
use crate::hash::java_hash;

/// Validates a spec before code generation.
///
/// Checks that no two distinct lowercased labels hash to the same dispatch
/// key. Identical labels are deliberately not reported here - a duplicated
/// label is an input-shape problem the generator trusts its caller on, not
/// a hash collision.
///
/// ## Errors
///
/// Returns [`GeneratorError::HashCollision`] naming both labels and the
/// shared hash value. Entries are scanned in order, so the first colliding
/// pair is the one reported.
pub fn validate_spec(spec: &EnumSpec) -> Result<(), GeneratorError> {
    let mut seen: HashMap<u32, String> = HashMap::new();

    for entry in &spec.entries {
        let label = entry.label.to_lowercase();
        let hash = java_hash(&label);

        match seen.get(&hash) {
            Some(previous) if *previous != label => {
                return Err(GeneratorError::HashCollision {
                    label_a: previous.clone(),
                    label_b: label,
                    hash,
                });
            }
            Some(_) => {}
            None => {
                seen.insert(hash, label);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumclad_define::specs::{define_compression_spec, define_write_channels_spec};

    fn make_spec(labels: &[&str]) -> EnumSpec {
        let mut spec = EnumSpec::new("Test", "ns::Test", "ns::V0");
        for (i, label) in labels.iter().enumerate() {
            spec = spec.entry(format!("ns::V{}", i), *label);
        }
        spec
    }

    #[test]
    fn distinct_labels_pass() {
        assert!(validate_spec(&make_spec(&["none", "rle", "zip"])).is_ok());
    }

    #[test]
    fn shipped_specs_pass() {
        assert!(validate_spec(&define_compression_spec()).is_ok());
        assert!(validate_spec(&define_write_channels_spec()).is_ok());
    }

    #[test]
    fn empty_spec_passes() {
        assert!(validate_spec(&make_spec(&[])).is_ok());
    }

    #[test]
    fn lowercasing_happens_before_the_collision_check() {
        // "Aa" and "BB" share a hash raw (both 2112), but the dispatch
        // table is built over lowercased labels, and "aa"/"bb" differ.
        let spec = make_spec(&["Aa", "BB"]);
        assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn colliding_labels_are_rejected_with_both_names() {
        // "costarring" and "liquid" collide under the base-31 recurrence.
        let colliding = EnumSpec::new("Test", "ns::Test", "ns::A")
            .entry("ns::A", "costarring")
            .entry("ns::B", "liquid");

        let err = validate_spec(&colliding).unwrap_err();
        match err {
            GeneratorError::HashCollision {
                label_a,
                label_b,
                hash,
            } => {
                assert_eq!(label_a, "costarring");
                assert_eq!(label_b, "liquid");
                assert_eq!(hash, java_hash("costarring"));
                assert_eq!(hash, java_hash("liquid"));
            }
            other => panic!("Expected HashCollision, got: {:?}", other),
        }
    }

    #[test]
    fn duplicate_labels_are_not_a_collision() {
        // Same label twice shares a hash trivially; that is an input-shape
        // issue the generator does not police.
        assert!(validate_spec(&make_spec(&["rle", "rle"])).is_ok());
    }

    #[test]
    fn collision_error_message_names_both_labels() {
        let spec = make_spec(&["costarring", "liquid"]);
        let msg = validate_spec(&spec).unwrap_err().to_string();
        assert!(msg.contains("costarring"));
        assert!(msg.contains("liquid"));
        assert!(msg.contains("0x"));
    }
}
