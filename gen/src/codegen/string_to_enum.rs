//! String-to-enum dispatch case generation.
//!
//! The generated wrapper parses a string by lowercasing it, hashing it, and
//! switching on the hash. This module emits those `case` blocks: one per
//! entry, keyed by the hash of the lowercased label. Because hashes of
//! distinct strings can coincide, each case re-compares the literal label
//! before selecting the symbol; [`crate::validation::validate_spec`]
//! rejects specs where two labels actually share a key.

use enumclad_define::EnumEntry;

use crate::hash::java_hash;

/// Generates the `case` blocks of the generated string constructor.
///
/// One block per entry, in entry order. Each case is keyed by
/// `java_hash(lowercase(label))` formatted as a zero-padded eight-digit hex
/// constant, and its body compares the (already lowercased) runtime input
/// against the literal label before assigning the symbol.
///
/// ## Examples
///
/// ```
/// use enumclad_define::EnumEntry;
/// use enumclad_gen::codegen::generate_string_to_enum_cases;
///
/// let entries = vec![EnumEntry::new("OpenEXRIO::RLE", "rle", 1)];
/// let cases = generate_string_to_enum_cases(&entries);
/// assert!(cases.contains("case 0x0001b96b:"));
/// assert!(cases.contains("if (s == \"rle\") m_value = OpenEXRIO::RLE;"));
/// ```
pub fn generate_string_to_enum_cases(entries: &[EnumEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let label = entry.label.to_lowercase();
            let hash = java_hash(&label);
            format!(
                "        case {:#010x}:\n            if (s == \"{}\") m_value = {};\n            break;",
                hash, label, entry.symbol
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
