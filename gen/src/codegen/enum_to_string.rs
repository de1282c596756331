//! Enum-to-string dispatch case generation.

use enumclad_define::EnumEntry;

/// Generates the `case` blocks of the generated string conversion.
///
/// One block per entry, in entry order, keyed by the symbol and returning
/// the label. The `default: return "unknown";` fallback for values outside
/// the entry set lives in the fixed template.
///
/// ## Examples
///
/// ```
/// use enumclad_define::EnumEntry;
/// use enumclad_gen::codegen::generate_enum_to_string_cases;
///
/// let entries = vec![EnumEntry::new("OpenEXRIO::RLE", "rle", 1)];
/// let cases = generate_enum_to_string_cases(&entries);
/// assert!(cases.contains("case OpenEXRIO::RLE:"));
/// assert!(cases.contains("return \"rle\";"));
/// ```
pub fn generate_enum_to_string_cases(entries: &[EnumEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "        case {}:\n            return \"{}\";",
                entry.symbol, entry.label
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
