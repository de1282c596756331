//! Value-registration statement generation.
//!
//! The generated wrapper exposes a `values()` query over a static vector
//! built once by `allValues()`. This module emits the `push_back`
//! statements of that builder, ordered by each entry's explicit ordinal so
//! the list matches the underlying enum's declaration order regardless of
//! how the spec happens to list its entries.

use enumclad_define::EnumEntry;

/// Generates the `push_back` statements of the all-values builder.
///
/// Statements are emitted in ascending ordinal order, with ties broken by
/// symbol name so output stays deterministic even for malformed specs that
/// repeat an ordinal.
///
/// ## Examples
///
/// ```
/// use enumclad_define::EnumEntry;
/// use enumclad_gen::codegen::generate_value_registrations;
///
/// let entries = vec![
///     EnumEntry::new("OpenEXRIO::RLE", "rle", 1),
///     EnumEntry::new("OpenEXRIO::None", "none", 0),
/// ];
/// let statements = generate_value_registrations("Compression", &entries);
///
/// // Ordinal order, not listing order.
/// let none = statements.find("OpenEXRIO::None").unwrap();
/// let rle = statements.find("OpenEXRIO::RLE").unwrap();
/// assert!(none < rle);
/// ```
pub fn generate_value_registrations(class_name: &str, entries: &[EnumEntry]) -> String {
    let mut ordered: Vec<&EnumEntry> = entries.iter().collect();
    ordered.sort_by(|a, b| {
        a.ordinal
            .cmp(&b.ordinal)
            .then_with(|| a.symbol.cmp(&b.symbol))
    });

    ordered
        .iter()
        .map(|entry| format!("        vec.push_back({}({}));", class_name, entry.symbol))
        .collect::<Vec<_>>()
        .join("\n")
}
