//! Core types for enumeration wrapper definitions.
//!
//! This module provides the fundamental types for describing an enumeration
//! to the generator:
//!
//! - [`EnumSpec`] - The top-level definition
//! - [`EnumEntry`] - A single enumerator with symbol, label, and ordinal

use serde::{Deserialize, Serialize};

/// A single enumerator in a wrapped enumeration.
///
/// Each entry pairs the C++ identifier of an enumerator (`symbol`) with the
/// lowercase string a user types on the command line (`label`), and records
/// the enumerator's position in the underlying enum declaration (`ordinal`).
///
/// The ordinal is explicit rather than inferred: the registration list of the
/// generated wrapper must follow the underlying enum's declaration order, and
/// sorting symbol names alphabetically gets that wrong for enums like the
/// OpenEXR compression modes (`B44` sorts before `None` but is declared
/// after it).
///
/// ## Examples
///
/// ```
/// use enumclad_define::EnumEntry;
///
/// let entry = EnumEntry::new("OpenEXRIO::RLE", "rle", 1);
/// assert_eq!(entry.symbol, "OpenEXRIO::RLE");
/// assert_eq!(entry.label, "rle");
/// assert_eq!(entry.ordinal, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumEntry {
    /// C++ identifier of the enumerator (e.g. `OpenEXRIO::RLE`).
    pub symbol: String,
    /// Lowercase display label matched against user input (e.g. `rle`).
    pub label: String,
    /// Declaration-order index of the enumerator in the underlying enum.
    pub ordinal: u32,
}

impl EnumEntry {
    /// Creates an entry from its symbol, label, and ordinal.
    pub fn new(symbol: impl Into<String>, label: impl Into<String>, ordinal: u32) -> Self {
        Self {
            symbol: symbol.into(),
            label: label.into(),
            ordinal,
        }
    }
}

/// A complete enumeration wrapper definition.
///
/// This struct captures everything needed to generate a wrapper class for an
/// existing C++ enumeration: the name of the class to generate, the
/// underlying enum type it adapts, the default value, and the ordered list
/// of entries.
///
/// `entries` is an ordered sequence, and that order is part of the data
/// model: the dispatch fragments of the generated code follow it, so the
/// same spec always produces the same output.
///
/// The generator trusts this definition. Every symbol must be a valid
/// identifier of the underlying type, and `default_value` must equal one of
/// the entry symbols; neither is checked.
///
/// ## Examples
///
/// Build a spec with the chainable entry API (ordinals assigned in
/// declaration order):
///
/// ```
/// use enumclad_define::EnumSpec;
///
/// let spec = EnumSpec::new("Compression", "OpenEXRIO::Compression", "OpenEXRIO::None")
///     .entry("OpenEXRIO::None", "none")
///     .entry("OpenEXRIO::RLE", "rle")
///     .entry("OpenEXRIO::ZIPS", "zips");
///
/// assert_eq!(spec.entries[0].ordinal, 0);
/// assert_eq!(spec.entries[2].ordinal, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumSpec {
    /// Name of the generated wrapper class (e.g. `Compression`).
    pub class_name: String,
    /// Name of the existing enumeration type being wrapped
    /// (e.g. `OpenEXRIO::Compression`).
    pub underlying_type: String,
    /// Symbol used as the implicit default of the generated wrapper's
    /// value constructor. Must be one of the entry symbols.
    pub default_value: String,
    /// All enumerators of the wrapped type, in declaration order.
    pub entries: Vec<EnumEntry>,
}

impl EnumSpec {
    /// Creates an empty spec for the given class, underlying type, and
    /// default value.
    pub fn new(
        class_name: impl Into<String>,
        underlying_type: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            underlying_type: underlying_type.into(),
            default_value: default_value.into(),
            entries: Vec::new(),
        }
    }

    /// Appends an entry, assigning the next declaration-order ordinal.
    pub fn entry(self, symbol: impl Into<String>, label: impl Into<String>) -> Self {
        let ordinal = self.entries.len() as u32;
        self.entry_with_ordinal(symbol, label, ordinal)
    }

    /// Appends an entry with an explicit ordinal.
    ///
    /// Use this when the wrapped enum's numeric values do not form a dense
    /// `0..n` sequence in declaration order.
    pub fn entry_with_ordinal(
        mut self,
        symbol: impl Into<String>,
        label: impl Into<String>,
        ordinal: u32,
    ) -> Self {
        self.entries.push(EnumEntry::new(symbol, label, ordinal));
        self
    }
}
