//! Fragment generation for enumeration wrappers.
//!
//! This module contains the generators that produce the three C++ text
//! fragments spliced into the wrapper template. Each submodule handles one
//! fragment:
//!
//! - [`string_to_enum`] - Hash-keyed dispatch cases of the string constructor
//! - [`enum_to_string`] - Symbol-keyed dispatch cases of the string conversion
//! - [`registration`] - `push_back` statements of the all-values list
//!
//! ## Generation Flow
//!
//! 1. The string constructor cases come from [`generate_string_to_enum_cases`]
//! 2. The string conversion cases come from [`generate_enum_to_string_cases`]
//! 3. The value registrations come from [`generate_value_registrations`]
//! 4. [`crate::output::generate`] splices all three into the template
//!
//! All generators are pure functions from entries to text. The dispatch
//! fragments follow entry declaration order; the registration fragment
//! sorts by ordinal. Fragments join their lines with `\n` and carry no
//! trailing newline - the template supplies the surrounding lines.

pub mod enum_to_string;
pub mod registration;
pub mod string_to_enum;

pub use enum_to_string::generate_enum_to_string_cases;
pub use registration::generate_value_registrations;
pub use string_to_enum::generate_string_to_enum_cases;
