//! Output assembly and file writing for generated code.
//!
//! This module handles the final phase of generation: splicing the three
//! fragments of a spec into the wrapper template, concatenating several
//! wrappers into one header body, and writing the result to disk
//! atomically (or printing it in dry-run mode).
//!
//! ## Safety Guarantees
//!
//! - **Validation**: specs are checked for hash collisions before any
//!   document is assembled
//! - **Atomic writes**: temp file + rename, so the output file is never
//!   left partially written

use std::fs;
use std::path::Path;

use enumclad_define::EnumSpec;

use crate::codegen::{
    generate_enum_to_string_cases, generate_string_to_enum_cases, generate_value_registrations,
};
use crate::errors::GeneratorError;
use crate::template::{TemplateContext, WRAPPER_TEMPLATE, render};
use crate::validation::validate_spec;

/// Comment prepended to every written output file.
pub const GENERATED_NOTICE: &str =
    "// This code was automatically generated by enumclad-gen. Do not edit manually.\n";

/// Generates the wrapper document for a single spec.
///
/// This is the pure spec-to-text entry point: no validation, no I/O, no
/// process-wide state. Calling it twice on the same spec yields identical
/// text. Malformed specs (duplicate symbols, empty entries, a default
/// absent from the entries) produce degenerate output rather than errors.
///
/// ## Errors
///
/// Returns [`GeneratorError::UnknownPlaceholder`] only if the wrapper
/// template itself carries a token outside the closed template-variable
/// set - a defect of the template, not of the spec.
///
/// ## Examples
///
/// ```
/// use enumclad_define::EnumSpec;
/// use enumclad_gen::output::generate;
///
/// let spec = EnumSpec::new("Compression", "OpenEXRIO::Compression", "OpenEXRIO::None")
///     .entry("OpenEXRIO::None", "none")
///     .entry("OpenEXRIO::RLE", "rle");
///
/// let code = generate(&spec).unwrap();
/// assert!(code.contains("class Compression"));
/// assert!(code.contains("case OpenEXRIO::RLE:"));
/// ```
pub fn generate(spec: &EnumSpec) -> Result<String, GeneratorError> {
    let ctx = TemplateContext {
        classname: spec.class_name.clone(),
        enumtype: spec.underlying_type.clone(),
        enumdefault: spec.default_value.clone(),
        string_to_enum_case: generate_string_to_enum_cases(&spec.entries),
        enum_to_string_case: generate_enum_to_string_cases(&spec.entries),
        pushback_all_values: generate_value_registrations(&spec.class_name, &spec.entries),
    };
    render(WRAPPER_TEMPLATE, &ctx)
}

/// Generates the documents of several specs as one header body, in
/// argument order.
pub fn generate_all(specs: &[&EnumSpec]) -> Result<String, GeneratorError> {
    let docs = specs
        .iter()
        .map(|spec| generate(spec))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(docs.join("\n"))
}

/// Writes content to a file atomically using temp file + rename.
///
/// The file is never left in a partially-written state; other processes
/// see either the old or the new content.
///
/// ## Errors
///
/// Returns [`GeneratorError::WriteError`] if parent directories cannot be
/// created, the temp file cannot be written, or the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Validates, generates, and writes the wrappers of several specs.
///
/// This is the main entry point of the generation pipeline. Each spec is
/// checked for hash collisions, all documents are assembled under the
/// auto-generated notice, and the result is written atomically to `path` -
/// or printed to stdout when `dry_run` is set.
///
/// ## Returns
///
/// The full output content (useful in dry-run mode and for testing).
///
/// ## Errors
///
/// Returns the first validation or generation error, or a
/// [`GeneratorError::WriteError`] if the file cannot be written.
pub fn generate_and_write(
    specs: &[&EnumSpec],
    path: &Path,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    for spec in specs {
        validate_spec(spec)?;
    }

    let body = generate_all(specs)?;
    let content = format!("{}{}", GENERATED_NOTICE, body);

    if dry_run {
        println!("{}", content);
    } else {
        write_atomic(path, &content)?;
    }

    Ok(content)
}
