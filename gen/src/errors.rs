//! Error types for the enumclad generator.

use thiserror::Error;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Two distinct labels in one spec hash to the same dispatch key.
    ///
    /// The generated string constructor switches on the hash, so colliding
    /// labels would produce two `case` labels with the same constant -
    /// invalid C++. Generation refuses to proceed rather than emit code
    /// that cannot compile.
    #[error(
        "Labels '{label_a}' and '{label_b}' both hash to {hash:#010x}; the generated dispatch table cannot hold both. Suggestion: rename one of the labels"
    )]
    HashCollision {
        /// The label seen first, in entry order.
        label_a: String,
        /// The later label sharing the same hash.
        label_b: String,
        /// The shared 32-bit hash value.
        hash: u32,
    },

    /// A template placeholder does not name a known template variable.
    ///
    /// Raised when the wrapper template contains a `{token}` that is not
    /// one of the closed set of template variables - typically a renamed
    /// or misspelled placeholder that would otherwise pass through to the
    /// output unsubstituted.
    #[error("Template placeholder '{{{name}}}' does not name a known template variable")]
    UnknownPlaceholder {
        /// The unrecognized placeholder name, braces stripped.
        name: String,
    },

    /// Failed to write an output file.
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
