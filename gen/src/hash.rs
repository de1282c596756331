//! 32-bit string hashing for dispatch-table generation.
//!
//! The generated wrapper's string constructor dispatches on a hash of the
//! (lowercased) input, computed at the wrapper's run time by a small C++
//! `jHash` helper in the consuming project. The hash constants this
//! generator embeds in the dispatch table must match those run-time values
//! bit for bit, so this module reimplements the same recurrence: the
//! base-31 polynomial of `java.lang.String::hashCode`, truncated to
//! unsigned 32 bits at every step.
//!
//! ## Examples
//!
//! ```rust
//! use enumclad_gen::hash::java_hash;
//!
//! assert_eq!(java_hash(""), 0);
//! assert_eq!(java_hash("a"), 97);
//! assert_eq!(java_hash("ab"), 31 * 97 + 98);
//! ```

/// Computes the base-31 polynomial hash of a string over `u32`.
///
/// Characters are consumed in order by Unicode code point. Each step
/// multiplies the accumulator by 31 and adds the code point, with both the
/// multiplication and the addition wrapping at 32 bits - languages whose
/// native integers are wider than 32 bits diverge if they truncate only at
/// the end.
///
/// Deterministic, total, and free of side effects; safe to memoize.
///
/// ## Examples
///
/// ```rust
/// use enumclad_gen::hash::java_hash;
///
/// let hash = java_hash("rle");
/// assert_eq!(hash, java_hash("rle")); // Deterministic
/// assert_ne!(hash, java_hash("zip")); // Different content = different hash
/// ```
#[inline]
pub fn java_hash(s: &str) -> u32 {
    s.chars()
        .fold(0u32, |h, c| h.wrapping_mul(31).wrapping_add(c as u32))
}
