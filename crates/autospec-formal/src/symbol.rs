//! Symbol normalization for transition labels.

/// Placeholder for an absent Turing machine tape symbol.
pub const BLANK: &str = "blank";

/// Placeholder for an absent input or stack symbol of finite and pushdown
/// automata.
pub const EPSILON: &str = "ε";

/// Normalize a raw transition symbol.
///
/// Returns the display form and whether the symbol contributes to an
/// alphabet. An absent symbol reads as the empty string, displays as the
/// placeholder, and contributes nothing.
pub fn normalize<'a>(raw: &'a str, placeholder: &'static str) -> (&'a str, bool) {
    if raw.is_empty() {
        (placeholder, false)
    } else {
        (raw, true)
    }
}
