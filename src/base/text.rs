//! idShort comparison helpers.
//!
//! idShorts are compared trimmed and case-insensitively everywhere a path
//! segment is matched against a node.

/// Whether two idShorts name the same node.
#[inline]
pub fn id_short_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

/// Folded form of an idShort: two idShorts are [`id_short_eq`] exactly
/// when their folded forms are equal.
pub fn fold_id_short(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Whether an idShort is empty or whitespace only.
#[inline]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
