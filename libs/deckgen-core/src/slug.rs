//! ASCII-safe identifiers for deck file names.

/// Slug used when a name has no ASCII letters or digits at all.
pub const FALLBACK_SLUG: &str = "pattern";

/// Derive a slug from a display name.
///
/// ASCII letters are lowercased and kept along with digits. Any run of other
/// characters (whitespace, punctuation, emoji) collapses into one hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Whether an explicitly supplied slug is usable as-is.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
