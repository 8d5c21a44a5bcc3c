/// Derive a URL/id-safe slug from a display name.
///
/// Lowercases the input, collapses every run of non-ASCII-alphanumeric
/// characters (accented letters included) into a single hyphen and trims
/// hyphens from both ends. The result may be empty, e.g. for "!!!" or a
/// purely accented name; callers fall back to a positional id in that case.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Positional id used when a name slugifies to nothing.
/// The index is 0-based over the pre-filter row order.
pub fn fallback_id(index: usize) -> String {
    format!("cafe-{}", index)
}

/// Positional display name for rows with a blank name field
pub fn placeholder_name(index: usize) -> String {
    format!("Café #{}", index)
}
