//! Team slug derivation.

/// Derive the URL slug GitHub assigns to a team name.
///
/// Lowercases the name and collapses every run of characters other than
/// ASCII letters, digits and `_` into a single `-`, trimming dashes at
/// both ends. `"Platform Team"` becomes `platform-team`.
pub fn team_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
