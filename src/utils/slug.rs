//! Title slugification.
//!
//! Post file names are expected to be the slug of their title:
//! `"Hello, World!"` lives in `hello-world.md`.

/// Apostrophes removed before slugifying, so `don't` becomes `dont`.
const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

/// Convert a post title to its expected file slug.
///
/// Unicode is transliterated to ASCII, the result lowercased, apostrophes
/// dropped and every run of other non-alphanumeric characters collapsed into
/// a single `-`.
pub fn slugify_title(title: &str) -> String {
    let title = title.trim().trim_matches(|c| c == '"' || c == '\'');
    let without_apostrophes: String = title.chars().filter(|c| !APOSTROPHES.contains(c)).collect();
    let ascii = deunicode::deunicode(&without_apostrophes).to_ascii_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c != '\'' {
            pending_dash = true;
        }
    }
    slug
}
