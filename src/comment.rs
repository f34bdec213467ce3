//! Doc comment normalization: strip per-line decoration and join into one line.

/// Normalize a raw `/** ... */` body into a single line of text.
///
/// Each line loses its leading whitespace, one optional `*` marker, and the
/// whitespace after that marker. Lines left empty are dropped and the rest are
/// joined with single spaces. Returns `None` when nothing is left, so the caller
/// can fall back to the placeholder description.
pub fn normalize(raw: &str) -> Option<String> {
    let joined = raw
        .lines()
        .map(strip_decoration)
        .filter(|line| return !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() {
        return None;
    }
    return Some(joined);
}

/// Remove leading whitespace, an optional `*`, and the whitespace after it.
fn strip_decoration(line: &str) -> &str {
    let line = line.trim_start();
    let line = line.strip_prefix('*').unwrap_or(line);
    return line.trim();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        assert_eq!(normalize(" Holds a total. ").as_deref(), Some("Holds a total."));
    }

    #[test]
    fn star_prefixed_block() {
        let raw = "\n     * Adds two numbers.\n     *\n     * Overflow wraps.\n     ";
        assert_eq!(
            normalize(raw).as_deref(),
            Some("Adds two numbers. Overflow wraps.")
        );
    }

    #[test]
    fn only_one_marker_is_stripped() {
        assert_eq!(normalize("** bold start").as_deref(), Some("* bold start"));
    }

    #[test]
    fn lines_without_markers_keep_their_text() {
        assert_eq!(
            normalize("First line\n   second line").as_deref(),
            Some("First line second line")
        );
    }

    #[test]
    fn empty_and_decoration_only_bodies() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   \n  *  \n *"), None);
    }
}
