/// Characters Windows refuses in file names; `/` and `\` are separators everywhere.
const UNSAFE_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Stem used when a company name sanitizes to nothing.
pub const FALLBACK_FILENAME: &str = "company";

/// Turns a company name into a file name stem.
///
/// Removes every character in `< > : " / \ | ? *`, trims surrounding whitespace, and falls
/// back to `"company"` when nothing is left. The result is stable under a second application.
///
/// Distinct degenerate names (`""`, `"???"`) all map to the fallback, so exporting two such
/// companies into one directory overwrites the first export.
pub fn safe_filename(name: &str) -> String {
    let stripped: String = name.chars().filter(|c| !UNSAFE_CHARS.contains(c)).collect();
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}
