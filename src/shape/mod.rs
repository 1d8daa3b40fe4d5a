pub(crate) mod library;
pub(crate) mod mood;

/// Normalize a user-facing name for case-insensitive matching (`Caret-Right` == `caret_right`).
pub(crate) fn normalize_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
