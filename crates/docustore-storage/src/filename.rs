//! Upload filename sanitization and collision handling.
//!
//! Uploaded filenames are attacker-controlled. Before a name is used as
//! part of an on-disk path it is reduced to a safe ASCII subset with no
//! path separators or parent-directory segments.

use uuid::Uuid;

/// Sanitize an uploaded filename for use as an on-disk name.
///
/// Strips any directory components, replaces characters outside
/// `[A-Za-z0-9._-]` with underscores, and collapses leading dots so the
/// result can never escape its folder or hide as a dotfile. Returns
/// `None` when nothing usable remains.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    // Keep only the final path component, for either separator style.
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);

    let mut cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    while cleaned.starts_with('.') {
        cleaned.remove(0);
    }

    let cleaned = cleaned.trim_matches('_').to_string();
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        None
    } else {
        Some(cleaned)
    }
}

/// Derive an alternate stored name when `name` already exists in the
/// target folder. A short random token is inserted before the extension
/// so the original extension survives.
pub fn dedupe_filename(name: &str) -> String {
    let token: String = Uuid::new_v4().simple().to_string()[..8].to_string();
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{token}.{ext}"),
        _ => format!("{name}-{token}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_passes_through() {
        assert_eq!(sanitize_filename("report.pdf"), Some("report.pdf".into()));
        assert_eq!(
            sanitize_filename("Q3_budget-v2.xlsx"),
            Some("Q3_budget-v2.xlsx".into())
        );
    }

    #[test]
    fn test_traversal_is_stripped() {
        assert_eq!(sanitize_filename("../../evil.sh"), Some("evil.sh".into()));
        assert_eq!(
            sanitize_filename("/etc/passwd"),
            Some("passwd".into())
        );
        assert_eq!(
            sanitize_filename("..\\..\\boot.ini"),
            Some("boot.ini".into())
        );
    }

    #[test]
    fn test_unsafe_chars_replaced() {
        assert_eq!(
            sanitize_filename("my file (final).txt"),
            Some("my_file__final_.txt".into())
        );
    }

    #[test]
    fn test_dotfiles_and_empty_rejected() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename("..."), None);
        assert_eq!(sanitize_filename(".hidden"), Some("hidden".into()));
    }

    #[test]
    fn test_dedupe_preserves_extension() {
        let deduped = dedupe_filename("report.pdf");
        assert!(deduped.starts_with("report-"));
        assert!(deduped.ends_with(".pdf"));
        assert_ne!(deduped, "report.pdf");
    }

    #[test]
    fn test_dedupe_no_extension() {
        let deduped = dedupe_filename("README");
        assert!(deduped.starts_with("README-"));
        assert!(!deduped.contains('.'));
    }
}
