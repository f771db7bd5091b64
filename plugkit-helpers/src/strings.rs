//! Small string helpers
//!
//! Mostly for deriving asset handles from enqueued file names, e.g.
//! `admin.min.css` registering as the `admin` handle.

/// Remove `suffix` from the end of `text` at most once.
pub fn remove_right<'a>(text: &'a str, suffix: &str) -> &'a str {
    text.strip_suffix(suffix).unwrap_or(text)
}

/// Remove `prefix` from the start of `text` at most once.
pub fn remove_left<'a>(text: &'a str, prefix: &str) -> &'a str {
    text.strip_prefix(prefix).unwrap_or(text)
}

/// Derive an asset handle from a stylesheet or script file name by
/// stripping the extension, minified form first.
pub fn asset_handle(file_name: &str) -> &str {
    for suffix in [".min.css", ".css", ".min.js", ".js"] {
        if let Some(handle) = file_name.strip_suffix(suffix) {
            return handle;
        }
    }
    file_name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_right_strips_one_occurrence() {
        assert_eq!(remove_right("admin.min.css", ".css"), "admin.min");
        assert_eq!(remove_right("aaa", "a"), "aa");
        assert_eq!(remove_right("admin", ".css"), "admin");
        assert_eq!(remove_right("admin", ""), "admin");
    }

    #[test]
    fn test_remove_left_strips_one_occurrence() {
        assert_eq!(remove_left("wp-admin", "wp-"), "admin");
        assert_eq!(remove_left("admin", "wp-"), "admin");
    }

    #[test]
    fn test_asset_handle_prefers_minified_suffix() {
        assert_eq!(asset_handle("admin.min.css"), "admin");
        assert_eq!(asset_handle("admin.css"), "admin");
        assert_eq!(asset_handle("settings.min.js"), "settings");
        assert_eq!(asset_handle("settings.js"), "settings");
        assert_eq!(asset_handle("readme.txt"), "readme.txt");
    }
}
