//! Mapping request targets onto the document root.

use std::path::{Path, PathBuf};

/// Resolves a request target to a path under `root`.
///
/// The target is split on `/`; empty and `.` segments are dropped and `..`
/// removes the previous segment. Returns `None` when a `..` would climb above
/// `root`, or when a segment could be read as something other than a plain
/// file name on this platform (NUL bytes, and on Windows separators and
/// drive prefixes).
///
/// ```
/// # use std::path::Path;
/// # use webserver::http::path::resolve_target;
/// let root = Path::new(".");
/// assert_eq!(resolve_target(root, "/index.html"), Some(root.join("index.html")));
/// assert_eq!(resolve_target(root, "/../etc/passwd"), None);
/// ```
pub fn resolve_target(root: &Path, target: &str) -> Option<PathBuf> {
    let mut segments: Vec<&str> = Vec::new();

    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            s if s.contains('\0') => return None,
            s if cfg!(windows) && (s.contains('\\') || s.contains(':')) => return None,
            s => segments.push(s),
        }
    }

    let mut path = root.to_path_buf();
    path.extend(segments);
    Some(path)
}
