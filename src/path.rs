//! Path resolution against the current working directory.
//!
//! Arguments may be absolute (`/home/portfolio`) or relative (`projects`,
//! `../skills`, `./a/../b`). Resolution is purely textual: the result is a
//! normalized absolute path and existence is the caller's problem.

/// Resolve `raw` against `current` and normalize the result.
///
/// `.` segments are dropped, `..` pops one segment (a no-op at root), and
/// duplicate separators collapse. `current` is expected to already be a
/// normalized absolute path.
pub fn resolve_target(current: &str, raw: &str) -> String {
    let joined = if raw.starts_with('/') {
        raw.to_string()
    } else if current == "/" {
        format!("/{}", raw)
    } else {
        format!("{}/{}", current, raw)
    };
    normalize(&joined)
}

/// Collapse a `/`-separated path into canonical absolute form.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for comp in path.split('/') {
        match comp {
            "" | "." => {}
            ".." => {
                // popping past root just stays at root
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Parent of a normalized absolute path; root is its own parent.
pub fn parent(path: &str) -> String {
    resolve_target(path, "..")
}
