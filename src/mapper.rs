//! Mount-path computation.
//!
//! Two pure pieces live here: [`PathMapper`], which turns a controllers-root
//! relative directory into the URL prefix a sub-router is mounted under, and
//! [`join_route`], which composes a mount prefix with a binding's relative
//! path pattern. Both are deterministic functions of their inputs; traversal
//! order never influences the result.

use std::path::{Component, Path};

/// Maps filesystem locations under a controllers root to mount paths.
///
/// The base prefix is normalized once at construction: an empty prefix
/// becomes `/`, and any trailing run of slashes is collapsed so the prefix
/// always ends with exactly one `/`. That guarantees `base + relative`
/// never glues the prefix into the first path segment.
#[derive(Debug, Clone)]
pub struct PathMapper {
    base: String,
}

impl PathMapper {
    pub fn new(base_prefix: &str) -> Self {
        Self {
            base: normalize_base(base_prefix),
        }
    }

    /// The normalized base prefix, always `/`-terminated.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Mount path for a directory under `root`.
    ///
    /// `dir == root` yields the normalized base exactly; otherwise the
    /// root-relative components are appended, joined with `/` regardless of
    /// the platform separator they arrived with.
    pub fn mount_path(&self, root: &Path, dir: &Path) -> String {
        let rel = relative_segments(root, dir);
        if rel.is_empty() {
            self.base.clone()
        } else {
            format!("{}{}", self.base, rel)
        }
    }
}

impl Default for PathMapper {
    fn default() -> Self {
        Self::new("/")
    }
}

fn normalize_base(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// Root-relative path of `path`, joined with `/`.
///
/// Returns the empty string when `path` equals `root` (or is not under it,
/// which the loader's traversal never produces).
pub(crate) fn relative_segments(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or_else(|_| Path::new(""));
    let mut out = String::new();
    for comp in rel.components() {
        if let Component::Normal(seg) = comp {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&seg.to_string_lossy());
        }
    }
    out
}

/// Join a mount prefix and a binding's relative pattern into one route path.
///
/// Mirrors a segment-wise join rooted at `/`: duplicate separators collapse,
/// the trailing slash is dropped, and the degenerate case comes out as `/`.
/// Path parameters and wildcards inside `pattern` pass through untouched.
pub fn join_route(prefix: &str, pattern: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + pattern.len() + 1);
    out.push('/');
    for seg in prefix
        .split('/')
        .chain(pattern.split('/'))
        .filter(|s| !s.is_empty())
    {
        if !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(seg);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_base_normalization() {
        assert_eq!(PathMapper::new("").base(), "/");
        assert_eq!(PathMapper::new("/").base(), "/");
        assert_eq!(PathMapper::new("///").base(), "/");
        assert_eq!(PathMapper::new("/v1").base(), "/v1/");
        assert_eq!(PathMapper::new("/v1///").base(), "/v1/");
    }

    #[test]
    fn test_mount_path_at_root_is_base() {
        let mapper = PathMapper::new("/");
        let root = Path::new("/srv/controllers");
        assert_eq!(mapper.mount_path(root, root), "/");

        let mapper = PathMapper::new("/v1");
        assert_eq!(mapper.mount_path(root, root), "/v1/");
    }

    #[test]
    fn test_mount_path_nested() {
        let mapper = PathMapper::new("/");
        let root = Path::new("/srv/controllers");
        let dir = root.join("api").join("auth");
        assert_eq!(mapper.mount_path(root, &dir), "/api/auth");

        let mapper = PathMapper::new("/v1");
        assert_eq!(mapper.mount_path(root, &dir), "/v1/api/auth");
    }

    #[test]
    fn test_mount_path_uses_forward_slashes() {
        // Build the nested dir from native components rather than a literal
        // so the separator translation is actually exercised.
        let mapper = PathMapper::new("/");
        let root = PathBuf::from("controllers");
        let mut dir = root.clone();
        dir.push("a");
        dir.push("b");
        assert_eq!(mapper.mount_path(&root, &dir), "/a/b");
    }

    #[test]
    fn test_mount_path_pure() {
        let mapper = PathMapper::new("/api");
        let root = Path::new("c");
        let dir = Path::new("c/x");
        let first = mapper.mount_path(root, dir);
        let second = mapper.mount_path(root, dir);
        assert_eq!(first, second);
        assert_eq!(first, "/api/x");
    }

    #[test]
    fn test_join_route() {
        assert_eq!(join_route("/api", "/"), "/api");
        assert_eq!(join_route("/api", "/x"), "/api/x");
        assert_eq!(join_route("/", "/"), "/");
        assert_eq!(join_route("", ""), "/");
        assert_eq!(join_route("/v1/", "users/{id}"), "/v1/users/{id}");
        assert_eq!(join_route("/v1//", "//users"), "/v1/users");
    }

    #[test]
    fn test_relative_segments() {
        assert_eq!(relative_segments(Path::new("a"), Path::new("a")), "");
        assert_eq!(relative_segments(Path::new("a"), Path::new("a/b/c")), "b/c");
    }
}
