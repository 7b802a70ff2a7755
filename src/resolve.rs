use std::path::{Component, Path, PathBuf};

/// Schemes that are never checked against the filesystem.
///
/// Matching is exact-prefix and case-sensitive, so `HTTP://...` is not
/// recognized here and falls through to path resolution.
pub const SKIP_PREFIXES: [&str; 8] = [
    "http://",
    "https://",
    "mailto:",
    "tel:",
    "javascript:",
    "data:",
    "whatsapp:",
    "sms:",
];

/// Strip the fragment and query string from a reference.
///
/// Splits at the first `#`, then at the first `?`, keeping only the prefix,
/// and trims surrounding whitespace. Idempotent: normalizing an already
/// normalized reference yields the same value.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let link = raw.split('#').next().unwrap_or("");
    let link = link.split('?').next().unwrap_or("");
    link.trim().to_string()
}

/// Resolve a normalized link to an absolute path within the repository root.
///
/// Returns `None` when the link is out of scope: empty, a pure anchor, a
/// non-local scheme, or a path escaping the root. Escaping references are
/// silently excluded rather than flagged.
///
/// Links with a leading `/` resolve against the root; everything else
/// resolves against the referencing file's directory. The result is
/// normalized lexically (`.` and `..` collapsed without consulting the
/// filesystem, since the target may not exist) and must remain a descendant
/// of `root`.
#[must_use]
pub fn resolve(root: &Path, source_file: &Path, link: &str) -> Option<PathBuf> {
    if link.is_empty() || link.starts_with('#') || is_skipped_scheme(link) {
        return None;
    }

    let target = if let Some(rooted) = link.strip_prefix('/') {
        root.join(rooted.trim_start_matches('/'))
    } else {
        let base = source_file.parent().unwrap_or(root);
        base.join(link)
    };
    let target = normalize_components(&target);

    target.starts_with(root).then_some(target)
}

#[must_use]
pub fn is_skipped_scheme(link: &str) -> bool {
    SKIP_PREFIXES.iter().any(|prefix| link.starts_with(prefix))
}

/// Collapse `.` and `..` components without touching the filesystem.
fn normalize_components(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                } else if !matches!(
                    normalized.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                ) {
                    // Leading `..` in a relative path is kept so the
                    // containment check can reject it; `..` at the
                    // filesystem root is lexically a no-op.
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
