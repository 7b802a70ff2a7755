use std::path::{Path, PathBuf};

use super::*;

fn root() -> PathBuf {
    PathBuf::from("/repo")
}

fn page() -> PathBuf {
    PathBuf::from("/repo/blog/post.html")
}

#[test]
fn normalize_strips_fragment() {
    assert_eq!(normalize("page.html#section"), "page.html");
}

#[test]
fn normalize_strips_query() {
    assert_eq!(normalize("page.html?v=2"), "page.html");
}

#[test]
fn normalize_strips_query_and_fragment() {
    assert_eq!(normalize("img/photo.png?v=2#frag"), "img/photo.png");
}

#[test]
fn normalize_trims_whitespace() {
    assert_eq!(normalize("  page.html  "), "page.html");
}

#[test]
fn normalize_empty_string() {
    assert_eq!(normalize(""), "");
}

#[test]
fn normalize_anchor_only_becomes_empty() {
    assert_eq!(normalize("#section2"), "");
}

#[test]
fn normalize_is_idempotent() {
    let cases = [
        "page.html#a",
        "page.html?q=1#a",
        "  spaced.html ",
        "",
        "#only",
        "a/b/c.css",
        "?query-first#then-fragment",
    ];
    for case in cases {
        let once = normalize(case);
        assert_eq!(normalize(&once), once, "normalize not idempotent for {case:?}");
    }
}

#[test]
fn resolve_relative_to_source_directory() {
    let resolved = resolve(&root(), &page(), "style.css");
    assert_eq!(resolved, Some(PathBuf::from("/repo/blog/style.css")));
}

#[test]
fn resolve_leading_slash_relative_to_root() {
    let resolved = resolve(&root(), &page(), "/assets/logo.png");
    assert_eq!(resolved, Some(PathBuf::from("/repo/assets/logo.png")));
}

#[test]
fn resolve_strips_repeated_leading_slashes() {
    let resolved = resolve(&root(), &page(), "//assets/logo.png");
    assert_eq!(resolved, Some(PathBuf::from("/repo/assets/logo.png")));
}

#[test]
fn resolve_collapses_parent_components() {
    let resolved = resolve(&root(), &page(), "../index.html");
    assert_eq!(resolved, Some(PathBuf::from("/repo/index.html")));
}

#[test]
fn resolve_collapses_current_dir_components() {
    let resolved = resolve(&root(), &page(), "./img/./photo.png");
    assert_eq!(resolved, Some(PathBuf::from("/repo/blog/img/photo.png")));
}

#[test]
fn resolve_escaping_root_is_out_of_scope() {
    assert_eq!(resolve(&root(), &page(), "../../etc/passwd"), None);
}

#[test]
fn resolve_empty_link_is_out_of_scope() {
    assert_eq!(resolve(&root(), &page(), ""), None);
}

#[test]
fn resolve_anchor_is_out_of_scope() {
    assert_eq!(resolve(&root(), &page(), "#section2"), None);
}

#[test]
fn resolve_skips_every_non_local_scheme() {
    for link in [
        "http://example.com/x",
        "https://example.com/x",
        "mailto:user@example.com",
        "tel:+1234567890",
        "javascript:void(0)",
        "data:image/png;base64,AAAA",
        "whatsapp:send?text=hi",
        "sms:+1234567890",
    ] {
        assert_eq!(resolve(&root(), &page(), link), None, "should skip {link}");
    }
}

#[test]
fn scheme_match_is_case_sensitive() {
    // Uppercase variants are not in the prefix set and fall through to
    // path resolution, matching the original behavior.
    assert!(!is_skipped_scheme("HTTP://example.com"));
    assert!(resolve(&root(), &page(), "HTTP://example.com").is_some());
}

#[test]
fn resolved_paths_stay_within_root() {
    let links = [
        "a.html",
        "/a.html",
        "../top.html",
        "sub/dir/deep.html",
        "./x/../y.html",
        "/deep/../../flat.html",
    ];
    for link in links {
        if let Some(path) = resolve(&root(), &page(), link) {
            assert!(path.starts_with(root()), "{link} resolved outside root: {path:?}");
        }
    }
}

#[test]
fn source_in_root_resolves_siblings() {
    let source = Path::new("/repo/index.html");
    let resolved = resolve(&root(), source, "about.html");
    assert_eq!(resolved, Some(PathBuf::from("/repo/about.html")));
}
