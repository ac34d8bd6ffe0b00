//! Canonical output paths and relative links.
//!
//! All paths are forward-slash virtual paths relative to the output root.

use crate::error::PathError;

/// Path of the site index page.
pub const INDEX_PATH: &str = "index.html";

/// Path of the namespace listing page.
pub const NAMESPACES_PATH: &str = "Namespaces.html";

/// Display name and file stem of the global namespace.
pub const ROOT_NAMESPACE_NAME: &str = "root";

/// Path of a type page: `classes/<ns/path>/<Type>.html`.
///
/// `namespace` is dotted; the global namespace (`""`) adds no directory.
///
/// # Errors
///
/// Returns [`PathError::InvalidTitle`] if `name` is empty.
pub fn type_path(namespace: &str, name: &str) -> Result<String, PathError> {
    if name.is_empty() {
        return Err(PathError::InvalidTitle);
    }
    let mut path = String::from("classes/");
    for segment in segments(namespace) {
        path.push_str(segment);
        path.push('/');
    }
    path.push_str(name);
    path.push_str(".html");
    Ok(path)
}

/// Path of a namespace page: `namespaces/<ancestors>/<name>.html`.
///
/// The global namespace maps to `namespaces/root.html`.
#[must_use]
pub fn namespace_path(full_name: &str) -> String {
    let parts: Vec<&str> = segments(full_name).collect();
    if parts.is_empty() {
        return format!("namespaces/{ROOT_NAMESPACE_NAME}.html");
    }
    format!("namespaces/{}.html", parts.join("/"))
}

/// Display title of a namespace page.
#[must_use]
pub fn namespace_title(full_name: &str) -> &str {
    if full_name.is_empty() {
        ROOT_NAMESPACE_NAME
    } else {
        full_name
    }
}

/// Path of a prose document page: `<title>.html`.
///
/// # Errors
///
/// Returns [`PathError::InvalidTitle`] if `title` is empty.
pub fn document_path(title: &str) -> Result<String, PathError> {
    if title.is_empty() {
        return Err(PathError::InvalidTitle);
    }
    Ok(format!("{title}.html"))
}

/// Link prefix leading from a namespace page back to the output root.
///
/// One `../` per named ancestor of the namespace, plus one for the
/// `namespaces/` directory.
#[must_use]
pub fn relative_prefix(full_name: &str) -> String {
    let ancestors = segments(full_name).count().saturating_sub(1);
    "../".repeat(ancestors + 1)
}

/// Link prefix leading from any page path back to the output root.
#[must_use]
pub fn root_prefix(path: &str) -> String {
    let dirs = path.split('/').filter(|s| !s.is_empty()).count().saturating_sub(1);
    "../".repeat(dirs)
}

/// Compute a relative URL from one page path to another (RFC 3986).
///
/// The last segment of `from` is the current document; its directory is the
/// base the result is relative to.
///
/// # Examples
///
/// ```
/// use refdoc_site::relative_href;
///
/// assert_eq!(relative_href("classes/A/Widget.html", "classes/A/Gadget.html"), "Gadget.html");
/// assert_eq!(relative_href("namespaces/A.html", "index.html"), "../index.html");
/// assert_eq!(relative_href("index.html", "Guide.html"), "Guide.html");
/// ```
#[must_use]
pub fn relative_href(from: &str, to: &str) -> String {
    let from_segs: Vec<&str> = from.split('/').filter(|s| !s.is_empty()).collect();
    let to_segs: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();

    // A trailing slash means every segment is a directory.
    let from_dir = if from.ends_with('/') || from_segs.is_empty() {
        &from_segs[..]
    } else {
        &from_segs[..from_segs.len() - 1]
    };

    let common = from_dir
        .iter()
        .zip(&to_segs)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = from_dir.len() - common;
    let result = format!("{}{}", "../".repeat(ups), to_segs[common..].join("/"));
    if result.is_empty() {
        "./".to_owned()
    } else {
        result
    }
}

fn segments(dotted: &str) -> impl Iterator<Item = &str> {
    dotted.split('.').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_type_path_nested_namespace() {
        assert_eq!(
            type_path("A.B.C", "Widget").unwrap(),
            "classes/A/B/C/Widget.html"
        );
    }

    #[test]
    fn test_type_path_global_namespace() {
        assert_eq!(type_path("", "Program").unwrap(), "classes/Program.html");
    }

    #[test]
    fn test_type_path_empty_name() {
        assert_eq!(type_path("A", ""), Err(PathError::InvalidTitle));
    }

    #[test]
    fn test_namespace_path() {
        assert_eq!(namespace_path(""), "namespaces/root.html");
        assert_eq!(namespace_path("A"), "namespaces/A.html");
        assert_eq!(namespace_path("A.B.C"), "namespaces/A/B/C.html");
    }

    #[test]
    fn test_namespace_title() {
        assert_eq!(namespace_title(""), "root");
        assert_eq!(namespace_title("A.B"), "A.B");
    }

    #[test]
    fn test_document_path() {
        assert_eq!(document_path("Guide").unwrap(), "Guide.html");
        assert_eq!(document_path(""), Err(PathError::InvalidTitle));
    }

    #[test]
    fn test_relative_prefix() {
        assert_eq!(relative_prefix(""), "../");
        assert_eq!(relative_prefix("A"), "../");
        assert_eq!(relative_prefix("A.B.C"), "../../../");
    }

    #[test]
    fn test_relative_prefix_matches_root_prefix_of_namespace_page() {
        for name in ["", "A", "A.B", "A.B.C.D"] {
            assert_eq!(relative_prefix(name), root_prefix(&namespace_path(name)));
        }
    }

    #[test]
    fn test_root_prefix() {
        assert_eq!(root_prefix(INDEX_PATH), "");
        assert_eq!(root_prefix("classes/A/B/Widget.html"), "../../../");
    }

    #[test]
    fn test_relative_href() {
        assert_eq!(
            relative_href("classes/A/B/Widget.html", "namespaces/A/B.html"),
            "../../../namespaces/A/B.html"
        );
        assert_eq!(
            relative_href("namespaces/A/B.html", "classes/A/B/Widget.html"),
            "../../classes/A/B/Widget.html"
        );
        assert_eq!(relative_href("Guide.html", "Guide.html"), "Guide.html");
        assert_eq!(relative_href("", "index.html"), "index.html");
        assert_eq!(relative_href("a/", "a/"), "./");
    }
}
