//! In-memory set of generated files.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Map from forward-slash output path to file contents.
///
/// Writing the same path twice keeps the second contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputSet {
    files: BTreeMap<String, Vec<u8>>,
}

impl OutputSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `contents` at `path`, returning `true` if an earlier entry was
    /// overwritten.
    pub fn write(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> bool {
        self.files.insert(path.into(), contents.into()).is_some()
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Contents at `path` as UTF-8 text.
    #[must_use]
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Entries sorted by path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_slice()))
    }

    /// Write every entry below `dir`, creating directories as needed.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error encountered.
    pub fn write_to(&self, dir: &Path) -> io::Result<()> {
        for (path, contents) in &self.files {
            let target = dir.join(path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, contents)?;
            tracing::debug!(path = %target.display(), bytes = contents.len(), "Wrote file");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_write_overwrites() {
        let mut output = OutputSet::new();
        assert!(!output.write("index.html", "first"));
        assert!(output.write("index.html", "second"));

        assert_eq!(output.len(), 1);
        assert_eq!(output.get_str("index.html"), Some("second"));
    }

    #[test]
    fn test_iter_sorted_by_path() {
        let mut output = OutputSet::new();
        output.write("namespaces/root.html", "");
        output.write("classes/A.html", "");
        output.write("index.html", "");

        let paths: Vec<&str> = output.iter().map(|(p, _)| p).collect();
        assert_eq!(
            paths,
            vec!["classes/A.html", "index.html", "namespaces/root.html"]
        );
    }

    #[test]
    fn test_write_to_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut output = OutputSet::new();
        output.write("classes/A/B/Widget.html", "<p>w</p>");
        output.write("index.html", "<p>i</p>");

        output.write_to(dir.path()).unwrap();

        let widget_path = dir.path().join("classes/A/B/Widget.html");
        let widget = fs::read_to_string(widget_path).unwrap();
        assert_eq!(widget, "<p>w</p>");
        assert!(dir.path().join("index.html").is_file());
    }
}
