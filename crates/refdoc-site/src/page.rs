//! Page tree and breadcrumbs.

use refdoc_catalog::{NamespaceId, TypeId};

use crate::error::PathError;

/// Index of a page in a [`PageTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(usize);

/// What a page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Index,
    NamespaceList,
    Namespace(NamespaceId),
    Type(TypeId),
    /// Index into the generator's document list.
    Document(usize),
}

/// A generated page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    /// Canonical output path.
    pub path: String,
    /// Parent page, used only for breadcrumbs.
    pub parent: Option<PageId>,
    pub kind: PageKind,
}

/// Breadcrumb entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub title: String,
    /// Output path of the page this entry links to.
    pub path: String,
    /// First entry of the trail.
    pub is_home: bool,
    /// Last entry of the trail (the current page); rendered without a link.
    pub is_active: bool,
}

/// Arena of pages linked to their parents by index.
///
/// A parent must be inserted before its children, so parent chains are
/// always finite.
#[derive(Clone, Debug, Default)]
pub struct PageTree {
    pages: Vec<Page>,
}

impl PageTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidTitle`] if `title` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this tree.
    pub fn insert(
        &mut self,
        title: impl Into<String>,
        path: impl Into<String>,
        parent: Option<PageId>,
        kind: PageKind,
    ) -> Result<PageId, PathError> {
        let title = title.into();
        if title.is_empty() {
            return Err(PathError::InvalidTitle);
        }
        if let Some(parent) = parent {
            assert!(parent.0 < self.pages.len(), "unknown parent page");
        }

        let id = PageId(self.pages.len());
        self.pages.push(Page {
            title,
            path: path.into(),
            parent,
            kind,
        });
        Ok(id)
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    #[must_use]
    pub fn get(&self, id: PageId) -> &Page {
        &self.pages[id.0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PageId, &Page)> {
        self.pages.iter().enumerate().map(|(i, p)| (PageId(i), p))
    }

    /// Trail from the outermost ancestor down to `id`.
    #[must_use]
    pub fn breadcrumb(&self, id: PageId) -> Vec<Crumb> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(page_id) = current {
            let page = self.get(page_id);
            chain.push(page);
            current = page.parent;
        }
        chain.reverse();

        let last = chain.len().saturating_sub(1);
        chain
            .into_iter()
            .enumerate()
            .map(|(i, page)| Crumb {
                title: page.title.clone(),
                path: page.path.clone(),
                is_home: i == 0,
                is_active: i == last,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_breadcrumb_three_levels() {
        let mut tree = PageTree::new();
        let root = tree
            .insert("Root", "index.html", None, PageKind::Index)
            .unwrap();
        let docs = tree
            .insert("Docs", "Docs.html", Some(root), PageKind::Document(0))
            .unwrap();
        let guide = tree
            .insert("Guide", "Guide.html", Some(docs), PageKind::Document(1))
            .unwrap();

        let crumbs = tree.breadcrumb(guide);

        assert_eq!(crumbs.len(), 3);
        assert_eq!(
            crumbs[0],
            Crumb {
                title: "Root".to_owned(),
                path: "index.html".to_owned(),
                is_home: true,
                is_active: false,
            }
        );
        assert_eq!(crumbs[1].title, "Docs");
        assert!(!crumbs[1].is_home && !crumbs[1].is_active);
        assert!(crumbs[2].is_active);
        assert_eq!(crumbs[2].title, "Guide");
    }

    #[test]
    fn test_breadcrumb_single_page_is_home_and_active() {
        let mut tree = PageTree::new();
        let root = tree
            .insert("Index", "index.html", None, PageKind::Index)
            .unwrap();

        let crumbs = tree.breadcrumb(root);
        assert_eq!(crumbs.len(), 1);
        assert!(crumbs[0].is_home && crumbs[0].is_active);
    }

    #[test]
    fn test_insert_empty_title_rejected() {
        let mut tree = PageTree::new();
        let err = tree.insert("", "x.html", None, PageKind::Index).unwrap_err();

        assert_eq!(err, PathError::InvalidTitle);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_iter_in_insertion_order() {
        let mut tree = PageTree::new();
        let a = tree.insert("A", "a.html", None, PageKind::Index).unwrap();
        tree.insert("B", "b.html", Some(a), PageKind::NamespaceList)
            .unwrap();

        let titles: Vec<&str> = tree.iter().map(|(_, p)| p.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(tree.len(), 2);
    }
}
