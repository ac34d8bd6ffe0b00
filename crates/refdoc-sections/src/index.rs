//! Section tree construction from a block stream.

use crate::block::Block;
use crate::slug::slug;

/// Index of a node in a [`SectionTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(usize);

impl SectionId {
    /// Position of the node in the tree's arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Heading data of a non-root section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
    pub slug: String,
}

impl Heading {
    fn new(level: u8, text: &str) -> Self {
        Self {
            level,
            text: text.to_owned(),
            slug: slug(text),
        }
    }
}

/// A node of the section tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionNode {
    /// `None` only for the root.
    pub heading: Option<Heading>,
    pub parent: Option<SectionId>,
    pub children: Vec<SectionId>,
}

/// Arena-backed tree of document sections.
///
/// The root sits at index 0 and carries no heading. A child's level is not
/// required to be its parent's level plus one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionTree {
    nodes: Vec<SectionNode>,
}

impl SectionTree {
    pub const ROOT: SectionId = SectionId(0);

    fn new() -> Self {
        Self {
            nodes: vec![SectionNode {
                heading: None,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    fn push(&mut self, parent: SectionId, heading: Heading) -> SectionId {
        let id = SectionId(self.nodes.len());
        self.nodes.push(SectionNode {
            heading: Some(heading),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    #[must_use]
    pub fn root(&self) -> SectionId {
        Self::ROOT
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: SectionId) -> &SectionNode {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn heading(&self, id: SectionId) -> Option<&Heading> {
        self.nodes.get(id.0).and_then(|n| n.heading.as_ref())
    }

    #[must_use]
    pub fn parent(&self, id: SectionId) -> Option<SectionId> {
        self.nodes.get(id.0).and_then(|n| n.parent)
    }

    #[must_use]
    pub fn children(&self, id: SectionId) -> &[SectionId] {
        self.nodes.get(id.0).map_or(&[], |n| n.children.as_slice())
    }

    /// Number of heading nodes (the root is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pre-order walk of the heading nodes with their tree depth (1 for
    /// children of the root).
    pub fn walk(&self) -> impl Iterator<Item = (usize, SectionId)> + '_ {
        let mut stack: Vec<(usize, SectionId)> = self
            .children(Self::ROOT)
            .iter()
            .rev()
            .map(|&id| (1, id))
            .collect();
        std::iter::from_fn(move || {
            let (depth, id) = stack.pop()?;
            stack.extend(self.children(id).iter().rev().map(|&c| (depth + 1, c)));
            Some((depth, id))
        })
    }

    fn level(&self, id: SectionId) -> i32 {
        self.heading(id).map_or(0, |h| i32::from(h.level))
    }
}

/// Build the section tree for the headings in `blocks`.
///
/// Uses an explicit stack seeded with the root. A heading at the current
/// level replaces the top of the stack. A shallower heading unwinds the
/// stack, subtracting each popped node's level from the running level until
/// it drops below the new heading's level, then pops once more. A deeper
/// heading nests under the top. The root is never popped, so any level
/// sequence yields a tree.
#[must_use]
pub fn build_index(blocks: &[Block]) -> SectionTree {
    let mut tree = SectionTree::new();
    let mut stack = vec![SectionTree::ROOT];
    let mut current_level: i32 = 0;

    for block in blocks {
        let Some(level) = block.heading_level() else {
            continue;
        };
        let target = i32::from(level);
        let delta = target - current_level;

        if delta == 0 {
            pop_section(&mut stack);
        } else if delta < 0 {
            while current_level >= target && stack.len() > 1 {
                if let Some(popped) = stack.pop() {
                    current_level -= tree.level(popped);
                }
            }
            pop_section(&mut stack);
        }

        let parent = stack.last().copied().unwrap_or(SectionTree::ROOT);
        let id = tree.push(parent, Heading::new(level, &block.text));
        stack.push(id);
        current_level = target;
    }

    tree
}

fn pop_section(stack: &mut Vec<SectionId>) {
    if stack.len() > 1 {
        stack.pop();
    }
}
