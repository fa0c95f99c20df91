//! Ordered root index.
//!
//! A plain binary search tree keyed by root string. No rotations are
//! performed: tree shape is a function of insertion order alone, and depth can
//! degrade to `len()` when roots arrive sorted. Traversal order is always
//! ascending code-point order regardless of shape.

mod iter;
mod node;


pub use iter::InOrder;
pub use node::RootNode;

use crate::{
    root::{Derivative, Root, RootError},
    snapshot::RootTreeSnapshot,
};
use std::cmp::Ordering;

///
/// RootIndex
///

#[derive(Clone, Debug, Default)]
pub struct RootIndex {
    head: Option<Box<RootNode>>,
    len: usize,
}

impl RootIndex {
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of distinct roots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Top node of the tree, for shape-aware views.
    #[must_use]
    pub fn head(&self) -> Option<&RootNode> {
        self.head.as_deref()
    }

    /// Longest root-to-leaf path, counted in nodes.
    #[must_use]
    pub fn depth(&self) -> usize {
        RootNode::depth(self.head.as_deref())
    }

    /// Insert a root, or merge `derivatives` into an existing one.
    ///
    /// The root is validated before the tree is touched, so a rejected root
    /// leaves the index unchanged. Derivatives whose word is already present
    /// on the node are skipped.
    pub fn insert(
        &mut self,
        root: &str,
        derivatives: impl IntoIterator<Item = Derivative>,
    ) -> Result<&RootNode, RootError> {
        let root = Root::parse(root)?;
        let (node, created) = insert_at(&mut self.head, root, derivatives);
        if created {
            self.len += 1;
        }

        Ok(&*node)
    }

    /// Literal code-point lookup; no normalization is applied.
    #[must_use]
    pub fn search(&self, root: &str) -> Option<&RootNode> {
        let mut cursor = self.head.as_deref();

        while let Some(node) = cursor {
            cursor = match root.cmp(node.root.as_str()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }

        None
    }

    #[must_use]
    pub fn contains(&self, root: &str) -> bool {
        self.search(root).is_some()
    }

    /// In-order traversal: roots in ascending order.
    #[must_use]
    pub fn all_roots(&self) -> InOrder<'_> {
        InOrder::new(self.head.as_deref())
    }

    #[must_use]
    pub fn iter(&self) -> InOrder<'_> {
        self.all_roots()
    }

    /// Append a derivative to an existing root.
    ///
    /// Returns `false` when the root is absent or the word is already
    /// recorded; neither case is an error.
    pub fn add_derivative(&mut self, root: &str, derivative: Derivative) -> bool {
        self.search_mut(root)
            .is_some_and(|node| node.derivatives.insert(derivative))
    }

    /// Recursive dump of the whole tree for visualization.
    #[must_use]
    pub fn snapshot(&self) -> Option<RootTreeSnapshot> {
        self.head.as_deref().map(RootTreeSnapshot::from)
    }

    fn search_mut(&mut self, root: &str) -> Option<&mut RootNode> {
        let mut cursor = self.head.as_deref_mut();

        while let Some(node) = cursor {
            cursor = match root.cmp(node.root.as_str()) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(node),
            };
        }

        None
    }
}

impl<'a> IntoIterator for &'a RootIndex {
    type Item = &'a RootNode;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.all_roots()
    }
}

// Descend to the slot for `root`, creating a node there or merging into the
// node already holding the key. Returns the node and whether it was created.
fn insert_at(
    slot: &mut Option<Box<RootNode>>,
    root: Root,
    derivatives: impl IntoIterator<Item = Derivative>,
) -> (&mut RootNode, bool) {
    match slot {
        None => {
            let node = slot.insert(Box::new(RootNode::new(root, derivatives)));
            (&mut **node, true)
        }
        Some(node) => match root.cmp(&node.root) {
            Ordering::Less => insert_at(&mut node.left, root, derivatives),
            Ordering::Greater => insert_at(&mut node.right, root, derivatives),
            Ordering::Equal => {
                node.derivatives.merge(derivatives);
                (&mut **node, false)
            }
        },
    }
}
