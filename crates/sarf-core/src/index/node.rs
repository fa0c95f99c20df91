use crate::root::{Derivative, DerivativeList, Root};

///
/// RootNode
///
/// One root record in the index. Each child slot is owned by exactly one
/// parent, so the node graph is a tree by construction.
///

#[derive(Clone, Debug)]
pub struct RootNode {
    pub(super) root: Root,
    pub(super) derivatives: DerivativeList,
    pub(super) left: Option<Box<Self>>,
    pub(super) right: Option<Box<Self>>,
}

impl RootNode {
    pub(super) fn new(root: Root, derivatives: impl IntoIterator<Item = Derivative>) -> Self {
        Self {
            root,
            derivatives: DerivativeList::from_iter_dedup(derivatives),
            left: None,
            right: None,
        }
    }

    #[must_use]
    pub const fn root(&self) -> &Root {
        &self.root
    }

    #[must_use]
    pub const fn derivatives(&self) -> &DerivativeList {
        &self.derivatives
    }

    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(super) fn depth(node: Option<&Self>) -> usize {
        node.map_or(0, |n| {
            1 + Self::depth(n.left()).max(Self::depth(n.right()))
        })
    }
}
