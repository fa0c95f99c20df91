//! Serializable views of the lexicon state, shaped for tree and hash-table
//! visualizations.

use crate::{
    index::RootNode,
    root::{Derivative, Root},
    scheme::Scheme,
};
use serde::{Deserialize, Serialize};

///
/// RootTreeSnapshot
/// Recursive dump of one index node and its subtrees.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RootTreeSnapshot {
    pub root: Root,
    pub derivatives: Vec<Derivative>,
    pub left: Option<Box<Self>>,
    pub right: Option<Box<Self>>,
}

impl RootTreeSnapshot {
    /// Roots of this subtree in ascending order.
    #[must_use]
    pub fn in_order(&self) -> Vec<&Root> {
        let mut out = Vec::new();
        self.collect_in_order(&mut out);

        out
    }

    fn collect_in_order<'a>(&'a self, out: &mut Vec<&'a Root>) {
        if let Some(left) = &self.left {
            left.collect_in_order(out);
        }
        out.push(&self.root);
        if let Some(right) = &self.right {
            right.collect_in_order(out);
        }
    }
}

impl From<&RootNode> for RootTreeSnapshot {
    fn from(node: &RootNode) -> Self {
        Self {
            root: node.root().clone(),
            derivatives: node.derivatives().to_vec(),
            left: node.left().map(|n| Box::new(Self::from(n))),
            right: node.right().map(|n| Box::new(Self::from(n))),
        }
    }
}

///
/// SchemeTableSnapshot
/// Per-bucket dump of the scheme store, bucket index order preserved.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SchemeTableSnapshot {
    pub bucket_count: usize,
    pub buckets: Vec<Vec<Scheme>>,
}

///
/// LexiconReport
/// Point-in-time size summary.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct LexiconReport {
    pub roots: usize,
    pub derivatives: usize,
    pub tree_depth: usize,
    pub schemes: usize,
    pub bucket_count: usize,
    pub occupied_buckets: usize,
    pub collisions: Vec<usize>,
    pub indexed_words: usize,
}
