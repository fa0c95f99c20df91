use crate::index::RootNode;

///
/// InOrder
///
/// Lazy in-order traversal over the root index, yielding nodes in ascending
/// root order. Borrowing only; dropping it part-way leaves the index untouched.
///

#[derive(Clone, Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a RootNode>,
}

impl<'a> InOrder<'a> {
    pub(super) fn new(head: Option<&'a RootNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(head);

        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a RootNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a RootNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());

        Some(node)
    }
}
