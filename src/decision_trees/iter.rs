use std::iter::Iterator;

use super::TreeNode;
use crate::dataset::{Category, Float};

/// Level-order (BFT) iterator of nodes in a decision tree
pub struct NodeIter<'a, F: Float, K: Category> {
    queue: Vec<&'a TreeNode<F, K>>,
}

impl<'a, F: Float, K: Category> NodeIter<'a, F, K> {
    pub fn new(queue: Vec<&'a TreeNode<F, K>>) -> Self {
        NodeIter { queue }
    }
}

impl<'a, F: Float, K: Category> Iterator for NodeIter<'a, F, K> {
    type Item = &'a TreeNode<F, K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop().map(|node| {
            self.queue.extend(node.children());
            node
        })
    }
}
