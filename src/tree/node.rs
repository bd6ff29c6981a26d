/// A binary tree node that owns both of its subtrees.
///
/// Children are plain public fields, so a tree can be wired up by assignment after
/// the nodes are created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryNode<T> {
    pub value: T,
    pub left: Option<Box<BinaryNode<T>>>,
    pub right: Option<Box<BinaryNode<T>>>,
}

#[allow(clippy::len_without_is_empty)]
impl<T> BinaryNode<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn with_children(value: T, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in this subtree.
    pub fn len(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |node| node.len());
        let right = self.right.as_ref().map_or(0, |node| node.len());
        1 + left + right
    }

    /// Nodes on the longest root-to-leaf path; a lone node has height 1.
    pub fn height(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |node| node.height());
        let right = self.right.as_ref().map_or(0, |node| node.height());
        1 + left.max(right)
    }

    /// Left subtree, then this node, then right subtree.
    pub fn traverse_in_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        self.in_order_with(&mut visit);
    }

    fn in_order_with<'a, F: FnMut(&'a T)>(&'a self, visit: &mut F) {
        if let Some(left) = &self.left {
            left.in_order_with(visit);
        }
        visit(&self.value);
        if let Some(right) = &self.right {
            right.in_order_with(visit);
        }
    }

    /// This node, then left subtree, then right subtree.
    pub fn traverse_pre_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        self.traverse_pre_order_with_missing(|value| {
            if let Some(value) = value {
                visit(value);
            }
        });
    }

    /// Pre-order walk that also reports every absent child as `None`.
    ///
    /// Each node yields its own value followed by exactly two entries for its left and
    /// right sides, so the resulting sequence describes the shape unambiguously.
    pub fn traverse_pre_order_with_missing<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(Option<&'a T>),
    {
        self.pre_order_with(&mut visit);
    }

    fn pre_order_with<'a, F: FnMut(Option<&'a T>)>(&'a self, visit: &mut F) {
        visit(Some(&self.value));
        for child in [&self.left, &self.right] {
            match child {
                Some(node) => node.pre_order_with(visit),
                None => visit(None),
            }
        }
    }

    /// Left subtree, then right subtree, then this node.
    pub fn traverse_post_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        self.post_order_with(&mut visit);
    }

    fn post_order_with<'a, F: FnMut(&'a T)>(&'a self, visit: &mut F) {
        if let Some(left) = &self.left {
            left.post_order_with(visit);
        }
        if let Some(right) = &self.right {
            right.post_order_with(visit);
        }
        visit(&self.value);
    }

    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.traverse_in_order(|value| values.push(value));
        values
    }

    pub fn pre_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.traverse_pre_order(|value| values.push(value));
        values
    }

    pub fn post_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.traverse_post_order(|value| values.push(value));
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::sample_tree;

    #[test]
    fn t_traversals() {
        let tree = sample_tree();
        assert_eq!(tree.in_order(), [&0, &1, &5, &7, &8, &9]);
        assert_eq!(tree.pre_order(), [&7, &1, &0, &5, &9, &8]);
        assert_eq!(tree.post_order(), [&0, &5, &1, &8, &9, &7]);
    }

    #[test]
    fn t_visit_closure() {
        let tree = sample_tree();
        let mut sum = 0;
        tree.traverse_post_order(|value| sum += value);
        assert_eq!(sum, 30);
    }

    #[test]
    fn t_pre_order_with_missing() {
        let tree = sample_tree();
        let mut seen = Vec::new();
        tree.traverse_pre_order_with_missing(|value| seen.push(value.copied()));
        assert_eq!(
            seen,
            [
                Some(7),
                Some(1),
                Some(0),
                None,
                None,
                Some(5),
                None,
                None,
                Some(9),
                Some(8),
                None,
                None,
                None,
            ]
        );
        assert_eq!(seen.iter().filter(|item| item.is_none()).count(), tree.len() + 1);
    }

    #[test]
    fn t_shape() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.height(), 3);
        assert!(!tree.is_leaf());

        let single = BinaryNode::new("root");
        assert_eq!(single.len(), 1);
        assert_eq!(single.height(), 1);
        assert!(single.is_leaf());
        assert_eq!(single.in_order(), [&"root"]);
    }

    #[test]
    fn t_with_children() {
        let built = BinaryNode::with_children(
            7,
            Some(BinaryNode::with_children(
                1,
                Some(BinaryNode::new(0)),
                Some(BinaryNode::new(5)),
            )),
            Some(BinaryNode::with_children(9, Some(BinaryNode::new(8)), None)),
        );
        assert_eq!(built, sample_tree());
    }
}
