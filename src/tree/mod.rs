pub mod codec;
pub mod node;

#[cfg(feature = "serde")]
mod serde_impl;

pub use codec::DeserializeError;
pub use node::BinaryNode;

/// A possibly empty binary tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryTree<T> {
    root: Option<BinaryNode<T>>,
}

impl<T> BinaryTree<T> {
    #[inline]
    pub const fn new() -> Self {
        Self { root: None }
    }

    #[inline]
    pub fn root(&self) -> Option<&BinaryNode<T>> {
        self.root.as_ref()
    }

    #[inline]
    pub fn root_mut(&mut self) -> Option<&mut BinaryNode<T>> {
        self.root.as_mut()
    }

    #[inline]
    pub fn into_root(self) -> Option<BinaryNode<T>> {
        self.root
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, BinaryNode::len)
    }

    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, BinaryNode::height)
    }

    pub fn traverse_in_order<'a, F: FnMut(&'a T)>(&'a self, visit: F) {
        self.root.as_ref().map(|root| root.traverse_in_order(visit));
    }

    pub fn traverse_pre_order<'a, F: FnMut(&'a T)>(&'a self, visit: F) {
        self.root.as_ref().map(|root| root.traverse_pre_order(visit));
    }

    pub fn traverse_post_order<'a, F: FnMut(&'a T)>(&'a self, visit: F) {
        self.root.as_ref().map(|root| root.traverse_post_order(visit));
    }

    /// An empty tree is a single missing marker.
    pub fn traverse_pre_order_with_missing<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(Option<&'a T>),
    {
        match &self.root {
            Some(root) => root.traverse_pre_order_with_missing(visit),
            None => visit(None),
        }
    }

    pub fn in_order(&self) -> Vec<&T> {
        self.root.as_ref().map_or_else(Vec::new, BinaryNode::in_order)
    }

    pub fn pre_order(&self) -> Vec<&T> {
        self.root.as_ref().map_or_else(Vec::new, BinaryNode::pre_order)
    }

    pub fn post_order(&self) -> Vec<&T> {
        self.root.as_ref().map_or_else(Vec::new, BinaryNode::post_order)
    }

    #[inline]
    pub fn deserialize(items: Vec<Option<T>>) -> Self {
        Self {
            root: BinaryNode::deserialize(items),
        }
    }

    #[inline]
    pub fn try_deserialize(items: Vec<Option<T>>) -> Result<Self, DeserializeError> {
        BinaryNode::try_deserialize(items).map(|root| Self { root })
    }
}

impl<T: Clone> BinaryTree<T> {
    pub fn serialize(&self) -> Vec<Option<T>> {
        match &self.root {
            Some(root) => root.serialize(),
            None => vec![None],
        }
    }
}

impl<T> Default for BinaryTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<BinaryNode<T>> for BinaryTree<T> {
    #[inline]
    fn from(root: BinaryNode<T>) -> Self {
        Self { root: Some(root) }
    }
}

impl<T> From<Option<BinaryNode<T>>> for BinaryTree<T> {
    #[inline]
    fn from(root: Option<BinaryNode<T>>) -> Self {
        Self { root }
    }
}

//       7
//     /   \
//    1     9
//   / \   /
//  0   5 8
#[cfg(test)]
fn sample_tree() -> BinaryNode<i32> {
    let mut one = BinaryNode::new(1);
    one.left = Some(Box::new(BinaryNode::new(0)));
    one.right = Some(Box::new(BinaryNode::new(5)));

    let mut nine = BinaryNode::new(9);
    nine.left = Some(Box::new(BinaryNode::new(8)));

    let mut seven = BinaryNode::new(7);
    seven.left = Some(Box::new(one));
    seven.right = Some(Box::new(nine));
    seven
}
