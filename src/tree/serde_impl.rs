use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::tree::{BinaryNode, BinaryTree};

impl<T: Serialize> Serialize for BinaryNode<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut items = Vec::with_capacity(2 * self.len() + 1);
        self.traverse_pre_order_with_missing(|value| items.push(value));
        serializer.collect_seq(items)
    }
}

impl<T: Serialize> Serialize for BinaryTree<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut items = Vec::with_capacity(2 * self.len() + 1);
        self.traverse_pre_order_with_missing(|value| items.push(value));
        serializer.collect_seq(items)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for BinaryNode<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<Option<T>>::deserialize(deserializer)?;
        BinaryNode::try_deserialize(items)
            .map_err(D::Error::custom)?
            .ok_or_else(|| D::Error::custom("expected a tree node, found a missing marker"))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for BinaryTree<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<Option<T>>::deserialize(deserializer)?;
        BinaryTree::try_deserialize(items).map_err(D::Error::custom)
    }
}
