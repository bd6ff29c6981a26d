//! Pre-order encoding of a tree as a flat `Vec<Option<T>>`, `None` marking an absent child.

use crate::tree::BinaryNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DeserializeError {
    #[error("sequence ended before the tree was complete")]
    Truncated,
    #[error("{remaining} item(s) left over after the tree was complete")]
    TrailingItems { remaining: usize },
}

impl<T: Clone> BinaryNode<T> {
    pub fn serialize(&self) -> Vec<Option<T>> {
        let mut items = Vec::with_capacity(2 * self.len() + 1);
        self.traverse_pre_order_with_missing(|value| items.push(value.cloned()));
        items
    }
}

impl<T> BinaryNode<T> {
    /// Rebuilds the tree produced by [`serialize`](Self::serialize).
    ///
    /// Returns `None` for a leading missing marker. A sequence that runs out early is
    /// read as if padded with missing markers; use [`try_deserialize`](Self::try_deserialize)
    /// to reject it instead.
    ///
    /// Recurses once per tree level, as does [`serialize`](Self::serialize), so a
    /// degenerate tree hundreds of thousands of levels deep overflows the thread's stack.
    pub fn deserialize(items: Vec<Option<T>>) -> Option<Self> {
        let mut items: Vec<_> = items.into_iter().rev().collect();
        Self::deserialize_from_tail(&mut items)
    }

    /// Consumes one subtree from the end of `items`, which must hold a serialized
    /// sequence in reverse. Whatever follows the subtree is left in place.
    pub fn deserialize_from_tail(items: &mut Vec<Option<T>>) -> Option<Self> {
        let value = items.pop()??;
        let left = Self::deserialize_from_tail(items).map(Box::new);
        let right = Self::deserialize_from_tail(items).map(Box::new);
        Some(Self { value, left, right })
    }

    /// Like [`deserialize`](Self::deserialize), but the sequence must describe exactly one tree.
    pub fn try_deserialize(items: Vec<Option<T>>) -> Result<Option<Self>, DeserializeError> {
        let mut items: Vec<_> = items.into_iter().rev().collect();
        let node = Self::try_deserialize_from_tail(&mut items).inspect_err(|_err| {
            crate::trace!(error = %_err, "tree sequence rejected");
        })?;
        if !items.is_empty() {
            let remaining = items.len();
            crate::trace!(remaining, "tree sequence has trailing items");
            return Err(DeserializeError::TrailingItems { remaining });
        }
        Ok(node)
    }

    fn try_deserialize_from_tail(items: &mut Vec<Option<T>>) -> Result<Option<Self>, DeserializeError> {
        let Some(value) = items.pop().ok_or(DeserializeError::Truncated)? else {
            return Ok(None);
        };
        let left = Self::try_deserialize_from_tail(items)?.map(Box::new);
        let right = Self::try_deserialize_from_tail(items)?.map(Box::new);
        Ok(Some(Self { value, left, right }))
    }
}
