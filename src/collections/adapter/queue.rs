use crate::collections::adapter::{ContainerCommon, Stack, StackLike};

/// FIFO capability shared by [`ArrayQueue`] and [`StackQueue`].
pub trait QueueLike<T>: ContainerCommon {
    fn enqueue(&mut self, value: T);

    fn dequeue(&mut self) -> Option<T>;

    fn peek(&self) -> Option<&T>;
}

/// Queue over a single `Vec`. Dequeue shifts the remaining elements, so it is O(n).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayQueue<T> {
    buf: Vec<T>,
}

impl<T> ArrayQueue<T> {
    #[inline]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }
}

impl<T> Default for ArrayQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ContainerCommon for ArrayQueue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.buf.len()
    }
}

impl<T> QueueLike<T> for ArrayQueue<T> {
    #[inline]
    fn enqueue(&mut self, value: T) {
        self.buf.push(value);
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        (!self.buf.is_empty()).then(|| self.buf.remove(0))
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.buf.first()
    }
}

impl<T> FromIterator<T> for ArrayQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buf: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

/// Queue built from two stacks.
///
/// `incoming` takes every enqueued value. `outgoing` holds older values in reverse,
/// so its top is the queue front. When `outgoing` runs dry the whole of `incoming`
/// is popped over into it, which keeps both operations amortized O(1).
#[derive(Debug, Clone)]
pub struct StackQueue<T> {
    incoming: Stack<T>,
    outgoing: Stack<T>,
}

impl<T> StackQueue<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            incoming: Stack::new(),
            outgoing: Stack::new(),
        }
    }

    /// Iterates front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let outgoing = self.outgoing.inner().iter().rev();
        outgoing.chain(self.incoming.inner().iter())
    }

    /// Moves `incoming` over when `outgoing` is empty. Returns how many values moved.
    fn refill(&mut self) -> usize {
        if !self.outgoing.is_empty() || self.incoming.is_empty() {
            return 0;
        }
        while let Some(value) = self.incoming.pop() {
            self.outgoing.push(value);
        }
        let moved = self.outgoing.len();
        crate::trace!(moved, "refilled outgoing stack");
        moved
    }
}

impl<T> Default for StackQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Equal when both queues would dequeue the same values in the same order,
/// however those values are split between the two stacks.
impl<T: PartialEq> PartialEq for StackQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for StackQueue<T> {}

impl<T> ContainerCommon for StackQueue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }
}

impl<T> QueueLike<T> for StackQueue<T> {
    #[inline]
    fn enqueue(&mut self, value: T) {
        self.incoming.push(value);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.refill();
        self.outgoing.pop()
    }

    /// Reads what the next [`dequeue`](QueueLike::dequeue) would return without moving anything.
    fn peek(&self) -> Option<&T> {
        self.outgoing
            .peek()
            .or_else(|| self.incoming.inner().first())
    }
}

impl<T> FromIterator<T> for StackQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            incoming: iter.into_iter().collect(),
            outgoing: Stack::new(),
        }
    }
}

impl<T> Extend<T> for StackQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.incoming.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn drain<Q: QueueLike<i32>>(queue: &mut Q) -> Vec<i32> {
        std::iter::from_fn(|| queue.dequeue()).collect()
    }

    #[test]
    fn t_array_queue() {
        let mut q: ArrayQueue<i32> = ArrayQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek(), None);

        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.peek(), Some(&1));
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.as_slice(), [2, 3]);
        assert_eq!(drain(&mut q), [2, 3]);
        assert!(q.is_empty());
    }

    #[test]
    fn t_stack_queue() {
        let mut q: StackQueue<i32> = StackQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek(), None);

        q.enqueue(1);
        q.enqueue(2);
        q.enqueue(3);
        assert_eq!(q.peek(), Some(&1));
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn t_stack_queue_peek_and_eq() {
        let mut q: StackQueue<_> = [1, 2].into_iter().collect();
        let before = q.clone();
        assert_eq!(q.peek(), Some(&1));
        assert_eq!(q.iter().collect::<Vec<_>>(), [&1, &2]);

        // Same logical contents, but `q` now keeps them in `outgoing`.
        assert_eq!(q.refill(), 2);
        assert_eq!(q, before);
        assert_eq!(q.peek(), Some(&1));

        // Front is in `outgoing` while newer values wait in `incoming`.
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(3);
        assert_eq!(q.peek(), Some(&2));
        assert_eq!(q.len(), 2);
        assert_eq!(drain(&mut q), [2, 3]);
    }

    #[test]
    fn t_refill_only_when_needed() {
        let mut q: StackQueue<i32> = StackQueue::new();
        assert_eq!(q.refill(), 0);
        assert_eq!(q.dequeue(), None);

        q.extend([1, 2, 3]);
        assert_eq!(q.refill(), 3);
        q.enqueue(4);
        // Front values are still in `outgoing`, so nothing moves.
        assert_eq!(q.refill(), 0);
        assert_eq!(drain(&mut q), [1, 2, 3, 4]);
        assert_eq!(q.refill(), 0);
    }

    #[test]
    fn t_interleaved() {
        let mut q: StackQueue<i32> = StackQueue::new();
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(3);
        q.enqueue(4);
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        q.extend([5, 6]);
        assert_eq!(drain(&mut q), [4, 5, 6]);
    }

    fn fifo_holds<Q: QueueLike<i32> + Default>(ops: &[Option<i32>]) -> Result<(), TestCaseError> {
        let mut queue = Q::default();
        let mut expected = std::collections::VecDeque::new();
        for op in ops {
            match *op {
                Some(value) => {
                    queue.enqueue(value);
                    expected.push_back(value);
                }
                None => {
                    prop_assert_eq!(queue.peek(), expected.front());
                    prop_assert_eq!(queue.dequeue(), expected.pop_front());
                }
            }
            prop_assert_eq!(queue.len(), expected.len());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn p_array_queue_is_fifo(ops in prop::collection::vec(any::<Option<i32>>(), 0..64)) {
            fifo_holds::<ArrayQueue<i32>>(&ops)?;
        }

        #[test]
        fn p_stack_queue_is_fifo(ops in prop::collection::vec(any::<Option<i32>>(), 0..64)) {
            fifo_holds::<StackQueue<i32>>(&ops)?;
        }
    }
}
