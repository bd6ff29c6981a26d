use std::{collections::VecDeque, marker::PhantomData};

use crate::collections::adapter::ContainerCommon;

pub trait StackLike<T>: ContainerCommon {
    fn push(&mut self, value: T);

    fn pop(&mut self) -> Option<T>;

    fn peek(&self) -> Option<&T>;

    fn peek_mut(&mut self) -> Option<&mut T>;
}

/// LIFO adapter over any [`StackLike`] container, `Vec` by default.
pub struct Stack<T, Container: StackLike<T> = Vec<T>> {
    container: Container,
    _phantom_data: PhantomData<T>,
}

impl<T> Stack<T> {
    #[inline]
    pub const fn new() -> Self {
        Self::from_container(Vec::new())
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_container(Vec::with_capacity(capacity))
    }
}

impl<T, Container: StackLike<T>> Stack<T, Container> {
    #[inline]
    pub const fn from_container(container: Container) -> Self {
        Self {
            container,
            _phantom_data: PhantomData,
        }
    }

    #[inline]
    pub fn inner(&self) -> &Container {
        &self.container
    }

    #[inline]
    pub fn into_inner(self) -> Container {
        self.container
    }
}

impl<T, Container: StackLike<T>> From<Container> for Stack<T, Container> {
    #[inline]
    fn from(value: Container) -> Self {
        Self::from_container(value)
    }
}

impl<T, Container: StackLike<T> + Default> Default for Stack<T, Container> {
    #[inline]
    fn default() -> Self {
        Self::from_container(Default::default())
    }
}

impl<T, Container: StackLike<T> + Clone> Clone for Stack<T, Container> {
    fn clone(&self) -> Self {
        Self::from_container(self.container.clone())
    }
}

impl<T, Container: StackLike<T> + PartialEq> PartialEq for Stack<T, Container> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.container == other.container
    }
}

impl<T, Container: StackLike<T> + Eq> Eq for Stack<T, Container> {}

impl<T, Container: StackLike<T> + std::fmt::Debug> std::fmt::Debug for Stack<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stack")
            .field("container", &self.container)
            .finish()
    }
}

/// Elements bottom to top, separated by a single space.
impl<T, Container> std::fmt::Display for Stack<T, Container>
where
    T: std::fmt::Display,
    Container: StackLike<T>,
    for<'a> &'a Container: IntoIterator<Item = &'a T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = (&self.container).into_iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for value in iter {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}

impl<T, Container: StackLike<T> + Default> FromIterator<T> for Stack<T, Container> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::default();
        stack.extend(iter);
        stack
    }
}

impl<T, Container: StackLike<T>> Extend<T> for Stack<T, Container> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.container.push(value));
    }
}

impl<T, Container: StackLike<T>> ContainerCommon for Stack<T, Container> {
    #[inline]
    fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}

impl<T, Container: StackLike<T>> StackLike<T> for Stack<T, Container> {
    #[inline]
    fn push(&mut self, value: T) {
        self.container.push(value)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.container.pop()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.container.peek()
    }

    #[inline]
    fn peek_mut(&mut self) -> Option<&mut T> {
        self.container.peek_mut()
    }
}

impl<T> StackLike<T> for Vec<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.push(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.last()
    }

    #[inline]
    fn peek_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }
}

impl<T> StackLike<T> for VecDeque<T> {
    #[inline]
    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.back()
    }

    #[inline]
    fn peek_mut(&mut self) -> Option<&mut T> {
        self.back_mut()
    }
}
