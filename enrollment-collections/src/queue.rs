use core::fmt;

use crate::error::QueueError;
use crate::list::{BoundedUniqueList, Iter};

/// First in, first out queue with a bounded size and no duplicate elements.
#[derive(Clone, PartialEq, Eq)]
pub struct FifoWaitQueue<T> {
    list: BoundedUniqueList<T>,
}

impl<T> FifoWaitQueue<T> {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            list: BoundedUniqueList::new(capacity),
        }
    }

    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.list.pop_front().ok_or(QueueError::EmptyQueue)
    }

    /// The element that the next [`dequeue`](Self::dequeue) returns.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.list.is_full()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.list.capacity()
    }

    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), QueueError> {
        Ok(self.list.set_capacity(capacity)?)
    }

    /// Iterates from the head (next to be dequeued) to the tail.
    pub const fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: PartialEq> FifoWaitQueue<T> {
    pub fn enqueue(&mut self, value: T) -> Result<(), QueueError> {
        Ok(self.list.push_back(value)?)
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }

    /// Removes `value` from wherever it waits. Everyone behind it moves up one
    /// place, nobody changes their relative order.
    pub fn withdraw(&mut self, value: &T) -> Option<T> {
        self.list.remove_item(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for FifoWaitQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a FifoWaitQueue<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
