use core::fmt;
use core::iter::FusedIterator;

use crate::error::CollectionError;

#[derive(Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly linked list with a declared maximum capacity that never holds two
/// equal elements.
///
/// Nodes live in a dense arena: `nodes` always contains exactly the linked
/// elements, in arbitrary order, and the list order is given by the `prev` and
/// `next` links. Removing a node moves the last arena slot into the hole and
/// patches the links of the moved node, so there is no free list and no slot is
/// ever empty.
///
/// Head and tail operations are O(1). Positional access walks from the nearer
/// end and is O(n), as is the uniqueness check on insertion.
#[derive(Clone)]
pub struct BoundedUniqueList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    capacity: usize,
}

impl<T> BoundedUniqueList<T> {
    /// Creates an empty list that accepts at most `capacity` elements.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            capacity,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }

    /// Changes the capacity. Fails if the list already holds more than
    /// `capacity` elements.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), CollectionError> {
        if capacity < self.len() {
            return Err(CollectionError::InvalidCapacity {
                capacity,
                len: self.len(),
            });
        }
        self.capacity = capacity;
        Ok(())
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|slot| &self.nodes[slot].value)
    }

    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|slot| &self.nodes[slot].value)
    }

    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        let slot = self.slot_at(index)?;
        Ok(&self.nodes[slot].value)
    }

    /// Removes and returns the element at `index`, shifting the following
    /// elements one position to the front.
    pub fn remove(&mut self, index: usize) -> Result<T, CollectionError> {
        let slot = self.slot_at(index)?;
        Ok(self.unlink(slot))
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let slot = self.head?;
        Some(self.unlink(slot))
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub const fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn slot_at(&self, index: usize) -> Result<usize, CollectionError> {
        let len = self.len();
        let out_of_range = CollectionError::IndexOutOfRange { index, len };
        if index >= len {
            return Err(out_of_range);
        }
        let cursor = if index <= len / 2 {
            (0..index).fold(self.head, |cursor, _| {
                cursor.and_then(|slot| self.nodes[slot].next)
            })
        } else {
            (index..len - 1).fold(self.tail, |cursor, _| {
                cursor.and_then(|slot| self.nodes[slot].prev)
            })
        };
        cursor.ok_or(out_of_range)
    }

    fn link_between(&mut self, value: T, prev: Option<usize>, next: Option<usize>) {
        let slot = self.nodes.len();
        self.nodes.push(Node { value, prev, next });
        match prev {
            Some(prev) => self.nodes[prev].next = Some(slot),
            None => self.head = Some(slot),
        }
        match next {
            Some(next) => self.nodes[next].prev = Some(slot),
            None => self.tail = Some(slot),
        }
    }

    fn unlink(&mut self, slot: usize) -> T {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
        let node = self.nodes.swap_remove(slot);
        if slot < self.nodes.len() {
            // the former last slot was moved into the hole
            let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
            match prev {
                Some(prev) => self.nodes[prev].next = Some(slot),
                None => self.head = Some(slot),
            }
            match next {
                Some(next) => self.nodes[next].prev = Some(slot),
                None => self.tail = Some(slot),
            }
        }
        node.value
    }
}

impl<T: PartialEq> BoundedUniqueList<T> {
    /// Inserts `value` at `index`, shifting the element at `index` and all
    /// following elements one position to the back.
    ///
    /// Checks are applied in this order: capacity, uniqueness, index range.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        if self.is_full() {
            return Err(CollectionError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.contains(&value) {
            return Err(CollectionError::DuplicateValue);
        }
        let len = self.len();
        if index > len {
            return Err(CollectionError::IndexOutOfRange { index, len });
        }
        if index == len {
            self.link_between(value, self.tail, None);
        } else {
            let next = self.slot_at(index)?;
            let prev = self.nodes[next].prev;
            self.link_between(value, prev, Some(next));
        }
        Ok(())
    }

    pub fn push_back(&mut self, value: T) -> Result<(), CollectionError> {
        self.insert(self.len(), value)
    }

    pub fn push_front(&mut self, value: T) -> Result<(), CollectionError> {
        self.insert(0, value)
    }

    /// Replaces the element at `index` and returns the previous one. Setting an
    /// element to a value equal to itself is allowed, a value equal to any
    /// other element is not.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, CollectionError> {
        let slot = self.slot_at(index)?;
        let duplicate = self
            .nodes
            .iter()
            .enumerate()
            .any(|(other, node)| other != slot && node.value == value);
        if duplicate {
            return Err(CollectionError::DuplicateValue);
        }
        Ok(core::mem::replace(&mut self.nodes[slot].value, value))
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.nodes.iter().any(|node| node.value == *value)
    }

    /// Position of `value` in list order.
    #[must_use]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    /// Removes the element equal to `value`, if any. The relative order of the
    /// remaining elements is unchanged.
    pub fn remove_item(&mut self, value: &T) -> Option<T> {
        let slot = self.nodes.iter().position(|node| node.value == *value)?;
        Some(self.unlink(slot))
    }
}

impl<T: PartialEq> PartialEq for BoundedUniqueList<T> {
    /// Lists are equal when they hold equal elements in the same order,
    /// regardless of capacity.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BoundedUniqueList<T> {}

impl<T: fmt::Debug> fmt::Debug for BoundedUniqueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    list: &'a BoundedUniqueList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.list.nodes[self.cursor?];
        self.cursor = node.next;
        Some(&node.value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

pub struct IntoIter<T>(BoundedUniqueList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for BoundedUniqueList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a BoundedUniqueList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
