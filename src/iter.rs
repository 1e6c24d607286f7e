use crate::block::{End, BLOCK_CAPACITY};
use crate::core::TripletDeque;
use crate::error::DequeError;

/// Iterator over the elements of a `TripletDeque`, first to last
///
/// The iterator borrows the deque, so the deque cannot change while it is
/// alive. Removal through the iterator is not supported, see [`Iter::remove`].
pub struct Iter<'a, T> {
    deque: &'a TripletDeque<T>,
    block: usize,
    slot: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(deque: &'a TripletDeque<T>) -> Self {
        let (block, slot) = deque.cursor(End::Front);
        Self {
            deque,
            block,
            slot,
            remaining: deque.len(),
        }
    }

    /// Always fails: elements cannot be removed through a traversal handle.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::UnsupportedMutation`.
    pub fn remove(&mut self) -> Result<(), DequeError> {
        Err(DequeError::UnsupportedMutation)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let deque = self.deque;
        let value = deque.index.slot(self.block, self.slot);
        self.remaining -= 1;

        if self.remaining > 0 {
            self.slot += 1;
            if self.slot == BLOCK_CAPACITY {
                self.block += 1;
                self.slot = 0;
            }
        }
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            block: self.block,
            slot: self.slot,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> IntoIterator for &'a TripletDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reverse iterator over the elements of a `TripletDeque`, last to first
pub struct IterRev<'a, T> {
    deque: &'a TripletDeque<T>,
    block: usize,
    slot: usize,
    remaining: usize,
}

impl<'a, T> IterRev<'a, T> {
    pub(crate) fn new(deque: &'a TripletDeque<T>) -> Self {
        let (block, slot) = deque.cursor(End::Back);
        Self {
            deque,
            block,
            slot,
            remaining: deque.len(),
        }
    }

    /// Always fails: elements cannot be removed through a traversal handle.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::UnsupportedMutation`.
    pub fn remove(&mut self) -> Result<(), DequeError> {
        Err(DequeError::UnsupportedMutation)
    }
}

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let deque = self.deque;
        let value = deque.index.slot(self.block, self.slot);
        self.remaining -= 1;

        if self.remaining > 0 {
            if self.slot == 0 {
                self.block -= 1;
                self.slot = BLOCK_CAPACITY - 1;
            } else {
                self.slot -= 1;
            }
        }
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterRev<'_, T> {}

impl<T> core::iter::FusedIterator for IterRev<'_, T> {}

impl<T> Clone for IterRev<'_, T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            block: self.block,
            slot: self.slot,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator that drains a `TripletDeque` from the front
pub struct IntoIter<T> {
    deque: TripletDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.poll_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.poll_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for TripletDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}
