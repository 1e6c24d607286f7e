use alloc::vec::Vec;

use crate::block::End;
use crate::core::TripletDeque;
use crate::error::DequeError;

impl<T> TripletDeque<T> {
    /// Appends every element of `values` at the back, in order.
    ///
    /// Not atomic: elements appended before the bound is reached stay in the
    /// deque, and the element that did not fit is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::CapacityExceeded` when the deque fills up.
    pub fn add_all<I>(&mut self, values: I) -> Result<(), DequeError>
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add_last(value)?;
        }
        Ok(())
    }

    /// Removes every element for which `predicate` returns `true`.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove_if<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.retain_where(|value| !predicate(value))
    }

    /// Visits every element from first to last.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action);
    }

    /// Compacts the elements accepted by `keep` toward the front, preserving
    /// their order, then cuts the back cursor down to the survivors.
    fn retain_where<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let len = self.len;
        let mut kept = 0;

        for offset in 0..len {
            let Some(value) = self.slot_at(offset).take() else {
                continue;
            };
            if keep(&value) {
                *self.slot_at(kept) = Some(value);
                kept += 1;
            }
        }

        if kept == len {
            return false;
        }
        self.truncate_back(kept);
        true
    }
}

impl<T: PartialEq> TripletDeque<T> {
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|stored| stored == value)
    }

    #[must_use]
    pub fn contains_all(&self, values: &[T]) -> bool {
        values.iter().all(|value| self.contains(value))
    }

    /// Removes the first element equal to `target`, scanning from the front.
    ///
    /// Every later element moves one position toward the front, across
    /// block boundaries as needed. Returns `true` if an element was removed.
    pub fn remove_first_occurrence(&mut self, target: &T) -> bool {
        let Some(found) = self.iter().position(|stored| stored == target) else {
            return false;
        };

        *self.slot_at(found) = None;
        for offset in found..self.len - 1 {
            let next = self.slot_at(offset + 1).take();
            *self.slot_at(offset) = next;
        }
        self.retract(End::Back);
        true
    }

    /// Removes the last element equal to `target`, scanning from the back.
    ///
    /// Every earlier element moves one position toward the back, across
    /// block boundaries as needed. Returns `true` if an element was removed.
    pub fn remove_last_occurrence(&mut self, target: &T) -> bool {
        let Some(from_back) = self.iter_rev().position(|stored| stored == target) else {
            return false;
        };
        let found = self.len - 1 - from_back;

        *self.slot_at(found) = None;
        for offset in (0..found).rev() {
            let previous = self.slot_at(offset).take();
            *self.slot_at(offset + 1) = previous;
        }
        self.retract(End::Front);
        true
    }

    /// Same as `remove_first_occurrence`.
    pub fn remove_value(&mut self, target: &T) -> bool {
        self.remove_first_occurrence(target)
    }

    /// Removes every element equal to any of `values`.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove_all(&mut self, values: &[T]) -> bool {
        self.retain_where(|stored| !values.contains(stored))
    }

    /// Keeps only the elements equal to one of `values`.
    ///
    /// Returns `true` if anything was removed.
    pub fn retain_all(&mut self, values: &[T]) -> bool {
        self.retain_where(|stored| values.contains(stored))
    }
}

impl<T: Clone> TripletDeque<T> {
    /// Copies the elements into a new vector, first to last.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Copies the elements into the front of `destination`, first to last.
    ///
    /// Slots of `destination` past `len()` are left untouched. Returns the
    /// number of elements copied.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::DestinationTooSmall` if `destination` is shorter
    /// than the deque.
    pub fn copy_to_slice(&self, destination: &mut [T]) -> Result<usize, DequeError> {
        if destination.len() < self.len {
            return Err(DequeError::DestinationTooSmall {
                required: self.len,
                provided: destination.len(),
            });
        }

        for (slot, value) in destination.iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(self.len)
    }
}
