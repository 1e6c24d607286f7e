use crate::block::{BlockIndex, End, BLOCK_CAPACITY};
use crate::error::DequeError;
use crate::iter::{Iter, IterRev};

/// Element bound used by `TripletDeque::new`
pub const DEFAULT_MAX_SIZE: usize = 1000;

/// A bounded double-ended queue stored in fixed-size blocks
///
/// The live range runs from (`first_block`, `first_slot`) to
/// (`last_block`, `last_slot`) inclusive. When the deque is empty both
/// cursors rest on the same slot, the anchor where the next element lands.
#[derive(Clone)]
pub struct TripletDeque<T> {
    pub(crate) index: BlockIndex<T>,
    pub(crate) first_block: usize,
    pub(crate) first_slot: usize,
    pub(crate) last_block: usize,
    pub(crate) last_slot: usize,
    pub(crate) len: usize,
    max_size: usize,
}

impl<T> TripletDeque<T> {
    /// Creates an empty deque bounded to `DEFAULT_MAX_SIZE` elements.
    #[must_use]
    pub fn new() -> Self {
        Self::with_bound(DEFAULT_MAX_SIZE)
    }

    /// Creates an empty deque holding at most `max_size` elements.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::InvalidConfiguration` if `max_size` is 0.
    pub fn with_max_size(max_size: usize) -> Result<Self, DequeError> {
        if max_size == 0 {
            return Err(DequeError::InvalidConfiguration {
                parameter: "max_size",
                value: max_size,
            });
        }
        Ok(Self::with_bound(max_size))
    }

    fn with_bound(max_size: usize) -> Self {
        Self {
            index: BlockIndex::new(),
            first_block: 0,
            first_slot: 0,
            last_block: 0,
            last_slot: 0,
            len: 0,
            max_size,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len >= self.max_size
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    fn ensure_capacity(&self) -> Result<(), DequeError> {
        if self.is_full() {
            return Err(DequeError::CapacityExceeded {
                max_size: self.max_size,
            });
        }
        Ok(())
    }

    fn ensure_not_empty(&self) -> Result<(), DequeError> {
        if self.is_empty() {
            return Err(DequeError::EmptyContainer);
        }
        Ok(())
    }

    pub(crate) fn cursor(&self, end: End) -> (usize, usize) {
        match end {
            End::Front => (self.first_block, self.first_slot),
            End::Back => (self.last_block, self.last_slot),
        }
    }

    /// Maps a logical offset from the front to its (block, slot) position.
    pub(crate) fn locate(&self, offset: usize) -> (usize, usize) {
        let absolute = self.first_block * BLOCK_CAPACITY + self.first_slot + offset;
        (absolute / BLOCK_CAPACITY, absolute % BLOCK_CAPACITY)
    }

    /// Slot holding the element at logical `offset`.
    ///
    /// # Panics
    ///
    /// May panic if `offset` is outside the live range (internal validation failure).
    #[allow(clippy::expect_used)]
    pub(crate) fn slot_at(&mut self, offset: usize) -> &mut Option<T> {
        let (block, slot) = self.locate(offset);
        self.index
            .slot_mut(block, slot)
            .expect("Blocks inside the live range are allocated")
    }

    /// Moves the cursor of `end` one slot away from the other end.
    ///
    /// Crossing a block boundary at the edge of the index grows the index
    /// first; stepping onto an unallocated position allocates its block.
    fn step_outward(&mut self, end: End) {
        match end {
            End::Front => {
                if self.first_slot == 0 {
                    if self.first_block == 0 {
                        let shift = self.index.grow(End::Front);
                        self.shift_cursors(shift);
                    }
                    self.first_block -= 1;
                    self.index.ensure_block(self.first_block);
                    self.first_slot = BLOCK_CAPACITY - 1;
                } else {
                    self.first_slot -= 1;
                }
            }
            End::Back => {
                if self.last_slot == BLOCK_CAPACITY - 1 {
                    if self.last_block == self.index.len() - 1 {
                        // Appending keeps every position in place
                        self.index.grow(End::Back);
                    }
                    self.last_block += 1;
                    self.index.ensure_block(self.last_block);
                    self.last_slot = 0;
                } else {
                    self.last_slot += 1;
                }
            }
        }
    }

    /// Moves the cursor of `end` one slot toward the other end.
    /// Blocks left behind stay allocated.
    fn step_inward(&mut self, end: End) {
        match end {
            End::Front => {
                if self.first_slot == BLOCK_CAPACITY - 1 {
                    self.first_block += 1;
                    self.first_slot = 0;
                } else {
                    self.first_slot += 1;
                }
            }
            End::Back => {
                if self.last_slot == 0 {
                    self.last_block -= 1;
                    self.last_slot = BLOCK_CAPACITY - 1;
                } else {
                    self.last_slot -= 1;
                }
            }
        }
    }

    fn shift_cursors(&mut self, offset: usize) {
        self.first_block += offset;
        self.last_block += offset;
    }

    /// Shrinks the live range by one slot at `end`. The vacated slot must
    /// already be empty. The last remaining slot becomes the anchor.
    pub(crate) fn retract(&mut self, end: End) {
        self.len -= 1;
        if self.len > 0 {
            self.step_inward(end);
        }
    }

    /// Cuts the live range down to its first `new_len` elements. Slots past
    /// `new_len` must already be empty.
    pub(crate) fn truncate_back(&mut self, new_len: usize) {
        if new_len == 0 {
            self.last_block = self.first_block;
            self.last_slot = self.first_slot;
        } else {
            (self.last_block, self.last_slot) = self.locate(new_len - 1);
        }
        self.len = new_len;
    }

    #[allow(clippy::expect_used)]
    fn place(&mut self, end: End, value: T) -> Result<(), DequeError> {
        self.ensure_capacity()?;

        if self.len > 0 {
            self.step_outward(end);
        }
        let (block, slot) = self.cursor(end);
        *self
            .index
            .slot_mut(block, slot)
            .expect("Cursor blocks are allocated by step_outward") = Some(value);
        self.len += 1;

        Ok(())
    }

    #[allow(clippy::expect_used)]
    fn take(&mut self, end: End) -> Result<T, DequeError> {
        self.ensure_not_empty()?;

        let (block, slot) = self.cursor(end);
        let value = self
            .index
            .slot_mut(block, slot)
            .and_then(Option::take)
            .expect("Slots inside the live range are occupied");
        self.retract(end);

        Ok(value)
    }

    fn boundary(&self, end: End) -> Result<&T, DequeError> {
        self.ensure_not_empty()?;
        let (block, slot) = self.cursor(end);
        self.index
            .slot(block, slot)
            .ok_or(DequeError::EmptyContainer)
    }

    /// Inserts an element at the front.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::CapacityExceeded` if the deque is full.
    pub fn add_first(&mut self, value: T) -> Result<(), DequeError> {
        self.place(End::Front, value)
    }

    /// Inserts an element at the back.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::CapacityExceeded` if the deque is full.
    pub fn add_last(&mut self, value: T) -> Result<(), DequeError> {
        self.place(End::Back, value)
    }

    /// Inserts an element at the front unless the deque is full.
    ///
    /// Returns `false` and drops `value` if the deque is full.
    pub fn offer_first(&mut self, value: T) -> bool {
        self.add_first(value).is_ok()
    }

    /// Inserts an element at the back unless the deque is full.
    ///
    /// Returns `false` and drops `value` if the deque is full.
    pub fn offer_last(&mut self, value: T) -> bool {
        self.add_last(value).is_ok()
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyContainer` if the deque is empty.
    pub fn remove_first(&mut self) -> Result<T, DequeError> {
        self.take(End::Front)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyContainer` if the deque is empty.
    pub fn remove_last(&mut self) -> Result<T, DequeError> {
        self.take(End::Back)
    }

    /// Removes and returns the first element, or `None` if the deque is empty.
    pub fn poll_first(&mut self) -> Option<T> {
        self.remove_first().ok()
    }

    /// Removes and returns the last element, or `None` if the deque is empty.
    pub fn poll_last(&mut self) -> Option<T> {
        self.remove_last().ok()
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyContainer` if the deque is empty.
    pub fn get_first(&self) -> Result<&T, DequeError> {
        self.boundary(End::Front)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyContainer` if the deque is empty.
    pub fn get_last(&self) -> Result<&T, DequeError> {
        self.boundary(End::Back)
    }

    #[must_use]
    pub fn peek_first(&self) -> Option<&T> {
        self.get_first().ok()
    }

    #[must_use]
    pub fn peek_last(&self) -> Option<&T> {
        self.get_last().ok()
    }

    /// Gets the element at logical `index`, counted from the front.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let (block, slot) = self.locate(index);
        self.index.slot(block, slot)
    }

    /// Pushes an element onto the stack view. Same as `add_first`.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::CapacityExceeded` if the deque is full.
    pub fn push(&mut self, value: T) -> Result<(), DequeError> {
        self.add_first(value)
    }

    /// Pops the top of the stack view. Same as `remove_first`.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyContainer` if the deque is empty.
    pub fn pop(&mut self) -> Result<T, DequeError> {
        self.remove_first()
    }

    /// Queue view of `add_last`.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::CapacityExceeded` if the deque is full.
    pub fn add(&mut self, value: T) -> Result<(), DequeError> {
        self.add_last(value)
    }

    /// Queue view of `offer_last`.
    pub fn offer(&mut self, value: T) -> bool {
        self.offer_last(value)
    }

    /// Queue view of `remove_first`.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyContainer` if the deque is empty.
    pub fn remove(&mut self) -> Result<T, DequeError> {
        self.remove_first()
    }

    /// Queue view of `poll_first`.
    pub fn poll(&mut self) -> Option<T> {
        self.poll_first()
    }

    /// Queue view of `get_first`.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::EmptyContainer` if the deque is empty.
    pub fn element(&self) -> Result<&T, DequeError> {
        self.get_first()
    }

    /// Queue view of `peek_first`.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.peek_first()
    }

    /// Drops every element. Allocated blocks and the block index are kept,
    /// and the next element lands where the first one was.
    pub fn clear(&mut self) {
        for offset in 0..self.len {
            *self.slot_at(offset) = None;
        }
        self.truncate_back(0);
    }

    /// Returns an iterator from the first element to the last.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator from the last element to the first.
    #[must_use]
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        IterRev::new(self)
    }

    /// Raw slots of the block at `position` in the block index.
    ///
    /// Returns `None` for positions past the index or not allocated yet.
    /// Positions shift when the index grows at the front.
    #[must_use]
    pub fn block_at(&self, position: usize) -> Option<&[Option<T>]> {
        self.index.slots(position)
    }

    /// Number of positions in the block index, allocated or not.
    #[must_use]
    pub fn block_index_len(&self) -> usize {
        self.index.len()
    }

    /// Number of blocks allocated so far.
    #[must_use]
    pub fn allocated_blocks(&self) -> usize {
        self.index.allocated()
    }
}

impl<T> Default for TripletDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for TripletDeque<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for TripletDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for TripletDeque<T> {}
