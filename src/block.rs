use alloc::vec;
use alloc::vec::Vec;

/// Number of element slots in every block.
pub const BLOCK_CAPACITY: usize = 5;

/// Handle of a block inside the arena of a `BlockIndex`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BlockId(usize);

/// Fixed-capacity storage unit.
///
/// A block does not know which of its slots are live; the deque cursors
/// decide that. Slots outside the live range always hold `None`.
#[derive(Debug, Clone)]
pub(crate) struct Block<T> {
    slots: [Option<T>; BLOCK_CAPACITY],
}

impl<T> Block<T> {
    fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }
}

/// End of the live range a cursor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum End {
    Front,
    Back,
}

/// Growable, sparse array of block handles over an arena of blocks.
///
/// Positions hold `None` until a cursor first steps onto them. Blocks are
/// never freed: once allocated, a position keeps its block for the lifetime
/// of the index, and growing the index copies handles, not blocks.
#[derive(Debug, Clone)]
pub(crate) struct BlockIndex<T> {
    blocks: Vec<Block<T>>,
    handles: Vec<Option<BlockId>>,
}

impl<T> BlockIndex<T> {
    /// Creates an index of length one holding a single pre-allocated block.
    pub(crate) fn new() -> Self {
        Self {
            blocks: vec![Block::new()],
            handles: vec![Some(BlockId(0))],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }

    pub(crate) fn allocated(&self) -> usize {
        self.blocks.len()
    }

    /// Doubles the number of positions.
    ///
    /// Running out at the back appends the new positions, so existing
    /// positions stay put. Running out at the front re-seats the existing
    /// handles in the middle of the new array, rounding the free space in
    /// favour of the front. Returns the offset every existing position moved by.
    pub(crate) fn grow(&mut self, exhausted: End) -> usize {
        let old_len = self.handles.len();
        let shift = match exhausted {
            End::Front => old_len - old_len / 2,
            End::Back => 0,
        };

        let mut handles = vec![None; old_len * 2];
        handles[shift..shift + old_len].copy_from_slice(&self.handles);
        self.handles = handles;

        shift
    }

    /// Makes sure `position` refers to a block, allocating one on first touch.
    ///
    /// Positions beyond the index are ignored; callers grow the index first.
    pub(crate) fn ensure_block(&mut self, position: usize) {
        if let Some(handle) = self.handles.get_mut(position) {
            if handle.is_none() {
                *handle = Some(BlockId(self.blocks.len()));
                self.blocks.push(Block::new());
            }
        }
    }

    /// Raw slots of the block at `position`, or `None` when the position is
    /// out of range or not allocated yet.
    pub(crate) fn slots(&self, position: usize) -> Option<&[Option<T>]> {
        let BlockId(id) = (*self.handles.get(position)?)?;
        self.blocks.get(id).map(|block| &block.slots[..])
    }

    pub(crate) fn slot(&self, position: usize, slot: usize) -> Option<&T> {
        self.slots(position)?.get(slot)?.as_ref()
    }

    pub(crate) fn slot_mut(&mut self, position: usize, slot: usize) -> Option<&mut Option<T>> {
        let BlockId(id) = (*self.handles.get(position)?)?;
        self.blocks.get_mut(id)?.slots.get_mut(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_index_has_one_block() {
        let index: BlockIndex<u32> = BlockIndex::new();

        assert_eq!(index.len(), 1);
        assert_eq!(index.allocated(), 1);
        let slots = index.slots(0).unwrap();
        assert_eq!(slots.len(), BLOCK_CAPACITY);
        assert!(slots.iter().all(Option::is_none));
        assert!(index.slots(1).is_none());
    }

    #[test]
    fn test_grow_front_makes_room_on_the_left() {
        let mut index: BlockIndex<u32> = BlockIndex::new();

        let shift = index.grow(End::Front);
        assert_eq!(shift, 1);
        assert_eq!(index.len(), 2);
        assert!(index.slots(0).is_none());
        assert!(index.slots(1).is_some());
    }

    #[test]
    fn test_grow_back_makes_room_on_the_right() {
        let mut index: BlockIndex<u32> = BlockIndex::new();

        let shift = index.grow(End::Back);
        assert_eq!(shift, 0);
        assert_eq!(index.len(), 2);
        assert!(index.slots(0).is_some());
        assert!(index.slots(1).is_none());
    }

    #[test]
    fn test_grow_keeps_block_contents() {
        let mut index: BlockIndex<u32> = BlockIndex::new();
        *index.slot_mut(0, 3).unwrap() = Some(42);

        let shift = index.grow(End::Back);
        let shift = shift + index.grow(End::Front);

        assert_eq!(index.len(), 4);
        assert_eq!(index.slot(shift, 3), Some(&42));
        assert_eq!(index.allocated(), 1);
    }

    #[test]
    fn test_grow_front_centers_back_appends() {
        let mut index: BlockIndex<u32> = BlockIndex::new();
        index.grow(End::Back);
        index.grow(End::Back);
        assert_eq!(index.len(), 4);
        assert!(index.slots(0).is_some());

        // 4 -> 8: front growth lands the handles at 2..6, back growth at 0..4
        let mut front = index.clone();
        assert_eq!(front.grow(End::Front), 2);
        assert!(front.slots(2).is_some());
        assert_eq!(index.grow(End::Back), 0);
        assert!(index.slots(0).is_some());
        assert_eq!(index.len(), 8);
    }

    #[test]
    fn test_ensure_block_allocates_once() {
        let mut index: BlockIndex<u32> = BlockIndex::new();
        index.grow(End::Back);

        index.ensure_block(1);
        assert_eq!(index.allocated(), 2);
        *index.slot_mut(1, 0).unwrap() = Some(7);

        index.ensure_block(1);
        assert_eq!(index.allocated(), 2);
        assert_eq!(index.slot(1, 0), Some(&7));
    }

    #[test]
    fn test_ensure_block_out_of_range_is_ignored() {
        let mut index: BlockIndex<u32> = BlockIndex::new();
        index.ensure_block(5);
        assert_eq!(index.allocated(), 1);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_slot_access_out_of_range() {
        let mut index: BlockIndex<u32> = BlockIndex::new();
        assert!(index.slot(0, BLOCK_CAPACITY).is_none());
        assert!(index.slot_mut(0, BLOCK_CAPACITY).is_none());
        assert!(index.slot_mut(3, 0).is_none());
    }
}
