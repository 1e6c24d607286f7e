#![no_std]

//! `TripletDeque`: a bounded double-ended queue stored in fixed-size blocks.
//!
//! Elements live in blocks of [`BLOCK_CAPACITY`] slots. A growable block index
//! holds optional handles to those blocks, and four cursors (first block,
//! first slot, last block, last slot) mark the live range. Pushing at either
//! end moves one cursor; crossing a block boundary allocates the next block
//! on first touch, and running off either edge of the block index doubles it.
//!
//! The deque never holds more than `max_size` elements. The bound is fixed at
//! construction and defaults to [`DEFAULT_MAX_SIZE`].
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `add_first()`, `add_last()`, `push()`: O(1) amortized; the block index
//!   doubles when exhausted
//! - `remove_first()`, `remove_last()`, `pop()`: O(1)
//! - `get()`, `peek_first()`, `peek_last()`: O(1)
//! - `contains()`, occurrence removal, `remove_if()`, `retain_all()`: O(n)
//! - `clear()`: O(n) - drops the stored elements, keeps the blocks
//!
//! ## Space Complexity
//! - Blocks are allocated lazily and never freed; the block index only grows
//! - Growing the index copies block handles, never elements
//!
//! # Throwing and Non-Throwing Variants
//!
//! Every end operation comes in two flavours. The `add_*`, `remove_*` and
//! `get_*` methods report a full or empty deque as a [`DequeError`]; the
//! `offer_*`, `poll_*` and `peek_*` methods report it as `false` or `None`.
//!
//! ```
//! # use tripletdeque::{DequeError, TripletDeque};
//! let mut deque = TripletDeque::with_max_size(3).unwrap();
//!
//! deque.add_last(1).unwrap();
//! deque.add_last(2).unwrap();
//! deque.add_last(3).unwrap();
//!
//! assert_eq!(deque.add_last(4), Err(DequeError::CapacityExceeded { max_size: 3 }));
//! assert!(!deque.offer_last(4));
//!
//! assert_eq!(deque.remove_first(), Ok(1));
//! deque.add_last(4).unwrap();
//! assert_eq!(deque.to_vec(), vec![2, 3, 4]);
//!
//! deque.clear();
//! assert_eq!(deque.remove_last(), Err(DequeError::EmptyContainer));
//! assert_eq!(deque.poll_last(), None);
//! ```
//!
//! # Stack and Queue Interfaces
//!
//! `push()` and `pop()` work on the front, so the deque behaves as a stack:
//!
//! ```
//! # use tripletdeque::TripletDeque;
//! let mut deque = TripletDeque::new();
//!
//! deque.push("first").unwrap();
//! deque.push("second").unwrap();
//!
//! assert_eq!(deque.peek(), Some(&"second"));
//! assert_eq!(deque.pop(), Ok("second"));
//! assert_eq!(deque.pop(), Ok("first"));
//! assert!(deque.is_empty());
//! ```
//!
//! `add()`/`offer()` append at the back while `remove()`/`poll()` take from
//! the front, so the same deque also behaves as a FIFO queue:
//!
//! ```
//! # use tripletdeque::TripletDeque;
//! let mut deque = TripletDeque::new();
//!
//! deque.add('a').unwrap();
//! assert!(deque.offer('b'));
//!
//! assert_eq!(deque.element(), Ok(&'a'));
//! assert_eq!(deque.remove(), Ok('a'));
//! assert_eq!(deque.poll(), Some('b'));
//! assert_eq!(deque.poll(), None);
//! ```
//!
//! # Occurrence Removal and Bulk Operations
//!
//! ```
//! # use tripletdeque::TripletDeque;
//! let mut deque = TripletDeque::new();
//! deque.add_all([1, 2, 2, 3, 4, 5, 6]).unwrap();
//!
//! assert!(deque.remove_last_occurrence(&2));
//! assert_eq!(deque.to_vec(), vec![1, 2, 3, 4, 5, 6]);
//!
//! assert!(deque.remove_if(|value| value % 2 == 0));
//! assert_eq!(deque.to_vec(), vec![1, 3, 5]);
//!
//! assert!(deque.retain_all(&[3, 5, 7]));
//! assert_eq!(deque.to_vec(), vec![3, 5]);
//! assert!(deque.contains_all(&[5, 3]));
//! ```
//!
//! # Iterator Support
//!
//! Traversal borrows the deque, so it cannot be modified while an iterator
//! is alive. Removing through an iterator is rejected:
//!
//! ```
//! # use tripletdeque::{DequeError, TripletDeque};
//! let mut deque = TripletDeque::new();
//! deque.add_all(1..=7).unwrap();
//!
//! let forward: Vec<_> = deque.iter().copied().collect();
//! let mut backward: Vec<_> = deque.iter_rev().copied().collect();
//! backward.reverse();
//! assert_eq!(forward, backward);
//!
//! for value in &deque {
//!     println!("{value}");
//! }
//!
//! let mut iter = deque.iter();
//! assert_eq!(iter.remove(), Err(DequeError::UnsupportedMutation));
//! ```

extern crate alloc;

mod block;
mod bulk;
mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use block::BLOCK_CAPACITY;
pub use crate::core::{TripletDeque, DEFAULT_MAX_SIZE};
pub use error::DequeError;
pub use iter::{IntoIter, Iter, IterRev};
